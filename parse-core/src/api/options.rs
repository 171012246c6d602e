use crate::config::Configuration;
use crate::error::{Error, Result};

pub(crate) const APPLICATION_ID: &str = "X-Parse-Application-Id";
pub(crate) const CLIENT_KEY: &str = "X-Parse-Client-Key";
pub(crate) const MASTER_KEY: &str = "X-Parse-Master-Key";
pub(crate) const SESSION_TOKEN: &str = "X-Parse-Session-Token";
pub(crate) const INSTALLATION_ID: &str = "X-Parse-Installation-Id";
pub(crate) const CLIENT_VERSION: &str = "X-Parse-Client-Version";

const VERSION: &str = concat!("rust", env!("CARGO_PKG_VERSION"));

/// Per-request options.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ApiOption {
    /// Authenticate with the configured master key.
    UseMasterKey,
    SessionToken(String),
    InstallationId(String),
}

/// Headers for one request: configuration first, then options in order.
pub(crate) fn request_headers(
    config: &Configuration,
    options: &[ApiOption],
) -> Result<Vec<(&'static str, String)>> {
    let mut headers = vec![
        (APPLICATION_ID, config.application_id().to_string()),
        (CLIENT_VERSION, VERSION.to_string()),
        ("Accept", "application/json".to_string()),
    ];

    if let Some(client_key) = config.client_key() {
        headers.push((CLIENT_KEY, client_key.to_string()));
    }

    for option in options {
        match option {
            ApiOption::UseMasterKey => {
                let master_key = config.master_key().ok_or(Error::MissingMasterKey)?;
                headers.push((MASTER_KEY, master_key.to_string()));
            }
            ApiOption::SessionToken(token) => headers.push((SESSION_TOKEN, token.clone())),
            ApiOption::InstallationId(id) => headers.push((INSTALLATION_ID, id.clone())),
        }
    }

    Ok(headers)
}
