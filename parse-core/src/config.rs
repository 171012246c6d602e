use std::{fmt, fs, path::Path, time::Duration};

use serde::Deserialize;
use url::Url;

use crate::error::{Error, Result};

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_WORKER_THREADS: usize = 4;

/// Connection settings for a parse-server application.
///
/// Can be built in code:
///
/// ```
/// use parse_core::Configuration;
///
/// let config = Configuration::new("my-app-id", "https://example.com/parse")
///     .unwrap()
///     .with_client_key("client-key");
/// assert_eq!(config.server_url().as_str(), "https://example.com/parse/");
/// ```
///
/// or loaded from JSON with [`Configuration::from_json_str`] /
/// [`Configuration::from_file`]:
///
/// ```json
/// { "applicationId": "my-app-id", "serverUrl": "https://example.com/parse", "timeoutSecs": 10 }
/// ```
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawConfiguration")]
pub struct Configuration {
    application_id: String,
    client_key: Option<String>,
    master_key: Option<String>,
    server_url: Url,
    timeout_secs: u64,
    worker_threads: usize,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawConfiguration {
    application_id: String,
    #[serde(default)]
    client_key: Option<String>,
    #[serde(default)]
    master_key: Option<String>,
    server_url: String,
    #[serde(default = "default_timeout_secs")]
    timeout_secs: u64,
    #[serde(default = "default_worker_threads")]
    worker_threads: usize,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_worker_threads() -> usize {
    DEFAULT_WORKER_THREADS
}

impl TryFrom<RawConfiguration> for Configuration {
    type Error = Error;

    fn try_from(raw: RawConfiguration) -> Result<Self> {
        Ok(Configuration {
            application_id: raw.application_id,
            client_key: raw.client_key,
            master_key: raw.master_key,
            server_url: normalize_server_url(&raw.server_url)?,
            timeout_secs: raw.timeout_secs,
            worker_threads: raw.worker_threads,
        })
    }
}

fn normalize_server_url(server_url: &str) -> Result<Url> {
    let mut url = Url::parse(server_url)?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::InvalidServerUrl(server_url.to_string()));
    }

    // we need a trailing slash, if not present we append it
    if !url.path().ends_with('/') {
        url.set_path(&format!("{}/", url.path()));
    }

    Ok(url)
}

impl Configuration {
    /// # Arguments
    /// * `application_id` - Sent as `X-Parse-Application-Id` on every request
    /// * `server_url` - Base URL of the server, including its mount path
    pub fn new(application_id: impl Into<String>, server_url: &str) -> Result<Self> {
        Ok(Configuration {
            application_id: application_id.into(),
            client_key: None,
            master_key: None,
            server_url: normalize_server_url(server_url)?,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            worker_threads: DEFAULT_WORKER_THREADS,
        })
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn with_client_key(mut self, client_key: impl Into<String>) -> Self {
        self.client_key = Some(client_key.into());
        self
    }

    pub fn with_master_key(mut self, master_key: impl Into<String>) -> Self {
        self.master_key = Some(master_key.into());
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn with_worker_threads(mut self, worker_threads: usize) -> Self {
        self.worker_threads = worker_threads;
        self
    }

    pub fn application_id(&self) -> &str {
        &self.application_id
    }

    pub fn client_key(&self) -> Option<&str> {
        self.client_key.as_deref()
    }

    pub fn master_key(&self) -> Option<&str> {
        self.master_key.as_deref()
    }

    /// Always ends with a slash.
    pub fn server_url(&self) -> &Url {
        &self.server_url
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn worker_threads(&self) -> usize {
        self.worker_threads
    }
}

// keys stay out of logs
impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("application_id", &self.application_id)
            .field("client_key", &self.client_key.as_ref().map(|_| "<redacted>"))
            .field("master_key", &self.master_key.as_ref().map(|_| "<redacted>"))
            .field("server_url", &self.server_url.as_str())
            .field("timeout_secs", &self.timeout_secs)
            .field("worker_threads", &self.worker_threads)
            .finish()
    }
}
