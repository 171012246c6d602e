use std::time::Duration;

use parse_core::{Configuration, Error, HttpClient, HttpResponse, Result};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// HTTP client implementation using reqwest's blocking API.
///
/// Heavier than [`UreqClient`](crate::UreqClient) since it pulls in a tokio
/// runtime internally. Like every blocking reqwest client it must not be
/// created or used from within an async runtime.
#[derive(Clone)]
pub struct ReqwestClient {
    client: reqwest::blocking::Client,
}

impl ReqwestClient {
    /// Create a new reqwest HTTP client with default settings.
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT_SECS)
    }

    /// Create a new reqwest HTTP client with a custom timeout.
    pub fn with_timeout(timeout_secs: u64) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| Error::HttpGet(format!("failed to build reqwest client: {}", e)))?;
        Ok(Self { client })
    }

    /// Create a client using the timeout from `configuration`.
    pub fn from_configuration(configuration: &Configuration) -> Result<Self> {
        Self::with_timeout(configuration.timeout().as_secs())
    }

    /// Create a new reqwest HTTP client with a custom client configuration.
    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl HttpClient for ReqwestClient {
    fn get(
        &self,
        url: &str,
        headers: &[(&str, String)],
        query_params: &[(&str, String)],
    ) -> Result<HttpResponse> {
        let mut request = self.client.get(url);

        for (name, value) in headers {
            request = request.header(*name, value.as_str());
        }
        for (key, value) in query_params {
            request = request.query(&[(key, value)]);
        }

        // error statuses are passed through for the core to decode
        let response = request
            .send()
            .map_err(|e| Error::HttpGet(e.to_string()))?;
        let status = response.status().as_u16();

        let body = response
            .text()
            .map_err(|e| Error::ResponseBody(e.to_string()))?;

        log::trace!("GET {} -> {} ({} bytes)", url, status, body.len());
        Ok(HttpResponse::new(status, body))
    }
}
