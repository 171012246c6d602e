use std::time::Duration;

use parse_core::{Configuration, Error, HttpClient, HttpResponse, Result};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Minimal HTTP client implementation using ureq.
///
/// # Example
///
/// ```no_run
/// use parse_http::{Configuration, ParseClient, UreqClient};
///
/// let config = Configuration::new("my-app-id", "https://example.com/parse")?;
/// let http_client = UreqClient::from_configuration(&config);
/// let client = ParseClient::new(config, http_client)?;
/// let greeting: String = client.cloud().call_function("hello", None)?;
/// # Ok::<(), parse_http::Error>(())
/// ```
#[derive(Clone)]
pub struct UreqClient {
    agent: ureq::Agent,
}

impl UreqClient {
    /// Create a new ureq HTTP client with default settings.
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT_SECS)
    }

    /// Create a new ureq HTTP client with a custom timeout.
    pub fn with_timeout(timeout_secs: u64) -> Self {
        Self {
            agent: ureq::Agent::config_builder()
                .timeout_global(Some(Duration::from_secs(timeout_secs)))
                // parse-server reports failures in the body of 4xx/5xx
                // responses, which the core needs to see.
                .http_status_as_error(false)
                .build()
                .into(),
        }
    }

    /// Create a client using the timeout from `configuration`.
    pub fn from_configuration(configuration: &Configuration) -> Self {
        Self::with_timeout(configuration.timeout().as_secs())
    }
}

impl Default for UreqClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient for UreqClient {
    fn get(
        &self,
        url: &str,
        headers: &[(&str, String)],
        query_params: &[(&str, String)],
    ) -> Result<HttpResponse> {
        let mut req = self.agent.get(url);

        for (name, value) in headers {
            req = req.header(*name, value.as_str());
        }
        for (key, value) in query_params {
            req = req.query(*key, value);
        }

        let mut response = req.call().map_err(|e| Error::HttpGet(e.to_string()))?;
        let status = response.status().as_u16();

        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| Error::ResponseBody(e.to_string()))?;

        log::trace!("GET {} -> {} ({} bytes)", url, status, body.len());
        Ok(HttpResponse::new(status, body))
    }
}
