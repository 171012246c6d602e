use crate::error::Result;

/// Status and body of a completed HTTP exchange.
///
/// Non-2xx statuses are not transport errors: parse-server reports failures
/// as a JSON error envelope, which the command layer decodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Minimal blocking HTTP client trait that can be implemented with any HTTP library.
///
/// This allows consumers to bring their own HTTP client implementation.
/// You can use any HTTP library you prefer: hyper, isahc, ureq, reqwest,
/// platform-specific APIs (NSURLSession, fetch, etc.), or any other HTTP client.
///
/// Implementations are called from the client's worker threads for
/// background calls, hence `Send + Sync`.
pub trait HttpClient: Send + Sync + Clone {
    /// Perform a GET request.
    ///
    /// # Arguments
    /// * `url` - The full URL to request, without query string
    /// * `headers` - Request headers as name-value pairs
    /// * `query_params` - Query parameters as key-value pairs, unencoded
    ///
    /// # Returns
    /// The response status and body. Implementations must return non-2xx
    /// responses as `Ok`, and reserve `Err` for transport failures.
    fn get(
        &self,
        url: &str,
        headers: &[(&str, String)],
        query_params: &[(&str, String)],
    ) -> Result<HttpResponse>;
}
