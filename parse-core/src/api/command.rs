use std::{
    collections::BTreeMap,
    fmt,
    panic::{self, AssertUnwindSafe},
};

use log::{debug, warn};

use super::endpoint::{Endpoint, Method};
use super::http_trait::{HttpClient, HttpResponse};
use super::options::{request_headers, ApiOption};
use crate::client::ParseClient;
use crate::coding;
use crate::error::{Error, Result};
use crate::queue::CallbackQueue;

type Mapper<T> = Box<dyn Fn(&[u8]) -> Result<T> + Send + Sync>;

/// A request descriptor: where to send it, with which parameters, and how to
/// turn a successful response body into `T`.
pub struct Command<T> {
    method: Method,
    path: Endpoint,
    params: Option<BTreeMap<String, String>>,
    mapper: Mapper<T>,
}

impl<T> fmt::Debug for Command<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

impl<T> Command<T> {
    pub fn new<F>(
        method: Method,
        path: Endpoint,
        params: Option<BTreeMap<String, String>>,
        mapper: F,
    ) -> Self
    where
        F: Fn(&[u8]) -> Result<T> + Send + Sync + 'static,
    {
        Self {
            method,
            path,
            params,
            mapper: Box::new(mapper),
        }
    }

    /// Perform the request on the calling thread and decode the response.
    pub fn execute<H: HttpClient>(
        &self,
        client: &ParseClient<H>,
        options: &[ApiOption],
    ) -> Result<T> {
        let config = client.configuration();
        let url = self.path.url(config.server_url())?;
        let headers = request_headers(config, options)?;

        // BTreeMap keeps the query string in key order
        let query: Vec<(&str, String)> = self
            .params
            .iter()
            .flatten()
            .map(|(key, value)| (key.as_str(), value.clone()))
            .collect();

        debug!("{} {} ({} params)", self.method, url, query.len());
        let response = match self.method {
            Method::Get => client.http_client().get(url.as_str(), &headers, &query)?,
        };

        if !response.is_success() {
            warn!("{} {} returned status {}", self.method, url, response.status);
        }
        self.map_response(response)
    }

    fn map_response(&self, response: HttpResponse) -> Result<T> {
        let body = response.body.as_bytes();

        if !response.is_success() {
            return Err(match coding::decode_error(body) {
                Some(err) => Error::Parse(err),
                None => Error::UnexpectedStatus {
                    status: response.status,
                    body: response.body,
                },
            });
        }

        // parse-server may also answer 200 with an error envelope. A result
        // envelope never matches: `code` and `error` are both required.
        if let Some(err) = coding::decode_error(body) {
            return Err(Error::Parse(err));
        }
        (self.mapper)(body)
    }
}

impl<T: Send + 'static> Command<T> {
    /// Perform the request on one of the client's worker threads, then
    /// dispatch `completion` with the outcome on `callback_queue`.
    ///
    /// `completion` runs exactly once, failures included. A panic in the
    /// transport or the decoder is reported as [`Error::Canceled`].
    pub fn execute_async<H, Q, F>(
        self,
        client: &ParseClient<H>,
        options: Vec<ApiOption>,
        callback_queue: Q,
        completion: F,
    ) where
        H: HttpClient + 'static,
        Q: CallbackQueue + 'static,
        F: FnOnce(Result<T>) + Send + 'static,
    {
        let worker_client = client.clone();
        client.pool().execute(move || {
            let result = panic::catch_unwind(AssertUnwindSafe(|| {
                self.execute(&worker_client, &options)
            }))
            .unwrap_or_else(|_| {
                log::error!("{} {:?} panicked", self.method, self.path);
                Err(Error::Canceled)
            });
            callback_queue.dispatch(Box::new(move || completion(result)));
        });
    }
}
