use std::sync::Arc;

use crate::api::HttpClient;
use crate::cloud::Cloud;
use crate::config::Configuration;
use crate::error::Result;
use crate::queue::MainQueue;
use crate::thread_pool::ThreadPool;

/// Client for a parse-server application.
///
/// Generic over the HTTP client implementation, allowing consumers to provide
/// their own HTTP client by implementing the `HttpClient` trait.
///
/// Cloning is cheap; clones share the configuration, the background workers
/// and the main queue.
#[derive(Clone)]
pub struct ParseClient<H: HttpClient> {
    configuration: Arc<Configuration>,
    http_client: H,
    pool: Arc<ThreadPool>,
    main_queue: MainQueue,
}

impl<H: HttpClient + 'static> ParseClient<H> {
    /// Create a new client, spawning `configuration.worker_threads()` workers
    /// for background calls.
    ///
    /// # Arguments
    /// * `configuration` - Server URL and application keys
    /// * `http_client` - HTTP client implementation
    pub fn new(configuration: Configuration, http_client: H) -> Result<Self> {
        let pool = ThreadPool::new(configuration.worker_threads())?;
        log::debug!("parse client ready: {:?}", configuration);

        Ok(ParseClient {
            configuration: Arc::new(configuration),
            http_client,
            pool: Arc::new(pool),
            main_queue: MainQueue::new(),
        })
    }

    /// Cloud function calls.
    pub fn cloud(&self) -> Cloud<H> {
        Cloud::new(self.clone())
    }
}

impl<H: HttpClient> ParseClient<H> {
    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    pub fn http_client(&self) -> &H {
        &self.http_client
    }

    /// The default callback queue for background calls. Nothing runs on it
    /// until the owner drains it.
    pub fn main_queue(&self) -> MainQueue {
        self.main_queue.clone()
    }

    pub(crate) fn pool(&self) -> &ThreadPool {
        &self.pool
    }
}
