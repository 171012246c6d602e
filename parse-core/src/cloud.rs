use std::{collections::HashMap, future::Future};

use futures::channel::oneshot;
use serde::de::DeserializeOwned;

use crate::api::{ApiOption, Command, Endpoint, HttpClient, Method};
use crate::client::ParseClient;
use crate::coding;
use crate::error::{Error, Result};
use crate::queue::{CallbackQueue, ImmediateQueue};

/// Calls to cloud code functions (`functions/<name>`).
///
/// The function's return value is decoded from the `result` field of the
/// response into whatever `T` the caller asks for.
///
/// ```no_run
/// # fn demo<H: parse_core::HttpClient + 'static>(client: parse_core::ParseClient<H>) -> parse_core::Result<()> {
/// use std::collections::HashMap;
///
/// let params = HashMap::from([("name".to_string(), "ada".to_string())]);
/// let greeting: String = client.cloud().call_function("hello", Some(params))?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Cloud<H: HttpClient> {
    client: ParseClient<H>,
}

impl<H: HttpClient + 'static> Cloud<H> {
    pub(crate) fn new(client: ParseClient<H>) -> Self {
        Self { client }
    }

    /// Call a cloud function and wait for its result.
    ///
    /// # Arguments
    /// * `function` - The name of the cloud function
    /// * `parameters` - The parameters to pass to the cloud function
    pub fn call_function<T>(
        &self,
        function: &str,
        parameters: Option<HashMap<String, String>>,
    ) -> Result<T>
    where
        T: DeserializeOwned + 'static,
    {
        self.call_function_with_options(function, parameters, &[])
    }

    /// Like [`Cloud::call_function`], with per-request options such as a
    /// session token or the master key.
    pub fn call_function_with_options<T>(
        &self,
        function: &str,
        parameters: Option<HashMap<String, String>>,
        options: &[ApiOption],
    ) -> Result<T>
    where
        T: DeserializeOwned + 'static,
    {
        Self::cloud_command(function, parameters).execute(&self.client, options)
    }

    /// Call a cloud function on a background worker.
    ///
    /// Returns immediately. `completion` is dispatched exactly once on
    /// `callback_queue`; pass [`ParseClient::main_queue`] for the default
    /// behaviour of completing on the application's main loop.
    ///
    /// # Arguments
    /// * `function` - The name of the cloud function
    /// * `parameters` - The parameters to pass to the cloud function
    /// * `callback_queue` - The queue to run `completion` on
    /// * `completion` - Receives the decoded result or the error
    pub fn call_function_in_background<T, Q, F>(
        &self,
        function: &str,
        parameters: Option<HashMap<String, String>>,
        callback_queue: Q,
        completion: F,
    ) where
        T: DeserializeOwned + Send + 'static,
        Q: CallbackQueue + 'static,
        F: FnOnce(Result<T>) + Send + 'static,
    {
        Self::cloud_command(function, parameters).execute_async(
            &self.client,
            Vec::new(),
            callback_queue,
            completion,
        )
    }

    /// Call a cloud function on a background worker and await the result.
    ///
    /// The request is submitted when this is called, not when the future is
    /// first polled. Works with any executor.
    pub fn call_function_async<T>(
        &self,
        function: &str,
        parameters: Option<HashMap<String, String>>,
    ) -> impl Future<Output = Result<T>> + Send + 'static
    where
        T: DeserializeOwned + Send + 'static,
    {
        let (sender, receiver) = oneshot::channel();
        self.call_function_in_background(function, parameters, ImmediateQueue, move |result| {
            let _ = sender.send(result);
        });

        async move { receiver.await.unwrap_or_else(|_| Err(Error::Canceled)) }
    }

    fn cloud_command<T>(function: &str, params: Option<HashMap<String, String>>) -> Command<T>
    where
        T: DeserializeOwned + 'static,
    {
        Command::new(
            Method::Get,
            Endpoint::Function(function.to_string()),
            params.map(|params| params.into_iter().collect()),
            coding::decode_result::<T>,
        )
    }
}
