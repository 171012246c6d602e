//! Client for parse-server cloud functions.
//!
//! Bring an [`HttpClient`] (see the `parse-http` crate for ready-made ones),
//! build a [`ParseClient`] from a [`Configuration`], and call functions
//! through [`ParseClient::cloud`].

mod api;
mod client;
mod cloud;
pub mod coding;
mod config;
pub mod error;
mod queue;
#[cfg(test)]
mod testing;
mod thread_pool;

pub use api::{ApiOption, Command, Endpoint, HttpClient, HttpResponse, Method};
pub use client::ParseClient;
pub use cloud::Cloud;
pub use config::Configuration;
pub use error::{Error, ParseError, Result};
pub use queue::{CallbackQueue, ImmediateQueue, Job, MainQueue};
