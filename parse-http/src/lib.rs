//! Ready-made [`HttpClient`] implementations for `parse-core`.
//!
//! `ureq-client` (default) is the lightweight choice; `reqwest-client`
//! suits applications that already depend on reqwest.

#[cfg(feature = "reqwest-client")]
mod reqwest_impl;
#[cfg(feature = "ureq-client")]
mod ureq_impl;

#[cfg(feature = "reqwest-client")]
pub use reqwest_impl::ReqwestClient;
#[cfg(feature = "ureq-client")]
pub use ureq_impl::UreqClient;

// Re-export core types for convenience
pub use parse_core::{
    ApiOption, CallbackQueue, Cloud, Configuration, Error, HttpClient, HttpResponse,
    ImmediateQueue, MainQueue, ParseClient, ParseError, Result,
};
