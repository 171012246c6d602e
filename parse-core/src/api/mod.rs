mod command;
mod endpoint;
mod http_trait;
pub(crate) mod options;

pub use command::Command;
pub use endpoint::{Endpoint, Method};
pub use http_trait::{HttpClient, HttpResponse};
pub use options::ApiOption;
