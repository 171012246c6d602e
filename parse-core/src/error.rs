use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    // Server-reported failures
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("unexpected HTTP status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    // Transport
    #[error("HTTP GET failed: {0}")]
    HttpGet(String),
    #[error("failed to read response body: {0}")]
    ResponseBody(String),
    #[error("background request was dropped before completing")]
    Canceled,

    // Validation
    #[error("invalid cloud function name {0:?}")]
    InvalidFunctionName(String),
    #[error("master key requested but not configured")]
    MissingMasterKey,
    #[error("invalid server url: {0}")]
    InvalidServerUrl(String),

    // Wrapped external errors
    #[error(transparent)]
    Url(#[from] url::ParseError),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Error envelope returned by parse-server: `{"code": 141, "error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("ParseError code={code}: {message}")]
pub struct ParseError {
    pub code: i32,
    #[serde(rename = "error")]
    pub message: String,
}

impl ParseError {
    pub const OTHER_CAUSE: i32 = -1;
    pub const INTERNAL_SERVER: i32 = 1;
    pub const CONNECTION_FAILED: i32 = 100;
    pub const OBJECT_NOT_FOUND: i32 = 101;
    pub const INVALID_JSON: i32 = 107;
    /// Cloud code threw or rejected.
    pub const SCRIPT_FAILED: i32 = 141;
    pub const INVALID_SESSION_TOKEN: i32 = 209;

    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl Error {
    /// The parse-server error code, if the server reported one.
    pub fn parse_code(&self) -> Option<i32> {
        match self {
            Error::Parse(e) => Some(e.code),
            _ => None,
        }
    }
}
