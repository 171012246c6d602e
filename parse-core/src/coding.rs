//! JSON decoding shared by every command.

use serde::{de::DeserializeOwned, Deserialize};

use crate::error::{ParseError, Result};

/// Success envelope: `{"result": ...}`.
#[derive(Deserialize)]
struct ResultEnvelope<T> {
    result: T,
}

/// Decode the `result` of a success envelope into `T`.
pub fn decode_result<T: DeserializeOwned>(data: &[u8]) -> Result<T> {
    let envelope: ResultEnvelope<T> = serde_json::from_slice(data)?;
    Ok(envelope.result)
}

/// Decode an error envelope, if `data` is one.
pub fn decode_error(data: &[u8]) -> Option<ParseError> {
    serde_json::from_slice(data).ok()
}
