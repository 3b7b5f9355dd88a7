//! Error types for decoding and requesting API payloads.

use crate::types::ApiError;

/// Errors that can occur when decoding payloads or making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An HTTP request failed (network error, timeout, or unreadable body).
    #[error("Request failed")]
    RequestFailed,
    /// The server answered with a non-success status and an error payload.
    #[error("Request failed with status {status}")]
    Api { status: u16, error: ApiError },
    /// A body did not match the expected shape. `body` is a truncated snippet.
    #[error("Failed to decode payload: {reason}")]
    Decode { reason: String, body: String },
}
