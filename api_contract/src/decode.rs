//! JSON decoding of response envelopes and error payloads.

use serde::de::DeserializeOwned;

use crate::{
    types::{ApiError, ApiResponse},
    Error,
};

/// Decodes a success body into an [`ApiResponse`].
pub fn decode_response<T>(body: &str) -> Result<ApiResponse<T>, Error>
where
    T: DeserializeOwned,
{
    decode(body)
}

/// Decodes an error body into an [`ApiError`].
pub fn decode_error(body: &str) -> Result<ApiError, Error> {
    decode(body)
}

fn decode<T>(body: &str) -> Result<T, Error>
where
    T: DeserializeOwned,
{
    serde_json::from_str::<T>(body).map_err(|e| {
        let snippet = truncate_body(body);
        tracing::error!("Failed to parse payload: {} | body: {}", e, snippet);
        Error::Decode {
            reason: e.to_string(),
            body: snippet,
        }
    })
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
