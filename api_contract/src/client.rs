//! HTTP client that reads [`ApiResponse`] envelopes and [`ApiError`] payloads.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    decode::{decode_response, truncate_body},
    types::{ApiError, ApiResponse, StatusCode},
    Error,
};

/// HTTP client for an API that answers with the shared envelope shapes.
///
/// Each request builds a fresh `reqwest::Client` with a 30-second timeout.
pub struct Client {
    base_api_url: String,
}

impl Client {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn get_url(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, Error> {
        let mut url =
            Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
                tracing::error!("Invalid URL constructed: {}", e);
                Error::RequestFailed
            })?;
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }
        Ok(url)
    }

    /// Fetches `path` and decodes the body as `ApiResponse<T>`.
    ///
    /// A non-success status is returned as [`Error::Api`] carrying the decoded
    /// error payload. When the body is not an error payload, the error holds
    /// only the HTTP status.
    pub async fn get<T>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<ApiResponse<T>, Error>
    where
        T: DeserializeOwned,
    {
        let url = self.get_url(path, params)?;
        tracing::debug!("GET {}", url);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        let resp = client
            .get(url)
            .header("accept", "application/json, text/plain, */*")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let status = status.as_u16();
            tracing::error!(
                "Request failed with status {}: {}",
                status,
                truncate_body(&body)
            );
            return Err(Error::Api {
                status,
                error: error_payload(status, &body),
            });
        }

        decode_response(&body)
    }
}

fn error_payload(status: u16, body: &str) -> ApiError {
    let mut error = serde_json::from_str::<ApiError>(body).unwrap_or_default();
    if error.status.is_none() {
        error.status = Some(StatusCode::from(status));
    }
    error
}
