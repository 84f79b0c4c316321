//! Generic HTTP client tools
//!
//! Sending a request, logging it, checking the status and decoding JSON are
//! the same for any source. Sources build their own `RequestBuilder` and hand
//! it over.
//!
//! There is deliberately no retry helper: a failed fetch is final.

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::error::FetchError;
use crate::utils::log_sanitizer::truncate_for_log;

/// User agent sent with every request.
const USER_AGENT: &str = concat!("country-explorer/", env!("CARGO_PKG_VERSION"));

/// Build the shared HTTP client.
///
/// No request timeout is configured; the single startup fetch runs to
/// completion or fails on its own.
pub fn create_http_client() -> Result<Client, FetchError> {
    Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| FetchError::ClientBuild {
            detail: e.to_string(),
        })
}

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the response text
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers, ...)
    /// * `source_name` - source name (for logging and errors)
    /// * `url` - requested URL (for logging)
    ///
    /// # Returns
    /// * `Ok(response_text)` - body of a 2xx response
    /// * `Err(FetchError::Network)` - transport failure
    /// * `Err(FetchError::HttpStatus)` - any non-2xx status
    pub async fn execute_request(
        request_builder: RequestBuilder,
        source_name: &str,
        url: &str,
    ) -> Result<String, FetchError> {
        log::debug!("[{source_name}] GET {url}");

        let response = request_builder
            .send()
            .await
            .map_err(|e| FetchError::Network {
                source_name: source_name.to_string(),
                detail: e.to_string(),
            })?;

        let status = response.status();
        log::debug!("[{source_name}] Response Status: {}", status.as_u16());

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[{source_name}] Unexpected status (HTTP {})", status.as_u16());
            return Err(FetchError::HttpStatus {
                source_name: source_name.to_string(),
                status: status.as_u16(),
                body: truncate_for_log(&body),
            });
        }

        let response_text = response.text().await.map_err(|e| FetchError::Network {
            source_name: source_name.to_string(),
            detail: format!("Failed to read response body: {e}"),
        })?;

        log::debug!(
            "[{source_name}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok(response_text)
    }

    /// Parse a JSON response
    ///
    /// # Type Parameters
    /// * `T` - target type
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(FetchError::Parse)` - parsing failed
    pub fn parse_json<T>(response_text: &str, source_name: &str) -> Result<T, FetchError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{source_name}] JSON parse failed: {e}");
            log::error!(
                "[{source_name}] Raw response: {}",
                truncate_for_log(response_text)
            );
            FetchError::Parse {
                source_name: source_name.to_string(),
                detail: e.to_string(),
            }
        })
    }
}
