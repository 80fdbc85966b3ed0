//! Generic HTTP fetching with error classification

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, error, instrument};

use crate::error::AppError;

/// Fetches `url` once and parses the body as JSON.
///
/// There is no retry: callers decide how a failure degrades. Query parameters
/// are passed separately so secrets in them never reach logs or error
/// messages; only `url` is reported.
///
/// # Returns
/// * `Result<T, AppError>` - Parsed response data or a classified error
#[instrument(skip(client, query))]
pub async fn fetch_json<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    query: &[(&str, &str)],
) -> Result<T, AppError> {
    debug!("Fetching data from URL: {url}");

    let response = match client.get(url).query(query).send().await {
        Ok(response) => response,
        Err(e) => {
            // reqwest errors carry the full URL, query string included
            let e = e.without_url();
            error!("Request failed for URL {}: {}", url, e);
            return Err(if e.is_timeout() {
                AppError::network_timeout(url)
            } else if e.is_connect() {
                AppError::network_connection(url, e.to_string())
            } else {
                AppError::ApiFetch(e)
            });
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if status != StatusCode::OK {
        error!(
            "HTTP {} - {} (URL: {})",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown error"),
            url
        );
        return Err(AppError::from_status(status, url));
    }

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            let e = e.without_url();
            error!("Failed to read response text from URL {}: {}", url, e);
            return Err(if e.is_timeout() {
                AppError::network_timeout(url)
            } else {
                AppError::ApiFetch(e)
            });
        }
    };

    debug!("Response length: {} bytes", response_text.len());

    match serde_json::from_str::<T>(&response_text) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            error!("Failed to parse API response: {} (URL: {})", e, url);
            error!(
                "Response text (first 200 chars): {}",
                &response_text.chars().take(200).collect::<String>()
            );

            let trimmed = response_text.trim_start();
            if trimmed.is_empty() {
                Err(AppError::api_no_data("Response body is empty", url))
            } else if !trimmed.starts_with('{') && !trimmed.starts_with('[') {
                Err(AppError::api_malformed_json(
                    "Response is not valid JSON",
                    url,
                ))
            } else {
                Err(AppError::api_unexpected_structure(e.to_string(), url))
            }
        }
    }
}
