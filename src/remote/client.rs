//! HTTP client for fetching a published telemetry dataset.

use crate::utils::config::DEFAULT_FETCH_TIMEOUT;
use crate::utils::error::LoadError;
use log::{debug, info};
use reqwest::blocking::Client;
use std::time::Duration;

/// Blocking client for one-shot dataset downloads
pub struct DatasetClient {
    client: Client,
}

impl DatasetClient {
    /// Create a client with the default timeout
    pub fn new() -> Result<Self, LoadError> {
        Self::with_timeout(DEFAULT_FETCH_TIMEOUT)
    }

    /// Create a client with a custom timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self, LoadError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(LoadError::Http)?;

        Ok(Self { client })
    }

    /// Fetch `url` and decode the body as JSON
    ///
    /// No retry: a failed fetch is reported to the caller as-is.
    pub fn fetch(&self, url: &str) -> Result<serde_json::Value, LoadError> {
        info!("Fetching dataset from: {}", url);

        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .map_err(LoadError::Http)?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body: serde_json::Value = response.json().map_err(LoadError::Http)?;
        debug!("Fetched dataset body from {}", url);

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builds() {
        assert!(DatasetClient::new().is_ok());
        assert!(DatasetClient::with_timeout(Duration::from_secs(1)).is_ok());
    }

    #[test]
    fn test_fetch_unreachable_host_fails() {
        let client = DatasetClient::with_timeout(Duration::from_millis(500)).unwrap();
        let result = client.fetch("http://127.0.0.1:9/combined.json");
        assert!(matches!(result, Err(LoadError::Http(_))));
    }
}
