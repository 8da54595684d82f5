//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the pipeline:
//! - Building HTTP clients with the configured identification header
//! - GET requests for index and detail pages
//! - Error classification into transport vs non-success status

use crate::config::SourceConfig;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

/// Errors from fetching a single page
///
/// A fetch either fails at the transport level before a response exists, or
/// yields a response with a status other than 200. There are no retries at
/// this layer.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("unexpected HTTP status {0}")]
    NonSuccessStatus(StatusCode),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Builds an HTTP client with proper configuration
///
/// The returned client is the shared connection context for the shared pool;
/// isolated workers call this once each to get a private context.
///
/// # Arguments
///
/// * `source` - The chart source configuration carrying the user agent
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(source: &SourceConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(source.user_agent.clone())
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a single page and returns its body
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
///
/// # Returns
///
/// * `Ok(String)` - The response body for an HTTP 200
/// * `Err(FetchError)` - Non-200 status or transport failure
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, FetchError> {
    let response = client.get(url).send().await?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(FetchError::NonSuccessStatus(status));
    }

    Ok(response.text().await?)
}
