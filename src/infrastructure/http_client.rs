// Shared reqwest plumbing for the upstream clients
use crate::application::error::{Upstream, UpstreamError};
use anyhow::Context;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Build a client whose every request fails with a timeout after `timeout`.
pub fn build_http_client(timeout: Duration) -> anyhow::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .context("Failed to build HTTP client")
}

pub fn classify_status(status: StatusCode, upstream: Upstream) -> UpstreamError {
    match (status, upstream) {
        (StatusCode::UNAUTHORIZED, _) => UpstreamError::Unauthorized,
        // The news search has no notion of an unknown city
        (StatusCode::NOT_FOUND, Upstream::Weather) => UpstreamError::NotFound,
        _ => UpstreamError::Status(status.as_u16()),
    }
}

/// The request URL carries the API key in its query, so it never makes it into the message.
pub fn classify_transport(err: reqwest::Error) -> UpstreamError {
    if err.is_timeout() {
        UpstreamError::Timeout
    } else {
        UpstreamError::Transport(err.without_url().to_string())
    }
}

/// Check the status and decode a JSON body.
pub async fn read_json<T: DeserializeOwned>(
    response: Response,
    upstream: Upstream,
) -> Result<T, UpstreamError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::debug!(%upstream, %status, %body, "upstream returned an error status");
        return Err(classify_status(status, upstream));
    }

    let bytes = response.bytes().await.map_err(classify_transport)?;
    serde_json::from_slice(&bytes).map_err(|e| UpstreamError::Payload(e.to_string()))
}
