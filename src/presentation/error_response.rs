// JSON error responses
use crate::application::error::{ServiceError, Upstream, UpstreamError};
use axum::{
    Json,
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use std::any::Any;

const AVAILABLE_ENDPOINTS: [&str; 3] = [
    "/api/weather/:city",
    "/api/news/:city",
    "/api/dashboard/:city",
];

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

impl ErrorBody {
    fn new(error: &'static str, message: impl Into<String>) -> Self {
        Self {
            error,
            message: message.into(),
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, body) = describe(&self);
        if status.is_server_error() {
            tracing::error!(error = %self, %status, "request failed");
        } else {
            tracing::info!(error = %self, %status, "request rejected");
        }
        (status, Json(body)).into_response()
    }
}

fn describe(err: &ServiceError) -> (StatusCode, ErrorBody) {
    match err {
        ServiceError::Validation(_) => (
            StatusCode::BAD_REQUEST,
            ErrorBody::new("City name is required", "Please provide a valid city name"),
        ),
        ServiceError::NoDataAvailable { city } => (
            StatusCode::NOT_FOUND,
            ErrorBody::new(
                "No Data Available",
                format!("Unable to fetch data for \"{city}\". Please check the city name."),
            ),
        ),
        ServiceError::Upstream {
            upstream,
            city,
            source,
        } => describe_upstream(*upstream, city, source),
    }
}

fn describe_upstream(upstream: Upstream, city: &str, source: &UpstreamError) -> (StatusCode, ErrorBody) {
    match (source, upstream) {
        (UpstreamError::NotFound, _) => (
            StatusCode::NOT_FOUND,
            ErrorBody::new(
                "City not found",
                format!("Unable to find weather data for \"{city}\". Please check the city name."),
            ),
        ),
        // Credentials are a server misconfiguration; the client only learns that much
        (UpstreamError::Unauthorized, Upstream::Weather) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorBody::new(
                "API Configuration Error",
                "Invalid API key. Please check server configuration.",
            ),
        ),
        (UpstreamError::Unauthorized, Upstream::News) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorBody::new("API Configuration Error", "Invalid News API key."),
        ),
        (UpstreamError::Timeout, Upstream::Weather) => (
            StatusCode::GATEWAY_TIMEOUT,
            ErrorBody::new(
                "Request Timeout",
                "Weather service is taking too long to respond.",
            ),
        ),
        (UpstreamError::Timeout, Upstream::News) => (
            StatusCode::GATEWAY_TIMEOUT,
            ErrorBody::new("Request Timeout", "News service is taking too long to respond."),
        ),
        (UpstreamError::Status(code), Upstream::Weather) => (
            forwarded_status(*code),
            ErrorBody::new("Weather API Error", "Unable to fetch weather data at this time."),
        ),
        (UpstreamError::Status(code), Upstream::News) => (
            forwarded_status(*code),
            ErrorBody::new("News API Error", "Unable to fetch news data at this time."),
        ),
        (UpstreamError::Transport(_) | UpstreamError::Payload(_), Upstream::Weather) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorBody::new(
                "Server Error",
                "An unexpected error occurred. Please try again later.",
            ),
        ),
        (UpstreamError::Transport(_) | UpstreamError::Payload(_), Upstream::News) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorBody::new(
                "Server Error",
                "An unexpected error occurred while fetching news.",
            ),
        ),
    }
}

/// Upstream error statuses pass through; anything else becomes 502.
fn forwarded_status(code: u16) -> StatusCode {
    StatusCode::from_u16(code)
        .ok()
        .filter(|s| s.is_client_error() || s.is_server_error())
        .unwrap_or(StatusCode::BAD_GATEWAY)
}

/// Response for any request no route or static file claims
pub async fn not_found(method: Method, uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Not Found",
            "message": format!("Cannot {} {}", method, uri),
            "availableEndpoints": AVAILABLE_ENDPOINTS,
        })),
    )
}

/// Last line of defence: a panicking handler still yields a JSON 500.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    tracing::error!(panic = %detail, "request handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody::new(
            "Internal Server Error",
            "Something went wrong on the server.",
        )),
    )
        .into_response()
}
