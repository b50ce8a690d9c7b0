// Error taxonomy shared by the services
use crate::domain::city::ValidationError;
use std::fmt;
use thiserror::Error;

/// Which external dependency a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upstream {
    Weather,
    News,
}

impl fmt::Display for Upstream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Upstream::Weather => f.write_str("weather"),
            Upstream::News => f.write_str("news"),
        }
    }
}

/// Failure of a single upstream call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpstreamError {
    #[error("upstream does not know the requested city")]
    NotFound,

    #[error("upstream rejected the configured credentials")]
    Unauthorized,

    #[error("upstream did not respond in time")]
    Timeout,

    #[error("upstream responded with status {0}")]
    Status(u16),

    #[error("upstream request failed: {0}")]
    Transport(String),

    #[error("upstream payload could not be decoded: {0}")]
    Payload(String),
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{upstream} upstream failed for {city}: {source}")]
    Upstream {
        upstream: Upstream,
        city: String,
        #[source]
        source: UpstreamError,
    },

    /// Every upstream failed, so there is nothing to show
    #[error("no data available for {city}")]
    NoDataAvailable { city: String },
}

impl ServiceError {
    pub fn upstream(upstream: Upstream, city: impl Into<String>, source: UpstreamError) -> Self {
        Self::Upstream {
            upstream,
            city: city.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_converts() {
        let err: ServiceError = ValidationError::EmptyCity.into();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert_eq!(err.to_string(), "city name is required");
    }

    #[test]
    fn test_upstream_error_message_names_the_source() {
        let err = ServiceError::upstream(Upstream::News, "Lima", UpstreamError::Status(503));
        assert_eq!(
            err.to_string(),
            "news upstream failed for Lima: upstream responded with status 503"
        );
    }
}
