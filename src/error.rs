use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Failures surfaced by the aggregation pipeline.
///
/// Any upstream failure aborts the whole request; only the status endpoint
/// tolerates partial failure, and it does so without going through this type.
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("upstream {service} unavailable: {reason}")]
    UpstreamUnavailable { service: &'static str, reason: String },

    #[error("upstream {service} returned a malformed response: {reason}")]
    UpstreamMalformed { service: &'static str, reason: String },

    #[error("not found: {0}")]
    NotFound(String),

    #[error("missing required parameter: {0}")]
    MissingParameter(&'static str),
}

impl StatsError {
    pub fn unavailable(service: &'static str, err: reqwest::Error) -> Self {
        StatsError::UpstreamUnavailable {
            service,
            reason: err.to_string(),
        }
    }

    pub fn malformed(service: &'static str, err: reqwest::Error) -> Self {
        StatsError::UpstreamMalformed {
            service,
            reason: err.to_string(),
        }
    }
}

// Errors become a plain-text body, not structured JSON. Clients that asked
// for an array get either the complete array or an error status, never both.
impl IntoResponse for StatsError {
    fn into_response(self) -> Response {
        let status = match self {
            StatsError::MissingParameter(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, self.to_string()).into_response()
    }
}
