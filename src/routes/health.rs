use axum::http::StatusCode;

/// Liveness check: empty 200, no body.
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}
