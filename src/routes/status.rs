use crate::models::responses::ServiceStatus;
use crate::AppState;
use axum::extract::State;
use axum::response::Json;
use std::sync::Arc;

pub const VERSION: &str = "v1";

/// Probe all three upstreams and report their status side by side. One
/// unreachable upstream shows up as "500" in its own field and never blocks
/// the rest of the report.
pub async fn service_status(State(state): State<Arc<AppState>>) -> Json<ServiceStatus> {
    let gutendexapi = state.catalog.probe().await;
    let languageapi = state.geo.probe().await;
    let countriesapi = state.population.probe().await;

    Json(ServiceStatus {
        gutendexapi,
        languageapi,
        countriesapi,
        version: VERSION.to_string(),
        uptime: state.started.elapsed().as_secs(),
    })
}
