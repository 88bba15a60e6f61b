use axum::{routing::get, Router};
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use routes::{
    bookcount::book_count, health::health_check, readership::readership, status::service_status,
};
use services::catalog::CatalogClient;
use services::geo::GeoClient;
use services::population::PopulationClient;

/// Shared, read-only per-process state: one client per upstream plus the
/// process start time for the uptime field of the status report.
pub struct AppState {
    pub catalog: CatalogClient,
    pub geo: GeoClient,
    pub population: PopulationClient,
    pub started: Instant,
}

impl AppState {
    pub fn new(config: &config::Config) -> Self {
        Self {
            catalog: CatalogClient::new(&config.gutendex_url),
            geo: GeoClient::new(&config.language2countries_url),
            population: PopulationClient::new(&config.restcountries_url),
            started: Instant::now(),
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/librarystats/v1/bookcount/", get(book_count))
        .route("/librarystats/v1/readership/:language", get(readership))
        .route("/librarystats/v1/status/", get(service_status))
        .route("/health/", get(health_check))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
