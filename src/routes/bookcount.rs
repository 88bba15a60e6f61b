use crate::error::StatsError;
use crate::services::aggregate;
use crate::AppState;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Debug, Deserialize)]
pub struct BookCountParams {
    pub language: Option<String>,
}

pub async fn book_count(
    Query(params): Query<BookCountParams>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatsError> {
    // No language parameter at all gets the historical silent empty reply;
    // an explicitly empty value is rejected.
    let Some(languages) = params.language else {
        return Ok(().into_response());
    };
    if languages.is_empty() {
        return Err(StatsError::MissingParameter("language"));
    }

    info!("book count requested for languages: {}", languages);

    match aggregate::book_counts(&state.catalog, &languages).await {
        Ok(reports) => Ok(Json(reports).into_response()),
        Err(e) => {
            error!("book count aggregation failed: {}", e);
            Err(e)
        }
    }
}
