use crate::error::StatsError;
use crate::models::responses::ReadershipRecord;
use crate::services::aggregate;
use crate::AppState;
use axum::extract::{Path, Query, State};
use axum::response::Json;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Debug, Deserialize)]
pub struct ReadershipParams {
    pub limit: Option<usize>,
}

pub async fn readership(
    Path(language): Path<String>,
    Query(params): Query<ReadershipParams>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ReadershipRecord>>, StatsError> {
    info!(
        "readership requested for language {} (limit: {:?})",
        language, params.limit
    );

    match aggregate::readership(
        &state.catalog,
        &state.geo,
        &state.population,
        &language,
        params.limit,
    )
    .await
    {
        Ok(records) => Ok(Json(records)),
        Err(e) => {
            error!("readership aggregation failed for {}: {}", language, e);
            Err(e)
        }
    }
}
