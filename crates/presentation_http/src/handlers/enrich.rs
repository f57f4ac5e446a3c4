//! JSON enrichment endpoint

use axum::{
    Json,
    extract::{Query, State},
};
use domain::EnrichedResult;
use serde::Deserialize;
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Query parameters for `GET /v1/enrich`
#[derive(Debug, Default, Deserialize)]
pub struct EnrichQuery {
    /// Free-text place name
    #[serde(default)]
    pub place: Option<String>,
}

/// Enrich a place and return the result as JSON
#[instrument(skip_all, fields(place = ?query.place))]
pub async fn enrich_place(
    State(state): State<AppState>,
    Query(query): Query<EnrichQuery>,
) -> Result<Json<EnrichedResult>, ApiError> {
    let place = query.place.unwrap_or_default();
    let result = state.enrichment.enrich(&place).await?;
    Ok(Json(result))
}
