// src/routes/region.rs

use axum::{extract::{Query, State}, Json};

use super::params::RegionQ;
use crate::{error::ApiError, models::RegionData, services::RegionLookup, AppState};

/// GET /api/v1/region-data/?region=<code>
pub async fn region_data(
    State(state): State<AppState>,
    Query(q): Query<RegionQ>,
) -> Result<Json<RegionData>, ApiError> {
    let code = q.code()?;
    let region = RegionLookup::resolve_by_code(state.store.as_ref(), &code).await?;
    tracing::debug!(region_id = region.region().id, %code, "region resolved");
    Ok(Json(region.region_data().await?))
}
