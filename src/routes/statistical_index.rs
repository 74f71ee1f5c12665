// src/routes/statistical_index.rs

use axum::{extract::{Query, State}, Json};

use super::params::ScopeQ;
use crate::{
    error::ApiError,
    models::{AverageValues, DomainItem, ResultTypeIndicators},
    services::StatisticalIndexService,
    AppState,
};

/// GET /api/v1/statistical-index/get-indicators/
pub async fn get_indicators(
    State(state): State<AppState>,
    Query(q): Query<ScopeQ>,
) -> Result<Json<Vec<ResultTypeIndicators>>, ApiError> {
    let scope = q.bind()?;
    let svc = StatisticalIndexService::new(state.store.as_ref(), scope);
    Ok(Json(svc.results_with_indicators().await?))
}

/// GET /api/v1/statistical-index/domains/
pub async fn domains(
    State(state): State<AppState>,
    Query(q): Query<ScopeQ>,
) -> Result<Json<Vec<DomainItem>>, ApiError> {
    let scope = q.bind()?;
    let svc = StatisticalIndexService::new(state.store.as_ref(), scope);
    Ok(Json(svc.domains().await?))
}

/// GET /api/v1/statistical-index/average-values/
pub async fn average_values(
    State(state): State<AppState>,
    Query(q): Query<ScopeQ>,
) -> Result<Json<AverageValues>, ApiError> {
    let scope = q.bind()?;
    let svc = StatisticalIndexService::new(state.store.as_ref(), scope);
    Ok(Json(svc.average_values().await?))
}
