// src/routes/subjective_index.rs

use axum::{extract::{Query, State}, Json};

use super::params::ScopeQ;
use crate::{
    error::ApiError,
    models::{AverageValues, DomainItem, MunicipalityQuestion, QuestionAnswers, QuestionGroups},
    services::SubjectiveIndexService,
    AppState,
};

/// GET /api/v1/subjective-index/get-questions/
pub async fn get_questions(
    State(state): State<AppState>,
    Query(q): Query<ScopeQ>,
) -> Result<Json<QuestionGroups<QuestionAnswers>>, ApiError> {
    let scope = q.bind()?;
    let svc = SubjectiveIndexService::new(state.store.as_ref(), scope);
    Ok(Json(svc.question_groups().await?))
}

/// GET /api/v1/subjective-index/domains/
pub async fn domains(
    State(state): State<AppState>,
    Query(q): Query<ScopeQ>,
) -> Result<Json<Vec<DomainItem>>, ApiError> {
    let scope = q.bind()?;
    let svc = SubjectiveIndexService::new(state.store.as_ref(), scope);
    Ok(Json(svc.domains().await?))
}

/// GET /api/v1/subjective-index/average-values/
pub async fn average_values(
    State(state): State<AppState>,
    Query(q): Query<ScopeQ>,
) -> Result<Json<AverageValues>, ApiError> {
    let scope = q.bind()?;
    let svc = SubjectiveIndexService::new(state.store.as_ref(), scope);
    Ok(Json(svc.average_values().await?))
}

/// GET /api/v1/municipalities-data/
pub async fn municipalities_data(
    State(state): State<AppState>,
    Query(q): Query<ScopeQ>,
) -> Result<Json<QuestionGroups<MunicipalityQuestion>>, ApiError> {
    let scope = q.bind()?;
    let svc = SubjectiveIndexService::new(state.store.as_ref(), scope);
    Ok(Json(svc.municipality_question_groups().await?))
}
