// src/routes/mod.rs

use std::time::Duration;

use axum::{
    http::{
        header::{ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN},
        HeaderValue, Method, StatusCode, Uri,
    },
    response::{IntoResponse, Response},
    routing::{get, MethodRouter},
    Router,
};
use tower_http::{set_header::SetResponseHeaderLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::{error::ApiError, AppState};

pub mod health;
pub mod params;
pub mod region;
pub mod statistical_index;
pub mod subjective_index;

/// CORS preflight for any API path.
pub async fn preflight() -> impl IntoResponse {
    (
        StatusCode::OK,
        [
            (ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (ACCESS_CONTROL_ALLOW_METHODS, "GET, OPTIONS"),
        ],
    )
}

async fn api_fallback(method: Method, uri: Uri) -> Response {
    if method == Method::OPTIONS {
        return preflight().await.into_response();
    }
    ApiError::NotFound(format!("no route for {} {}", method, uri.path())).into_response()
}

fn api_v1() -> Router<AppState> {
    let routes: [(&str, MethodRouter<AppState>); 8] = [
        ("/region-data", get(region::region_data)),
        ("/subjective-index/get-questions", get(subjective_index::get_questions)),
        ("/subjective-index/domains", get(subjective_index::domains)),
        ("/subjective-index/average-values", get(subjective_index::average_values)),
        ("/municipalities-data", get(subjective_index::municipalities_data)),
        ("/statistical-index/get-indicators", get(statistical_index::get_indicators)),
        ("/statistical-index/domains", get(statistical_index::domains)),
        ("/statistical-index/average-values", get(statistical_index::average_values)),
    ];

    // Front-end links use the trailing slash; accept both forms.
    routes
        .into_iter()
        .fold(Router::new(), |router, (path, handler)| {
            let handler = handler.options(preflight);
            router
                .route(path, handler.clone())
                .route(&format!("{path}/"), handler)
        })
        .fallback(api_fallback)
}

pub fn router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .nest("/api/v1", api_v1())
        .with_state(state)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
}
