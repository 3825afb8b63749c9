use crate::form::{FormSelection, ALL_SENTINEL};
use crate::infra::AppState;
use crate::views::RecommendationResponse;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use internship_match::error::AppError;
use internship_match::{recommend, SharedCatalog};
use serde::Serialize;
use serde_json::json;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Serialize)]
pub(crate) struct FilterOptionsResponse {
    pub(crate) all: &'static str,
    pub(crate) locations: Vec<String>,
    pub(crate) sectors: Vec<String>,
}

/// Router exposing the recommendation and filter-option endpoints.
pub(crate) fn recommendation_router(catalog: Arc<SharedCatalog>) -> Router {
    Router::new()
        .route("/api/v1/recommendations", post(recommend_endpoint))
        .route("/api/v1/catalog/filters", get(filter_options_endpoint))
        .with_state(catalog)
}

pub(crate) fn with_service_routes(catalog: Arc<SharedCatalog>) -> Router {
    recommendation_router(catalog)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed) && state.catalog.is_loaded();
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn recommend_endpoint(
    State(catalog): State<Arc<SharedCatalog>>,
    Json(form): Json<FormSelection>,
) -> Result<Response, AppError> {
    let query = match form.to_query() {
        Ok(query) => query,
        Err(err) => {
            let payload = json!({ "error": err.to_string() });
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response());
        }
    };

    let catalog = catalog.get()?;
    let results = recommend(&query, &catalog);
    debug!(returned = results.len(), "recommendation request served");

    let body = RecommendationResponse::new(&form, &results);
    Ok((StatusCode::OK, Json(body)).into_response())
}

pub(crate) async fn filter_options_endpoint(
    State(catalog): State<Arc<SharedCatalog>>,
) -> Result<Json<FilterOptionsResponse>, AppError> {
    let catalog = catalog.get()?;
    Ok(Json(FilterOptionsResponse {
        all: ALL_SENTINEL,
        locations: catalog.locations(),
        sectors: catalog.sectors(),
    }))
}
