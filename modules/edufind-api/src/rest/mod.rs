use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use tracing::warn;

use edufind_common::{resource_type_options, EduFindError, Resource, ResourceTypeOption, SearchQuery};

use crate::AppState;

// --- Response bodies ---

#[derive(Serialize)]
pub struct SearchResponse {
    pub resources: Vec<Resource>,
}

#[derive(Serialize)]
pub struct ResourceTypesResponse {
    pub resource_types: Vec<ResourceTypeOption>,
}

// --- Helpers ---

/// `{ "detail": ... }` with 400 for bad requests and 500 for everything else.
fn error_response(err: &EduFindError) -> Response {
    let status = if err.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        warn!(error = %err, "Resource search failed");
        StatusCode::INTERNAL_SERVER_ERROR
    };

    (status, Json(serde_json::json!({ "detail": err.to_string() }))).into_response()
}

// --- Handlers ---

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

pub async fn api_search(
    State(state): State<Arc<AppState>>,
    Json(query): Json<SearchQuery>,
) -> Response {
    match state.pipeline.top_resources(&query).await {
        Ok(resources) => Json(SearchResponse { resources }).into_response(),
        Err(e) => error_response(&e),
    }
}

pub async fn api_resource_types() -> Json<ResourceTypesResponse> {
    Json(ResourceTypesResponse {
        resource_types: resource_type_options(),
    })
}
