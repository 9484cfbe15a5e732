use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;

use edufind_common::{EduFindError, Result};
use edufind_scout::ResourcePipeline;

pub mod rest;

pub struct AppState {
    pub pipeline: ResourcePipeline,
}

impl AppState {
    pub fn new(pipeline: ResourcePipeline) -> Self {
        Self { pipeline }
    }
}

/// Routes are mounted both bare and under `/api` so the same binary serves
/// either deployment layout.
///
/// An empty `allowed_origins` allows any origin.
pub fn build_router(state: Arc<AppState>, allowed_origins: &[HeaderValue]) -> Router {
    Router::new()
        // Health check
        .route("/", get(rest::health))
        .route("/health", get(rest::health))
        .route("/api/health", get(rest::health))
        // REST API
        .route("/search", post(rest::api_search))
        .route("/api/search", post(rest::api_search))
        .route("/resource-types", get(rest::api_resource_types))
        .route("/api/resource-types", get(rest::api_resource_types))
        .with_state(state)
        .layer(cors_layer(allowed_origins))
        // Results are computed per request and never cached
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        // Logging layer: method + path only
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        )
}

/// Parse configured CORS origins. A single bad entry fails startup so a
/// restricted list can never widen to `Any`.
pub fn parse_origins(allowed_origins: &[String]) -> Result<Vec<HeaderValue>> {
    allowed_origins
        .iter()
        .map(|o| {
            HeaderValue::from_str(o).map_err(|_| {
                EduFindError::Config(format!("ALLOWED_ORIGINS entry {o:?} is not a valid origin"))
            })
        })
        .collect()
}

fn cors_layer(allowed_origins: &[HeaderValue]) -> CorsLayer {
    let allow_origin = if allowed_origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(allowed_origins.iter().cloned())
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}
