pub mod config;
pub mod dtos;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod startup;
pub mod utils;

use axum::{
    Router,
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
};
use gateway_core::middleware::{request_id_middleware, security_headers_middleware};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::GatewayConfig;
use crate::services::{AuthService, ContentService};

#[derive(Clone)]
pub struct AppState {
    pub config: GatewayConfig,
    pub auth: AuthService,
    pub content: ContentService,
}

pub fn build_router(state: AppState) -> Router {
    // Content routes sit behind the bearer gate; auth runs before the
    // handler body, so auth failures take precedence over request
    // validation.
    let content_routes = Router::new()
        .route("/get_content", post(handlers::content::get_content))
        .route_layer(from_fn_with_state(state.clone(), middleware::auth_middleware));

    Router::new()
        .route("/health", get(health_check))
        .route("/token", post(handlers::auth::token))
        .merge(content_routes)
        .with_state(state)
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .layer(from_fn(security_headers_middleware))
        // Wide open on purpose for local development; not suitable
        // for production as-is.
        .layer(CorsLayer::permissive())
}

/// Service liveness probe.
pub async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "service": "content-gateway",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
