use axum::{
    http::{header, StatusCode},
    middleware,
    response::IntoResponse,
    routing::get,
    Router,
};
use tower_http::trace::TraceLayer;

use super::health;
use super::middleware::{logging_middleware, security_headers_middleware};
use super::state::AppState;
use super::token;
use super::types::ApiError;

/// Create the full router with application state
///
/// Probe routes start with `_` so they can never shadow a `[a-z]+` username.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/_health", get(health::health_check))
        .route("/_ready", get(health::ready_check))
        .route("/_live", get(health::live_check))
        // axum routes HEAD to the GET handler unless HEAD has its own endpoint
        .route(
            "/{username}",
            get(token::issue_token).head(method_not_allowed),
        )
        .fallback(not_found)
        .with_state(state)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
}

async fn method_not_allowed() -> impl IntoResponse {
    (StatusCode::METHOD_NOT_ALLOWED, [(header::ALLOW, "GET")])
}

async fn not_found() -> ApiError {
    ApiError::not_found("Not found")
}
