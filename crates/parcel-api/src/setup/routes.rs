//! Route configuration and setup

use crate::constants::{HEALTH_PATH, UPLOAD_URL_PATH};
use crate::handlers::{health, upload_url};
use crate::middleware::cors_headers_middleware;
use crate::state::AppState;
use axum::{
    middleware,
    routing::{get, post, MethodRouter},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Routes for the standalone server
pub fn server_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            UPLOAD_URL_PATH,
            post(upload_url::issue_upload_url).options(upload_url::preflight),
        )
        .route(HEALTH_PATH, get(health::liveness_check))
        .with_state(state)
        .layer(middleware::from_fn(cors_headers_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Routes for the Lambda function
///
/// API Gateway maps the function to a single resource, so every path reaches the upload
/// handler. Methods other than POST and OPTIONS get a 405.
pub fn function_router(state: Arc<AppState>) -> Router {
    let handler: MethodRouter = post(upload_url::issue_upload_url)
        .options(upload_url::preflight)
        .with_state(state);

    Router::new()
        .fallback_service(handler)
        .layer(middleware::from_fn(cors_headers_middleware))
        .layer(TraceLayer::new_for_http())
}
