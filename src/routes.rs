//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`         - Landing page
//! - `GET  /health`   - Health check
//! - `/api/*`         - Short URL API
//! - `/public/*`      - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Permissive cross-origin access
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `static_dir` - directory served under `/public`
pub fn app_router(state: AppState, static_dir: &str) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, static_dir))
}

/// All routes and middleware, without path normalization.
pub fn router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .merge(web::routes::public_routes())
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .nest_service("/public", ServeDir::new(static_dir))
        .with_state(state)
        .layer(tracing::layer())
        .layer(cors::layer())
}
