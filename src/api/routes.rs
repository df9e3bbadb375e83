//! API route configuration.

use crate::api::handlers::{hello_handler, redirect_handler, reset_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes. None require authentication.
///
/// # Endpoints
///
/// - `GET  /hello`          - Greeting
/// - `POST /shorturl`       - Create (or reuse) a short URL
/// - `GET  /shorturl/{id}`  - Redirect to the original URL
/// - `GET  /reset`          - Administrative reset of all records and the counter
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/hello", get(hello_handler))
        .route("/shorturl", post(shorten_handler))
        .route("/shorturl/{id}", get(redirect_handler))
        .route("/reset", get(reset_handler))
}
