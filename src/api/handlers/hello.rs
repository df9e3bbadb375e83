//! Handler for the greeting endpoint.

use axum::Json;

use crate::api::dto::hello::HelloResponse;

/// Returns a fixed greeting.
///
/// # Endpoint
///
/// `GET /api/hello`
pub async fn hello_handler() -> Json<HelloResponse> {
    Json(HelloResponse {
        greeting: "hello API",
    })
}
