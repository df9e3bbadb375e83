//! Handler for the administrative reset endpoint.

use axum::extract::State;

use crate::error::AppError;
use crate::state::AppState;

/// Plain-text body returned after a successful reset.
pub const RESET_CONFIRMATION: &str = "Database cleared and counter reset!";

/// Deletes every short URL and restarts the counter.
///
/// # Endpoint
///
/// `GET /api/reset`
///
/// The reset completes before the response is sent, so a subsequent request
/// never observes pre-reset state.
///
/// # Errors
///
/// Returns 500 with a JSON error body on storage failures.
pub async fn reset_handler(State(state): State<AppState>) -> Result<&'static str, AppError> {
    let summary = state.url_service.reset().await?;
    tracing::warn!(removed = summary.removed, "Administrative reset performed");

    Ok(RESET_CONFIRMATION)
}
