//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::debug;
use url::Url;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short identifier to its original URL.
///
/// # Endpoint
///
/// `GET /api/shorturl/{id}`
///
/// # Response
///
/// 302 Found with `Location` set to the original URL, serialized through the
/// `url` crate so that non-ASCII input is percent-encoded.
///
/// # Errors
///
/// - 400 `invalid_identifier` if `id` is malformed for the active scheme
/// - 404 `not_found` if no record has that identifier
/// - 500 `storage_failure` on database errors
pub async fn redirect_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let record = state.url_service.find_by_identifier(&id).await?;

    let location = Url::parse(&record.original_url)
        .map(String::from)
        .unwrap_or(record.original_url);

    let location = HeaderValue::try_from(location.as_str())
        .map_err(|e| AppError::internal(format!("unusable redirect target: {e}")))?;

    debug!(id = %id, "Redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
