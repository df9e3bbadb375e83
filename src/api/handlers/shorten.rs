//! Handler for the short URL creation endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::api::extract::FormOrJson;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL, or returns the existing one for the same URL.
///
/// # Endpoint
///
/// `POST /api/shorturl`
///
/// # Request Body
///
/// Form-encoded `url=https://example.com` or JSON `{"url": "https://example.com"}`.
///
/// # Request Flow
///
/// 1. Check the URL is an absolute http(s) URL
/// 2. Resolve its hostname (bounded by `DNS_TIMEOUT_MS`)
/// 3. Find or create the record
///
/// # Response
///
/// ```json
/// { "original_url": "https://example.com", "short_url": 1 }
/// ```
///
/// # Errors
///
/// - 400 `invalid_url` if the URL is missing or malformed
/// - 400 `invalid_hostname` if the hostname does not resolve
/// - 500 `storage_failure` on database errors
pub async fn shorten_handler(
    State(state): State<AppState>,
    FormOrJson(payload): FormOrJson<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let record = state.url_service.shorten(&payload.url).await?;
    let short_url = state.url_service.short_id(&record)?;

    Ok(Json(ShortenResponse {
        original_url: record.original_url,
        short_url,
    }))
}
