//! DTOs for the short URL creation endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::ShortId;

/// Request to shorten a URL.
///
/// Accepted as `application/x-www-form-urlencoded` (field `url`) or as JSON.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL. Syntax and hostname are checked by the service.
    #[serde(default)]
    #[validate(length(min = 1, max = 4096, message = "url must be 1 to 4096 characters"))]
    pub url: String,
}

/// Created (or existing) short URL.
///
/// `short_url` is a number in the counter scheme and a UUID string in the
/// native scheme.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub original_url: String,
    pub short_url: ShortId,
}
