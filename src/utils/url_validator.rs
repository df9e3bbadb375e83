//! Syntactic validation of submitted URLs.
//!
//! Only checks the shape of the URL. Hostname resolvability is verified
//! separately through [`crate::domain::host_resolver::HostResolver`].

use url::{Host, Url};

/// Maximum accepted URL length in bytes. Keeps entries of the unique index
/// on `original_url` below PostgreSQL's B-tree row limit.
pub const MAX_URL_BYTES: usize = 2048;

/// Errors that can occur while validating a submitted URL.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL has no hostname")]
    MissingHost,

    #[error("URL exceeds {MAX_URL_BYTES} bytes")]
    TooLong,
}

/// A submitted URL that passed syntactic validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedUrl {
    /// The URL exactly as submitted (trimmed). Used for storage and lookup.
    pub original: String,
    /// Hostname to resolve. IPv6 literals are returned without brackets.
    pub host: String,
}

/// Validates a submitted long URL.
///
/// # Rules
///
/// 1. Must parse as an absolute URL
/// 2. Scheme must be `http` or `https`
/// 3. Must carry a non-empty host
/// 4. At most [`MAX_URL_BYTES`] bytes after trimming
///
/// The original string is kept as-is: two submissions map to the same record
/// only when they are byte-for-byte identical after trimming.
///
/// # Errors
///
/// Returns [`UrlValidationError::InvalidFormat`] for unparsable input,
/// [`UrlValidationError::UnsupportedProtocol`] for non-HTTP(S) schemes and
/// [`UrlValidationError::MissingHost`] when there is nothing to resolve and
/// [`UrlValidationError::TooLong`] past [`MAX_URL_BYTES`].
///
/// # Examples
///
/// ```ignore
/// let url = validate_url("https://Example.com/a?b=c").unwrap();
/// assert_eq!(url.original, "https://Example.com/a?b=c");
/// assert_eq!(url.host, "example.com");
/// ```
pub fn validate_url(input: &str) -> Result<ValidatedUrl, UrlValidationError> {
    let original = input.trim();

    if original.len() > MAX_URL_BYTES {
        return Err(UrlValidationError::TooLong);
    }

    let url =
        Url::parse(original).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    let host = match url.host() {
        Some(Host::Domain(d)) if !d.is_empty() => d.to_string(),
        Some(Host::Ipv4(ip)) => ip.to_string(),
        Some(Host::Ipv6(ip)) => ip.to_string(),
        _ => return Err(UrlValidationError::MissingHost),
    };

    Ok(ValidatedUrl {
        original: original.to_string(),
        host,
    })
}
