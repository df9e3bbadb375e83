//! Application error type and its HTTP representation.
//!
//! Every failure is logged with full detail where it happens; the client only
//! sees a generic `error` message plus a machine-readable `code`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// JSON body returned for every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub code: &'static str,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The submitted long URL is not an absolute http(s) URL with a host.
    #[error("invalid url: {reason}")]
    InvalidUrl { reason: String },

    /// The host of the submitted URL did not resolve (or timed out).
    #[error("invalid hostname '{host}': {reason}")]
    InvalidHostname { host: String, reason: String },

    /// A short identifier that is malformed for the active scheme.
    #[error("malformed short url identifier '{value}'")]
    InvalidIdentifier { value: String },

    /// A well-formed identifier that is not assigned to any record.
    #[error("no short url with identifier '{id}'")]
    NotFound { id: String },

    #[error("storage failure: {0}")]
    Storage(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn invalid_url(reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            reason: reason.into(),
        }
    }

    pub fn invalid_hostname(host: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidHostname {
            host: host.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_identifier(value: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            value: value.into(),
        }
    }

    pub fn not_found(id: impl ToString) -> Self {
        Self::NotFound { id: id.to_string() }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// HTTP status for this error kind.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidUrl { .. }
            | Self::InvalidHostname { .. }
            | Self::InvalidIdentifier { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Storage(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine-readable error kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidUrl { .. } => "invalid_url",
            Self::InvalidHostname { .. } => "invalid_hostname",
            Self::InvalidIdentifier { .. } => "invalid_identifier",
            Self::NotFound { .. } => "not_found",
            Self::Storage(_) => "storage_failure",
            Self::Internal(_) => "internal_error",
        }
    }

    /// Client-facing message. Every rejected submission or lookup reads
    /// "invalid url"; [`Self::code`] tells the kinds apart.
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::InvalidUrl { .. }
            | Self::InvalidHostname { .. }
            | Self::InvalidIdentifier { .. }
            | Self::NotFound { .. } => "invalid url",
            Self::Storage(_) => "Database error",
            Self::Internal(_) => "Internal error",
        }
    }

    pub fn to_error_body(&self) -> ErrorBody {
        ErrorBody {
            error: self.public_message(),
            code: self.code(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = %self, code = self.code(), "request failed");
        } else {
            tracing::warn!(error = %self, code = self.code(), "request rejected");
        }

        (status, Json(self.to_error_body())).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::Storage(e.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::invalid_url(e.to_string())
    }
}
