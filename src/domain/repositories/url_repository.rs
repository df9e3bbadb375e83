//! Repository trait for short URL records.

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Repository interface for the URL directory.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryStore`] - In-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Finds a record by its storage-generated key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ShortUrl>, AppError>;

    /// Finds a record by its sequence number.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn find_by_seq_id(&self, seq_id: i64) -> Result<Option<ShortUrl>, AppError>;

    /// Finds a record by exact match on the original URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn find_by_original_url(&self, original_url: &str)
    -> Result<Option<ShortUrl>, AppError>;

    /// Inserts a record unless one already exists for `original_url`.
    ///
    /// Runs as a single atomic operation. When a record already exists it is
    /// returned; if it has no sequence number and `new.seq_id` is set, the
    /// sequence number is assigned to it. An existing sequence number is never
    /// replaced.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn insert_if_absent(&self, new: NewShortUrl) -> Result<ShortUrl, AppError>;

    /// Deletes every record. Returns the number of records removed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn delete_all(&self) -> Result<u64, AppError>;

    /// Counts stored records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
