//! Short URL creation, lookup and reset.

use std::sync::Arc;
use tracing::{debug, info};

use crate::application::services::{IdentifierAllocator, ValidationService};
use crate::domain::entities::{IdScheme, NewShortUrl, ShortId, ShortUrl};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Outcome of an administrative reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetSummary {
    pub removed: u64,
}

/// Service for the URL directory.
///
/// Issues identifiers according to the configured [`IdScheme`]:
/// - **Counter**: a sequence number from [`IdentifierAllocator`]
/// - **Native**: the storage-generated record key
pub struct UrlService {
    url_repository: Arc<dyn UrlRepository>,
    allocator: Arc<IdentifierAllocator>,
    validator: Arc<ValidationService>,
    scheme: IdScheme,
}

impl UrlService {
    /// Creates a new URL service.
    pub fn new(
        url_repository: Arc<dyn UrlRepository>,
        allocator: Arc<IdentifierAllocator>,
        validator: Arc<ValidationService>,
        scheme: IdScheme,
    ) -> Self {
        Self {
            url_repository,
            allocator,
            validator,
            scheme,
        }
    }

    /// The active identifier scheme.
    pub fn scheme(&self) -> IdScheme {
        self.scheme
    }

    /// Prepares storage for serving requests.
    ///
    /// Initializes the counter in the counter scheme; no-op otherwise.
    pub async fn initialize(&self) -> Result<(), AppError> {
        if self.scheme == IdScheme::Counter {
            self.allocator.initialize().await?;
        }
        Ok(())
    }

    /// Validates a submitted URL, checks that its host resolves and returns
    /// the (possibly pre-existing) record for it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] / [`AppError::InvalidHostname`] when the
    /// input is rejected; nothing is stored in that case.
    /// Returns [`AppError::Storage`] on storage failures.
    pub async fn shorten(&self, input: &str) -> Result<ShortUrl, AppError> {
        let url = self.validator.validate(input).await?;
        self.find_or_create(&url.original).await
    }

    /// Returns the record for `original_url`, creating it if absent.
    ///
    /// Repeated calls with the same URL return the same identifier. The final
    /// insert is atomic, so concurrent first submissions converge on a single
    /// record; a losing racer may leave an unused sequence number behind.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on storage failures.
    pub async fn find_or_create(&self, original_url: &str) -> Result<ShortUrl, AppError> {
        if let Some(existing) = self
            .url_repository
            .find_by_original_url(original_url)
            .await?
            && existing.short_id(self.scheme).is_some()
        {
            debug!(original_url, "Reusing existing short url");
            return Ok(existing);
        }

        let seq_id = match self.scheme {
            IdScheme::Counter => Some(self.allocator.next_identifier().await?),
            IdScheme::Native => None,
        };

        let record = self
            .url_repository
            .insert_if_absent(NewShortUrl {
                original_url: original_url.to_string(),
                seq_id,
            })
            .await?;

        info!(original_url, short_id = ?record.short_id(self.scheme), "Short url stored");

        Ok(record)
    }

    /// Looks up a record by its raw (unparsed) short identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidIdentifier`] if `raw` is malformed for the
    /// active scheme; storage is not touched in that case.
    /// Returns [`AppError::NotFound`] if no record carries the identifier.
    /// Returns [`AppError::Storage`] on storage failures.
    pub async fn find_by_identifier(&self, raw: &str) -> Result<ShortUrl, AppError> {
        let id = self
            .scheme
            .parse_id(raw)
            .ok_or_else(|| AppError::invalid_identifier(raw))?;

        let found = match id {
            ShortId::Sequence(seq_id) => self.url_repository.find_by_seq_id(seq_id).await?,
            ShortId::Native(uuid) => self.url_repository.find_by_id(uuid).await?,
        };

        found.ok_or_else(|| AppError::not_found(id))
    }

    /// The client-facing identifier of `record` under the active scheme.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the record has no identifier for the
    /// scheme, which [`Self::find_or_create`] never produces.
    pub fn short_id(&self, record: &ShortUrl) -> Result<ShortId, AppError> {
        record.short_id(self.scheme).ok_or_else(|| {
            AppError::internal(format!(
                "record {} has no {} identifier",
                record.id, self.scheme
            ))
        })
    }

    /// Deletes every record and restarts the counter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on storage failures.
    pub async fn reset(&self) -> Result<ResetSummary, AppError> {
        let removed = self.url_repository.delete_all().await?;
        self.allocator.reset().await?;

        info!(removed, "Short url directory reset");

        Ok(ResetSummary { removed })
    }

    /// Number of stored records. Doubles as a storage round-trip check.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.url_repository.count().await
    }

    /// Current counter value, `None` if the counter does not exist.
    pub async fn counter_value(&self) -> Result<Option<i64>, AppError> {
        self.allocator.current().await
    }
}
