//! Short URL record mapping an original URL to its identifiers.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::short_id::{IdScheme, ShortId};

/// A stored URL record.
///
/// Every record has a storage-generated `id`. Records issued under the counter
/// scheme additionally carry a `seq_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortUrl {
    pub id: Uuid,
    pub seq_id: Option<i64>,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}

impl ShortUrl {
    /// Creates a new ShortUrl instance.
    pub fn new(
        id: Uuid,
        seq_id: Option<i64>,
        original_url: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            seq_id,
            original_url,
            created_at,
        }
    }

    /// The identifier this record is known by under `scheme`.
    ///
    /// Returns `None` under the counter scheme when no sequence number has
    /// been assigned yet.
    pub fn short_id(&self, scheme: IdScheme) -> Option<ShortId> {
        match scheme {
            IdScheme::Counter => self.seq_id.map(ShortId::Sequence),
            IdScheme::Native => Some(ShortId::Native(self.id)),
        }
    }
}

/// Input data for inserting a record.
#[derive(Debug, Clone, PartialEq)]
pub struct NewShortUrl {
    pub original_url: String,
    /// Pre-allocated sequence number (counter scheme only).
    pub seq_id: Option<i64>,
}
