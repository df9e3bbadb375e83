//! In-process implementation of the URL and counter repositories.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use tracing::debug;
use uuid::Uuid;

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::{CounterRepository, UrlRepository};
use crate::error::AppError;

#[derive(Debug, Default)]
struct Inner {
    records: HashMap<Uuid, ShortUrl>,
    by_seq: HashMap<i64, Uuid>,
    by_url: HashMap<String, Uuid>,
    counter: Option<i64>,
}

/// Mutex-guarded store implementing both [`UrlRepository`] and
/// [`CounterRepository`].
///
/// All three indexes are updated under one lock, giving the same atomicity as
/// the PostgreSQL implementation. Data lives only as long as the process.
///
/// # Use Cases
///
/// - Development without a database (`STORAGE_BACKEND=memory`)
/// - HTTP handler tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    /// Creates an empty store. The counter starts uninitialized.
    pub fn new() -> Self {
        debug!("Using in-memory store");
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, AppError> {
        self.inner
            .lock()
            .map_err(|_| AppError::Storage("memory store lock poisoned".to_string()))
    }
}

#[async_trait]
impl UrlRepository for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ShortUrl>, AppError> {
        Ok(self.lock()?.records.get(&id).cloned())
    }

    async fn find_by_seq_id(&self, seq_id: i64) -> Result<Option<ShortUrl>, AppError> {
        let inner = self.lock()?;
        Ok(inner
            .by_seq
            .get(&seq_id)
            .and_then(|id| inner.records.get(id))
            .cloned())
    }

    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<ShortUrl>, AppError> {
        let inner = self.lock()?;
        Ok(inner
            .by_url
            .get(original_url)
            .and_then(|id| inner.records.get(id))
            .cloned())
    }

    async fn insert_if_absent(&self, new: NewShortUrl) -> Result<ShortUrl, AppError> {
        let mut inner = self.lock()?;

        if let Some(seq_id) = new.seq_id
            && inner.by_seq.contains_key(&seq_id)
        {
            return Err(AppError::Storage(format!(
                "duplicate sequence number {seq_id}"
            )));
        }

        if let Some(id) = inner.by_url.get(&new.original_url).copied() {
            let Inner {
                records, by_seq, ..
            } = &mut *inner;
            let record = records
                .get_mut(&id)
                .ok_or_else(|| AppError::Storage("dangling url index entry".to_string()))?;

            if record.seq_id.is_none()
                && let Some(seq_id) = new.seq_id
            {
                record.seq_id = Some(seq_id);
                by_seq.insert(seq_id, id);
            }

            return Ok(record.clone());
        }

        let record = ShortUrl::new(Uuid::new_v4(), new.seq_id, new.original_url, Utc::now());

        if let Some(seq_id) = record.seq_id {
            inner.by_seq.insert(seq_id, record.id);
        }
        inner
            .by_url
            .insert(record.original_url.clone(), record.id);
        inner.records.insert(record.id, record.clone());

        Ok(record)
    }

    async fn delete_all(&self) -> Result<u64, AppError> {
        let mut inner = self.lock()?;
        let removed = inner.records.len() as u64;

        inner.records.clear();
        inner.by_seq.clear();
        inner.by_url.clear();

        Ok(removed)
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.lock()?.records.len() as i64)
    }
}

#[async_trait]
impl CounterRepository for MemoryStore {
    async fn initialize(&self) -> Result<(), AppError> {
        self.lock()?.counter.get_or_insert(0);
        Ok(())
    }

    async fn increment(&self) -> Result<i64, AppError> {
        let mut inner = self.lock()?;
        let next = inner.counter.unwrap_or(0) + 1;
        inner.counter = Some(next);
        Ok(next)
    }

    async fn current(&self) -> Result<Option<i64>, AppError> {
        Ok(self.lock()?.counter)
    }

    async fn reset(&self) -> Result<(), AppError> {
        self.lock()?.counter = Some(0);
        Ok(())
    }
}
