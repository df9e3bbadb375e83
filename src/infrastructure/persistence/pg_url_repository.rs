//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Row shape shared by every query on `short_urls`.
#[derive(Debug, sqlx::FromRow)]
struct ShortUrlRow {
    id: Uuid,
    seq_id: Option<i64>,
    original_url: String,
    created_at: DateTime<Utc>,
}

impl From<ShortUrlRow> for ShortUrl {
    fn from(r: ShortUrlRow) -> Self {
        ShortUrl::new(r.id, r.seq_id, r.original_url, r.created_at)
    }
}

/// PostgreSQL repository for short URL records.
///
/// Relies on the `short_urls_original_url_key` unique constraint to make
/// [`UrlRepository::insert_if_absent`] a single atomic upsert.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ShortUrl>, AppError> {
        let row = sqlx::query_as::<_, ShortUrlRow>(
            r#"
            SELECT id, seq_id, original_url, created_at
            FROM short_urls
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn find_by_seq_id(&self, seq_id: i64) -> Result<Option<ShortUrl>, AppError> {
        let row = sqlx::query_as::<_, ShortUrlRow>(
            r#"
            SELECT id, seq_id, original_url, created_at
            FROM short_urls
            WHERE seq_id = $1
            "#,
        )
        .bind(seq_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<ShortUrl>, AppError> {
        let row = sqlx::query_as::<_, ShortUrlRow>(
            r#"
            SELECT id, seq_id, original_url, created_at
            FROM short_urls
            WHERE original_url = $1
            "#,
        )
        .bind(original_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn insert_if_absent(&self, new: NewShortUrl) -> Result<ShortUrl, AppError> {
        // DO UPDATE (rather than DO NOTHING) so RETURNING yields the existing
        // row on conflict; COALESCE keeps an already assigned seq_id.
        let row = sqlx::query_as::<_, ShortUrlRow>(
            r#"
            INSERT INTO short_urls (original_url, seq_id)
            VALUES ($1, $2)
            ON CONFLICT ON CONSTRAINT short_urls_original_url_key
            DO UPDATE SET seq_id = COALESCE(short_urls.seq_id, EXCLUDED.seq_id)
            RETURNING id, seq_id, original_url, created_at
            "#,
        )
        .bind(&new.original_url)
        .bind(new.seq_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn delete_all(&self) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM short_urls")
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM short_urls")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
