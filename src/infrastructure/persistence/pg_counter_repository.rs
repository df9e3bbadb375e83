//! PostgreSQL implementation of the identifier counter.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::repositories::CounterRepository;
use crate::error::AppError;

/// Name of the single counter row used for short URL sequence numbers.
const SHORT_URL_COUNTER: &str = "short_url";

/// PostgreSQL-backed counter stored as one row of the `counters` table.
///
/// Increments are a single `INSERT ... ON CONFLICT DO UPDATE ... RETURNING`
/// statement, so concurrent callers never observe the same value.
pub struct PgCounterRepository {
    pool: Arc<PgPool>,
}

impl PgCounterRepository {
    /// Creates a counter repository for the short URL sequence.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CounterRepository for PgCounterRepository {
    async fn initialize(&self) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO counters (name, value)
            VALUES ($1, 0)
            ON CONFLICT (name) DO NOTHING
            "#,
        )
        .bind(SHORT_URL_COUNTER)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn increment(&self) -> Result<i64, AppError> {
        let value = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO counters (name, value)
            VALUES ($1, 1)
            ON CONFLICT (name) DO UPDATE SET value = counters.value + 1
            RETURNING value
            "#,
        )
        .bind(SHORT_URL_COUNTER)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(value)
    }

    async fn current(&self) -> Result<Option<i64>, AppError> {
        let value = sqlx::query_scalar::<_, i64>("SELECT value FROM counters WHERE name = $1")
            .bind(SHORT_URL_COUNTER)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(value)
    }

    async fn reset(&self) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM counters WHERE name = $1")
            .bind(SHORT_URL_COUNTER)
            .execute(&mut *tx)
            .await?;

        sqlx::query("INSERT INTO counters (name, value) VALUES ($1, 0)")
            .bind(SHORT_URL_COUNTER)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }
}
