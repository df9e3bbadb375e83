//! Repository trait for the storage-owned identifier counter.

use crate::error::AppError;
use async_trait::async_trait;

/// Atomic counter owned by the storage layer.
///
/// Values returned by [`CounterRepository::increment`] are unique and strictly
/// increasing until [`CounterRepository::reset`] is called.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CounterRepository: Send + Sync {
    /// Creates the counter with value 0 if it does not exist yet.
    ///
    /// Idempotent; an existing counter keeps its value.
    async fn initialize(&self) -> Result<(), AppError>;

    /// Atomically increments the counter and returns the new value.
    ///
    /// Creates the counter on the fly if it is missing, so the first call
    /// after initialization returns 1.
    async fn increment(&self) -> Result<i64, AppError>;

    /// Returns the current value without incrementing, `None` if absent.
    async fn current(&self) -> Result<Option<i64>, AppError>;

    /// Removes the counter and re-initializes it to 0.
    async fn reset(&self) -> Result<(), AppError>;
}
