//! Sequential identifier allocation for the counter scheme.

use std::sync::Arc;
use tracing::{debug, info};

use crate::domain::repositories::CounterRepository;
use crate::error::AppError;

/// Issues unique, strictly increasing identifiers starting at 1.
///
/// The counter state lives entirely in storage; this service only sequences
/// the lifecycle calls around it.
pub struct IdentifierAllocator {
    counter: Arc<dyn CounterRepository>,
}

impl IdentifierAllocator {
    /// Creates a new allocator over the given counter.
    pub fn new(counter: Arc<dyn CounterRepository>) -> Self {
        Self { counter }
    }

    /// Ensures the counter exists (value 0) before any allocation.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on storage failures.
    pub async fn initialize(&self) -> Result<(), AppError> {
        self.counter.initialize().await?;
        info!("Identifier counter initialized");
        Ok(())
    }

    /// Returns the next identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on storage failures. No retry is attempted.
    pub async fn next_identifier(&self) -> Result<i64, AppError> {
        let value = self.counter.increment().await?;
        debug!(value, "Allocated identifier");
        Ok(value)
    }

    /// Current counter value, `None` if the counter does not exist.
    pub async fn current(&self) -> Result<Option<i64>, AppError> {
        self.counter.current().await
    }

    /// Restarts numbering so the next identifier is 1.
    pub async fn reset(&self) -> Result<(), AppError> {
        self.counter.reset().await?;
        info!("Identifier counter reset");
        Ok(())
    }
}
