//! Repository implementations.
//!
//! PostgreSQL implementations use SQLx with bound parameters; the in-memory
//! store serves development and tests.
//!
//! # Repositories
//!
//! - [`PgUrlRepository`] - Short URL records
//! - [`PgCounterRepository`] - Sequential identifier counter
//! - [`MemoryStore`] - Both of the above, in process

pub mod memory_store;
pub mod pg_counter_repository;
pub mod pg_url_repository;

pub use memory_store::MemoryStore;
pub use pg_counter_repository::PgCounterRepository;
pub use pg_url_repository::PgUrlRepository;
