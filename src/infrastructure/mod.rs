//! Infrastructure layer for external integrations.
//!
//! Provides concrete implementations of the contracts defined by the domain
//! layer.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL and in-memory repository implementations
//! - [`dns`] - System hostname resolver

pub mod dns;
pub mod persistence;
