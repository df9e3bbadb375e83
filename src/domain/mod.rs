//! Domain layer containing business entities and contracts.
//!
//! Defines entities and the traits the application layer depends on,
//! independent of infrastructure concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`host_resolver`] - Hostname resolution used to vet submitted URLs
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Traits define contracts implemented by the infrastructure layer
//! - Business logic lives in services (see [`crate::application::services`])

pub mod entities;
pub mod host_resolver;
pub mod repositories;
