//! Application layer services implementing business logic.
//!
//! Services consume domain traits and provide a clean API for HTTP handlers
//! and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::url_service::UrlService`] - Find-or-create, lookup and reset
//! - [`services::allocator::IdentifierAllocator`] - Sequential identifiers
//! - [`services::validation_service::ValidationService`] - URL and hostname checks

pub mod services;
