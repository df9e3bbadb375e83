//! Business logic services for the application layer.

pub mod allocator;
pub mod url_service;
pub mod validation_service;

pub use allocator::IdentifierAllocator;
pub use url_service::{ResetSummary, UrlService};
pub use validation_service::ValidationService;
