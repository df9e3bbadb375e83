//! Core domain entities.
//!
//! - [`ShortUrl`] - A stored mapping from an original URL to its identifiers
//! - [`NewShortUrl`] - Input for inserting a record
//! - [`ShortId`] / [`IdScheme`] - Client-facing identifiers and how they are issued

pub mod short_id;
pub mod short_url;

pub use short_id::{IdScheme, ShortId};
pub use short_url::{NewShortUrl, ShortUrl};
