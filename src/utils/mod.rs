//! Utility functions shared across layers.
//!
//! - [`url_validator`] - Syntactic validation of submitted URLs

pub mod url_validator;
