//! Hostname resolution contract used by the URL validation gate.

use async_trait::async_trait;
use std::net::IpAddr;

/// Errors returned by a [`HostResolver`].
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("lookup failed: {0}")]
    Lookup(String),

    #[error("no addresses found")]
    NoAddresses,

    #[error("lookup timed out after {0} ms")]
    Timeout(u64),
}

/// Resolves hostnames to network addresses.
///
/// # Implementations
///
/// - [`crate::infrastructure::dns::SystemResolver`] - OS resolver with a timeout
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Resolves `host`, returning at least one address on success.
    async fn resolve(&self, host: &str) -> Result<Vec<IpAddr>, ResolveError>;
}
