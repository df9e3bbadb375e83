//! [`HostResolver`] implementation using `tokio::net::lookup_host`.

use async_trait::async_trait;
use std::net::IpAddr;
use tracing::debug;

use crate::domain::host_resolver::{HostResolver, ResolveError};

/// Resolves hostnames through the platform resolver (`getaddrinfo`).
///
/// The lookup runs on Tokio's blocking pool, so a slow resolver does not stall
/// other requests. Callers bound the wait with their own timeout.
#[derive(Debug, Clone, Default)]
pub struct SystemResolver;

impl SystemResolver {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl HostResolver for SystemResolver {
    async fn resolve(&self, host: &str) -> Result<Vec<IpAddr>, ResolveError> {
        let addrs: Vec<IpAddr> = tokio::net::lookup_host((host, 0))
            .await
            .map_err(|e| ResolveError::Lookup(e.to_string()))?
            .map(|addr| addr.ip())
            .collect();

        debug!(host, count = addrs.len(), "resolved host");

        if addrs.is_empty() {
            return Err(ResolveError::NoAddresses);
        }

        Ok(addrs)
    }
}
