//! Pre-storage gate for submitted URLs.

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::domain::host_resolver::{HostResolver, ResolveError};
use crate::error::AppError;
use crate::utils::url_validator::{ValidatedUrl, validate_url};

/// Checks that a submitted URL is well formed and that its hostname resolves.
///
/// Resolution is bounded by `dns_timeout`; a lookup that does not finish in
/// time is treated like a failed one.
pub struct ValidationService {
    resolver: Arc<dyn HostResolver>,
    dns_timeout: Duration,
}

impl ValidationService {
    /// Creates a new validation service.
    pub fn new(resolver: Arc<dyn HostResolver>, dns_timeout: Duration) -> Self {
        Self {
            resolver,
            dns_timeout,
        }
    }

    /// Validates `input` and confirms its hostname resolves.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] if the URL is malformed.
    /// Returns [`AppError::InvalidHostname`] if resolution fails or times out.
    pub async fn validate(&self, input: &str) -> Result<ValidatedUrl, AppError> {
        let url = validate_url(input).map_err(|e| AppError::invalid_url(e.to_string()))?;

        self.check_host(&url.host).await?;

        Ok(url)
    }

    async fn check_host(&self, host: &str) -> Result<(), AppError> {
        let timeout_ms = self.dns_timeout.as_millis() as u64;

        let outcome = tokio::time::timeout(self.dns_timeout, self.resolver.resolve(host))
            .await
            .unwrap_or(Err(ResolveError::Timeout(timeout_ms)));

        match outcome {
            Ok(addrs) => {
                debug!(host, addresses = addrs.len(), "Hostname resolved");
                Ok(())
            }
            Err(e) => {
                warn!(host, error = %e, "Hostname did not resolve");
                Err(AppError::invalid_hostname(host, e.to_string()))
            }
        }
    }
}
