//! HTTP server initialization and runtime setup.
//!
//! Handles storage selection, migrations, service wiring and the Axum
//! server lifecycle.

use crate::application::services::{IdentifierAllocator, UrlService, ValidationService};
use crate::config::{Config, StorageBackend};
use crate::domain::entities::IdScheme;
use crate::domain::repositories::{CounterRepository, UrlRepository};
use crate::infrastructure::dns::SystemResolver;
use crate::infrastructure::persistence::{MemoryStore, PgCounterRepository, PgUrlRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;

/// Storage handles for the selected backend.
struct Storage {
    urls: Arc<dyn UrlRepository>,
    counter: Arc<dyn CounterRepository>,
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Storage backend (PostgreSQL pool with migrations, or in-memory)
/// - Identifier counter (counter scheme)
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Counter initialization or startup reset fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let storage = connect_storage(&config).await?;

    let url_service = Arc::new(build_url_service(
        storage.urls,
        storage.counter,
        config.dns_timeout(),
        config.id_scheme,
    ));

    url_service
        .initialize()
        .await
        .context("Failed to initialize identifier counter")?;

    if config.reset_on_startup {
        let summary = url_service
            .reset()
            .await
            .context("Failed to reset storage on startup")?;
        tracing::warn!(removed = summary.removed, "Storage reset on startup");
    }

    let state = AppState::new(url_service);

    let app = app_router(state, &config.static_dir);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Wires a [`UrlService`] over the given repositories with the system DNS
/// resolver.
///
/// Shared by the server and the admin CLI so both run the same reset and
/// lookup paths.
pub fn build_url_service(
    urls: Arc<dyn UrlRepository>,
    counter: Arc<dyn CounterRepository>,
    dns_timeout: Duration,
    scheme: IdScheme,
) -> UrlService {
    let resolver = Arc::new(SystemResolver::new());
    let validator = Arc::new(ValidationService::new(resolver, dns_timeout));
    let allocator = Arc::new(IdentifierAllocator::new(counter));

    UrlService::new(urls, allocator, validator, scheme)
}

async fn connect_storage(config: &Config) -> Result<Storage> {
    match config.storage_backend {
        StorageBackend::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL is required for the postgres backend")?;

            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
                .idle_timeout(Duration::from_secs(config.db_idle_timeout))
                .max_lifetime(Duration::from_secs(config.db_max_lifetime))
                .connect(database_url)
                .await
                .context("Failed to connect to database")?;
            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to migrate")?;

            let pool = Arc::new(pool);
            Ok(Storage {
                urls: Arc::new(PgUrlRepository::new(pool.clone())),
                counter: Arc::new(PgCounterRepository::new(pool)),
            })
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; data is lost on restart");
            let store = Arc::new(MemoryStore::new());
            Ok(Storage {
                urls: store.clone(),
                counter: store,
            })
        }
    }
}

/// Resolves on Ctrl+C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_build_url_service_reset_clears_both_stores() {
        let store = Arc::new(MemoryStore::new());
        let service = build_url_service(
            store.clone(),
            store.clone(),
            Duration::from_secs(1),
            IdScheme::Counter,
        );
        service.initialize().await.unwrap();

        service.find_or_create("https://a.example").await.unwrap();
        service.find_or_create("https://b.example").await.unwrap();
        assert_eq!(service.counter_value().await.unwrap(), Some(2));

        let summary = service.reset().await.unwrap();

        assert_eq!(summary.removed, 2);
        assert_eq!(service.count().await.unwrap(), 0);
        assert_eq!(service.counter_value().await.unwrap(), Some(0));
    }
}
