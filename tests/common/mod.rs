#![allow(dead_code)]

use async_trait::async_trait;
use axum::extract::Request;
use axum::{Router, ServiceExt};
use axum_test::TestServer;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use std::time::Duration;
use shorturl::application::services::{IdentifierAllocator, UrlService, ValidationService};
use shorturl::domain::entities::IdScheme;
use shorturl::domain::host_resolver::{HostResolver, ResolveError};
use shorturl::infrastructure::persistence::MemoryStore;
use shorturl::routes::{app_router, router};
use shorturl::state::AppState;

/// Resolves every host to 127.0.0.1 except those under `.invalid`.
pub struct StubResolver;

#[async_trait]
impl HostResolver for StubResolver {
    async fn resolve(&self, host: &str) -> Result<Vec<IpAddr>, ResolveError> {
        if host.ends_with(".invalid") {
            Err(ResolveError::Lookup(format!("no such host: {host}")))
        } else {
            Ok(vec![IpAddr::V4(Ipv4Addr::LOCALHOST)])
        }
    }
}

pub async fn create_test_state(scheme: IdScheme) -> AppState {
    let store = Arc::new(MemoryStore::new());
    let validator = Arc::new(ValidationService::new(
        Arc::new(StubResolver),
        Duration::from_secs(1),
    ));
    let allocator = Arc::new(IdentifierAllocator::new(store.clone()));

    let url_service = Arc::new(UrlService::new(store, allocator, validator, scheme));
    url_service.initialize().await.unwrap();

    AppState::new(url_service)
}

pub fn create_test_app(state: AppState) -> Router {
    router(state, "public")
}

pub async fn create_test_server(scheme: IdScheme) -> TestServer {
    let state = create_test_state(scheme).await;
    TestServer::new(create_test_app(state)).unwrap()
}

/// Server over the production router, trailing-slash normalization included.
pub async fn create_app_server(scheme: IdScheme) -> TestServer {
    let state = create_test_state(scheme).await;
    let app = app_router(state, "public");
    TestServer::new(ServiceExt::<Request>::into_make_service(app)).unwrap()
}
