use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use shorturl::domain::entities::{IdScheme, NewShortUrl};
use shorturl::domain::repositories::UrlRepository;
use shorturl::infrastructure::persistence::{PgCounterRepository, PgUrlRepository};
use shorturl::server::build_url_service;

fn new_url(url: &str, seq_id: Option<i64>) -> NewShortUrl {
    NewShortUrl {
        original_url: url.to_string(),
        seq_id,
    }
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_insert_and_find(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    let created = repo
        .insert_if_absent(new_url("https://example.com", Some(1)))
        .await
        .unwrap();

    assert_eq!(created.original_url, "https://example.com");
    assert_eq!(created.seq_id, Some(1));

    let by_id = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(by_id.id, created.id);

    let by_seq = repo.find_by_seq_id(1).await.unwrap().unwrap();
    assert_eq!(by_seq.id, created.id);

    let by_url = repo
        .find_by_original_url("https://example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_url.id, created.id);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_find_missing(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    assert!(repo.find_by_seq_id(99).await.unwrap().is_none());
    assert!(repo.find_by_id(uuid::Uuid::new_v4()).await.unwrap().is_none());
    assert!(
        repo.find_by_original_url("https://missing.com")
            .await
            .unwrap()
            .is_none()
    );
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_insert_if_absent_returns_existing(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    let first = repo
        .insert_if_absent(new_url("https://example.com", Some(1)))
        .await
        .unwrap();
    let second = repo
        .insert_if_absent(new_url("https://example.com", Some(2)))
        .await
        .unwrap();

    assert_eq!(second.id, first.id);
    assert_eq!(second.seq_id, Some(1));
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_insert_if_absent_backfills_seq_id(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    let native = repo
        .insert_if_absent(new_url("https://example.com", None))
        .await
        .unwrap();
    assert_eq!(native.seq_id, None);

    let counted = repo
        .insert_if_absent(new_url("https://example.com", Some(7)))
        .await
        .unwrap();

    assert_eq!(counted.id, native.id);
    assert_eq!(counted.seq_id, Some(7));
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_duplicate_seq_id_is_storage_error(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    repo.insert_if_absent(new_url("https://a.com", Some(1)))
        .await
        .unwrap();
    let result = repo
        .insert_if_absent(new_url("https://b.com", Some(1)))
        .await;

    assert!(matches!(result, Err(shorturl::AppError::Storage(_))));
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_delete_all(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    for (i, url) in ["https://a.com", "https://b.com", "https://c.com"]
        .iter()
        .enumerate()
    {
        repo.insert_if_absent(new_url(url, Some(i as i64 + 1)))
            .await
            .unwrap();
    }

    assert_eq!(repo.delete_all().await.unwrap(), 3);
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_concurrent_find_or_create_converges(pool: PgPool) {
    let pool = Arc::new(pool);
    let service = Arc::new(build_url_service(
        Arc::new(PgUrlRepository::new(pool.clone())),
        Arc::new(PgCounterRepository::new(pool)),
        Duration::from_secs(1),
        IdScheme::Counter,
    ));
    service.initialize().await.unwrap();

    let handles: Vec<_> = (0..20)
        .map(|_| {
            let service = service.clone();
            tokio::spawn(async move {
                service.find_or_create("https://example.com").await.unwrap()
            })
        })
        .collect();

    let mut records = Vec::new();
    for handle in handles {
        records.push(handle.await.unwrap());
    }

    let first = &records[0];
    assert!(first.seq_id.is_some());
    for record in &records {
        assert_eq!(record.id, first.id);
        assert_eq!(record.seq_id, first.seq_id);
    }
    assert_eq!(service.count().await.unwrap(), 1);
}
