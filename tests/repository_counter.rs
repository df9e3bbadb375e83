use sqlx::PgPool;
use std::sync::Arc;
use shorturl::domain::repositories::CounterRepository;
use shorturl::infrastructure::persistence::PgCounterRepository;

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_initialize_starts_at_zero(pool: PgPool) {
    let repo = PgCounterRepository::new(Arc::new(pool));

    assert_eq!(repo.current().await.unwrap(), None);

    repo.initialize().await.unwrap();

    assert_eq!(repo.current().await.unwrap(), Some(0));
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_initialize_keeps_existing_value(pool: PgPool) {
    let repo = PgCounterRepository::new(Arc::new(pool));

    repo.initialize().await.unwrap();
    repo.increment().await.unwrap();
    repo.increment().await.unwrap();
    repo.initialize().await.unwrap();

    assert_eq!(repo.current().await.unwrap(), Some(2));
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_increment_is_sequential(pool: PgPool) {
    let repo = PgCounterRepository::new(Arc::new(pool));
    repo.initialize().await.unwrap();

    assert_eq!(repo.increment().await.unwrap(), 1);
    assert_eq!(repo.increment().await.unwrap(), 2);
    assert_eq!(repo.increment().await.unwrap(), 3);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_concurrent_increments_are_distinct(pool: PgPool) {
    let repo = Arc::new(PgCounterRepository::new(Arc::new(pool)));
    repo.initialize().await.unwrap();

    let handles: Vec<_> = (0..20)
        .map(|_| {
            let repo = repo.clone();
            tokio::spawn(async move { repo.increment().await.unwrap() })
        })
        .collect();

    let mut values = Vec::new();
    for handle in handles {
        values.push(handle.await.unwrap());
    }
    values.sort_unstable();

    assert_eq!(values, (1..=20).collect::<Vec<i64>>());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_reset_restarts_sequence(pool: PgPool) {
    let repo = PgCounterRepository::new(Arc::new(pool));
    repo.initialize().await.unwrap();
    repo.increment().await.unwrap();
    repo.increment().await.unwrap();

    repo.reset().await.unwrap();

    assert_eq!(repo.current().await.unwrap(), Some(0));
    assert_eq!(repo.increment().await.unwrap(), 1);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_single_counter_row(pool: PgPool) {
    let pool = Arc::new(pool);
    let repo = PgCounterRepository::new(pool.clone());

    repo.initialize().await.unwrap();
    repo.increment().await.unwrap();
    repo.reset().await.unwrap();
    repo.increment().await.unwrap();

    let rows: Vec<(String, i64)> = sqlx::query_as("SELECT name, value FROM counters")
        .fetch_all(pool.as_ref())
        .await
        .unwrap();

    assert_eq!(rows, vec![("short_url".to_string(), 1)]);
}
