mod common;

use serde_json::Value;
use shorturl::domain::entities::IdScheme;

#[tokio::test]
async fn test_health_endpoint_success() {
    let server = common::create_test_server(IdScheme::Counter).await;

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["id_scheme"], "counter");
    assert_eq!(json["checks"]["storage"]["status"], "ok");
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let server = common::create_test_server(IdScheme::Native).await;

    let response = server.get("/health").await;

    let json = response.json::<Value>();

    assert!(json.get("status").is_some());
    assert!(json.get("version").is_some());
    assert_eq!(json["id_scheme"], "native");
    assert!(json["checks"].get("storage").is_some());
}
