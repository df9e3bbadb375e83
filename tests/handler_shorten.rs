mod common;

use axum_test::TestServer;
use serde_json::{Value, json};
use shorturl::domain::entities::IdScheme;

async fn shorten(server: &TestServer, url: &str) -> Value {
    let response = server.post("/api/shorturl").form(&[("url", url)]).await;
    response.assert_status_ok();
    response.json::<Value>()
}

#[tokio::test]
async fn test_shorten_returns_first_identifier() {
    let server = common::create_test_server(IdScheme::Counter).await;

    let json = shorten(&server, "https://www.example.com").await;

    assert_eq!(json["original_url"], "https://www.example.com");
    assert_eq!(json["short_url"], 1);
}

#[tokio::test]
async fn test_shorten_assigns_sequential_identifiers() {
    let server = common::create_test_server(IdScheme::Counter).await;

    for (i, url) in ["https://a.com", "https://b.com", "https://c.com"]
        .iter()
        .enumerate()
    {
        let json = shorten(&server, url).await;
        assert_eq!(json["short_url"], i as i64 + 1);
    }
}

#[tokio::test]
async fn test_shorten_same_url_is_idempotent() {
    let server = common::create_test_server(IdScheme::Counter).await;

    let first = shorten(&server, "https://www.example.com/path?q=1").await;
    let second = shorten(&server, "https://www.example.com/path?q=1").await;
    let other = shorten(&server, "https://other.example.com").await;

    assert_eq!(first["short_url"], 1);
    assert_eq!(second["short_url"], 1);
    assert_eq!(other["short_url"], 2);
}

#[tokio::test]
async fn test_shorten_accepts_json_body() {
    let server = common::create_test_server(IdScheme::Counter).await;

    let response = server
        .post("/api/shorturl")
        .json(&json!({ "url": "https://json.example.com" }))
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["original_url"], "https://json.example.com");
    assert_eq!(json["short_url"], 1);
}

#[tokio::test]
async fn test_shorten_invalid_url() {
    let server = common::create_test_server(IdScheme::Counter).await;

    for url in ["not a url", "ftp://example.com/file", "example.com"] {
        let response = server.post("/api/shorturl").form(&[("url", url)]).await;

        response.assert_status_bad_request();
        let json = response.json::<Value>();
        assert_eq!(json["error"], "invalid url");
        assert_eq!(json["code"], "invalid_url");
    }
}

#[tokio::test]
async fn test_shorten_missing_url_field() {
    let server = common::create_test_server(IdScheme::Counter).await;

    let response = server
        .post("/api/shorturl")
        .form(&[("link", "https://example.com")])
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["code"], "invalid_url");
}

#[tokio::test]
async fn test_shorten_unresolvable_hostname() {
    let server = common::create_test_server(IdScheme::Counter).await;

    let response = server
        .post("/api/shorturl")
        .form(&[("url", "https://nowhere.invalid")])
        .await;

    response.assert_status_bad_request();
    let json = response.json::<Value>();
    assert_eq!(json["error"], "invalid url");
    assert_eq!(json["code"], "invalid_hostname");
}

#[tokio::test]
async fn test_rejected_url_does_not_consume_identifier() {
    let server = common::create_test_server(IdScheme::Counter).await;

    server
        .post("/api/shorturl")
        .form(&[("url", "https://nowhere.invalid")])
        .await
        .assert_status_bad_request();

    let json = shorten(&server, "https://www.example.com").await;
    assert_eq!(json["short_url"], 1);
}

#[tokio::test]
async fn test_shorten_native_scheme_returns_uuid() {
    let server = common::create_test_server(IdScheme::Native).await;

    let first = shorten(&server, "https://www.example.com").await;
    let again = shorten(&server, "https://www.example.com").await;

    let id = first["short_url"].as_str().unwrap();
    assert!(uuid::Uuid::parse_str(id).is_ok());
    assert_eq!(again["short_url"], first["short_url"]);
}
