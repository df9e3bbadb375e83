mod common;

use axum::http::{StatusCode, header};
use serde_json::Value;
use shorturl::domain::entities::IdScheme;

#[tokio::test]
async fn test_redirect_to_original_url() {
    let server = common::create_test_server(IdScheme::Counter).await;

    server
        .post("/api/shorturl")
        .form(&[("url", "https://www.example.com/docs")])
        .await
        .assert_status_ok();

    let response = server.get("/api/shorturl/1").await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(
        response.header(header::LOCATION),
        "https://www.example.com/docs"
    );
}

#[tokio::test]
async fn test_redirect_unknown_identifier() {
    let server = common::create_test_server(IdScheme::Counter).await;

    let response = server.get("/api/shorturl/42").await;

    response.assert_status_not_found();
    let json = response.json::<Value>();
    assert_eq!(json["error"], "invalid url");
    assert_eq!(json["code"], "not_found");
}

#[tokio::test]
async fn test_redirect_malformed_identifier() {
    let server = common::create_test_server(IdScheme::Counter).await;

    for id in ["abc", "-1", "1.5", "99999999999999999999999"] {
        let response = server.get(&format!("/api/shorturl/{id}")).await;

        response.assert_status_bad_request();
        let json = response.json::<Value>();
        assert_eq!(json["error"], "invalid url");
        assert_eq!(json["code"], "invalid_identifier");
    }
}

#[tokio::test]
async fn test_redirect_native_scheme() {
    let server = common::create_test_server(IdScheme::Native).await;

    let created = server
        .post("/api/shorturl")
        .form(&[("url", "https://www.example.com")])
        .await
        .json::<Value>();
    let id = created["short_url"].as_str().unwrap().to_string();

    let response = server.get(&format!("/api/shorturl/{id}")).await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header(header::LOCATION), "https://www.example.com/");
}

#[tokio::test]
async fn test_redirect_native_scheme_rejects_integer() {
    let server = common::create_test_server(IdScheme::Native).await;

    let response = server.get("/api/shorturl/1").await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["code"], "invalid_identifier");
}

#[tokio::test]
async fn test_redirect_native_scheme_unknown_uuid() {
    let server = common::create_test_server(IdScheme::Native).await;

    let response = server
        .get("/api/shorturl/4f1c2a9e-8d3b-4a57-9c61-0b2e7f5d3a18")
        .await;

    response.assert_status_not_found();
}
