//! Smart suggestion fetcher tests against a mock server.

use std::time::Duration;

use mockito::Matcher;
use serde_json::json;

use seojuice::{Config, Error, SmartClient};

fn client_for(server: &mockito::ServerGuard) -> SmartClient {
    let config = Config::new().with_smart_url(server.url());
    SmartClient::new(config)
}

#[tokio::test]
async fn fetches_and_parses_suggestions() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/suggestions")
        .match_query(Matcher::UrlEncoded(
            "url".into(),
            "https://example.com/about".into(),
        ))
        .match_header("accept", "application/json")
        .with_body(
            json!({
                "links": [{"page_from": "/about", "page_to": "/team"}],
                "images": [{"src": "/logo.png", "alt": "Logo"}],
                "meta_tags": {"title": "About us"},
                "structured_data": [{"@type": "Organization"}],
                "accessibility_fixes": [],
                "og_tags": {"title": "About us"},
            })
            .to_string(),
        )
        .create_async()
        .await;

    let suggestions = client_for(&server)
        .suggestions("https://example.com/about")
        .await
        .unwrap();

    assert!(!suggestions.is_empty());
    assert_eq!(suggestions.links.len(), 1);
    assert_eq!(suggestions.images[0]["alt"], json!("Logo"));
    assert_eq!(suggestions.meta_tags["title"], json!("About us"));
    assert_eq!(suggestions.og_tags["title"], json!("About us"));
    mock.assert_async().await;
}

#[tokio::test]
async fn missing_collections_default_to_empty() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/suggestions")
        .match_query(Matcher::Any)
        .with_body(r#"{"meta_tags":{"title":"T"}}"#)
        .create_async()
        .await;

    let suggestions = client_for(&server)
        .suggestions("https://example.com/")
        .await
        .unwrap();

    assert!(!suggestions.is_empty());
    assert!(suggestions.links.is_empty());
    assert!(suggestions.images.is_empty());
    assert!(suggestions.structured_data.is_empty());
    assert!(suggestions.accessibility_fixes.is_empty());
    assert!(suggestions.og_tags.is_empty());
}

#[tokio::test]
async fn empty_object_response_is_an_empty_bundle() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/suggestions")
        .match_query(Matcher::Any)
        .with_body("{}")
        .create_async()
        .await;

    let suggestions = client_for(&server)
        .suggestions("https://example.com/")
        .await
        .unwrap();
    assert!(suggestions.is_empty());
}

#[tokio::test]
async fn server_error_collapses_to_smart_client_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/suggestions")
        .with_status(500)
        .with_body("busy")
        .create_async()
        .await;

    let err = client_for(&server)
        .suggestions("https://example.com/")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Service { .. }));
    assert_eq!(err.error_code(), "smart_client_error");
    assert!(err.message().starts_with("Failed to fetch suggestions:"));
}

#[tokio::test]
async fn not_found_also_collapses_to_smart_client_error() {
    // The smart fetcher applies no status taxonomy; a 404 is wrapped the
    // same way as any other failure.
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/suggestions")
        .with_status(404)
        .create_async()
        .await;

    let err = client_for(&server)
        .suggestions("https://example.com/")
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "smart_client_error");
}

#[tokio::test]
async fn connection_failure_collapses_to_smart_client_error() {
    let config = Config::new()
        .with_smart_url("http://127.0.0.1:9")
        .with_timeout(Duration::from_millis(500));
    let client = SmartClient::new(config);

    let err = client.suggestions("https://example.com/").await.unwrap_err();
    assert_eq!(err.error_code(), "smart_client_error");
    assert!(err.message().starts_with("Failed to fetch suggestions:"));
}

#[tokio::test]
async fn invalid_json_collapses_to_smart_client_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/suggestions")
        .with_body("not json")
        .create_async()
        .await;

    let err = client_for(&server)
        .suggestions("https://example.com/")
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "smart_client_error");
}
