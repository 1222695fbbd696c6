//! Tests for catalog search

use super::*;
use crate::test_utils::test_helpers::{StubRuntime, image};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TIMEOUT: Duration = Duration::from_millis(500);

fn search(runtime: Arc<StubRuntime>, hub_url: &str) -> CatalogSearch {
    CatalogSearch::new(runtime, hub_url, TIMEOUT)
}

fn listing_body() -> serde_json::Value {
    json!({
        "count": 178,
        "next": "https://hub.example/v2/repositories/library?page=2&page_size=10",
        "previous": null,
        "results": [
            {"name": "alpine", "namespace": "library", "description": "A minimal Docker image"},
            {"name": "nginx", "namespace": "library", "description": null},
            {"name": "busybox", "namespace": "library", "description": "Busybox base image", "is_official": false}
        ]
    })
}

#[test]
fn test_image_suggestion_tags() {
    let official = image_suggestion(image("ubuntu", "Ubuntu base", true));
    assert_eq!(official.text, "ubuntu");
    assert_eq!(official.description, "(Official) Ubuntu base");

    let community = image_suggestion(image("me/ubuntu", "", false));
    assert_eq!(community.description, "(Not Official) ");
}

#[tokio::test]
async fn test_empty_term_fetches_first_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/repositories/library"))
        .and(query_param("page", "1"))
        .and(query_param("page_size", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing_body()))
        .expect(1)
        .mount(&server)
        .await;

    let runtime = Arc::new(StubRuntime::with_images());
    let suggestions = search(runtime.clone(), &server.uri())
        .search_catalog("", 10)
        .await;

    let texts: Vec<&str> = suggestions.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(texts, vec!["alpine", "nginx", "busybox"]);
    assert_eq!(suggestions[0].description, "(Official) A minimal Docker image");
    assert_eq!(suggestions[1].description, "(Official) ");
    assert_eq!(suggestions[2].description, "(Not Official) Busybox base image");

    // The runtime is not consulted without a term
    assert!(runtime.search_calls().is_empty());
}

#[tokio::test]
async fn test_listing_respects_limit() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/repositories/library"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing_body()))
        .mount(&server)
        .await;

    let suggestions = search(Arc::new(StubRuntime::new()), &server.uri())
        .search_catalog("", 2)
        .await;
    assert_eq!(suggestions.len(), 2);
}

#[tokio::test]
async fn test_trailing_slash_in_hub_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/repositories/library"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing_body()))
        .expect(1)
        .mount(&server)
        .await;

    let url = format!("{}/", server.uri());
    let suggestions = search(Arc::new(StubRuntime::new()), &url)
        .search_catalog("", 10)
        .await;
    assert_eq!(suggestions.len(), 3);
}

#[tokio::test]
async fn test_http_error_yields_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let suggestions = search(Arc::new(StubRuntime::new()), &server.uri())
        .search_catalog("", 10)
        .await;
    assert!(suggestions.is_empty());
}

#[tokio::test]
async fn test_malformed_body_yields_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let suggestions = search(Arc::new(StubRuntime::new()), &server.uri())
        .search_catalog("", 10)
        .await;
    assert!(suggestions.is_empty());
}

#[tokio::test]
async fn test_slow_listing_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(listing_body())
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let started = std::time::Instant::now();
    let suggestions = search(Arc::new(StubRuntime::new()), &server.uri())
        .search_catalog("", 10)
        .await;

    assert!(suggestions.is_empty());
    assert!(started.elapsed() < Duration::from_secs(3));
}

#[tokio::test]
async fn test_unreachable_hub_yields_empty() {
    // Port 9 (discard) on localhost is not expected to serve HTTP
    let suggestions = search(Arc::new(StubRuntime::new()), "http://127.0.0.1:9")
        .search_catalog("", 10)
        .await;
    assert!(suggestions.is_empty());
}

#[tokio::test]
async fn test_term_uses_runtime_search() {
    let runtime = Arc::new(StubRuntime::with_images());
    let suggestions = search(runtime.clone(), "http://127.0.0.1:9")
        .search_catalog("ubu", 10)
        .await;

    assert_eq!(runtime.search_calls(), vec![("ubu".to_string(), 10)]);
    assert_eq!(
        suggestions,
        vec![
            Suggestion::new("ubuntu", "(Official) Ubuntu is a Debian-based Linux"),
            Suggestion::new("someone/ubuntu-dev", "(Not Official) Ubuntu with build tools"),
        ]
    );
}

#[tokio::test]
async fn test_runtime_failure_yields_empty() {
    let runtime = Arc::new(StubRuntime::failing());
    let suggestions = search(runtime.clone(), "http://127.0.0.1:9")
        .search_catalog("ubu", 10)
        .await;

    assert!(suggestions.is_empty());
    assert_eq!(runtime.search_calls().len(), 1);
}

#[tokio::test]
async fn test_slow_runtime_search_times_out() {
    let runtime = Arc::new(StubRuntime::with_images().delayed(Duration::from_secs(5)));
    let suggestions = search(runtime, "http://127.0.0.1:9")
        .search_catalog("ubu", 10)
        .await;
    assert!(suggestions.is_empty());
}
