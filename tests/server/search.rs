use std::sync::Arc;
use std::time::Duration;

use readhub::application::services::ArticleService;
use readhub::domain::repositories::ArticleRepository;
use readhub::infrastructure::news_api::NewsApiClient;
use readhub::infrastructure::repositories::InMemoryArticleRepository;
use readhub::infrastructure::seed::demo_articles;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::{
    news_envelope, remote_article, spawn_app, spawn_app_with_news_mock,
    spawn_app_with_unreachable_news_api, spawn_app_with_unused_news_mock,
};

#[tokio::test]
async fn empty_query_returns_no_results() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let body = client
        .get(app.page_url("/search?query="))
        .send()
        .await
        .expect("request failed")
        .text()
        .await
        .expect("failed to read body");

    assert!(body.contains("No results found."));
    // Seeded articles must not leak into an empty-query result
    assert!(!body.contains("Rust 1.80 Stabilizes LazyCell and LazyLock"));
}

#[tokio::test]
async fn empty_query_makes_no_remote_calls_even_when_configured() {
    let app = spawn_app_with_news_mock().await;
    let mock_server = app.mock_server.as_ref().unwrap();

    Mock::given(method("GET"))
        .and(path("/v2/everything"))
        .respond_with(ResponseTemplate::new(200).set_body_json(news_envelope(vec![])))
        .expect(0)
        .mount(mock_server)
        .await;

    let client = reqwest::Client::new();
    let body = client
        .get(app.page_url("/search?query="))
        .send()
        .await
        .expect("request failed")
        .text()
        .await
        .expect("failed to read body");

    assert!(body.contains("No results found."));
}

#[tokio::test]
async fn local_search_matches_substrings_case_insensitively() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let body = client
        .get(app.page_url("/search?query=KOTLIN"))
        .send()
        .await
        .expect("request failed")
        .text()
        .await
        .expect("failed to read body");

    assert!(body.contains("Kotlin 2.0 Compiler Reaches Stable"));
    assert!(!body.contains("Document Databases Rethink Query Performance"));
}

#[tokio::test]
async fn local_search_also_covers_magazines() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let body = client
        .get(app.page_url("/search?query=insights"))
        .send()
        .await
        .expect("request failed")
        .text()
        .await
        .expect("failed to read body");

    assert!(body.contains("Tech Insights"));
}

#[tokio::test]
async fn configured_client_delegates_search_to_the_remote_index() {
    let app = spawn_app_with_news_mock().await;
    let mock_server = app.mock_server.as_ref().unwrap();

    Mock::given(method("GET"))
        .and(path("/v2/everything"))
        .and(query_param("q", "climate"))
        .and(query_param("sortBy", "publishedAt"))
        .and(query_param("language", "en"))
        .and(query_param("apiKey", "test-api-key"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(news_envelope(vec![remote_article("Remote Climate Story")])),
        )
        .expect(1)
        .mount(mock_server)
        .await;

    let client = reqwest::Client::new();
    let body = client
        .get(app.page_url("/search?query=climate"))
        .send()
        .await
        .expect("request failed")
        .text()
        .await
        .expect("failed to read body");

    assert!(body.contains("Remote Climate Story"));
    // Remote results replace the local view; seeded items should not appear
    assert!(!body.contains("Kotlin 2.0 Compiler Reaches Stable"));
}

#[tokio::test]
async fn remote_server_error_falls_back_to_local_search() {
    let app = spawn_app_with_news_mock().await;
    let mock_server = app.mock_server.as_ref().unwrap();

    Mock::given(method("GET"))
        .and(path("/v2/everything"))
        .respond_with(ResponseTemplate::new(500))
        .mount(mock_server)
        .await;

    let client = reqwest::Client::new();
    let body = client
        .get(app.page_url("/search?query=kotlin"))
        .send()
        .await
        .expect("request failed")
        .text()
        .await
        .expect("failed to read body");

    assert!(body.contains("Kotlin 2.0 Compiler Reaches Stable"));
}

#[tokio::test]
async fn remote_error_status_field_falls_back_to_local_search() {
    let app = spawn_app_with_news_mock().await;
    let mock_server = app.mock_server.as_ref().unwrap();

    Mock::given(method("GET"))
        .and(path("/v2/everything"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "error",
            "code": "apiKeyInvalid",
            "message": "Your API key is invalid."
        })))
        .mount(mock_server)
        .await;

    let client = reqwest::Client::new();
    let body = client
        .get(app.page_url("/search?query=kotlin"))
        .send()
        .await
        .expect("request failed")
        .text()
        .await
        .expect("failed to read body");

    assert!(body.contains("Kotlin 2.0 Compiler Reaches Stable"));
}

#[tokio::test]
async fn remote_timeout_falls_back_to_local_search() {
    let mock_server = wiremock::MockServer::start().await;

    // The provider responds, but only after the client has given up
    Mock::given(method("GET"))
        .and(path("/v2/everything"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(news_envelope(vec![remote_article("Too Slow To Arrive")]))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&mock_server)
        .await;

    let repo: Arc<dyn ArticleRepository> = Arc::new(InMemoryArticleRepository::new());
    repo.insert_many(demo_articles())
        .await
        .expect("failed to seed articles");

    let news = NewsApiClient::new(
        reqwest::Client::new(),
        mock_server.uri(),
        "test-api-key".to_string(),
    )
    .with_request_timeout(Duration::from_millis(50));
    let service = ArticleService::new(Arc::clone(&repo), news);

    let results = service.search("kotlin").await.expect("search failed");

    // Identical to the local substring fallback over the stored set
    let local: Vec<_> = repo
        .list()
        .await
        .unwrap()
        .into_iter()
        .filter(|a| a.matches_query("kotlin"))
        .collect();
    assert_eq!(results.len(), local.len());
    assert!(
        results
            .iter()
            .any(|a| a.title == "Kotlin 2.0 Compiler Reaches Stable")
    );
    assert!(!results.iter().any(|a| a.title == "Too Slow To Arrive"));
}

#[tokio::test]
async fn unreachable_remote_falls_back_to_local_search() {
    let app = spawn_app_with_unreachable_news_api().await;
    let client = reqwest::Client::new();

    let body = client
        .get(app.page_url("/search?query=kotlin"))
        .send()
        .await
        .expect("request failed")
        .text()
        .await
        .expect("failed to read body");

    assert!(body.contains("Kotlin 2.0 Compiler Reaches Stable"));
}

#[tokio::test]
async fn unconfigured_client_never_calls_out_for_search() {
    let app = spawn_app_with_unused_news_mock().await;
    let mock_server = app.mock_server.as_ref().unwrap();

    Mock::given(method("GET"))
        .and(path("/v2/everything"))
        .respond_with(ResponseTemplate::new(200).set_body_json(news_envelope(vec![])))
        .expect(0)
        .mount(mock_server)
        .await;

    let client = reqwest::Client::new();
    let body = client
        .get(app.page_url("/search?query=kotlin"))
        .send()
        .await
        .expect("request failed")
        .text()
        .await
        .expect("failed to read body");

    assert!(body.contains("Kotlin 2.0 Compiler Reaches Stable"));
}
