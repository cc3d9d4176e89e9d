use std::sync::Arc;

use chrono::{DateTime, Utc};
use readhub::application::routes::app_router;
use readhub::application::server::seed_stores;
use readhub::application::state::{AppState, AppStateConfig};
use readhub::domain::articles::{Article, NewArticle};
use readhub::domain::repositories::{ArticleRepository, MagazineRepository};
use readhub::infrastructure::news_api::NEWS_API_URL;
use tokio::net::TcpListener;
use tokio::task::AbortHandle;

pub struct TestApp {
    pub address: String,
    pub article_repo: Arc<dyn ArticleRepository>,
    #[allow(dead_code)]
    pub magazine_repo: Arc<dyn MagazineRepository>,
    pub mock_server: Option<wiremock::MockServer>,
    server_handle: AbortHandle,
}

impl TestApp {
    pub fn page_url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    #[allow(dead_code)]
    pub fn api_url(&self, path: &str) -> String {
        format!("{}/api/v1{}", self.address, path)
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        self.server_handle.abort();
    }
}

/// App with no API key and the demo seed loaded: every operation serves
/// local data and must make no outbound calls.
pub async fn spawn_app() -> TestApp {
    spawn_app_inner(
        AppStateConfig {
            news_api_url: NEWS_API_URL.to_string(),
            news_api_key: String::new(),
        },
        None,
        true,
    )
    .await
}

/// App with empty stores, for tests that control their data exactly.
#[allow(dead_code)]
pub async fn spawn_app_empty() -> TestApp {
    spawn_app_inner(
        AppStateConfig {
            news_api_url: NEWS_API_URL.to_string(),
            news_api_key: String::new(),
        },
        None,
        false,
    )
    .await
}

/// Seeded app with a configured key, pointed at a wiremock server standing
/// in for the news provider.
#[allow(dead_code)]
pub async fn spawn_app_with_news_mock() -> TestApp {
    let mock_server = wiremock::MockServer::start().await;
    spawn_app_inner(
        AppStateConfig {
            news_api_url: mock_server.uri(),
            news_api_key: "test-api-key".to_string(),
        },
        Some(mock_server),
        true,
    )
    .await
}

/// Seeded app with a configured key but an unreachable provider endpoint,
/// to exercise the network-failure fallback path.
#[allow(dead_code)]
pub async fn spawn_app_with_unreachable_news_api() -> TestApp {
    spawn_app_inner(
        AppStateConfig {
            // Nothing listens here; requests fail with a connection error.
            news_api_url: "http://127.0.0.1:1".to_string(),
            news_api_key: "test-api-key".to_string(),
        },
        None,
        true,
    )
    .await
}

/// Seeded app where the provider endpoint is a wiremock server but the key
/// is unset: the client must never be called.
#[allow(dead_code)]
pub async fn spawn_app_with_unused_news_mock() -> TestApp {
    let mock_server = wiremock::MockServer::start().await;
    spawn_app_inner(
        AppStateConfig {
            news_api_url: mock_server.uri(),
            news_api_key: String::new(),
        },
        Some(mock_server),
        true,
    )
    .await
}

async fn spawn_app_inner(
    config: AppStateConfig,
    mock_server: Option<wiremock::MockServer>,
    seed: bool,
) -> TestApp {
    let state = AppState::new(config);

    if seed {
        seed_stores(&state).await.expect("failed to seed stores");
    }

    let article_repo = state.article_repo.clone();
    let magazine_repo = state.magazine_repo.clone();

    let app = app_router(state);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");

    let local_addr = listener.local_addr().expect("Failed to get local address");
    let address = format!("http://{}", local_addr);

    let server_handle = tokio::spawn(async move {
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
        )
        .await
        .expect("Server failed to start");
    })
    .abort_handle();

    TestApp {
        address,
        article_repo,
        magazine_repo,
        mock_server,
        server_handle,
    }
}

/// Insert an article directly into the store, bypassing the HTTP surface.
#[allow(dead_code)]
pub async fn insert_article(app: &TestApp, title: &str, published_at: DateTime<Utc>) -> Article {
    app.article_repo
        .insert(NewArticle {
            title: title.to_string(),
            content: format!("Content of {title}"),
            author: "Test Author".to_string(),
            description: format!("Description of {title}"),
            source: "Test Source".to_string(),
            url: "https://example.com/article".to_string(),
            image_url: None,
            published_at,
            category: "Testing".to_string(),
            tags: vec!["test".to_string()],
        })
        .await
        .expect("failed to insert article")
}

/// A NewsAPI-shaped envelope body for wiremock responses.
#[allow(dead_code)]
pub fn news_envelope(articles: Vec<serde_json::Value>) -> serde_json::Value {
    serde_json::json!({
        "status": "ok",
        "totalResults": articles.len(),
        "articles": articles,
    })
}

#[allow(dead_code)]
pub fn remote_article(title: &str) -> serde_json::Value {
    serde_json::json!({
        "source": {"name": "Mock Wire"},
        "author": "Mock Reporter",
        "title": title,
        "description": format!("Description of {title}"),
        "url": "https://example.com/remote",
        "urlToImage": null,
        "publishedAt": "2024-05-01T10:00:00Z",
        "content": format!("Content of {title}"),
    })
}
