use std::sync::Arc;

use crate::application::services::{ArticleService, MagazineService};
use crate::domain::repositories::{ArticleRepository, MagazineRepository};
use crate::infrastructure::news_api::NewsApiClient;
use crate::infrastructure::repositories::{InMemoryArticleRepository, InMemoryMagazineRepository};

/// Everything that varies between production and test environments. Repos and
/// services are created automatically.
pub struct AppStateConfig {
    pub news_api_url: String,
    pub news_api_key: String,
}

#[derive(Clone)]
pub struct AppState {
    pub article_repo: Arc<dyn ArticleRepository>,
    pub magazine_repo: Arc<dyn MagazineRepository>,
    pub article_service: ArticleService,
    pub magazine_service: MagazineService,
}

impl AppState {
    /// Build the full application state from config. Creates the in-memory
    /// repositories, the outbound HTTP client and the services.
    pub fn new(config: AppStateConfig) -> Self {
        let article_repo: Arc<dyn ArticleRepository> = Arc::new(InMemoryArticleRepository::new());
        let magazine_repo: Arc<dyn MagazineRepository> =
            Arc::new(InMemoryMagazineRepository::new());

        #[allow(clippy::expect_used)]
        let http_client = reqwest::ClientBuilder::new()
            .connect_timeout(std::time::Duration::from_secs(10))
            .build()
            .expect("failed to build HTTP client");

        let news_client = NewsApiClient::new(http_client, config.news_api_url, config.news_api_key);

        let article_service = ArticleService::new(Arc::clone(&article_repo), news_client);
        let magazine_service = MagazineService::new(Arc::clone(&magazine_repo));

        Self {
            article_repo,
            magazine_repo,
            article_service,
            magazine_service,
        }
    }
}
