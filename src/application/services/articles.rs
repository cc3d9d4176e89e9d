use std::sync::Arc;

use tracing::warn;

use crate::domain::articles::Article;
use crate::domain::errors::RepositoryError;
use crate::domain::ids::ArticleId;
use crate::domain::repositories::ArticleRepository;
use crate::infrastructure::news_api::NewsApiClient;

/// Orchestrates "try remote, fall back to local" over the article store and
/// the news API client. Remote failures never surface to callers; the only
/// hard failure is toggling an unknown identifier.
#[derive(Clone)]
pub struct ArticleService {
    repo: Arc<dyn ArticleRepository>,
    news: NewsApiClient,
}

impl ArticleService {
    pub fn new(repo: Arc<dyn ArticleRepository>, news: NewsApiClient) -> Self {
        Self { repo, news }
    }

    /// All stored articles, newest first. The sort is stable, so articles
    /// sharing a timestamp keep their insertion order.
    pub async fn list(&self) -> Result<Vec<Article>, RepositoryError> {
        let mut articles = self.repo.list().await?;
        articles.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        Ok(articles)
    }

    pub async fn favorites(&self) -> Result<Vec<Article>, RepositoryError> {
        self.repo.list_favorites().await
    }

    pub async fn toggle_favorite(&self, id: &ArticleId) -> Result<Article, RepositoryError> {
        let article = self.repo.toggle_favorite(id).await?;
        tracing::info!(id = %article.id, favorite = article.favorite, "toggled article favorite");
        Ok(article)
    }

    /// Search articles. With a configured client the query goes to the remote
    /// index; otherwise (or when the remote call fails) it is a local
    /// substring filter over the stored set. An empty query is always empty.
    pub async fn search(&self, query: &str) -> Result<Vec<Article>, RepositoryError> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }

        if self.news.is_configured() {
            match self.news.search(query).await {
                Ok(results) => {
                    return Ok(results
                        .into_iter()
                        .map(|article| article.into_article())
                        .collect());
                }
                Err(err) => {
                    warn!(error = %err, query, "remote search failed, using local fallback");
                }
            }
        }

        let articles = self.repo.list().await?;
        Ok(articles
            .into_iter()
            .filter(|a| a.matches_query(query))
            .collect())
    }

    /// Fetch top headlines and append them to the store. With no configured
    /// key this makes zero outbound calls and returns the stored fallback
    /// set; on remote failure the store is left unchanged.
    pub async fn fetch_and_merge(&self) -> Result<Vec<Article>, RepositoryError> {
        if !self.news.is_configured() {
            warn!("news API key not set, serving stored articles");
            return self.repo.list().await;
        }

        match self.news.top_headlines().await {
            Ok(fetched) => self.repo.insert_many(fetched).await,
            Err(err) => {
                warn!(error = %err, "headline fetch failed, keeping stored articles");
                self.repo.list().await
            }
        }
    }

    pub fn api_key_configured(&self) -> bool {
        self.news.is_configured()
    }
}
