use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::articles::{Article, NewArticle};
use crate::domain::errors::RepositoryError;
use crate::domain::ids::ArticleId;
use crate::domain::repositories::ArticleRepository;

/// In-process article store. The backing vec preserves insertion order,
/// which is the tiebreak order for equal publication timestamps upstream.
#[derive(Default)]
pub struct InMemoryArticleRepository {
    articles: RwLock<Vec<Article>>,
}

impl InMemoryArticleRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepository {
    async fn insert(&self, article: NewArticle) -> Result<Article, RepositoryError> {
        let article = article.into_article();
        self.articles.write().await.push(article.clone());
        Ok(article)
    }

    async fn insert_many(
        &self,
        articles: Vec<NewArticle>,
    ) -> Result<Vec<Article>, RepositoryError> {
        let inserted: Vec<Article> = articles.into_iter().map(NewArticle::into_article).collect();
        self.articles.write().await.extend(inserted.iter().cloned());
        Ok(inserted)
    }

    async fn get(&self, id: &ArticleId) -> Result<Article, RepositoryError> {
        self.articles
            .read()
            .await
            .iter()
            .find(|a| &a.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found("article", id))
    }

    async fn list(&self) -> Result<Vec<Article>, RepositoryError> {
        Ok(self.articles.read().await.clone())
    }

    async fn list_favorites(&self) -> Result<Vec<Article>, RepositoryError> {
        Ok(self
            .articles
            .read()
            .await
            .iter()
            .filter(|a| a.favorite)
            .cloned()
            .collect())
    }

    async fn toggle_favorite(&self, id: &ArticleId) -> Result<Article, RepositoryError> {
        // Read and write under one guard so concurrent toggles serialize.
        let mut articles = self.articles.write().await;
        let article = articles
            .iter_mut()
            .find(|a| &a.id == id)
            .ok_or_else(|| RepositoryError::not_found("article", id))?;
        article.favorite = !article.favorite;
        Ok(article.clone())
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.articles.read().await.len())
    }
}
