use async_trait::async_trait;

use crate::domain::articles::{Article, NewArticle};
use crate::domain::errors::RepositoryError;
use crate::domain::ids::{ArticleId, MagazineId};
use crate::domain::magazines::{Magazine, NewMagazine};

/// Store abstraction over article persistence. The in-memory implementation
/// preserves insertion order in `list`; callers that need publication-date
/// ordering sort at the service layer.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> Result<Article, RepositoryError>;
    async fn insert_many(&self, articles: Vec<NewArticle>) -> Result<Vec<Article>, RepositoryError>;
    async fn get(&self, id: &ArticleId) -> Result<Article, RepositoryError>;
    async fn list(&self) -> Result<Vec<Article>, RepositoryError>;
    async fn list_favorites(&self) -> Result<Vec<Article>, RepositoryError>;
    /// Flip the favorite flag and return the updated record. The read and the
    /// write happen in one critical section, so concurrent toggles serialize.
    async fn toggle_favorite(&self, id: &ArticleId) -> Result<Article, RepositoryError>;
    async fn count(&self) -> Result<usize, RepositoryError>;
}

#[async_trait]
pub trait MagazineRepository: Send + Sync {
    async fn insert(&self, magazine: NewMagazine) -> Result<Magazine, RepositoryError>;
    async fn get(&self, id: &MagazineId) -> Result<Magazine, RepositoryError>;
    async fn list(&self) -> Result<Vec<Magazine>, RepositoryError>;
    async fn list_favorites(&self) -> Result<Vec<Magazine>, RepositoryError>;
    async fn toggle_favorite(&self, id: &MagazineId) -> Result<Magazine, RepositoryError>;
    /// Case-insensitive substring search over title, publisher, description
    /// and category.
    async fn search(&self, query: &str) -> Result<Vec<Magazine>, RepositoryError>;
    async fn count(&self) -> Result<usize, RepositoryError>;
}
