use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::errors::RepositoryError;
use crate::domain::ids::MagazineId;
use crate::domain::magazines::{Magazine, NewMagazine};
use crate::domain::repositories::MagazineRepository;

#[derive(Default)]
pub struct InMemoryMagazineRepository {
    magazines: RwLock<Vec<Magazine>>,
}

impl InMemoryMagazineRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MagazineRepository for InMemoryMagazineRepository {
    async fn insert(&self, magazine: NewMagazine) -> Result<Magazine, RepositoryError> {
        let magazine = magazine.into_magazine();
        self.magazines.write().await.push(magazine.clone());
        Ok(magazine)
    }

    async fn get(&self, id: &MagazineId) -> Result<Magazine, RepositoryError> {
        self.magazines
            .read()
            .await
            .iter()
            .find(|m| &m.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found("magazine", id))
    }

    async fn list(&self) -> Result<Vec<Magazine>, RepositoryError> {
        Ok(self.magazines.read().await.clone())
    }

    async fn list_favorites(&self) -> Result<Vec<Magazine>, RepositoryError> {
        Ok(self
            .magazines
            .read()
            .await
            .iter()
            .filter(|m| m.favorite)
            .cloned()
            .collect())
    }

    async fn toggle_favorite(&self, id: &MagazineId) -> Result<Magazine, RepositoryError> {
        let mut magazines = self.magazines.write().await;
        let magazine = magazines
            .iter_mut()
            .find(|m| &m.id == id)
            .ok_or_else(|| RepositoryError::not_found("magazine", id))?;
        magazine.favorite = !magazine.favorite;
        Ok(magazine.clone())
    }

    async fn search(&self, query: &str) -> Result<Vec<Magazine>, RepositoryError> {
        Ok(self
            .magazines
            .read()
            .await
            .iter()
            .filter(|m| m.matches_query(query))
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.magazines.read().await.len())
    }
}
