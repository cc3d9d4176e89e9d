use std::sync::Arc;

use crate::domain::errors::RepositoryError;
use crate::domain::ids::MagazineId;
use crate::domain::magazines::Magazine;
use crate::domain::repositories::MagazineRepository;

#[derive(Clone)]
pub struct MagazineService {
    repo: Arc<dyn MagazineRepository>,
}

impl MagazineService {
    pub fn new(repo: Arc<dyn MagazineRepository>) -> Self {
        Self { repo }
    }

    /// All stored magazines, newest first, insertion order on ties.
    pub async fn list(&self) -> Result<Vec<Magazine>, RepositoryError> {
        let mut magazines = self.repo.list().await?;
        magazines.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        Ok(magazines)
    }

    pub async fn favorites(&self) -> Result<Vec<Magazine>, RepositoryError> {
        self.repo.list_favorites().await
    }

    pub async fn toggle_favorite(&self, id: &MagazineId) -> Result<Magazine, RepositoryError> {
        let magazine = self.repo.toggle_favorite(id).await?;
        tracing::info!(id = %magazine.id, favorite = magazine.favorite, "toggled magazine favorite");
        Ok(magazine)
    }

    pub async fn search(&self, query: &str) -> Result<Vec<Magazine>, RepositoryError> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }
        self.repo.search(query).await
    }
}
