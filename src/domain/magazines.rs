use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::ids::{ArticleId, MagazineId};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Magazine {
    pub id: MagazineId,
    pub title: String,
    pub publisher: String,
    pub description: String,
    pub cover_image: Option<String>,
    pub issue_number: u32,
    pub published_at: DateTime<Utc>,
    pub articles: Vec<ArticleId>,
    pub category: String,
    pub favorite: bool,
}

impl Magazine {
    /// Case-insensitive substring match over the magazine's text fields.
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        let hit = |haystack: &str| haystack.to_lowercase().contains(&needle);
        hit(&self.title) || hit(&self.publisher) || hit(&self.description) || hit(&self.category)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMagazine {
    pub title: String,
    pub publisher: String,
    pub description: String,
    pub cover_image: Option<String>,
    pub issue_number: u32,
    pub published_at: DateTime<Utc>,
    #[serde(default)]
    pub articles: Vec<ArticleId>,
    pub category: String,
}

impl NewMagazine {
    pub fn into_magazine(self) -> Magazine {
        Magazine {
            id: MagazineId::generate(),
            title: self.title,
            publisher: self.publisher,
            description: self.description,
            cover_image: self.cover_image,
            issue_number: self.issue_number,
            published_at: self.published_at,
            articles: self.articles,
            category: self.category,
            favorite: false,
        }
    }
}
