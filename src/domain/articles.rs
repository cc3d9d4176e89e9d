use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::ids::ArticleId;

/// Placeholder substituted by normalization when a remote record carries no
/// content. `display_content` treats it the same as an empty string.
pub const NO_CONTENT_PLACEHOLDER: &str = "No content available";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub content: String,
    pub author: String,
    pub description: String,
    pub source: String,
    pub url: String,
    pub image_url: Option<String>,
    pub published_at: DateTime<Utc>,
    pub category: String,
    pub tags: Vec<String>,
    pub favorite: bool,
}

impl Article {
    /// Content as shown to readers. Falls back to the description when the
    /// stored content is blank or the normalization placeholder.
    pub fn display_content(&self) -> &str {
        if self.content.trim().is_empty() || self.content == NO_CONTENT_PLACEHOLDER {
            &self.description
        } else {
            &self.content
        }
    }

    /// Case-insensitive substring match across all text fields, used by the
    /// local search fallback. Any field matching qualifies.
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        let hit = |haystack: &str| haystack.to_lowercase().contains(&needle);
        hit(&self.title)
            || hit(&self.content)
            || hit(&self.description)
            || hit(&self.author)
            || hit(&self.category)
            || self.tags.iter().any(|t| hit(t))
    }
}

/// An article as produced by seeding or remote normalization, before the
/// store assigns an identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewArticle {
    pub title: String,
    pub content: String,
    pub author: String,
    pub description: String,
    pub source: String,
    pub url: String,
    pub image_url: Option<String>,
    pub published_at: DateTime<Utc>,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl NewArticle {
    pub fn into_article(self) -> Article {
        Article {
            id: ArticleId::generate(),
            title: self.title,
            content: self.content,
            author: self.author,
            description: self.description,
            source: self.source,
            url: self.url,
            image_url: self.image_url,
            published_at: self.published_at,
            category: self.category,
            tags: self.tags,
            favorite: false,
        }
    }
}
