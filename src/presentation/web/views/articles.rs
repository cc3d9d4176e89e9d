use crate::domain::articles::Article;

pub struct ArticleView {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub description: String,
    pub source: String,
    pub url: String,
    pub image_url: Option<String>,
    pub published_date: String,
    pub published_time: String,
    pub category: String,
    pub tags: Vec<String>,
    pub favorite: bool,
}

impl ArticleView {
    pub fn from_domain(article: Article) -> Self {
        // Read-time backfill: blank content renders as the description
        let content = article.display_content().to_string();

        Self {
            id: article.id.to_string(),
            title: article.title,
            content,
            author: article.author,
            description: article.description,
            source: article.source,
            url: article.url,
            image_url: article.image_url,
            published_date: article.published_at.format("%Y-%m-%d").to_string(),
            published_time: article.published_at.format("%H:%M").to_string(),
            category: article.category,
            tags: article.tags,
            favorite: article.favorite,
        }
    }
}
