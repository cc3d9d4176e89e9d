use crate::domain::magazines::Magazine;

pub struct MagazineView {
    pub id: String,
    pub title: String,
    pub publisher: String,
    pub description: String,
    pub cover_image: Option<String>,
    pub issue_number: u32,
    pub published_date: String,
    pub article_count: usize,
    pub category: String,
    pub favorite: bool,
}

impl MagazineView {
    pub fn from_domain(magazine: Magazine) -> Self {
        Self {
            id: magazine.id.to_string(),
            title: magazine.title,
            publisher: magazine.publisher,
            description: magazine.description,
            cover_image: magazine.cover_image,
            issue_number: magazine.issue_number,
            published_date: magazine.published_at.format("%Y-%m-%d").to_string(),
            article_count: magazine.articles.len(),
            category: magazine.category,
            favorite: magazine.favorite,
        }
    }
}
