use askama::Template;

use super::views::{ArticleView, MagazineView};

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub nav_active: &'static str,
    pub articles: Vec<ArticleView>,
    pub magazines: Vec<MagazineView>,
}

#[derive(Template)]
#[template(path = "pages/articles.html")]
pub struct ArticlesTemplate {
    pub nav_active: &'static str,
    pub articles: Vec<ArticleView>,
}

#[derive(Template)]
#[template(path = "pages/magazines.html")]
pub struct MagazinesTemplate {
    pub nav_active: &'static str,
    pub magazines: Vec<MagazineView>,
}

#[derive(Template)]
#[template(path = "pages/search.html")]
pub struct SearchTemplate {
    pub nav_active: &'static str,
    pub query: String,
    pub articles: Vec<ArticleView>,
    pub magazines: Vec<MagazineView>,
    pub no_results: bool,
}

#[derive(Template)]
#[template(path = "pages/favorites.html")]
pub struct FavoritesTemplate {
    pub nav_active: &'static str,
    pub articles: Vec<ArticleView>,
    pub magazines: Vec<MagazineView>,
}

pub fn render_template<T: Template>(template: T) -> Result<String, askama::Error> {
    template.render()
}
