mod articles;
mod favorites;
mod home;
mod magazines;
mod search;

use axum::routing::{get, post};

use crate::application::state::AppState;

pub(super) fn router() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/", get(home::home_page))
        .route("/articles", get(articles::articles_page))
        .route("/articles/{id}/favorite", post(articles::toggle_favorite))
        .route("/fetch-articles", post(articles::fetch_articles))
        .route("/magazines", get(magazines::magazines_page))
        .route("/magazines/{id}/favorite", post(magazines::toggle_favorite))
        .route("/search", get(search::search_page))
        .route("/favorites", get(favorites::favorites_page))
}
