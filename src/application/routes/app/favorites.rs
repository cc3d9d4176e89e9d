use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::errors::map_app_error;
use crate::application::routes::render_html;
use crate::application::state::AppState;
use crate::presentation::web::templates::FavoritesTemplate;
use crate::presentation::web::views::{ArticleView, MagazineView};

#[tracing::instrument(skip(state))]
pub(crate) async fn favorites_page(State(state): State<AppState>) -> Result<Response, StatusCode> {
    let (articles, magazines) = tokio::try_join!(
        state.article_service.favorites(),
        state.magazine_service.favorites(),
    )
    .map_err(|e| map_app_error(e.into()))?;

    let template = FavoritesTemplate {
        nav_active: "favorites",
        articles: articles.into_iter().map(ArticleView::from_domain).collect(),
        magazines: magazines
            .into_iter()
            .map(MagazineView::from_domain)
            .collect(),
    };

    render_html(template).map(IntoResponse::into_response)
}
