use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::errors::map_app_error;
use crate::application::routes::render_html;
use crate::application::state::AppState;
use crate::presentation::web::templates::HomeTemplate;
use crate::presentation::web::views::{ArticleView, MagazineView};

const HOME_ARTICLE_COUNT: usize = 6;
const HOME_MAGAZINE_COUNT: usize = 3;

#[tracing::instrument(skip(state))]
pub(crate) async fn home_page(State(state): State<AppState>) -> Result<Response, StatusCode> {
    let (articles, magazines) = tokio::try_join!(
        state.article_service.list(),
        state.magazine_service.list(),
    )
    .map_err(|e| map_app_error(e.into()))?;

    let template = HomeTemplate {
        nav_active: "home",
        articles: articles
            .into_iter()
            .take(HOME_ARTICLE_COUNT)
            .map(ArticleView::from_domain)
            .collect(),
        magazines: magazines
            .into_iter()
            .take(HOME_MAGAZINE_COUNT)
            .map(MagazineView::from_domain)
            .collect(),
    };

    render_html(template).map(IntoResponse::into_response)
}
