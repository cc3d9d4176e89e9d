use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::application::errors::map_app_error;
use crate::application::routes::render_html;
use crate::application::state::AppState;
use crate::presentation::web::templates::SearchTemplate;
use crate::presentation::web::views::{ArticleView, MagazineView};

#[derive(Debug, Deserialize)]
pub(crate) struct SearchParams {
    #[serde(default)]
    query: String,
}

#[tracing::instrument(skip(state))]
pub(crate) async fn search_page(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Response, StatusCode> {
    let (articles, magazines) = tokio::try_join!(
        state.article_service.search(&params.query),
        state.magazine_service.search(&params.query),
    )
    .map_err(|e| map_app_error(e.into()))?;

    let no_results = articles.is_empty() && magazines.is_empty();

    let template = SearchTemplate {
        nav_active: "search",
        query: params.query,
        articles: articles.into_iter().map(ArticleView::from_domain).collect(),
        magazines: magazines
            .into_iter()
            .map(MagazineView::from_domain)
            .collect(),
        no_results,
    };

    render_html(template).map(IntoResponse::into_response)
}
