use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};

use crate::application::errors::map_app_error;
use crate::application::routes::render_html;
use crate::application::state::AppState;
use crate::domain::ids::ArticleId;
use crate::presentation::web::templates::ArticlesTemplate;
use crate::presentation::web::views::ArticleView;

#[tracing::instrument(skip(state))]
pub(crate) async fn articles_page(State(state): State<AppState>) -> Result<Response, StatusCode> {
    let articles = state
        .article_service
        .list()
        .await
        .map_err(|e| map_app_error(e.into()))?;

    let template = ArticlesTemplate {
        nav_active: "articles",
        articles: articles.into_iter().map(ArticleView::from_domain).collect(),
    };

    render_html(template).map(IntoResponse::into_response)
}

#[tracing::instrument(skip(state))]
pub(crate) async fn toggle_favorite(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, StatusCode> {
    state
        .article_service
        .toggle_favorite(&ArticleId::from(id))
        .await
        .map_err(|e| map_app_error(e.into()))?;

    Ok(Redirect::to("/articles").into_response())
}

#[tracing::instrument(skip(state))]
pub(crate) async fn fetch_articles(State(state): State<AppState>) -> Result<Response, StatusCode> {
    let articles = state
        .article_service
        .fetch_and_merge()
        .await
        .map_err(|e| map_app_error(e.into()))?;

    tracing::info!(count = articles.len(), "fetch-articles complete");

    Ok(Redirect::to("/articles").into_response())
}
