use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use serde::Serialize;

use crate::application::errors::map_app_error;
use crate::application::state::AppState;
use crate::domain::articles::Article;

pub(super) fn router() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/articles", get(list_articles))
        .route("/status", get(status))
}

#[tracing::instrument(skip(state))]
async fn list_articles(State(state): State<AppState>) -> Result<Json<Vec<Article>>, StatusCode> {
    let articles = state
        .article_service
        .list()
        .await
        .map_err(|e| map_app_error(e.into()))?;
    Ok(Json(articles))
}

#[derive(Debug, Serialize)]
struct StatusResponse {
    articles: usize,
    magazines: usize,
    api_key_configured: bool,
}

#[tracing::instrument(skip(state))]
async fn status(State(state): State<AppState>) -> Result<Json<StatusResponse>, StatusCode> {
    let articles = state
        .article_repo
        .count()
        .await
        .map_err(|e| map_app_error(e.into()))?;
    let magazines = state
        .magazine_repo
        .count()
        .await
        .map_err(|e| map_app_error(e.into()))?;

    Ok(Json(StatusResponse {
        articles,
        magazines,
        api_key_configured: state.article_service.api_key_configured(),
    }))
}
