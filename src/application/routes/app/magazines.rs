use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};

use crate::application::errors::map_app_error;
use crate::application::routes::render_html;
use crate::application::state::AppState;
use crate::domain::ids::MagazineId;
use crate::presentation::web::templates::MagazinesTemplate;
use crate::presentation::web::views::MagazineView;

#[tracing::instrument(skip(state))]
pub(crate) async fn magazines_page(State(state): State<AppState>) -> Result<Response, StatusCode> {
    let magazines = state
        .magazine_service
        .list()
        .await
        .map_err(|e| map_app_error(e.into()))?;

    let template = MagazinesTemplate {
        nav_active: "magazines",
        magazines: magazines
            .into_iter()
            .map(MagazineView::from_domain)
            .collect(),
    };

    render_html(template).map(IntoResponse::into_response)
}

#[tracing::instrument(skip(state))]
pub(crate) async fn toggle_favorite(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, StatusCode> {
    state
        .magazine_service
        .toggle_favorite(&MagazineId::from(id))
        .await
        .map_err(|e| map_app_error(e.into()))?;

    Ok(Redirect::to("/magazines").into_response())
}
