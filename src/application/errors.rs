use axum::http::StatusCode;
use thiserror::Error;
use tracing::error;

use crate::domain::errors::RepositoryError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Unexpected(String),
}

impl AppError {
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected(message.into())
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { .. } => Self::NotFound(err.to_string()),
        }
    }
}

/// Map an application error to the status code returned by page and API
/// handlers. Server-side errors are logged here so handlers do not have to.
pub fn map_app_error(err: AppError) -> StatusCode {
    match err {
        AppError::NotFound(_) => StatusCode::NOT_FOUND,
        AppError::Unexpected(message) => {
            error!(error = %message, "unexpected application error");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
