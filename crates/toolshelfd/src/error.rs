//! HTTP error responses.
//!
//! Every failure leaves the server as a status code plus a
//! `{"message": ...}` body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use toolshelf_shared::api::{messages, MessageResponse};
use tracing::error;

use crate::favorites::FavoriteError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<FavoriteError> for ApiError {
    fn from(err: FavoriteError) -> Self {
        match err {
            FavoriteError::UnknownTool(_) => ApiError::NotFound(messages::TOOL_NOT_FOUND.into()),
            FavoriteError::AlreadyFavorite(_) => {
                ApiError::Conflict(messages::ALREADY_FAVORITE.into())
            }
            FavoriteError::NotFavorite(_) => {
                ApiError::NotFound(messages::FAVORITE_NOT_FOUND.into())
            }
            FavoriteError::Storage(e) => {
                error!("Favorites storage failure: {}", e);
                ApiError::Internal("Favorites storage unavailable".into())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(MessageResponse::new(self.to_string()))).into_response()
    }
}
