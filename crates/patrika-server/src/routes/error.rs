use std::borrow::Cow;

use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use patrika_db::sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct ErrorBody {
    pub(crate) error: Cow<'static, str>,
}

/// Shared error for the plain CRUD route areas. Journal and admin carry
/// their own richer error types.
#[derive(Error, Debug)]
pub(crate) enum ApiError {
    #[error("Database error.")]
    Db(#[from] DbErr),

    #[error("{0}")]
    Validation(Cow<'static, str>),

    #[error("{0}")]
    Conflict(Cow<'static, str>),

    #[error("Record could not be found")]
    NotFound,
}

impl ApiError {
    pub(crate) fn validation(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn conflict(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Conflict(message.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound | Self::Db(DbErr::RecordNotFound(_)) => StatusCode::NOT_FOUND.into_response(),
            Self::Validation(error) => (StatusCode::BAD_REQUEST, Json(ErrorBody { error })).into_response(),
            Self::Conflict(error) => (StatusCode::CONFLICT, Json(ErrorBody { error })).into_response(),
            Self::Db(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    }
}
