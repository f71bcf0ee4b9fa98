use std::borrow::Cow;

use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use patrika_db::sea_orm::DbErr;
use thiserror::Error;

use crate::auth::AuthError;
use crate::routes::error::ErrorBody;

#[derive(Error, Debug)]
pub(crate) enum AdminError {
    #[error("Database error.")]
    Db(#[from] DbErr),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Not allowed for this building")]
    Forbidden,

    #[error("Record could not be found")]
    NotFound,

    #[error("{0}")]
    Conflict(Cow<'static, str>),

    #[error("{0}")]
    Validation(Cow<'static, str>),
}

impl AdminError {
    pub(crate) fn validation(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn conflict(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Conflict(message.into())
    }
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound | Self::Db(DbErr::RecordNotFound(_)) => StatusCode::NOT_FOUND.into_response(),
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED.into_response(),
            Self::Forbidden => StatusCode::FORBIDDEN.into_response(),
            Self::Conflict(error) => (StatusCode::CONFLICT, Json(ErrorBody { error })).into_response(),
            Self::Validation(error) => (StatusCode::BAD_REQUEST, Json(ErrorBody { error })).into_response(),
            Self::Db(_) | Self::Auth(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    }
}
