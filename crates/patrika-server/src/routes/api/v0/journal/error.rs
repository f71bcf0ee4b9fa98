use std::borrow::Cow;

use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use patrika_db::sea_orm::DbErr;
use thiserror::Error;

use crate::routes::error::ErrorBody;

#[derive(Error, Debug)]
pub(crate) enum JournalError {
    #[error("Database error.")]
    Db(#[from] DbErr),

    #[error("Journal entry could not be found")]
    NotFound,

    #[error("Not the author of this entry")]
    Forbidden,

    #[error("Authentication required")]
    AuthRequired,

    #[error("{0}")]
    Validation(Cow<'static, str>),
}

impl JournalError {
    pub(crate) fn validation(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Validation(message.into())
    }
}

impl IntoResponse for JournalError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound | Self::Db(DbErr::RecordNotFound(_)) => StatusCode::NOT_FOUND.into_response(),
            Self::Forbidden => StatusCode::FORBIDDEN.into_response(),
            Self::AuthRequired => StatusCode::UNAUTHORIZED.into_response(),
            Self::Validation(error) => (StatusCode::BAD_REQUEST, Json(ErrorBody { error })).into_response(),
            Self::Db(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    }
}
