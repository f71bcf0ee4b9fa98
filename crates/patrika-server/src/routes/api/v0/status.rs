use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Json, Router};
use http::StatusCode;
use patrika_db::sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use patrika_model::status::{ComponentState, Status};
use std::error::Error;
use tracing::instrument;

pub(crate) fn create_router<S>() -> Router<S> {
    Router::new().route("/", get(get_status)).with_state(())
}

#[instrument(skip_all)]
async fn ping_database(conn: &DatabaseConnection) -> ComponentState {
    let result = conn
        .execute(Statement::from_string(conn.get_database_backend(), "SELECT 1"))
        .await
        .inspect_err(|error| tracing::warn!(error = error as &dyn Error, "database ping failed"));
    ComponentState::from(&result)
}

#[utoipa::path(
    get,
    path = "/api/v0/status",
    responses(
        (status = OK, description = "Server is ok", body = Status),
    ),
    tag = "util"
)]
#[instrument(skip_all)]
pub(crate) async fn get_status(Extension(conn): Extension<DatabaseConnection>) -> Response {
    let database = ping_database(&conn).await;
    let status_code = match database {
        ComponentState::Ok => StatusCode::OK,
        ComponentState::Error => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status_code, Json(Status { database })).into_response()
}
