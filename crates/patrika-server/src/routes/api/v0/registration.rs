use axum::Extension;
use axum::response::{IntoResponse, Json};
use axum::routing::{Router, get, post};
use http::StatusCode;
use patrika_db::registration;
use patrika_db::registration::mutation::NewRegistration as NewRegistrationRecord;
use patrika_db::sea_orm::DatabaseConnection;
use patrika_entity::registration::{Status, VALID_CLASSES};
use patrika_model::convert::{FromDbModel, IntoDbModel, IntoModel};
use patrika_model::registration::{NewRegistration, Registration, RegistrationStatus};

use crate::identity::ExtractIdentity;
use crate::routes::error::ApiError;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", post(apply))
        .route("/my", get(my_registrations))
        .route("/status", get(registration_status))
        .with_state(())
}

fn validate(body: &NewRegistration) -> Result<(), ApiError> {
    if body.name.trim().is_empty() {
        return Err(ApiError::validation("name is required"));
    }
    if body.code.trim().is_empty() {
        return Err(ApiError::validation("membership code is required"));
    }
    if !VALID_CLASSES.contains(&body.class) {
        return Err(ApiError::validation("class must be 9, 10, 11 or 12"));
    }
    if body.section.trim().is_empty() {
        return Err(ApiError::validation("section is required"));
    }
    if body.building.trim().is_empty() {
        return Err(ApiError::validation("building is required"));
    }
    if body.contact_number.trim().is_empty() {
        return Err(ApiError::validation("contact number is required"));
    }
    Ok(())
}

#[utoipa::path(
    post,
    path = "/api/v0/registrations",
    request_body = NewRegistration,
    responses(
        (status = CREATED, description = "Application submitted", body = Registration),
        (status = CONFLICT, description = "Already applied, or membership code taken"),
    ),
    tag = "v0/registrations",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn apply(
    ExtractIdentity(identity): ExtractIdentity,
    Extension(conn): Extension<DatabaseConnection>,
    Json(body): Json<NewRegistration>,
) -> Result<impl IntoResponse, ApiError> {
    validate(&body)?;

    // One live application per member; a declined one may be retried.
    let history = registration::Query::find_by_subject(&conn, &identity.subject).await?;
    if history.iter().any(|record| record.status == Status::Approved) {
        return Err(ApiError::conflict("already a member"));
    }
    if history.iter().any(|record| record.status == Status::Pending) {
        return Err(ApiError::conflict("an application is already pending"));
    }

    if !body.force {
        let same_code = registration::Query::find_active_by_code(&conn, &body.code).await?;
        if !same_code.is_empty() {
            return Err(ApiError::conflict("membership code already in use"));
        }
    }

    let record = registration::Mutation::create(
        &conn,
        NewRegistrationRecord {
            subject_id: identity.subject,
            name: body.name,
            code: body.code,
            class: body.class,
            section: body.section,
            campus: body.campus.into_db_model(),
            version: body.version.into_db_model(),
            department: body.department.into_db_model(),
            building: body.building,
            contact_number: body.contact_number,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(Registration::from_db_model(record))))
}

#[utoipa::path(
    get,
    path = "/api/v0/registrations/my",
    responses(
        (status = OK, description = "The requester's applications, newest first", body = [Registration]),
    ),
    tag = "v0/registrations",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn my_registrations(
    ExtractIdentity(identity): ExtractIdentity,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<impl IntoResponse, ApiError> {
    let history = registration::Query::find_by_subject(&conn, &identity.subject).await?;
    let history = history.into_iter().map(Registration::from_db_model).collect::<Vec<_>>();
    Ok(Json(history))
}

#[utoipa::path(
    get,
    path = "/api/v0/registrations/status",
    responses(
        (status = OK, description = "Membership state of the requester", body = RegistrationStatus),
    ),
    tag = "v0/registrations",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn registration_status(
    ExtractIdentity(identity): ExtractIdentity,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<impl IntoResponse, ApiError> {
    let latest = registration::Query::find_by_subject(&conn, &identity.subject)
        .await?
        .into_iter()
        .next();

    let status = match latest {
        Some(record) => RegistrationStatus {
            registered: record.status == Status::Approved,
            status: Some(record.status.into_model()),
            declined_reason: record.declined_reason,
        },
        None => RegistrationStatus {
            registered: false,
            status: None,
            declined_reason: None,
        },
    };

    Ok(Json(status))
}
