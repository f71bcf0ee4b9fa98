use axum::Extension;
use axum::response::{IntoResponse, Json};
use axum::routing::{Router, get};
use http::StatusCode;
use patrika_db::sea_orm::DatabaseConnection;
use patrika_db::user;
use patrika_db::user::mutation::UserProfile as UserProfileRecord;
use patrika_entity::registration::VALID_CLASSES;
use patrika_model::convert::{FromDbModel, IntoDbModel};
use patrika_model::user::{UpsertProfile, UserProfile};

use crate::identity::ExtractIdentity;
use crate::routes::error::ApiError;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/me", get(get_profile).put(upsert_profile))
        .with_state(())
}

#[utoipa::path(
    get,
    path = "/api/v0/users/me",
    responses(
        (status = OK, description = "The requester's profile", body = UserProfile),
        (status = NOT_FOUND, description = "No profile saved yet"),
    ),
    tag = "v0/users",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn get_profile(
    ExtractIdentity(identity): ExtractIdentity,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<impl IntoResponse, ApiError> {
    let profile = user::Query::find_by_subject(&conn, &identity.subject)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(UserProfile::from_db_model(profile)))
}

#[utoipa::path(
    put,
    path = "/api/v0/users/me",
    request_body = UpsertProfile,
    responses(
        (status = OK, description = "Profile saved", body = UserProfile),
        (status = CONFLICT, description = "Email already belongs to another account"),
    ),
    tag = "v0/users",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn upsert_profile(
    ExtractIdentity(identity): ExtractIdentity,
    Extension(conn): Extension<DatabaseConnection>,
    Json(body): Json<UpsertProfile>,
) -> Result<impl IntoResponse, ApiError> {
    if body.name.trim().is_empty() {
        return Err(ApiError::validation("name is required"));
    }
    if !VALID_CLASSES.contains(&body.class) {
        return Err(ApiError::validation("class must be 9, 10, 11 or 12"));
    }
    if body.whatsapp.trim().is_empty() {
        return Err(ApiError::validation("whatsapp number is required"));
    }
    if body.section.trim().is_empty() {
        return Err(ApiError::validation("section is required"));
    }

    // The email is taken from the verified token, never from the body.
    if let Some(email) = &identity.email
        && let Some(other) = user::Query::find_by_email(&conn, email).await?
        && other.subject_id != identity.subject
    {
        return Err(ApiError::conflict("email already belongs to another account"));
    }

    let record = UserProfileRecord {
        email: identity.email.clone(),
        name: body.name,
        class: body.class,
        department: body.department.into_db_model(),
        version: body.version.into_db_model(),
        whatsapp: body.whatsapp,
        section: body.section,
    };

    let existing = user::Query::find_by_subject(&conn, &identity.subject).await?;
    let (status, profile) = match existing {
        Some(profile) => (StatusCode::OK, user::Mutation::update(&conn, profile, record).await?),
        None => (
            StatusCode::CREATED,
            user::Mutation::create(&conn, identity.subject, record).await?,
        ),
    };

    Ok((status, Json(UserProfile::from_db_model(profile))))
}
