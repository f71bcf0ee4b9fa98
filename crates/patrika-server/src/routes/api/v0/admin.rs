pub(crate) mod error;

use axum::Extension;
use axum::extract::{Path, Query};
use axum::response::{IntoResponse, Json};
use axum::routing::{Router, get, post};
use http::StatusCode;
use patrika_db::sea_orm::DatabaseConnection;
use patrika_db::{admin, journal, order, registration, user};
use patrika_model::admin::{Admin, Login, MemberDetails, NewAdmin, Token, UserDetails};
use patrika_model::convert::{FromDbModel, IntoDbModel};
use patrika_model::journal::JournalEntry;
use patrika_model::order::Order;
use patrika_model::registration::{DeclineRegistration, Registration, Status};
use patrika_model::user::UserProfile;
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::auth::{self, AdminAuth, AdminClaims};
use crate::identity::ExtractAdmin;
use crate::routes::api::v0::admin::error::AdminError;

const MIN_PASSWORD_LEN: usize = 8;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/login", post(login))
        .route("/create", post(create_admin))
        .route("/registrations", get(list_registrations))
        .route("/registrations/{registration_id}/approve", post(approve_registration))
        .route("/registrations/{registration_id}/decline", post(decline_registration))
        .route("/members", get(list_members))
        .route("/members/{registration_id}", get(member_details))
        .route("/users", get(list_users))
        .route("/users/{subject_id}", get(user_details))
        .route("/journal/pending", get(pending_journal_entries))
        .route("/journal/{entry_id}", get(get_journal_entry).delete(delete_journal_entry))
        .route("/journal/{entry_id}/approve", post(approve_journal_entry))
        .with_state(())
}

/// Journal moderation is reserved for main building admins.
fn require_journal_moderator(claims: &AdminClaims) -> Result<(), AdminError> {
    if claims.moderates_journal() {
        Ok(())
    } else {
        Err(AdminError::Forbidden)
    }
}

#[utoipa::path(
    post,
    path = "/api/v0/admin/login",
    request_body = Login,
    responses(
        (status = OK, description = "Admin session token", body = Token),
        (status = UNAUTHORIZED, description = "Unknown username or wrong password"),
    ),
    tag = "v0/admin"
)]
pub(crate) async fn login(
    Extension(conn): Extension<DatabaseConnection>,
    Extension(admin_auth): Extension<AdminAuth>,
    Json(body): Json<Login>,
) -> Result<impl IntoResponse, AdminError> {
    let account = admin::Query::find_by_username(&conn, &body.username)
        .await?
        .ok_or(AdminError::InvalidCredentials)?;

    if !auth::verify_password(&body.password, &account.password_hash)? {
        return Err(AdminError::InvalidCredentials);
    }

    let access_token = admin_auth.sign_token(&account.username, &account.building)?;
    tracing::info!(username = %account.username, "admin logged in");

    Ok(Json(Token {
        access_token,
        username: account.username,
        building: account.building,
    }))
}

#[utoipa::path(
    post,
    path = "/api/v0/admin/create",
    request_body = NewAdmin,
    responses(
        (status = CREATED, description = "Admin account created", body = Admin),
        (status = FORBIDDEN, description = "Wrong setup key"),
        (status = CONFLICT, description = "Username already taken"),
    ),
    tag = "v0/admin"
)]
pub(crate) async fn create_admin(
    Extension(conn): Extension<DatabaseConnection>,
    Extension(admin_auth): Extension<AdminAuth>,
    Json(body): Json<NewAdmin>,
) -> Result<impl IntoResponse, AdminError> {
    if !admin_auth.setup_key_matches(&body.setup_key) {
        return Err(AdminError::Forbidden);
    }
    if body.username.trim().is_empty() || body.building.trim().is_empty() {
        return Err(AdminError::validation("username and building are required"));
    }
    if body.password.len() < MIN_PASSWORD_LEN {
        return Err(AdminError::validation("password must be at least 8 characters"));
    }
    if admin::Query::find_by_username(&conn, &body.username).await?.is_some() {
        return Err(AdminError::conflict("username already taken"));
    }

    let password_hash = auth::hash_password(&body.password)?;
    let account = admin::Mutation::create(&conn, body.username, password_hash, body.building).await?;

    Ok((StatusCode::CREATED, Json(Admin::from_db_model(account))))
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub(crate) struct RegistrationListQuery {
    pub status: Option<Status>,
}

#[utoipa::path(
    get,
    path = "/api/v0/admin/registrations",
    params(RegistrationListQuery),
    responses(
        (status = OK, description = "Registrations for the admin's building", body = [Registration]),
    ),
    tag = "v0/admin",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn list_registrations(
    ExtractAdmin(claims): ExtractAdmin,
    Query(params): Query<RegistrationListQuery>,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<impl IntoResponse, AdminError> {
    let registrations = registration::Query::list_for_building(
        &conn,
        &claims.building,
        params.status.map(IntoDbModel::into_db_model),
    )
    .await?;

    let registrations = registrations
        .into_iter()
        .map(Registration::from_db_model)
        .collect::<Vec<_>>();
    Ok(Json(registrations))
}

async fn load_building_registration(
    conn: &DatabaseConnection,
    claims: &AdminClaims,
    registration_id: Uuid,
) -> Result<patrika_entity::registration::Model, AdminError> {
    let record = registration::Query::find_by_id(conn, registration_id)
        .await?
        .ok_or(AdminError::NotFound)?;

    // Registration buildings are free text; "Main Building" and
    // "main building" scope to the same admin.
    if auth::normalize_building(&record.building) != auth::normalize_building(&claims.building) {
        return Err(AdminError::Forbidden);
    }
    Ok(record)
}

#[utoipa::path(
    post,
    path = "/api/v0/admin/registrations/{registration_id}/approve",
    responses(
        (status = OK, description = "Registration approved", body = Registration),
        (status = FORBIDDEN, description = "Registration belongs to another building"),
    ),
    tag = "v0/admin",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn approve_registration(
    ExtractAdmin(claims): ExtractAdmin,
    Path(registration_id): Path<Uuid>,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<impl IntoResponse, AdminError> {
    let record = load_building_registration(&conn, &claims, registration_id).await?;
    let record = registration::Mutation::approve(&conn, record, &claims.sub).await?;
    Ok(Json(Registration::from_db_model(record)))
}

#[utoipa::path(
    post,
    path = "/api/v0/admin/registrations/{registration_id}/decline",
    request_body = DeclineRegistration,
    responses(
        (status = OK, description = "Registration declined", body = Registration),
        (status = FORBIDDEN, description = "Registration belongs to another building"),
    ),
    tag = "v0/admin",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn decline_registration(
    ExtractAdmin(claims): ExtractAdmin,
    Path(registration_id): Path<Uuid>,
    Extension(conn): Extension<DatabaseConnection>,
    Json(body): Json<DeclineRegistration>,
) -> Result<impl IntoResponse, AdminError> {
    let record = load_building_registration(&conn, &claims, registration_id).await?;
    let record = registration::Mutation::decline(&conn, record, &claims.sub, body.reason).await?;
    Ok(Json(Registration::from_db_model(record)))
}

#[utoipa::path(
    get,
    path = "/api/v0/admin/members",
    responses(
        (status = OK, description = "Approved members of the admin's building", body = [Registration]),
    ),
    tag = "v0/admin",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn list_members(
    ExtractAdmin(claims): ExtractAdmin,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<impl IntoResponse, AdminError> {
    let members = registration::Query::list_for_building(
        &conn,
        &claims.building,
        Some(patrika_entity::registration::Status::Approved),
    )
    .await?;

    let members = members.into_iter().map(Registration::from_db_model).collect::<Vec<_>>();
    Ok(Json(members))
}

#[utoipa::path(
    get,
    path = "/api/v0/admin/members/{registration_id}",
    responses(
        (status = OK, description = "Member record with order history", body = MemberDetails),
    ),
    tag = "v0/admin",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn member_details(
    ExtractAdmin(claims): ExtractAdmin,
    Path(registration_id): Path<Uuid>,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<impl IntoResponse, AdminError> {
    let record = load_building_registration(&conn, &claims, registration_id).await?;

    // Registrations carry no email, so orders are matched on the contact number.
    let orders = order::Query::list_by_contact(&conn, None, Some(&record.contact_number)).await?;

    Ok(Json(MemberDetails {
        registration: Registration::from_db_model(record),
        orders: orders.into_iter().map(Order::from_db_model).collect(),
    }))
}

/// Site accounts that may or may not be club members, for the admin panel's
/// non-member view.
#[utoipa::path(
    get,
    path = "/api/v0/admin/users",
    responses(
        (status = OK, description = "All saved user profiles", body = [UserProfile]),
    ),
    tag = "v0/admin",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn list_users(
    ExtractAdmin(_claims): ExtractAdmin,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<impl IntoResponse, AdminError> {
    let profiles = user::Query::list(&conn).await?;
    let profiles = profiles.into_iter().map(UserProfile::from_db_model).collect::<Vec<_>>();
    Ok(Json(profiles))
}

#[utoipa::path(
    get,
    path = "/api/v0/admin/users/{subject_id}",
    responses(
        (status = OK, description = "User profile with order history", body = UserDetails),
    ),
    tag = "v0/admin",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn user_details(
    ExtractAdmin(_claims): ExtractAdmin,
    Path(subject_id): Path<String>,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<impl IntoResponse, AdminError> {
    let profile = user::Query::find_by_subject(&conn, &subject_id)
        .await?
        .ok_or(AdminError::NotFound)?;

    let orders =
        order::Query::list_by_contact(&conn, profile.email.as_deref(), Some(&profile.whatsapp)).await?;

    Ok(Json(UserDetails {
        profile: UserProfile::from_db_model(profile),
        orders: orders.into_iter().map(Order::from_db_model).collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/v0/admin/journal/pending",
    responses(
        (status = OK, description = "Journal entries awaiting review", body = [JournalEntry]),
        (status = FORBIDDEN, description = "Not a main building admin"),
    ),
    tag = "v0/admin",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn pending_journal_entries(
    ExtractAdmin(claims): ExtractAdmin,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<impl IntoResponse, AdminError> {
    require_journal_moderator(&claims)?;

    let entries = journal::Query::list_pending(&conn).await?;
    let entries = entries.into_iter().map(JournalEntry::from_db_model).collect::<Vec<_>>();
    Ok(Json(entries))
}

#[utoipa::path(
    get,
    path = "/api/v0/admin/journal/{entry_id}",
    responses(
        (status = OK, description = "Any journal entry, approval state regardless", body = JournalEntry),
    ),
    tag = "v0/admin",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn get_journal_entry(
    ExtractAdmin(claims): ExtractAdmin,
    Path(entry_id): Path<Uuid>,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<impl IntoResponse, AdminError> {
    require_journal_moderator(&claims)?;

    let entry = journal::Query::find_by_id(&conn, entry_id)
        .await?
        .ok_or(AdminError::NotFound)?;
    Ok(Json(JournalEntry::from_db_model(entry)))
}

#[utoipa::path(
    post,
    path = "/api/v0/admin/journal/{entry_id}/approve",
    responses(
        (status = OK, description = "Entry approved and published", body = JournalEntry),
        (status = FORBIDDEN, description = "Not a main building admin"),
    ),
    tag = "v0/admin",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn approve_journal_entry(
    ExtractAdmin(claims): ExtractAdmin,
    Path(entry_id): Path<Uuid>,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<impl IntoResponse, AdminError> {
    require_journal_moderator(&claims)?;

    let entry = journal::Query::find_by_id(&conn, entry_id)
        .await?
        .ok_or(AdminError::NotFound)?;
    let entry = journal::Mutation::approve_entry(&conn, entry, &claims.sub).await?;
    tracing::info!(%entry_id, approver = %claims.sub, "journal entry approved");

    Ok(Json(JournalEntry::from_db_model(entry)))
}

#[utoipa::path(
    delete,
    path = "/api/v0/admin/journal/{entry_id}",
    responses(
        (status = NO_CONTENT, description = "Entry removed by moderation"),
        (status = FORBIDDEN, description = "Not a main building admin"),
    ),
    tag = "v0/admin",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn delete_journal_entry(
    ExtractAdmin(claims): ExtractAdmin,
    Path(entry_id): Path<Uuid>,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<impl IntoResponse, AdminError> {
    require_journal_moderator(&claims)?;

    let entry = journal::Query::find_by_id(&conn, entry_id)
        .await?
        .ok_or(AdminError::NotFound)?;
    journal::Mutation::delete_entry(&conn, entry).await?;

    Ok(StatusCode::NO_CONTENT)
}
