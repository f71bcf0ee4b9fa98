use axum::Extension;
use axum::extract::{Path, Query};
use axum::response::{IntoResponse, Json};
use axum::routing::{Router, get};
use http::StatusCode;
use patrika_db::event;
use patrika_db::event::mutation::{EventPatch, NewEvent as NewEventRecord};
use patrika_db::sea_orm::DatabaseConnection;
use patrika_model::convert::{FromDbModel, IntoDbModel};
use patrika_model::event::{Event, NewEvent, Status, UpdateEvent};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::identity::ExtractAdmin;
use crate::routes::error::ApiError;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(list_events).post(create_event))
        .route("/{slug}", get(get_event).put(update_event).delete(delete_event))
        .with_state(())
}

#[derive(Debug, Deserialize, IntoParams)]
pub(crate) struct EventListQuery {
    /// Restrict the listing to upcoming or past events.
    pub(crate) status: Option<Status>,
}

#[utoipa::path(
    get,
    path = "/api/v0/events",
    params(EventListQuery),
    responses(
        (status = OK, description = "Events, newest first", body = [Event]),
    ),
    tag = "v0/events"
)]
pub(crate) async fn list_events(
    Query(query): Query<EventListQuery>,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<impl IntoResponse, ApiError> {
    let records = event::Query::list(&conn, query.status.map(IntoDbModel::into_db_model)).await?;
    let records = records.into_iter().map(Event::from_db_model).collect::<Vec<_>>();
    Ok(Json(records))
}

#[utoipa::path(
    get,
    path = "/api/v0/events/{slug}",
    responses(
        (status = OK, description = "The event", body = Event),
        (status = NOT_FOUND, description = "No event with that slug"),
    ),
    tag = "v0/events"
)]
pub(crate) async fn get_event(
    Path(slug): Path<String>,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<impl IntoResponse, ApiError> {
    let record = event::Query::find_by_slug(&conn, &slug)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(Event::from_db_model(record)))
}

#[utoipa::path(
    post,
    path = "/api/v0/events",
    request_body = NewEvent,
    responses(
        (status = CREATED, description = "Event created", body = Event),
        (status = CONFLICT, description = "Slug already in use"),
    ),
    tag = "v0/events",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn create_event(
    ExtractAdmin(_claims): ExtractAdmin,
    Extension(conn): Extension<DatabaseConnection>,
    Json(body): Json<NewEvent>,
) -> Result<impl IntoResponse, ApiError> {
    if body.title.trim().is_empty() {
        return Err(ApiError::validation("title is required"));
    }
    if body.slug.trim().is_empty() {
        return Err(ApiError::validation("slug is required"));
    }

    if event::Query::find_by_slug(&conn, &body.slug).await?.is_some() {
        return Err(ApiError::conflict("slug already in use"));
    }

    let record = event::Mutation::create(
        &conn,
        NewEventRecord {
            title: body.title,
            slug: body.slug,
            date: body.date,
            location: body.location,
            short_description: body.short_description,
            description: body.description,
            cover_image: body.cover_image,
            images: body.images,
            color: body.color,
            glow: body.glow,
            status: body.status.into_db_model(),
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(Event::from_db_model(record))))
}

#[utoipa::path(
    put,
    path = "/api/v0/events/{slug}",
    request_body = UpdateEvent,
    responses(
        (status = OK, description = "Event updated", body = Event),
        (status = NOT_FOUND, description = "No event with that slug"),
    ),
    tag = "v0/events",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn update_event(
    ExtractAdmin(_claims): ExtractAdmin,
    Path(slug): Path<String>,
    Extension(conn): Extension<DatabaseConnection>,
    Json(body): Json<UpdateEvent>,
) -> Result<impl IntoResponse, ApiError> {
    let record = event::Query::find_by_slug(&conn, &slug)
        .await?
        .ok_or(ApiError::NotFound)?;

    let record = event::Mutation::update(
        &conn,
        record,
        EventPatch {
            title: body.title,
            date: body.date,
            location: body.location,
            short_description: body.short_description,
            description: body.description,
            cover_image: body.cover_image,
            images: body.images,
            color: body.color,
            glow: body.glow,
            status: body.status.map(IntoDbModel::into_db_model),
        },
    )
    .await?;

    Ok(Json(Event::from_db_model(record)))
}

#[utoipa::path(
    delete,
    path = "/api/v0/events/{slug}",
    responses(
        (status = NO_CONTENT, description = "Event removed"),
        (status = NOT_FOUND, description = "No event with that slug"),
    ),
    tag = "v0/events",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn delete_event(
    ExtractAdmin(_claims): ExtractAdmin,
    Path(slug): Path<String>,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<impl IntoResponse, ApiError> {
    let record = event::Query::find_by_slug(&conn, &slug)
        .await?
        .ok_or(ApiError::NotFound)?;
    event::Mutation::delete(&conn, record).await?;
    Ok(StatusCode::NO_CONTENT)
}
