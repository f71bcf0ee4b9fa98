pub(crate) mod error;

use axum::extract::{Path, Query};
use axum::response::{IntoResponse, Json};
use axum::routing::{Router, get, post};
use axum::Extension;
use http::StatusCode;
use patrika_db::journal;
use patrika_db::journal::mutation::{JournalEntryPatch, NewJournalEntry as NewJournalEntryRecord};
use patrika_db::journal::query::{ListFilter, SortOrder, Window};
use patrika_db::sea_orm::DatabaseConnection;
use patrika_entity::journal::Model as JournalEntryModel;
use patrika_model::convert::{FromDbModel, IntoDbModel};
use patrika_model::journal::{
    JournalEntry, LikeOutcome, NewComment, NewJournalEntry, NewSticker, UpdateJournalEntry,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::identity::{ExtractIdentity, display_name};
use crate::routes::api::v0::journal::error::JournalError;

const DEFAULT_PAGE_SIZE: u64 = 20;
const MAX_PAGE_SIZE: u64 = 50;
const MAX_STICKER_SYMBOL_LEN: usize = 16;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(list_entries).post(create_entry))
        .route("/{entry_id}", get(get_entry).put(update_entry).delete(delete_entry))
        .route("/{entry_id}/like", post(toggle_like))
        .route("/{entry_id}/comments", post(add_comment))
        .route("/{entry_id}/stickers", post(add_sticker))
        .with_state(())
}

#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub(crate) enum WindowParam {
    Day,
    Week,
    Month,
}

#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub(crate) enum SortParam {
    Recent,
    Engagement,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub(crate) struct ListQuery {
    /// Case-insensitive title search.
    pub q: Option<String>,
    /// Restrict to entries published within the window.
    pub window: Option<WindowParam>,
    pub sort: Option<SortParam>,
    /// Union the requester's own entries into the feed, drafts included.
    #[serde(default)]
    pub mine: bool,
    /// Restrict to a single author.
    pub author: Option<String>,
    pub limit: Option<u64>,
    pub skip: Option<u64>,
}

/// Whether `identity_subject` may see the entry at all. Unapproved entries
/// do not exist for anyone but their author.
fn visible_to(entry: &JournalEntryModel, identity_subject: Option<&str>) -> bool {
    (entry.approved && !entry.is_draft) || identity_subject == Some(entry.author_id.as_str())
}

async fn load_visible(
    conn: &DatabaseConnection,
    entry_id: Uuid,
    identity_subject: Option<&str>,
) -> Result<JournalEntryModel, JournalError> {
    let entry = journal::Query::find_by_id(conn, entry_id)
        .await?
        .ok_or(JournalError::NotFound)?;

    if !visible_to(&entry, identity_subject) {
        return Err(JournalError::NotFound);
    }
    Ok(entry)
}

#[utoipa::path(
    get,
    path = "/api/v0/journal",
    params(ListQuery),
    responses(
        (status = OK, description = "List journal entries", body = [JournalEntry]),
    ),
    tag = "v0/journal",
    security(
        (),
        ("token" = [])
    )
)]
pub(crate) async fn list_entries(
    identity: Option<ExtractIdentity>,
    Query(params): Query<ListQuery>,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<impl IntoResponse, JournalError> {
    let include_author = if params.mine {
        let ExtractIdentity(identity) = identity.ok_or(JournalError::AuthRequired)?;
        Some(identity.subject)
    } else {
        None
    };

    let filter = ListFilter {
        include_author,
        author_id: params.author,
        title_query: params.q.filter(|q| !q.trim().is_empty()),
        published_within: params.window.map(|window| match window {
            WindowParam::Day => Window::Day,
            WindowParam::Week => Window::Week,
            WindowParam::Month => Window::Month,
        }),
        sort: match params.sort {
            Some(SortParam::Engagement) => SortOrder::Engagement,
            _ => SortOrder::Recent,
        },
        skip: params.skip.unwrap_or(0),
        limit: params.limit.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE),
    };

    let entries = journal::Query::list(&conn, filter).await?;
    let entries = entries.into_iter().map(JournalEntry::from_db_model).collect::<Vec<_>>();
    Ok(Json(entries))
}

#[utoipa::path(
    post,
    path = "/api/v0/journal",
    request_body = NewJournalEntry,
    responses(
        (status = CREATED, description = "Create a journal entry pending review", body = JournalEntry),
    ),
    tag = "v0/journal",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn create_entry(
    ExtractIdentity(identity): ExtractIdentity,
    Extension(conn): Extension<DatabaseConnection>,
    Json(body): Json<NewJournalEntry>,
) -> Result<impl IntoResponse, JournalError> {
    // Drafts may be started without a title; submitting for review requires one.
    if !body.is_draft && body.title.trim().is_empty() {
        return Err(JournalError::validation("title must not be empty"));
    }
    if body.body_html.trim().is_empty() {
        return Err(JournalError::validation("body must not be empty"));
    }

    let author_name = Some(display_name(&identity));
    let entry = journal::Mutation::create_entry(
        &conn,
        NewJournalEntryRecord {
            title: body.title,
            heading: body.heading.into_db_model(),
            font_family: body.font_family,
            color: body.color,
            body_html: body.body_html,
            latex_snippets: body.latex_snippets,
            author_id: identity.subject,
            author_name,
            author_email: identity.email,
            is_draft: body.is_draft,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(JournalEntry::from_db_model(entry))))
}

#[utoipa::path(
    get,
    path = "/api/v0/journal/{entry_id}",
    responses(
        (status = OK, description = "Get a journal entry", body = JournalEntry),
        (status = NOT_FOUND, description = "Unknown or not visible to the requester"),
    ),
    tag = "v0/journal",
    security(
        (),
        ("token" = [])
    )
)]
pub(crate) async fn get_entry(
    identity: Option<ExtractIdentity>,
    Path(entry_id): Path<Uuid>,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<impl IntoResponse, JournalError> {
    let subject = identity.as_ref().map(|ExtractIdentity(identity)| identity.subject.as_str());
    let entry = load_visible(&conn, entry_id, subject).await?;
    Ok(Json(JournalEntry::from_db_model(entry)))
}

#[utoipa::path(
    put,
    path = "/api/v0/journal/{entry_id}",
    request_body = UpdateJournalEntry,
    responses(
        (status = OK, description = "Update an entry; any edit sends it back to review", body = JournalEntry),
        (status = FORBIDDEN, description = "Not the author"),
    ),
    tag = "v0/journal",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn update_entry(
    ExtractIdentity(identity): ExtractIdentity,
    Path(entry_id): Path<Uuid>,
    Extension(conn): Extension<DatabaseConnection>,
    Json(body): Json<UpdateJournalEntry>,
) -> Result<impl IntoResponse, JournalError> {
    let entry = journal::Query::find_by_id(&conn, entry_id)
        .await?
        .ok_or(JournalError::NotFound)?;
    if entry.author_id != identity.subject {
        return Err(JournalError::Forbidden);
    }

    if body.title.as_deref().is_some_and(|title| title.trim().is_empty()) {
        return Err(JournalError::validation("title must not be empty"));
    }
    if body.body_html.as_deref().is_some_and(|html| html.trim().is_empty()) {
        return Err(JournalError::validation("body must not be empty"));
    }

    let entry = journal::Mutation::update_entry(
        &conn,
        entry,
        JournalEntryPatch {
            title: body.title,
            heading: body.heading.map(IntoDbModel::into_db_model),
            font_family: body.font_family,
            color: body.color,
            body_html: body.body_html,
            latex_snippets: body.latex_snippets,
            is_draft: body.is_draft,
        },
    )
    .await?;

    Ok(Json(JournalEntry::from_db_model(entry)))
}

#[utoipa::path(
    delete,
    path = "/api/v0/journal/{entry_id}",
    responses(
        (status = NO_CONTENT, description = "Entry deleted"),
        (status = FORBIDDEN, description = "Not the author"),
    ),
    tag = "v0/journal",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn delete_entry(
    ExtractIdentity(identity): ExtractIdentity,
    Path(entry_id): Path<Uuid>,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<impl IntoResponse, JournalError> {
    let entry = journal::Query::find_by_id(&conn, entry_id)
        .await?
        .ok_or(JournalError::NotFound)?;
    if entry.author_id != identity.subject {
        return Err(JournalError::Forbidden);
    }

    journal::Mutation::delete_entry(&conn, entry).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/v0/journal/{entry_id}/like",
    responses(
        (status = OK, description = "Toggle the requester's like", body = LikeOutcome),
    ),
    tag = "v0/journal",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn toggle_like(
    ExtractIdentity(identity): ExtractIdentity,
    Path(entry_id): Path<Uuid>,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<impl IntoResponse, JournalError> {
    let entry = load_visible(&conn, entry_id, Some(&identity.subject)).await?;
    let (entry, liked) = journal::Mutation::toggle_like(&conn, entry, &identity.subject).await?;

    Ok(Json(LikeOutcome {
        liked,
        entry: JournalEntry::from_db_model(entry),
    }))
}

#[utoipa::path(
    post,
    path = "/api/v0/journal/{entry_id}/comments",
    request_body = NewComment,
    responses(
        (status = CREATED, description = "Append a comment", body = JournalEntry),
    ),
    tag = "v0/journal",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn add_comment(
    ExtractIdentity(identity): ExtractIdentity,
    Path(entry_id): Path<Uuid>,
    Extension(conn): Extension<DatabaseConnection>,
    Json(body): Json<NewComment>,
) -> Result<impl IntoResponse, JournalError> {
    let text = body.text.trim().to_owned();
    if text.is_empty() {
        return Err(JournalError::validation("comment must not be empty"));
    }

    let entry = load_visible(&conn, entry_id, Some(&identity.subject)).await?;
    let user_name = display_name(&identity);
    let entry =
        journal::Mutation::add_comment(&conn, entry, identity.subject, user_name, identity.email, text).await?;

    Ok((StatusCode::CREATED, Json(JournalEntry::from_db_model(entry))))
}

#[utoipa::path(
    post,
    path = "/api/v0/journal/{entry_id}/stickers",
    request_body = NewSticker,
    responses(
        (status = OK, description = "Count an anonymous sticker reaction", body = JournalEntry),
    ),
    tag = "v0/journal"
)]
pub(crate) async fn add_sticker(
    Path(entry_id): Path<Uuid>,
    Extension(conn): Extension<DatabaseConnection>,
    Json(body): Json<NewSticker>,
) -> Result<impl IntoResponse, JournalError> {
    let symbol = body.symbol.trim();
    if symbol.is_empty() {
        return Err(JournalError::validation("sticker symbol must not be empty"));
    }
    if symbol.chars().count() > MAX_STICKER_SYMBOL_LEN {
        return Err(JournalError::validation("sticker symbol too long"));
    }

    // Stickers are anonymous, so only published entries can receive them.
    let entry = load_visible(&conn, entry_id, None).await?;
    let entry = journal::Mutation::add_sticker(&conn, entry, symbol).await?;

    Ok(Json(JournalEntry::from_db_model(entry)))
}
