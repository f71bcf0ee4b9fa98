use std::error::Error;

use chrono::Duration;
use patrika_entity::journal::{self, Entity as JournalEntry, Model as JournalEntryModel};
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use uuid::Uuid;

use crate::util::now;

pub struct Query;

/// Rolling window over the publication timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    Day,
    Week,
    Month,
}

impl Window {
    fn duration(self) -> Duration {
        match self {
            Self::Day => Duration::days(1),
            Self::Week => Duration::weeks(1),
            Self::Month => Duration::days(30),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Recent,
    Engagement,
}

/// Listing filter for the public feed.
///
/// The base visibility set is approved, non-draft entries. When
/// `include_author` is set the requester's own entries are unioned in
/// regardless of draft or approval state, so authors see their pending
/// work in the same feed.
#[derive(Debug, Default)]
pub struct ListFilter {
    pub include_author: Option<String>,
    pub author_id: Option<String>,
    pub title_query: Option<String>,
    pub published_within: Option<Window>,
    pub sort: SortOrder,
    pub skip: u64,
    pub limit: u64,
}

impl Query {
    pub async fn find_by_id<C: ConnectionTrait>(
        conn: &C,
        id: Uuid,
    ) -> Result<Option<JournalEntryModel>, DbErr> {
        JournalEntry::find_by_id(id)
            .one(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to load journal entry"))
    }

    pub async fn list<C: ConnectionTrait>(
        conn: &C,
        filter: ListFilter,
    ) -> Result<Vec<JournalEntryModel>, DbErr> {
        let mut visible = Condition::all()
            .add(journal::Column::Approved.eq(true))
            .add(journal::Column::IsDraft.eq(false));

        if let Some(window) = filter.published_within {
            let since = now() - window.duration();
            visible = visible.add(journal::Column::PublishedAt.gte(since));
        }

        let visibility = match filter.include_author {
            Some(author_id) => Condition::any()
                .add(visible)
                .add(journal::Column::AuthorId.eq(author_id)),
            None => visible,
        };
        let mut condition = Condition::all().add(visibility);

        if let Some(author_id) = filter.author_id {
            condition = condition.add(journal::Column::AuthorId.eq(author_id));
        }

        if let Some(title_query) = filter.title_query {
            // lower() keeps the match case-insensitive on both sqlite and Postgres
            condition = condition.add(
                Expr::expr(Func::lower(Expr::col(journal::Column::Title)))
                    .like(format!("%{}%", title_query.to_lowercase())),
            );
        }

        let mut query = JournalEntry::find().filter(condition);

        query = match filter.sort {
            SortOrder::Recent => query.order_by_desc(journal::Column::CreatedAt),
            SortOrder::Engagement => query
                .order_by_desc(journal::Column::EngagementScore)
                .order_by_desc(journal::Column::CreatedAt),
        };

        query
            .offset(filter.skip)
            .limit(filter.limit)
            .all(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to list journal entries"))
    }

    /// Moderation queue: submitted entries that are not yet approved.
    pub async fn list_pending<C: ConnectionTrait>(conn: &C) -> Result<Vec<JournalEntryModel>, DbErr> {
        JournalEntry::find()
            .filter(journal::Column::Approved.eq(false))
            .filter(journal::Column::IsDraft.eq(false))
            .order_by_desc(journal::Column::CreatedAt)
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to list pending journal entries")
            })
    }
}
