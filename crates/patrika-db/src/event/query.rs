use std::error::Error;

use patrika_entity::event::{self, Entity as Event, Model as EventModel, Status};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

pub struct Query;

impl Query {
    pub async fn find_by_slug<C: ConnectionTrait>(
        conn: &C,
        slug: &str,
    ) -> Result<Option<EventModel>, DbErr> {
        Event::find()
            .filter(event::Column::Slug.eq(slug))
            .one(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to load event"))
    }

    /// Upcoming events are listed soonest first, everything else newest
    /// first.
    pub async fn list<C: ConnectionTrait>(
        conn: &C,
        status: Option<Status>,
    ) -> Result<Vec<EventModel>, DbErr> {
        let mut query = match status {
            Some(Status::Upcoming) => Event::find().order_by_asc(event::Column::Date),
            _ => Event::find().order_by_desc(event::Column::CreatedAt),
        };

        if let Some(status) = status {
            query = query.filter(event::Column::Status.eq(status));
        }

        query
            .all(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to list events"))
    }
}
