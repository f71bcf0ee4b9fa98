use chrono::{DateTime, FixedOffset};
use patrika_entity::event::{self, Images, Model as EventModel, Status};
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, IntoActiveModel, ModelTrait};
use uuid::Uuid;

use crate::util::now;

pub struct Mutation;

pub struct NewEvent {
    pub title: String,
    pub slug: String,
    pub date: DateTime<FixedOffset>,
    pub location: String,
    pub short_description: String,
    pub description: String,
    pub cover_image: String,
    pub images: Vec<String>,
    pub color: String,
    pub glow: String,
    pub status: Status,
}

#[derive(Debug, Default)]
pub struct EventPatch {
    pub title: Option<String>,
    pub date: Option<DateTime<FixedOffset>>,
    pub location: Option<String>,
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    pub images: Option<Vec<String>>,
    pub color: Option<String>,
    pub glow: Option<String>,
    pub status: Option<Status>,
}

impl Mutation {
    pub async fn create<C: ConnectionTrait>(conn: &C, new: NewEvent) -> Result<EventModel, DbErr> {
        let created_at = now();
        let event = event::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            title: ActiveValue::Set(new.title),
            slug: ActiveValue::Set(new.slug),
            date: ActiveValue::Set(new.date),
            location: ActiveValue::Set(new.location),
            short_description: ActiveValue::Set(new.short_description),
            description: ActiveValue::Set(new.description),
            cover_image: ActiveValue::Set(new.cover_image),
            images: ActiveValue::Set(Images(new.images)),
            color: ActiveValue::Set(new.color),
            glow: ActiveValue::Set(new.glow),
            status: ActiveValue::Set(new.status),
            created_at: ActiveValue::Set(created_at),
            updated_at: ActiveValue::Set(created_at),
        };

        event.insert(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn std::error::Error, "failed to create event");
        })
    }

    /// The slug is the public identifier and is never patched.
    pub async fn update<C: ConnectionTrait>(
        conn: &C,
        mut event: EventModel,
        patch: EventPatch,
    ) -> Result<EventModel, DbErr> {
        if let Some(title) = patch.title {
            event.title = title;
        }
        if let Some(date) = patch.date {
            event.date = date;
        }
        if let Some(location) = patch.location {
            event.location = location;
        }
        if let Some(short_description) = patch.short_description {
            event.short_description = short_description;
        }
        if let Some(description) = patch.description {
            event.description = description;
        }
        if let Some(cover_image) = patch.cover_image {
            event.cover_image = cover_image;
        }
        if let Some(images) = patch.images {
            event.images = Images(images);
        }
        if let Some(color) = patch.color {
            event.color = color;
        }
        if let Some(glow) = patch.glow {
            event.glow = glow;
        }
        if let Some(status) = patch.status {
            event.status = status;
        }
        event.updated_at = now();

        event
            .into_active_model()
            .reset_all()
            .update(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn std::error::Error, "failed to update event");
            })
    }

    pub async fn delete<C: ConnectionTrait>(conn: &C, event: EventModel) -> Result<(), DbErr> {
        event.delete(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn std::error::Error, "failed to delete event");
        })?;
        Ok(())
    }
}
