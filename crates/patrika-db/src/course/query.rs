use std::error::Error;

use patrika_entity::course::{self, Entity as Course, Model as CourseModel};
use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder};
use uuid::Uuid;

pub struct Query;

impl Query {
    pub async fn find_by_id<C: ConnectionTrait>(conn: &C, id: Uuid) -> Result<Option<CourseModel>, DbErr> {
        Course::find_by_id(id)
            .one(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to load course"))
    }

    pub async fn list<C: ConnectionTrait>(conn: &C) -> Result<Vec<CourseModel>, DbErr> {
        Course::find()
            .order_by_desc(course::Column::CreatedAt)
            .all(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to list courses"))
    }
}
