use std::error::Error;

use patrika_entity::user::{self, Entity as User, Model as UserModel};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

pub struct Query;

impl Query {
    pub async fn find_by_subject<C: ConnectionTrait>(
        conn: &C,
        subject_id: &str,
    ) -> Result<Option<UserModel>, DbErr> {
        User::find()
            .filter(user::Column::SubjectId.eq(subject_id))
            .one(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to load user profile"))
    }

    /// Used for the email-uniqueness check on profile upsert; the conflict is
    /// only a conflict when the hit belongs to a different subject.
    pub async fn find_by_email<C: ConnectionTrait>(
        conn: &C,
        email: &str,
    ) -> Result<Option<UserModel>, DbErr> {
        User::find()
            .filter(user::Column::Email.eq(email))
            .one(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to load user profile"))
    }

    pub async fn list<C: ConnectionTrait>(conn: &C) -> Result<Vec<UserModel>, DbErr> {
        User::find()
            .order_by_desc(user::Column::CreatedAt)
            .all(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to list user profiles"))
    }
}
