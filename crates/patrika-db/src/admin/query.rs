use std::error::Error;

use patrika_entity::admin::{self, Entity as Admin, Model as AdminModel};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

pub struct Query;

impl Query {
    /// Usernames are stored lowercase, so the lookup lowercases its input.
    pub async fn find_by_username<C: ConnectionTrait>(
        conn: &C,
        username: &str,
    ) -> Result<Option<AdminModel>, DbErr> {
        Admin::find()
            .filter(admin::Column::Username.eq(username.to_lowercase()))
            .one(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to load admin"))
    }
}
