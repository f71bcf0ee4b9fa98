use patrika_entity::admin::{self, Model as AdminModel};
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};
use uuid::Uuid;

use crate::util::now;

pub struct Mutation;

impl Mutation {
    /// `password_hash` must already be hashed; plain passwords never reach
    /// this layer. Username and building are stored lowercase so lookups
    /// and building scoping are case-insensitive.
    pub async fn create<C: ConnectionTrait>(
        conn: &C,
        username: String,
        password_hash: String,
        building: String,
    ) -> Result<AdminModel, DbErr> {
        let admin = admin::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            username: ActiveValue::Set(username.to_lowercase()),
            password_hash: ActiveValue::Set(password_hash),
            building: ActiveValue::Set(building.to_lowercase()),
            created_at: ActiveValue::Set(now()),
        };

        admin.insert(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn std::error::Error, "failed to create admin");
        })
    }
}
