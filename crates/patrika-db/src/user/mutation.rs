use patrika_entity::registration::{Department, Version};
use patrika_entity::user::{self, Model as UserModel};
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, IntoActiveModel};
use uuid::Uuid;

use crate::util::now;

pub struct Mutation;

pub struct UserProfile {
    pub email: Option<String>,
    pub name: String,
    pub class: i16,
    pub department: Department,
    pub version: Version,
    pub whatsapp: String,
    pub section: String,
}

impl Mutation {
    pub async fn create<C: ConnectionTrait>(
        conn: &C,
        subject_id: String,
        profile: UserProfile,
    ) -> Result<UserModel, DbErr> {
        let created_at = now();
        let user = user::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            subject_id: ActiveValue::Set(subject_id),
            email: ActiveValue::Set(profile.email),
            name: ActiveValue::Set(profile.name),
            class: ActiveValue::Set(profile.class),
            department: ActiveValue::Set(profile.department),
            version: ActiveValue::Set(profile.version),
            whatsapp: ActiveValue::Set(profile.whatsapp),
            section: ActiveValue::Set(profile.section),
            created_at: ActiveValue::Set(created_at),
            updated_at: ActiveValue::Set(created_at),
        };

        user.insert(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn std::error::Error, "failed to create user profile");
        })
    }

    pub async fn update<C: ConnectionTrait>(
        conn: &C,
        mut user: UserModel,
        profile: UserProfile,
    ) -> Result<UserModel, DbErr> {
        user.email = profile.email;
        user.name = profile.name;
        user.class = profile.class;
        user.department = profile.department;
        user.version = profile.version;
        user.whatsapp = profile.whatsapp;
        user.section = profile.section;
        user.updated_at = now();

        user.into_active_model()
            .reset_all()
            .update(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn std::error::Error, "failed to update user profile");
            })
    }
}
