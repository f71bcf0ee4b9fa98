use patrika_entity::registration::{
    self, Campus, Department, Model as RegistrationModel, Status, Version,
};
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, IntoActiveModel, ModelTrait};
use uuid::Uuid;

use crate::util::now;

pub struct Mutation;

pub struct NewRegistration {
    pub subject_id: String,
    pub name: String,
    pub code: String,
    pub class: i16,
    pub section: String,
    pub campus: Campus,
    pub version: Version,
    pub department: Department,
    pub building: String,
    pub contact_number: String,
}

impl Mutation {
    pub async fn create<C: ConnectionTrait>(
        conn: &C,
        new: NewRegistration,
    ) -> Result<RegistrationModel, DbErr> {
        let registration = registration::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            subject_id: ActiveValue::Set(new.subject_id),
            name: ActiveValue::Set(new.name),
            code: ActiveValue::Set(new.code),
            class: ActiveValue::Set(new.class),
            section: ActiveValue::Set(new.section),
            campus: ActiveValue::Set(new.campus),
            version: ActiveValue::Set(new.version),
            department: ActiveValue::Set(new.department),
            building: ActiveValue::Set(new.building),
            contact_number: ActiveValue::Set(new.contact_number),
            approved: ActiveValue::Set(false),
            status: ActiveValue::Set(Status::Pending),
            approved_by: ActiveValue::Set(None),
            approved_at: ActiveValue::Set(None),
            declined_reason: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now()),
        };

        registration.insert(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn std::error::Error, "failed to create registration");
        })
    }

    pub async fn approve<C: ConnectionTrait>(
        conn: &C,
        mut registration: RegistrationModel,
        approver: &str,
    ) -> Result<RegistrationModel, DbErr> {
        registration.approved = true;
        registration.status = Status::Approved;
        registration.approved_by = Some(approver.to_owned());
        registration.approved_at = Some(now());
        registration.declined_reason = None;

        Self::write_back(conn, registration).await
    }

    pub async fn decline<C: ConnectionTrait>(
        conn: &C,
        mut registration: RegistrationModel,
        approver: &str,
        reason: Option<String>,
    ) -> Result<RegistrationModel, DbErr> {
        registration.approved = false;
        registration.status = Status::Declined;
        registration.approved_by = Some(approver.to_owned());
        registration.approved_at = Some(now());
        registration.declined_reason = reason;

        Self::write_back(conn, registration).await
    }

    pub async fn delete<C: ConnectionTrait>(conn: &C, registration: RegistrationModel) -> Result<(), DbErr> {
        registration.delete(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn std::error::Error, "failed to delete registration");
        })?;
        Ok(())
    }

    async fn write_back<C: ConnectionTrait>(
        conn: &C,
        registration: RegistrationModel,
    ) -> Result<RegistrationModel, DbErr> {
        registration
            .into_active_model()
            .reset_all()
            .update(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn std::error::Error, "failed to update registration");
            })
    }
}
