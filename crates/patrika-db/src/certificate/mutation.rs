use patrika_entity::certificate::{self, Model as CertificateModel};
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, IntoActiveModel, ModelTrait};
use uuid::Uuid;

use crate::util::now;

pub struct Mutation;

pub struct NewCertificate {
    pub search_id: String,
    pub name: String,
    pub serving_event: String,
    pub code: String,
    pub class: String,
    pub hsc_batch: String,
}

#[derive(Debug, Default)]
pub struct CertificatePatch {
    pub name: Option<String>,
    pub serving_event: Option<String>,
    pub code: Option<String>,
    pub class: Option<String>,
    pub hsc_batch: Option<String>,
}

impl Mutation {
    pub async fn create<C: ConnectionTrait>(
        conn: &C,
        new: NewCertificate,
    ) -> Result<CertificateModel, DbErr> {
        let created_at = now();
        let certificate = certificate::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            search_id: ActiveValue::Set(new.search_id),
            name: ActiveValue::Set(new.name),
            serving_event: ActiveValue::Set(new.serving_event),
            code: ActiveValue::Set(new.code),
            class: ActiveValue::Set(new.class),
            hsc_batch: ActiveValue::Set(new.hsc_batch),
            created_at: ActiveValue::Set(created_at),
            updated_at: ActiveValue::Set(created_at),
        };

        certificate.insert(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn std::error::Error, "failed to create certificate");
        })
    }

    pub async fn update<C: ConnectionTrait>(
        conn: &C,
        mut certificate: CertificateModel,
        patch: CertificatePatch,
    ) -> Result<CertificateModel, DbErr> {
        if let Some(name) = patch.name {
            certificate.name = name;
        }
        if let Some(serving_event) = patch.serving_event {
            certificate.serving_event = serving_event;
        }
        if let Some(code) = patch.code {
            certificate.code = code;
        }
        if let Some(class) = patch.class {
            certificate.class = class;
        }
        if let Some(hsc_batch) = patch.hsc_batch {
            certificate.hsc_batch = hsc_batch;
        }
        certificate.updated_at = now();

        certificate
            .into_active_model()
            .reset_all()
            .update(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn std::error::Error, "failed to update certificate");
            })
    }

    pub async fn delete<C: ConnectionTrait>(conn: &C, certificate: CertificateModel) -> Result<(), DbErr> {
        certificate.delete(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn std::error::Error, "failed to delete certificate");
        })?;
        Ok(())
    }
}
