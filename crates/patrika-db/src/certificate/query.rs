use std::error::Error;

use patrika_entity::certificate::{self, Entity as Certificate, Model as CertificateModel};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

pub struct Query;

impl Query {
    pub async fn find_by_id<C: ConnectionTrait>(
        conn: &C,
        id: Uuid,
    ) -> Result<Option<CertificateModel>, DbErr> {
        Certificate::find_by_id(id)
            .one(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to load certificate"))
    }

    /// Public verification lookup by the printed search id.
    pub async fn find_by_search_id<C: ConnectionTrait>(
        conn: &C,
        search_id: &str,
    ) -> Result<Option<CertificateModel>, DbErr> {
        Certificate::find()
            .filter(certificate::Column::SearchId.eq(search_id))
            .one(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to load certificate"))
    }

    pub async fn list<C: ConnectionTrait>(conn: &C) -> Result<Vec<CertificateModel>, DbErr> {
        Certificate::find()
            .order_by_desc(certificate::Column::CreatedAt)
            .all(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to list certificates"))
    }
}
