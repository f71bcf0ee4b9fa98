use std::error::Error;

use patrika_entity::registration::{self, Entity as Registration, Model as RegistrationModel, Status};
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

pub struct Query;

impl Query {
    pub async fn find_by_id<C: ConnectionTrait>(
        conn: &C,
        id: Uuid,
    ) -> Result<Option<RegistrationModel>, DbErr> {
        Registration::find_by_id(id)
            .one(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to load registration"))
    }

    /// A subject's registrations, newest first. A subject may hold several
    /// records over time (declined then re-applied).
    pub async fn find_by_subject<C: ConnectionTrait>(
        conn: &C,
        subject_id: &str,
    ) -> Result<Vec<RegistrationModel>, DbErr> {
        Registration::find()
            .filter(registration::Column::SubjectId.eq(subject_id))
            .order_by_desc(registration::Column::CreatedAt)
            .all(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to load registrations"))
    }

    /// Registrations already holding the given membership code, excluding
    /// declined ones. Used for the duplicate-code check on apply.
    pub async fn find_active_by_code<C: ConnectionTrait>(
        conn: &C,
        code: &str,
    ) -> Result<Vec<RegistrationModel>, DbErr> {
        Registration::find()
            .filter(registration::Column::Code.eq(code))
            .filter(registration::Column::Status.ne(Status::Declined))
            .all(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to load registrations by code"))
    }

    /// Building-scoped moderation queue. Buildings are free text entered by
    /// applicants, so the match is case-insensitive.
    pub async fn list_for_building<C: ConnectionTrait>(
        conn: &C,
        building: &str,
        status: Option<Status>,
    ) -> Result<Vec<RegistrationModel>, DbErr> {
        let mut query = Registration::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(registration::Column::Building)))
                    .eq(building.to_lowercase()),
            )
            .order_by_desc(registration::Column::CreatedAt);

        if let Some(status) = status {
            query = query.filter(registration::Column::Status.eq(status));
        }

        query
            .all(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to list registrations"))
    }

}
