use std::error::Error;

use patrika_entity::order::{self, Entity as Order, Model as OrderModel, Status};
use sea_orm::{ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

pub struct Query;

impl Query {
    pub async fn find_by_id<C: ConnectionTrait>(conn: &C, id: Uuid) -> Result<Option<OrderModel>, DbErr> {
        Order::find_by_id(id)
            .one(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to load order"))
    }

    pub async fn list<C: ConnectionTrait>(
        conn: &C,
        status: Option<Status>,
        user_id: Option<&str>,
    ) -> Result<Vec<OrderModel>, DbErr> {
        let mut query = Order::find().order_by_desc(order::Column::CreatedAt);
        if let Some(status) = status {
            query = query.filter(order::Column::Status.eq(status));
        }
        if let Some(user_id) = user_id {
            query = query.filter(order::Column::UserId.eq(user_id));
        }

        query
            .all(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to list orders"))
    }

    pub async fn list_for_user<C: ConnectionTrait>(
        conn: &C,
        user_id: &str,
    ) -> Result<Vec<OrderModel>, DbErr> {
        Order::find()
            .filter(order::Column::UserId.eq(user_id))
            .order_by_desc(order::Column::CreatedAt)
            .all(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to list user orders"))
    }

    /// Order history for the admin detail views, matched on the contact
    /// points recorded on the order itself.
    pub async fn list_by_contact<C: ConnectionTrait>(
        conn: &C,
        email: Option<&str>,
        phone: Option<&str>,
    ) -> Result<Vec<OrderModel>, DbErr> {
        if email.is_none() && phone.is_none() {
            return Ok(Vec::new());
        }

        let mut condition = Condition::any();
        if let Some(email) = email {
            condition = condition.add(order::Column::CustomerEmail.eq(email));
        }
        if let Some(phone) = phone {
            condition = condition.add(order::Column::CustomerPhone.eq(phone));
        }

        Order::find()
            .filter(condition)
            .order_by_desc(order::Column::CreatedAt)
            .all(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to list orders by contact"))
    }
}
