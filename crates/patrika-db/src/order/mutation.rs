use patrika_entity::order::{self, Model as OrderModel, OrderItem, OrderItems, Status, StudentProfile};
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, IntoActiveModel, ModelTrait};
use uuid::Uuid;

use crate::util::now;

pub struct Mutation;

pub struct NewOrder {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub delivery_address: String,
    pub notes: String,
    pub items: Vec<OrderItem>,
    pub user_id: Option<String>,
    pub student_profile: Option<StudentProfile>,
}

impl Mutation {
    /// The total is derived from the items here, never taken from the caller.
    pub async fn create<C: ConnectionTrait>(conn: &C, new: NewOrder) -> Result<OrderModel, DbErr> {
        let total_amount = new
            .items
            .iter()
            .map(|item| item.price * f64::from(item.quantity))
            .sum();

        let created_at = now();
        let order = order::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            customer_name: ActiveValue::Set(new.customer_name),
            customer_email: ActiveValue::Set(new.customer_email),
            customer_phone: ActiveValue::Set(new.customer_phone),
            delivery_address: ActiveValue::Set(new.delivery_address),
            notes: ActiveValue::Set(new.notes),
            items: ActiveValue::Set(OrderItems(new.items)),
            total_amount: ActiveValue::Set(total_amount),
            user_id: ActiveValue::Set(new.user_id),
            student_profile: ActiveValue::Set(new.student_profile),
            status: ActiveValue::Set(Status::Pending),
            created_at: ActiveValue::Set(created_at),
            updated_at: ActiveValue::Set(created_at),
        };

        order.insert(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn std::error::Error, "failed to create order");
        })
    }

    pub async fn set_status<C: ConnectionTrait>(
        conn: &C,
        mut order: OrderModel,
        status: Status,
    ) -> Result<OrderModel, DbErr> {
        order.status = status;
        order.updated_at = now();

        order
            .into_active_model()
            .reset_all()
            .update(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn std::error::Error, "failed to update order");
            })
    }

    pub async fn delete<C: ConnectionTrait>(conn: &C, order: OrderModel) -> Result<(), DbErr> {
        order.delete(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn std::error::Error, "failed to delete order");
        })?;
        Ok(())
    }
}
