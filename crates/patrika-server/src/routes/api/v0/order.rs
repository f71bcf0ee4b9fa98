use axum::Extension;
use axum::extract::{Path, Query};
use axum::response::{IntoResponse, Json};
use axum::routing::{Router, get, put};
use http::StatusCode;
use patrika_db::order;
use patrika_db::order::mutation::NewOrder as NewOrderRecord;
use patrika_db::sea_orm::DatabaseConnection;
use patrika_model::convert::{FromDbModel, IntoDbModel};
use patrika_model::order::{NewOrder, Order, Status, UpdateOrderStatus};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::identity::{ExtractAdmin, ExtractIdentity};
use crate::routes::error::ApiError;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(list_orders).post(place_order))
        .route("/my", get(my_orders))
        .route("/{order_id}", get(get_order).delete(delete_order))
        .route("/{order_id}/status", put(set_order_status))
        .with_state(())
}

#[derive(Debug, Deserialize, IntoParams)]
pub(crate) struct OrderListQuery {
    /// Restrict the listing to a single fulfilment state.
    pub(crate) status: Option<Status>,
    /// Restrict the listing to orders placed by one account.
    pub(crate) user: Option<String>,
}

fn validate(body: &NewOrder) -> Result<(), ApiError> {
    if body.customer_name.trim().is_empty() {
        return Err(ApiError::validation("customer name is required"));
    }
    if body.customer_email.trim().is_empty() {
        return Err(ApiError::validation("customer email is required"));
    }
    if body.customer_phone.trim().is_empty() {
        return Err(ApiError::validation("customer phone is required"));
    }
    if body.delivery_address.trim().is_empty() {
        return Err(ApiError::validation("delivery address is required"));
    }
    if body.items.is_empty() {
        return Err(ApiError::validation("order must contain at least one item"));
    }
    for item in &body.items {
        if item.quantity == 0 {
            return Err(ApiError::validation("item quantity must be at least 1"));
        }
        if item.price < 0.0 {
            return Err(ApiError::validation("item price must not be negative"));
        }
    }

    let total: f64 = body.items.iter().map(|item| item.price * f64::from(item.quantity)).sum();
    if total <= 0.0 {
        return Err(ApiError::validation("order total must be positive"));
    }
    Ok(())
}

/// Orders may be placed anonymously; a bearer token, when present, ties
/// the order to the account for later lookup under `/orders/my`.
#[utoipa::path(
    post,
    path = "/api/v0/orders",
    request_body = NewOrder,
    responses(
        (status = CREATED, description = "Order placed", body = Order),
        (status = BAD_REQUEST, description = "Missing contact details or empty cart"),
    ),
    tag = "v0/orders",
    security(
        (),
        ("token" = [])
    )
)]
pub(crate) async fn place_order(
    identity: Option<ExtractIdentity>,
    Extension(conn): Extension<DatabaseConnection>,
    Json(body): Json<NewOrder>,
) -> Result<impl IntoResponse, ApiError> {
    validate(&body)?;

    let record = order::Mutation::create(
        &conn,
        NewOrderRecord {
            customer_name: body.customer_name,
            customer_email: body.customer_email,
            customer_phone: body.customer_phone,
            delivery_address: body.delivery_address,
            notes: body.notes,
            items: body.items.into_iter().map(IntoDbModel::into_db_model).collect(),
            user_id: identity.as_ref().map(|ExtractIdentity(identity)| identity.subject.clone()),
            student_profile: body.student_profile.map(IntoDbModel::into_db_model),
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(Order::from_db_model(record))))
}

#[utoipa::path(
    get,
    path = "/api/v0/orders/my",
    responses(
        (status = OK, description = "The requester's orders, newest first", body = [Order]),
    ),
    tag = "v0/orders",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn my_orders(
    ExtractIdentity(identity): ExtractIdentity,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<impl IntoResponse, ApiError> {
    let records = order::Query::list_for_user(&conn, &identity.subject).await?;
    let records = records.into_iter().map(Order::from_db_model).collect::<Vec<_>>();
    Ok(Json(records))
}

#[utoipa::path(
    get,
    path = "/api/v0/orders",
    params(OrderListQuery),
    responses(
        (status = OK, description = "All orders, newest first", body = [Order]),
    ),
    tag = "v0/orders",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn list_orders(
    ExtractAdmin(_claims): ExtractAdmin,
    Query(query): Query<OrderListQuery>,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<impl IntoResponse, ApiError> {
    let records = order::Query::list(
        &conn,
        query.status.map(IntoDbModel::into_db_model),
        query.user.as_deref(),
    )
    .await?;
    let records = records.into_iter().map(Order::from_db_model).collect::<Vec<_>>();
    Ok(Json(records))
}

#[utoipa::path(
    get,
    path = "/api/v0/orders/{order_id}",
    responses(
        (status = OK, description = "The order", body = Order),
        (status = NOT_FOUND, description = "No such order"),
    ),
    tag = "v0/orders",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn get_order(
    ExtractAdmin(_claims): ExtractAdmin,
    Path(order_id): Path<Uuid>,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<impl IntoResponse, ApiError> {
    let record = order::Query::find_by_id(&conn, order_id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(Order::from_db_model(record)))
}

#[utoipa::path(
    delete,
    path = "/api/v0/orders/{order_id}",
    responses(
        (status = NO_CONTENT, description = "Order removed"),
        (status = NOT_FOUND, description = "No such order"),
    ),
    tag = "v0/orders",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn delete_order(
    ExtractAdmin(_claims): ExtractAdmin,
    Path(order_id): Path<Uuid>,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<impl IntoResponse, ApiError> {
    let record = order::Query::find_by_id(&conn, order_id)
        .await?
        .ok_or(ApiError::NotFound)?;
    order::Mutation::delete(&conn, record).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    put,
    path = "/api/v0/orders/{order_id}/status",
    request_body = UpdateOrderStatus,
    responses(
        (status = OK, description = "Status updated", body = Order),
        (status = NOT_FOUND, description = "No such order"),
    ),
    tag = "v0/orders",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn set_order_status(
    ExtractAdmin(_claims): ExtractAdmin,
    Path(order_id): Path<Uuid>,
    Extension(conn): Extension<DatabaseConnection>,
    Json(body): Json<UpdateOrderStatus>,
) -> Result<impl IntoResponse, ApiError> {
    let record = order::Query::find_by_id(&conn, order_id)
        .await?
        .ok_or(ApiError::NotFound)?;
    let record = order::Mutation::set_status(&conn, record, body.status.into_db_model()).await?;
    Ok(Json(Order::from_db_model(record)))
}

#[cfg(test)]
mod tests {
    use patrika_model::order::OrderItem;

    use super::*;

    fn order_with_items(items: Vec<OrderItem>) -> NewOrder {
        NewOrder {
            customer_name: "Test Buyer".to_owned(),
            customer_email: "buyer@example.com".to_owned(),
            customer_phone: "01700000000".to_owned(),
            delivery_address: "Dhaka".to_owned(),
            notes: String::new(),
            items,
            student_profile: None,
        }
    }

    fn item(quantity: u32, price: f64) -> OrderItem {
        OrderItem {
            product_id: "hoodie-1".to_owned(),
            product_name: "Club Hoodie".to_owned(),
            size: "M".to_owned(),
            quantity,
            price,
        }
    }

    #[test]
    fn priced_order_passes_validation() {
        assert!(validate(&order_with_items(vec![item(2, 500.0)])).is_ok());
    }

    #[test]
    fn zero_total_is_rejected() {
        let result = validate(&order_with_items(vec![item(3, 0.0)]));
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[test]
    fn empty_cart_is_rejected() {
        let result = validate(&order_with_items(Vec::new()));
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[test]
    fn zero_quantity_item_is_rejected() {
        let result = validate(&order_with_items(vec![item(0, 500.0)]));
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }
}
