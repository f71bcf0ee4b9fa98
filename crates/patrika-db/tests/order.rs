mod common;

use crate::common::setup_schema;
use patrika_db::order::mutation::NewOrder;
use patrika_db::order::{Mutation, Query};
use patrika_entity::order::{OrderItem, Status};
use sea_orm::Database;
use test_log::test;

fn new_order(phone: &str) -> NewOrder {
    NewOrder {
        customer_name: "Test Buyer".to_owned(),
        customer_email: "buyer@example.com".to_owned(),
        customer_phone: phone.to_owned(),
        delivery_address: "House 1, Road 2".to_owned(),
        notes: String::new(),
        items: vec![
            OrderItem {
                product_id: "jersey".to_owned(),
                product_name: "Club Jersey".to_owned(),
                size: "M".to_owned(),
                quantity: 2,
                price: 450.0,
            },
            OrderItem {
                product_id: "mug".to_owned(),
                product_name: "Club Mug".to_owned(),
                size: "-".to_owned(),
                quantity: 1,
                price: 150.0,
            },
        ],
        user_id: Some("subject-1".to_owned()),
        student_profile: None,
    }
}

#[test(tokio::test)]
async fn test_total_is_derived_from_items() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let order = Mutation::create(db, new_order("01700000000")).await.unwrap();

    assert_eq!(order.total_amount, 1050.0);
    assert_eq!(order.status, Status::Pending);
}

#[test(tokio::test)]
async fn test_status_transition_persists() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let order = Mutation::create(db, new_order("01700000000")).await.unwrap();
    Mutation::set_status(db, order.clone(), Status::Shipped).await.unwrap();

    let stored = Query::find_by_id(db, order.id).await.unwrap().unwrap();
    assert_eq!(stored.status, Status::Shipped);
}

#[test(tokio::test)]
async fn test_listing_filters_by_status_and_user() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let shipped = Mutation::create(db, new_order("01700000000")).await.unwrap();
    Mutation::set_status(db, shipped, Status::Shipped).await.unwrap();
    let other = Mutation::create(
        db,
        NewOrder {
            user_id: Some("subject-2".to_owned()),
            ..new_order("01800000000")
        },
    )
    .await
    .unwrap();

    assert_eq!(Query::list(db, None, None).await.unwrap().len(), 2);

    let shipped_only = Query::list(db, Some(Status::Shipped), None).await.unwrap();
    assert_eq!(shipped_only.len(), 1);
    assert_eq!(shipped_only[0].status, Status::Shipped);

    let for_user = Query::list(db, None, Some("subject-2")).await.unwrap();
    assert_eq!(for_user.len(), 1);
    assert_eq!(for_user[0].id, other.id);

    assert!(Query::list(db, Some(Status::Shipped), Some("subject-2")).await.unwrap().is_empty());
}

#[test(tokio::test)]
async fn test_contact_lookup_requires_a_contact() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    Mutation::create(db, new_order("01700000000")).await.unwrap();

    assert!(Query::list_by_contact(db, None, None).await.unwrap().is_empty());

    let by_phone = Query::list_by_contact(db, None, Some("01700000000")).await.unwrap();
    assert_eq!(by_phone.len(), 1);

    let by_email = Query::list_by_contact(db, Some("buyer@example.com"), None).await.unwrap();
    assert_eq!(by_email.len(), 1);
}
