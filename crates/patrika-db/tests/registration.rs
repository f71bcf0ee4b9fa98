mod common;

use crate::common::setup_schema;
use patrika_db::registration::mutation::NewRegistration;
use patrika_db::registration::{Mutation, Query};
use patrika_entity::registration::{Campus, Department, Status, Version};
use sea_orm::Database;
use test_log::test;

fn new_registration(subject_id: &str, code: &str, building: &str) -> NewRegistration {
    NewRegistration {
        subject_id: subject_id.to_owned(),
        name: "Test Student".to_owned(),
        code: code.to_owned(),
        class: 10,
        section: "A".to_owned(),
        campus: Campus::Main,
        version: Version::English,
        department: Department::Science,
        building: building.to_owned(),
        contact_number: "01700000000".to_owned(),
    }
}

#[test(tokio::test)]
async fn test_new_registration_is_pending() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let registration = Mutation::create(db, new_registration("subject-1", "1234", "mainbuilding"))
        .await
        .unwrap();

    assert_eq!(registration.status, Status::Pending);
    assert!(!registration.approved);
    assert!(registration.approved_by.is_none());
}

#[test(tokio::test)]
async fn test_approve_registration() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let registration = Mutation::create(db, new_registration("subject-1", "1234", "mainbuilding"))
        .await
        .unwrap();
    let registration = Mutation::approve(db, registration, "moderator").await.unwrap();

    assert_eq!(registration.status, Status::Approved);
    assert!(registration.approved);
    assert_eq!(registration.approved_by.as_deref(), Some("moderator"));
    assert!(registration.approved_at.is_some());
}

#[test(tokio::test)]
async fn test_decline_registration_records_reason() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let registration = Mutation::create(db, new_registration("subject-1", "1234", "mainbuilding"))
        .await
        .unwrap();
    let registration = Mutation::decline(db, registration, "moderator", Some("wrong code".to_owned()))
        .await
        .unwrap();

    assert_eq!(registration.status, Status::Declined);
    assert!(!registration.approved);
    assert_eq!(registration.declined_reason.as_deref(), Some("wrong code"));
}

#[test(tokio::test)]
async fn test_duplicate_code_check_ignores_declined() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let declined = Mutation::create(db, new_registration("subject-1", "1234", "mainbuilding"))
        .await
        .unwrap();
    Mutation::decline(db, declined, "moderator", None).await.unwrap();

    assert!(Query::find_active_by_code(db, "1234").await.unwrap().is_empty());

    Mutation::create(db, new_registration("subject-2", "1234", "mainbuilding"))
        .await
        .unwrap();

    let active = Query::find_active_by_code(db, "1234").await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].subject_id, "subject-2");
}

#[test(tokio::test)]
async fn test_building_queue_is_scoped() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    Mutation::create(db, new_registration("subject-1", "1111", "mainbuilding"))
        .await
        .unwrap();
    Mutation::create(db, new_registration("subject-2", "2222", "annex"))
        .await
        .unwrap();

    let queue = Query::list_for_building(db, "mainbuilding", Some(Status::Pending))
        .await
        .unwrap();
    assert_eq!(queue.len(), 1);
    assert_eq!(queue[0].subject_id, "subject-1");
}

#[test(tokio::test)]
async fn test_building_queue_ignores_case() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    Mutation::create(db, new_registration("subject-1", "1111", "Main Building"))
        .await
        .unwrap();

    let queue = Query::list_for_building(db, "main building", None).await.unwrap();
    assert_eq!(queue.len(), 1);
    assert_eq!(queue[0].subject_id, "subject-1");
}

#[test(tokio::test)]
async fn test_subject_history_newest_first() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let first = Mutation::create(db, new_registration("subject-1", "1111", "mainbuilding"))
        .await
        .unwrap();
    Mutation::decline(db, first, "moderator", None).await.unwrap();
    Mutation::create(db, new_registration("subject-1", "2222", "mainbuilding"))
        .await
        .unwrap();

    let history = Query::find_by_subject(db, "subject-1").await.unwrap();
    assert_eq!(history.len(), 2);
}
