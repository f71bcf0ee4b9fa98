mod common;

use crate::common::setup_schema;
use patrika_db::admin::{Mutation, Query};
use sea_orm::Database;
use test_log::test;

#[test(tokio::test)]
async fn test_account_is_stored_lowercase() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let account = Mutation::create(
        db,
        "Alice".to_owned(),
        "$2b$12$fakehashfortestingonly".to_owned(),
        "Main Building".to_owned(),
    )
    .await
    .unwrap();

    assert_eq!(account.username, "alice");
    assert_eq!(account.building, "main building");
}

#[test(tokio::test)]
async fn test_username_lookup_ignores_case() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    Mutation::create(
        db,
        "Alice".to_owned(),
        "$2b$12$fakehashfortestingonly".to_owned(),
        "mainbuilding".to_owned(),
    )
    .await
    .unwrap();

    assert!(Query::find_by_username(db, "alice").await.unwrap().is_some());
    assert!(Query::find_by_username(db, "ALICE").await.unwrap().is_some());
    assert!(Query::find_by_username(db, "bob").await.unwrap().is_none());
}

#[test(tokio::test)]
async fn test_mixed_case_duplicate_hits_unique_constraint() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    Mutation::create(
        db,
        "Alice".to_owned(),
        "$2b$12$fakehashfortestingonly".to_owned(),
        "mainbuilding".to_owned(),
    )
    .await
    .unwrap();

    let duplicate = Mutation::create(
        db,
        "ALICE".to_owned(),
        "$2b$12$fakehashfortestingonly".to_owned(),
        "mainbuilding".to_owned(),
    )
    .await;
    assert!(duplicate.is_err());
}
