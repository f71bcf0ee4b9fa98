mod common;

use crate::common::setup_schema;
use patrika_db::course::{Mutation, Query};
use sea_orm::{Database, DbErr};
use test_log::test;
use uuid::Uuid;

#[test(tokio::test)]
async fn test_module_and_question_lifecycle() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let course = Mutation::create(db, "Olympiad Prep".to_owned(), "Problem solving".to_owned())
        .await
        .unwrap();
    assert!(course.modules.0.is_empty());

    let course = Mutation::add_module(
        db,
        course,
        "Inequalities".to_owned(),
        "AM-GM and friends".to_owned(),
        "https://youtube.com/watch?v=abc".to_owned(),
    )
    .await
    .unwrap();
    assert_eq!(course.modules.0.len(), 1);
    let module_id = course.modules.0[0].id;

    let course = Mutation::add_question(
        db,
        course,
        module_id,
        "Which is larger?".to_owned(),
        vec!["AM".to_owned(), "GM".to_owned()],
        "AM".to_owned(),
    )
    .await
    .unwrap();
    assert_eq!(course.modules.0[0].questions.len(), 1);
    let question_id = course.modules.0[0].questions[0].id;

    let course = Mutation::remove_question(db, course, module_id, question_id)
        .await
        .unwrap();
    assert!(course.modules.0[0].questions.is_empty());

    let course = Mutation::remove_module(db, course, module_id).await.unwrap();
    assert!(course.modules.0.is_empty());

    // the denormalized list survives a reload
    let stored = Query::find_by_id(db, course.id).await.unwrap().unwrap();
    assert!(stored.modules.0.is_empty());
}

#[test(tokio::test)]
async fn test_missing_module_is_not_found() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let course = Mutation::create(db, "Olympiad Prep".to_owned(), "Problem solving".to_owned())
        .await
        .unwrap();

    let result = Mutation::remove_module(db, course, Uuid::new_v4()).await;
    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));
}
