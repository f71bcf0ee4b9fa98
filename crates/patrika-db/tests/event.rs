mod common;

use crate::common::setup_schema;
use chrono::{DateTime, Duration, FixedOffset, Utc};
use patrika_db::event::mutation::{EventPatch, NewEvent};
use patrika_db::event::{Mutation, Query};
use patrika_entity::event::Status;
use sea_orm::Database;
use test_log::test;

fn in_days(days: i64) -> DateTime<FixedOffset> {
    (Utc::now() + Duration::days(days)).fixed_offset()
}

fn new_event(slug: &str, date: DateTime<FixedOffset>, status: Status) -> NewEvent {
    NewEvent {
        title: "Science Fair".to_owned(),
        slug: slug.to_owned(),
        date,
        location: "Auditorium".to_owned(),
        short_description: "Annual fair".to_owned(),
        description: "Projects from all departments".to_owned(),
        cover_image: "/img/fair.jpg".to_owned(),
        images: vec!["/img/fair-1.jpg".to_owned()],
        color: "#0f766e".to_owned(),
        glow: "glow-teal".to_owned(),
        status,
    }
}

#[test(tokio::test)]
async fn test_find_by_slug() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let created = Mutation::create(db, new_event("science-fair", in_days(7), Status::Upcoming))
        .await
        .unwrap();

    let found = Query::find_by_slug(db, "science-fair").await.unwrap().unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.date, created.date);
    assert!(Query::find_by_slug(db, "no-such-event").await.unwrap().is_none());
}

#[test(tokio::test)]
async fn test_upcoming_listing_is_soonest_first() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    Mutation::create(db, new_event("later", in_days(30), Status::Upcoming)).await.unwrap();
    Mutation::create(db, new_event("soon", in_days(2), Status::Upcoming)).await.unwrap();
    Mutation::create(db, new_event("gone", in_days(-10), Status::Past)).await.unwrap();

    let upcoming = Query::list(db, Some(Status::Upcoming)).await.unwrap();
    let slugs = upcoming.iter().map(|event| event.slug.as_str()).collect::<Vec<_>>();
    assert_eq!(slugs, ["soon", "later"]);

    let past = Query::list(db, Some(Status::Past)).await.unwrap();
    assert_eq!(past.len(), 1);
    assert_eq!(past[0].slug, "gone");

    assert_eq!(Query::list(db, None).await.unwrap().len(), 3);
}

#[test(tokio::test)]
async fn test_patch_never_touches_the_slug() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let event = Mutation::create(db, new_event("science-fair", in_days(7), Status::Upcoming))
        .await
        .unwrap();

    let rescheduled = in_days(14);
    let event = Mutation::update(
        db,
        event,
        EventPatch {
            date: Some(rescheduled),
            status: Some(Status::Past),
            ..EventPatch::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(event.slug, "science-fair");
    assert_eq!(event.date, rescheduled);
    assert_eq!(event.status, Status::Past);
    assert_eq!(event.title, "Science Fair");
}

#[test(tokio::test)]
async fn test_delete_event() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let event = Mutation::create(db, new_event("science-fair", in_days(7), Status::Upcoming))
        .await
        .unwrap();
    Mutation::delete(db, event).await.unwrap();

    assert!(Query::find_by_slug(db, "science-fair").await.unwrap().is_none());
}
