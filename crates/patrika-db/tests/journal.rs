mod common;

use crate::common::journal::create_test_entry;
use crate::common::setup_schema;
use patrika_db::journal::mutation::JournalEntryPatch;
use patrika_db::journal::query::{ListFilter, SortOrder, Window};
use patrika_db::journal::{Mutation, Query};
use patrika_entity::journal::Heading;
use sea_orm::Database;
use test_log::test;

#[test(tokio::test)]
async fn test_new_entry_starts_unapproved() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let entry = create_test_entry(db, "author-1", "First Post").await;

    assert!(!entry.approved);
    assert!(entry.approved_by.is_none());
    assert!(entry.approved_at.is_none());
    assert!(entry.published_at.is_none());
    assert_eq!(entry.engagement_score, 0.0);
}

#[test(tokio::test)]
async fn test_approve_sets_approval_record() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let entry = create_test_entry(db, "author-1", "First Post").await;
    let entry = Mutation::approve_entry(db, entry, "moderator").await.unwrap();

    assert!(entry.approved);
    assert_eq!(entry.approved_by.as_deref(), Some("moderator"));
    assert!(entry.approved_at.is_some());
    assert_eq!(entry.published_at, entry.approved_at);
}

#[test(tokio::test)]
async fn test_edit_revokes_approval() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let entry = create_test_entry(db, "author-1", "First Post").await;
    let entry = Mutation::approve_entry(db, entry, "moderator").await.unwrap();

    let entry = Mutation::update_entry(
        db,
        entry,
        JournalEntryPatch {
            body_html: Some("<p>edited</p>".to_owned()),
            ..JournalEntryPatch::default()
        },
    )
    .await
    .unwrap();

    assert!(!entry.approved);
    assert!(entry.approved_by.is_none());
    assert!(entry.approved_at.is_none());
    assert!(entry.published_at.is_none());
    assert_eq!(entry.body_html, "<p>edited</p>");

    // the revocation is persisted, not just on the returned model
    let stored = Query::find_by_id(db, entry.id).await.unwrap().unwrap();
    assert!(!stored.approved);
}

#[test(tokio::test)]
async fn test_patch_applies_selected_fields_only() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let entry = create_test_entry(db, "author-1", "First Post").await;
    let entry = Mutation::update_entry(
        db,
        entry,
        JournalEntryPatch {
            title: Some("Renamed".to_owned()),
            heading: Some(Heading::H1),
            ..JournalEntryPatch::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(entry.title, "Renamed");
    assert_eq!(entry.heading, Heading::H1);
    assert_eq!(entry.body_html, "<p>hello</p>");
    assert_eq!(entry.font_family, "serif");
}

#[test(tokio::test)]
async fn test_toggle_like_twice_restores() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let entry = create_test_entry(db, "author-1", "First Post").await;

    let (entry, liked) = Mutation::toggle_like(db, entry, "reader-1").await.unwrap();
    assert!(liked);
    assert_eq!(entry.likes.len(), 1);
    assert_eq!(entry.engagement_score, 1.0);

    let (entry, liked) = Mutation::toggle_like(db, entry, "reader-1").await.unwrap();
    assert!(!liked);
    assert!(entry.likes.is_empty());
    assert_eq!(entry.engagement_score, 0.0);
}

#[test(tokio::test)]
async fn test_engagement_score_tracks_mutations() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let entry = create_test_entry(db, "author-1", "First Post").await;

    let (entry, _) = Mutation::toggle_like(db, entry, "reader-1").await.unwrap();
    let entry = Mutation::add_comment(
        db,
        entry,
        "reader-2".to_owned(),
        "Reader Two".to_owned(),
        None,
        "nice one".to_owned(),
    )
    .await
    .unwrap();
    let entry = Mutation::add_sticker(db, entry, "star").await.unwrap();

    // 1 like + 1 comment * 2 + 1 sticker * 1.5
    assert_eq!(entry.engagement_score, 4.5);

    let stored = Query::find_by_id(db, entry.id).await.unwrap().unwrap();
    assert_eq!(stored.engagement_score, 4.5);
    assert_eq!(stored.comments.len(), 1);
    assert_eq!(stored.stickers.total(), 1);
}

#[test(tokio::test)]
async fn test_comments_are_append_only() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let entry = create_test_entry(db, "author-1", "First Post").await;
    let entry = Mutation::add_comment(
        db,
        entry,
        "reader-1".to_owned(),
        "Reader One".to_owned(),
        Some("one@example.com".to_owned()),
        "first".to_owned(),
    )
    .await
    .unwrap();
    let entry = Mutation::add_comment(
        db,
        entry,
        "reader-2".to_owned(),
        "Reader Two".to_owned(),
        None,
        "second".to_owned(),
    )
    .await
    .unwrap();

    assert_eq!(entry.comments.len(), 2);
    assert_eq!(entry.comments.0[0].text, "first");
    assert_eq!(entry.comments.0[1].text, "second");
}

#[test(tokio::test)]
async fn test_public_feed_hides_unapproved() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let pending = create_test_entry(db, "author-1", "Pending Post").await;
    let approved = create_test_entry(db, "author-2", "Approved Post").await;
    Mutation::approve_entry(db, approved, "moderator").await.unwrap();

    let feed = Query::list(
        db,
        ListFilter {
            limit: 20,
            ..ListFilter::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0].title, "Approved Post");
    assert!(!feed.iter().any(|entry| entry.id == pending.id));
}

#[test(tokio::test)]
async fn test_feed_unions_own_pending_entries() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    create_test_entry(db, "author-1", "My Pending Post").await;
    let other = create_test_entry(db, "author-2", "Other Pending Post").await;
    let approved = create_test_entry(db, "author-2", "Approved Post").await;
    Mutation::approve_entry(db, approved, "moderator").await.unwrap();

    let feed = Query::list(
        db,
        ListFilter {
            include_author: Some("author-1".to_owned()),
            limit: 20,
            ..ListFilter::default()
        },
    )
    .await
    .unwrap();

    let titles: Vec<_> = feed.iter().map(|entry| entry.title.as_str()).collect();
    assert!(titles.contains(&"My Pending Post"));
    assert!(titles.contains(&"Approved Post"));
    assert!(!feed.iter().any(|entry| entry.id == other.id));
}

#[test(tokio::test)]
async fn test_feed_title_search_is_case_insensitive() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let matching = create_test_entry(db, "author-1", "Number Theory Notes").await;
    let other = create_test_entry(db, "author-1", "Geometry Recap").await;
    Mutation::approve_entry(db, matching, "moderator").await.unwrap();
    Mutation::approve_entry(db, other, "moderator").await.unwrap();

    let feed = Query::list(
        db,
        ListFilter {
            title_query: Some("nUmBeR".to_owned()),
            limit: 20,
            ..ListFilter::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0].title, "Number Theory Notes");
}

#[test(tokio::test)]
async fn test_feed_sorts_by_engagement() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let quiet = create_test_entry(db, "author-1", "Quiet Post").await;
    let popular = create_test_entry(db, "author-1", "Popular Post").await;
    Mutation::approve_entry(db, quiet, "moderator").await.unwrap();
    let popular = Mutation::approve_entry(db, popular, "moderator").await.unwrap();
    Mutation::add_comment(
        db,
        popular,
        "reader-1".to_owned(),
        "Reader One".to_owned(),
        None,
        "great".to_owned(),
    )
    .await
    .unwrap();

    let feed = Query::list(
        db,
        ListFilter {
            sort: SortOrder::Engagement,
            limit: 20,
            ..ListFilter::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(feed[0].title, "Popular Post");
    assert_eq!(feed[1].title, "Quiet Post");
}

#[test(tokio::test)]
async fn test_feed_window_includes_fresh_publication() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let entry = create_test_entry(db, "author-1", "Fresh Post").await;
    Mutation::approve_entry(db, entry, "moderator").await.unwrap();

    let feed = Query::list(
        db,
        ListFilter {
            published_within: Some(Window::Day),
            limit: 20,
            ..ListFilter::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(feed.len(), 1);
}

#[test(tokio::test)]
async fn test_pending_queue_excludes_drafts_and_approved() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let submitted = create_test_entry(db, "author-1", "Submitted Post").await;
    let approved = create_test_entry(db, "author-2", "Approved Post").await;
    Mutation::approve_entry(db, approved, "moderator").await.unwrap();

    let draft = create_test_entry(db, "author-3", "Draft Post").await;
    Mutation::update_entry(
        db,
        draft,
        JournalEntryPatch {
            is_draft: Some(true),
            ..JournalEntryPatch::default()
        },
    )
    .await
    .unwrap();

    let queue = Query::list_pending(db).await.unwrap();
    assert_eq!(queue.len(), 1);
    assert_eq!(queue[0].id, submitted.id);
}

#[test(tokio::test)]
async fn test_delete_removes_entry() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let entry = create_test_entry(db, "author-1", "Short Lived").await;
    let id = entry.id;
    Mutation::delete_entry(db, entry).await.unwrap();

    assert!(Query::find_by_id(db, id).await.unwrap().is_none());
}
