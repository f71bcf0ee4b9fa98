use patrika_db::journal;
use patrika_db::journal::mutation::NewJournalEntry;
use patrika_entity::journal::{Heading, Model as JournalEntryModel};
use sea_orm::DatabaseConnection;

#[allow(dead_code)]
pub async fn create_test_entry(db: &DatabaseConnection, author_id: &str, title: &str) -> JournalEntryModel {
    journal::Mutation::create_entry(
        db,
        NewJournalEntry {
            title: title.to_owned(),
            heading: Heading::H2,
            font_family: "serif".to_owned(),
            color: "#1a1a2e".to_owned(),
            body_html: "<p>hello</p>".to_owned(),
            latex_snippets: Vec::new(),
            author_id: author_id.to_owned(),
            author_name: Some("Test Author".to_owned()),
            author_email: Some("author@example.com".to_owned()),
            is_draft: false,
        },
    )
    .await
    .unwrap()
}
