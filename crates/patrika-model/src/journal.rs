use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Heading {
    H1,
    #[default]
    H2,
    H3,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Comment {
    pub user_id: String,
    pub user_name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub user_email: Option<String>,
    pub text: String,
    pub created_at: DateTime<FixedOffset>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct JournalEntry {
    pub id: Uuid,
    pub title: String,
    pub heading: Heading,
    pub font_family: String,
    pub color: String,
    pub body_html: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub latex_snippets: Vec<String>,
    pub author_id: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub author_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub author_email: Option<String>,
    pub is_draft: bool,
    pub approved: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub approved_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub approved_at: Option<DateTime<FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub published_at: Option<DateTime<FixedOffset>>,
    pub likes: Vec<String>,
    pub comments: Vec<Comment>,
    pub stickers: BTreeMap<String, i64>,
    pub engagement_score: f64,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NewJournalEntry {
    /// May be left empty only while the entry is a draft.
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub heading: Heading,
    #[serde(default = "default_font_family")]
    pub font_family: String,
    #[serde(default = "default_color")]
    pub color: String,
    pub body_html: String,
    #[serde(default)]
    pub latex_snippets: Vec<String>,
    #[serde(default)]
    pub is_draft: bool,
}

fn default_font_family() -> String {
    "serif".to_owned()
}

fn default_color() -> String {
    "#1a1a2e".to_owned()
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateJournalEntry {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub heading: Option<Heading>,
    #[serde(default)]
    pub font_family: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub body_html: Option<String>,
    #[serde(default)]
    pub latex_snippets: Option<Vec<String>>,
    #[serde(default)]
    pub is_draft: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NewComment {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NewSticker {
    pub symbol: String,
}

/// Outcome of a like toggle.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LikeOutcome {
    pub liked: bool,
    pub entry: JournalEntry,
}
