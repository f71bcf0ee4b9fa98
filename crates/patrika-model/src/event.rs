use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Upcoming,
    Past,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub date: DateTime<FixedOffset>,
    pub location: String,
    pub short_description: String,
    pub description: String,
    pub cover_image: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub images: Vec<String>,
    pub color: String,
    pub glow: String,
    pub status: Status,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NewEvent {
    pub title: String,
    pub slug: String,
    pub date: DateTime<FixedOffset>,
    pub location: String,
    pub short_description: String,
    pub description: String,
    pub cover_image: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub color: String,
    pub glow: String,
    pub status: Status,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateEvent {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub date: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub glow: Option<String>,
    #[serde(default)]
    pub status: Option<Status>,
}
