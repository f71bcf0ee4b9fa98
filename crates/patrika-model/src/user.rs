use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::registration::{Department, Version};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserProfile {
    pub id: Uuid,
    pub subject_id: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub email: Option<String>,
    pub name: String,
    pub class: i16,
    pub department: Department,
    pub version: Version,
    pub whatsapp: String,
    pub section: String,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpsertProfile {
    pub name: String,
    pub class: i16,
    pub department: Department,
    pub version: Version,
    pub whatsapp: String,
    pub section: String,
}
