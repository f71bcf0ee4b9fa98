use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Certificate {
    pub id: Uuid,
    pub search_id: String,
    pub name: String,
    pub serving_event: String,
    pub code: String,
    pub class: String,
    pub hsc_batch: String,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NewCertificate {
    pub search_id: String,
    pub name: String,
    pub serving_event: String,
    pub code: String,
    pub class: String,
    pub hsc_batch: String,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateCertificate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub serving_event: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub hsc_batch: Option<String>,
}
