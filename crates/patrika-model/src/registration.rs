use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Campus {
    #[serde(rename = "main campus")]
    Main,
    #[serde(rename = "permanent campus")]
    Permanent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Version {
    English,
    Bangla,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Department {
    Science,
    Bst,
    Arts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pending,
    Approved,
    Declined,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Registration {
    pub id: Uuid,
    pub subject_id: String,
    pub name: String,
    pub code: String,
    pub class: i16,
    pub section: String,
    pub campus: Campus,
    pub version: Version,
    pub department: Department,
    pub building: String,
    pub contact_number: String,
    pub approved: bool,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub approved_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub approved_at: Option<DateTime<FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub declined_reason: Option<String>,
    pub created_at: DateTime<FixedOffset>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NewRegistration {
    pub name: String,
    pub code: String,
    pub class: i16,
    pub section: String,
    pub campus: Campus,
    pub version: Version,
    pub department: Department,
    pub building: String,
    pub contact_number: String,
    /// Proceed even when the membership code is already taken.
    #[serde(default)]
    pub force: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeclineRegistration {
    #[serde(default)]
    pub reason: Option<String>,
}

/// Answer for the public status probe.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegistrationStatus {
    pub registered: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub status: Option<Status>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub declined_reason: Option<String>,
}
