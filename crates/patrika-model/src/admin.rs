use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Admin account as exposed over the API. The password hash never leaves
/// the database layer.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Admin {
    pub id: Uuid,
    pub username: String,
    pub building: String,
    pub created_at: DateTime<FixedOffset>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Login {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Token {
    pub access_token: String,
    pub username: String,
    pub building: String,
}

/// Member drill-down for the admin panel: the registration record plus the
/// member's merch order history.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MemberDetails {
    pub registration: crate::registration::Registration,
    pub orders: Vec<crate::order::Order>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserDetails {
    pub profile: crate::user::UserProfile,
    pub orders: Vec<crate::order::Order>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NewAdmin {
    pub username: String,
    pub password: String,
    pub building: String,
    pub setup_key: String,
}
