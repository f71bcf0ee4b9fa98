use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Clone, Copy, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "lowercase")]
pub enum Campus {
    #[sea_orm(string_value = "main campus")]
    #[serde(rename = "main campus")]
    Main,
    #[sea_orm(string_value = "permanent campus")]
    #[serde(rename = "permanent campus")]
    Permanent,
}

#[derive(Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Clone, Copy, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum Version {
    #[sea_orm(string_value = "english")]
    English,
    #[sea_orm(string_value = "bangla")]
    Bangla,
}

#[derive(Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Clone, Copy, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum Department {
    #[sea_orm(string_value = "science")]
    Science,
    #[sea_orm(string_value = "bst")]
    Bst,
    #[sea_orm(string_value = "arts")]
    Arts,
}

#[derive(Debug, Default, PartialEq, Eq, EnumIter, DeriveActiveEnum, Clone, Copy, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "approved")]
    Approved,
    #[sea_orm(string_value = "declined")]
    Declined,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "registration")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// External subject id of the applicant.
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
    pub approved_by: Option<String>,
    pub approved_at: Option<DateTimeWithTimeZone>,
    pub declined_reason: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub const VALID_CLASSES: [i16; 4] = [9, 10, 11, 12];
