use sea_orm::entity::prelude::*;

use crate::registration::{Department, Version};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// External subject id, unique per profile.
    #[sea_orm(unique)]
    pub subject_id: String,
    pub email: Option<String>,
    pub name: String,
    pub class: i16,
    pub department: Department,
    pub version: Version,
    pub whatsapp: String,
    pub section: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
