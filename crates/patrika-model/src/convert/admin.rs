use patrika_entity::admin::Model as AdminModel;

use crate::admin::Admin;
use crate::convert::FromDbModel;

impl FromDbModel<AdminModel> for Admin {
    fn from_db_model(model: AdminModel) -> Self {
        Self {
            id: model.id,
            username: model.username,
            building: model.building,
            created_at: model.created_at,
        }
    }
}
