use patrika_entity::user::Model as UserModel;

use crate::convert::{FromDbModel, IntoModel};
use crate::user::UserProfile;

impl FromDbModel<UserModel> for UserProfile {
    fn from_db_model(model: UserModel) -> Self {
        Self {
            id: model.id,
            subject_id: model.subject_id,
            email: model.email,
            name: model.name,
            class: model.class,
            department: model.department.into_model(),
            version: model.version.into_model(),
            whatsapp: model.whatsapp,
            section: model.section,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
