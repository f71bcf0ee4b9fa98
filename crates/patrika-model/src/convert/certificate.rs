use patrika_entity::certificate::Model as CertificateModel;

use crate::certificate::Certificate;
use crate::convert::FromDbModel;

impl FromDbModel<CertificateModel> for Certificate {
    fn from_db_model(model: CertificateModel) -> Self {
        Self {
            id: model.id,
            search_id: model.search_id,
            name: model.name,
            serving_event: model.serving_event,
            code: model.code,
            class: model.class,
            hsc_batch: model.hsc_batch,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
