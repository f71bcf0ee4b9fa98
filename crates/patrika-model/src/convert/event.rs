use patrika_entity::event::{Model as EventModel, Status as StatusModel};

use crate::convert::{FromDbModel, IntoDbModel, IntoModel};
use crate::event::{Event, Status};

impl FromDbModel<StatusModel> for Status {
    fn from_db_model(model: StatusModel) -> Self {
        match model {
            StatusModel::Upcoming => Self::Upcoming,
            StatusModel::Past => Self::Past,
        }
    }
}

impl IntoDbModel<StatusModel> for Status {
    fn into_db_model(self) -> StatusModel {
        match self {
            Self::Upcoming => StatusModel::Upcoming,
            Self::Past => StatusModel::Past,
        }
    }
}

impl FromDbModel<EventModel> for Event {
    fn from_db_model(model: EventModel) -> Self {
        Self {
            id: model.id,
            title: model.title,
            slug: model.slug,
            date: model.date,
            location: model.location,
            short_description: model.short_description,
            description: model.description,
            cover_image: model.cover_image,
            images: model.images.0,
            color: model.color,
            glow: model.glow,
            status: model.status.into_model(),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
