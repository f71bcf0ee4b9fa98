use patrika_entity::registration::{
    Campus as CampusModel, Department as DepartmentModel, Model as RegistrationModel,
    Status as StatusModel, Version as VersionModel,
};

use crate::convert::{FromDbModel, IntoDbModel, IntoModel};
use crate::registration::{Campus, Department, Registration, Status, Version};

impl FromDbModel<CampusModel> for Campus {
    fn from_db_model(model: CampusModel) -> Self {
        match model {
            CampusModel::Main => Self::Main,
            CampusModel::Permanent => Self::Permanent,
        }
    }
}

impl IntoDbModel<CampusModel> for Campus {
    fn into_db_model(self) -> CampusModel {
        match self {
            Self::Main => CampusModel::Main,
            Self::Permanent => CampusModel::Permanent,
        }
    }
}

impl FromDbModel<VersionModel> for Version {
    fn from_db_model(model: VersionModel) -> Self {
        match model {
            VersionModel::English => Self::English,
            VersionModel::Bangla => Self::Bangla,
        }
    }
}

impl IntoDbModel<VersionModel> for Version {
    fn into_db_model(self) -> VersionModel {
        match self {
            Self::English => VersionModel::English,
            Self::Bangla => VersionModel::Bangla,
        }
    }
}

impl FromDbModel<DepartmentModel> for Department {
    fn from_db_model(model: DepartmentModel) -> Self {
        match model {
            DepartmentModel::Science => Self::Science,
            DepartmentModel::Bst => Self::Bst,
            DepartmentModel::Arts => Self::Arts,
        }
    }
}

impl IntoDbModel<DepartmentModel> for Department {
    fn into_db_model(self) -> DepartmentModel {
        match self {
            Self::Science => DepartmentModel::Science,
            Self::Bst => DepartmentModel::Bst,
            Self::Arts => DepartmentModel::Arts,
        }
    }
}

impl FromDbModel<StatusModel> for Status {
    fn from_db_model(model: StatusModel) -> Self {
        match model {
            StatusModel::Pending => Self::Pending,
            StatusModel::Approved => Self::Approved,
            StatusModel::Declined => Self::Declined,
        }
    }
}

impl IntoDbModel<StatusModel> for Status {
    fn into_db_model(self) -> StatusModel {
        match self {
            Self::Pending => StatusModel::Pending,
            Self::Approved => StatusModel::Approved,
            Self::Declined => StatusModel::Declined,
        }
    }
}

impl FromDbModel<RegistrationModel> for Registration {
    fn from_db_model(model: RegistrationModel) -> Self {
        Self {
            id: model.id,
            subject_id: model.subject_id,
            name: model.name,
            code: model.code,
            class: model.class,
            section: model.section,
            campus: model.campus.into_model(),
            version: model.version.into_model(),
            department: model.department.into_model(),
            building: model.building,
            contact_number: model.contact_number,
            approved: model.approved,
            status: model.status.into_model(),
            approved_by: model.approved_by,
            approved_at: model.approved_at,
            declined_reason: model.declined_reason,
            created_at: model.created_at,
        }
    }
}
