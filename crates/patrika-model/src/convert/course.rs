use patrika_entity::course::{
    Model as CourseModel, Module as ModuleModel, Question as QuestionModel,
};

use crate::convert::FromDbModel;
use crate::course::{Course, Module, Question};

impl FromDbModel<QuestionModel> for Question {
    fn from_db_model(model: QuestionModel) -> Self {
        Self {
            id: model.id,
            text: model.text,
            options: model.options,
            answer: model.answer,
        }
    }
}

impl FromDbModel<ModuleModel> for Module {
    fn from_db_model(model: ModuleModel) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            youtube: model.youtube,
            questions: model.questions.into_iter().map(FromDbModel::from_db_model).collect(),
        }
    }
}

impl FromDbModel<CourseModel> for Course {
    fn from_db_model(model: CourseModel) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            modules: model.modules.0.into_iter().map(FromDbModel::from_db_model).collect(),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
