use patrika_entity::course::{self, Model as CourseModel, Module, Question};
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, IntoActiveModel, ModelTrait};
use uuid::Uuid;

use crate::util::now;

pub struct Mutation;

/// Course modules live as a denormalized list on the course record, so the
/// module and question operations below are read-modify-write over that list.
/// Missing module/question ids surface as `DbErr::RecordNotFound`.
impl Mutation {
    pub async fn create<C: ConnectionTrait>(
        conn: &C,
        title: String,
        description: String,
    ) -> Result<CourseModel, DbErr> {
        let created_at = now();
        let course = course::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            title: ActiveValue::Set(title),
            description: ActiveValue::Set(description),
            modules: ActiveValue::Set(Default::default()),
            created_at: ActiveValue::Set(created_at),
            updated_at: ActiveValue::Set(created_at),
        };

        course.insert(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn std::error::Error, "failed to create course");
        })
    }

    pub async fn update<C: ConnectionTrait>(
        conn: &C,
        mut course: CourseModel,
        title: Option<String>,
        description: Option<String>,
    ) -> Result<CourseModel, DbErr> {
        if let Some(title) = title {
            course.title = title;
        }
        if let Some(description) = description {
            course.description = description;
        }
        Self::write_back(conn, course).await
    }

    pub async fn add_module<C: ConnectionTrait>(
        conn: &C,
        mut course: CourseModel,
        title: String,
        description: String,
        youtube: String,
    ) -> Result<CourseModel, DbErr> {
        course.modules.0.push(Module {
            id: Uuid::new_v4(),
            title,
            description,
            youtube,
            questions: Vec::new(),
        });
        Self::write_back(conn, course).await
    }

    pub async fn remove_module<C: ConnectionTrait>(
        conn: &C,
        mut course: CourseModel,
        module_id: Uuid,
    ) -> Result<CourseModel, DbErr> {
        let before = course.modules.0.len();
        course.modules.0.retain(|module| module.id != module_id);
        if course.modules.0.len() == before {
            return Err(DbErr::RecordNotFound(format!("module {module_id} not found")));
        }
        Self::write_back(conn, course).await
    }

    pub async fn add_question<C: ConnectionTrait>(
        conn: &C,
        mut course: CourseModel,
        module_id: Uuid,
        text: String,
        options: Vec<String>,
        answer: String,
    ) -> Result<CourseModel, DbErr> {
        let module = course
            .modules
            .0
            .iter_mut()
            .find(|module| module.id == module_id)
            .ok_or_else(|| DbErr::RecordNotFound(format!("module {module_id} not found")))?;

        module.questions.push(Question {
            id: Uuid::new_v4(),
            text,
            options,
            answer,
        });
        Self::write_back(conn, course).await
    }

    pub async fn remove_question<C: ConnectionTrait>(
        conn: &C,
        mut course: CourseModel,
        module_id: Uuid,
        question_id: Uuid,
    ) -> Result<CourseModel, DbErr> {
        let module = course
            .modules
            .0
            .iter_mut()
            .find(|module| module.id == module_id)
            .ok_or_else(|| DbErr::RecordNotFound(format!("module {module_id} not found")))?;

        let before = module.questions.len();
        module.questions.retain(|question| question.id != question_id);
        if module.questions.len() == before {
            return Err(DbErr::RecordNotFound(format!("question {question_id} not found")));
        }
        Self::write_back(conn, course).await
    }

    pub async fn delete<C: ConnectionTrait>(conn: &C, course: CourseModel) -> Result<(), DbErr> {
        course.delete(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn std::error::Error, "failed to delete course");
        })?;
        Ok(())
    }

    async fn write_back<C: ConnectionTrait>(
        conn: &C,
        mut course: CourseModel,
    ) -> Result<CourseModel, DbErr> {
        course.updated_at = now();
        course
            .into_active_model()
            .reset_all()
            .update(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn std::error::Error, "failed to update course");
            })
    }
}
