use axum::Extension;
use axum::extract::Path;
use axum::response::{IntoResponse, Json};
use axum::routing::{Router, delete, get, post};
use http::StatusCode;
use patrika_db::course;
use patrika_db::sea_orm::DatabaseConnection;
use patrika_model::convert::FromDbModel;
use patrika_model::course::{Course, NewCourse, NewModule, NewQuestion, UpdateCourse};
use uuid::Uuid;

use crate::identity::ExtractAdmin;
use crate::routes::error::ApiError;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(list_courses).post(create_course))
        .route("/{course_id}", get(get_course).put(update_course).delete(delete_course))
        .route("/{course_id}/modules", post(add_module))
        .route("/{course_id}/modules/{module_id}", delete(remove_module))
        .route("/{course_id}/modules/{module_id}/questions", post(add_question))
        .route(
            "/{course_id}/modules/{module_id}/questions/{question_id}",
            delete(remove_question),
        )
        .with_state(())
}

async fn load_course(conn: &DatabaseConnection, course_id: Uuid) -> Result<patrika_entity::course::Model, ApiError> {
    course::Query::find_by_id(conn, course_id)
        .await?
        .ok_or(ApiError::NotFound)
}

#[utoipa::path(
    get,
    path = "/api/v0/courses",
    responses(
        (status = OK, description = "All courses", body = [Course]),
    ),
    tag = "v0/courses"
)]
pub(crate) async fn list_courses(
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<impl IntoResponse, ApiError> {
    let records = course::Query::list(&conn).await?;
    let records = records.into_iter().map(Course::from_db_model).collect::<Vec<_>>();
    Ok(Json(records))
}

#[utoipa::path(
    get,
    path = "/api/v0/courses/{course_id}",
    responses(
        (status = OK, description = "The course with its modules and quizzes", body = Course),
        (status = NOT_FOUND, description = "No such course"),
    ),
    tag = "v0/courses"
)]
pub(crate) async fn get_course(
    Path(course_id): Path<Uuid>,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<impl IntoResponse, ApiError> {
    let record = load_course(&conn, course_id).await?;
    Ok(Json(Course::from_db_model(record)))
}

#[utoipa::path(
    post,
    path = "/api/v0/courses",
    request_body = NewCourse,
    responses(
        (status = CREATED, description = "Course created", body = Course),
    ),
    tag = "v0/courses",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn create_course(
    ExtractAdmin(_claims): ExtractAdmin,
    Extension(conn): Extension<DatabaseConnection>,
    Json(body): Json<NewCourse>,
) -> Result<impl IntoResponse, ApiError> {
    if body.title.trim().is_empty() {
        return Err(ApiError::validation("title is required"));
    }

    let record = course::Mutation::create(&conn, body.title, body.description).await?;
    Ok((StatusCode::CREATED, Json(Course::from_db_model(record))))
}

#[utoipa::path(
    put,
    path = "/api/v0/courses/{course_id}",
    request_body = UpdateCourse,
    responses(
        (status = OK, description = "Course updated", body = Course),
        (status = NOT_FOUND, description = "No such course"),
    ),
    tag = "v0/courses",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn update_course(
    ExtractAdmin(_claims): ExtractAdmin,
    Path(course_id): Path<Uuid>,
    Extension(conn): Extension<DatabaseConnection>,
    Json(body): Json<UpdateCourse>,
) -> Result<impl IntoResponse, ApiError> {
    let record = load_course(&conn, course_id).await?;
    let record = course::Mutation::update(&conn, record, body.title, body.description).await?;
    Ok(Json(Course::from_db_model(record)))
}

#[utoipa::path(
    delete,
    path = "/api/v0/courses/{course_id}",
    responses(
        (status = NO_CONTENT, description = "Course removed"),
        (status = NOT_FOUND, description = "No such course"),
    ),
    tag = "v0/courses",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn delete_course(
    ExtractAdmin(_claims): ExtractAdmin,
    Path(course_id): Path<Uuid>,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<impl IntoResponse, ApiError> {
    let record = load_course(&conn, course_id).await?;
    course::Mutation::delete(&conn, record).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/v0/courses/{course_id}/modules",
    request_body = NewModule,
    responses(
        (status = OK, description = "Module appended", body = Course),
        (status = NOT_FOUND, description = "No such course"),
    ),
    tag = "v0/courses",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn add_module(
    ExtractAdmin(_claims): ExtractAdmin,
    Path(course_id): Path<Uuid>,
    Extension(conn): Extension<DatabaseConnection>,
    Json(body): Json<NewModule>,
) -> Result<impl IntoResponse, ApiError> {
    if body.title.trim().is_empty() {
        return Err(ApiError::validation("module title is required"));
    }

    let record = load_course(&conn, course_id).await?;
    let record =
        course::Mutation::add_module(&conn, record, body.title, body.description, body.youtube).await?;
    Ok(Json(Course::from_db_model(record)))
}

#[utoipa::path(
    delete,
    path = "/api/v0/courses/{course_id}/modules/{module_id}",
    responses(
        (status = OK, description = "Module removed", body = Course),
        (status = NOT_FOUND, description = "No such course or module"),
    ),
    tag = "v0/courses",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn remove_module(
    ExtractAdmin(_claims): ExtractAdmin,
    Path((course_id, module_id)): Path<(Uuid, Uuid)>,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<impl IntoResponse, ApiError> {
    let record = load_course(&conn, course_id).await?;
    let record = course::Mutation::remove_module(&conn, record, module_id).await?;
    Ok(Json(Course::from_db_model(record)))
}

#[utoipa::path(
    post,
    path = "/api/v0/courses/{course_id}/modules/{module_id}/questions",
    request_body = NewQuestion,
    responses(
        (status = OK, description = "Question appended", body = Course),
        (status = NOT_FOUND, description = "No such course or module"),
    ),
    tag = "v0/courses",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn add_question(
    ExtractAdmin(_claims): ExtractAdmin,
    Path((course_id, module_id)): Path<(Uuid, Uuid)>,
    Extension(conn): Extension<DatabaseConnection>,
    Json(body): Json<NewQuestion>,
) -> Result<impl IntoResponse, ApiError> {
    if body.text.trim().is_empty() {
        return Err(ApiError::validation("question text is required"));
    }
    if body.options.len() < 2 {
        return Err(ApiError::validation("a question needs at least two options"));
    }
    if !body.options.contains(&body.answer) {
        return Err(ApiError::validation("answer must be one of the options"));
    }

    let record = load_course(&conn, course_id).await?;
    let record =
        course::Mutation::add_question(&conn, record, module_id, body.text, body.options, body.answer)
            .await?;
    Ok(Json(Course::from_db_model(record)))
}

#[utoipa::path(
    delete,
    path = "/api/v0/courses/{course_id}/modules/{module_id}/questions/{question_id}",
    responses(
        (status = OK, description = "Question removed", body = Course),
        (status = NOT_FOUND, description = "No such course, module or question"),
    ),
    tag = "v0/courses",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn remove_question(
    ExtractAdmin(_claims): ExtractAdmin,
    Path((course_id, module_id, question_id)): Path<(Uuid, Uuid, Uuid)>,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<impl IntoResponse, ApiError> {
    let record = load_course(&conn, course_id).await?;
    let record = course::Mutation::remove_question(&conn, record, module_id, question_id).await?;
    Ok(Json(Course::from_db_model(record)))
}
