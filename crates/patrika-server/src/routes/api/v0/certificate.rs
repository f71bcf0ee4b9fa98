use axum::Extension;
use axum::extract::Path;
use axum::response::{IntoResponse, Json};
use axum::routing::{Router, get};
use http::StatusCode;
use patrika_db::certificate;
use patrika_db::certificate::mutation::{CertificatePatch, NewCertificate as NewCertificateRecord};
use patrika_db::sea_orm::DatabaseConnection;
use patrika_model::certificate::{Certificate, NewCertificate, UpdateCertificate};
use patrika_model::convert::FromDbModel;
use uuid::Uuid;

use crate::identity::ExtractAdmin;
use crate::routes::error::ApiError;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(list_certificates).post(create_certificate))
        .route("/verify/{search_id}", get(verify_certificate))
        .route(
            "/{certificate_id}",
            get(get_certificate).put(update_certificate).delete(delete_certificate),
        )
        .with_state(())
}

/// Public lookup used by the verification page. The search id is the
/// human-facing code printed on the certificate itself.
#[utoipa::path(
    get,
    path = "/api/v0/certificates/verify/{search_id}",
    responses(
        (status = OK, description = "Certificate is genuine", body = Certificate),
        (status = NOT_FOUND, description = "No certificate with that id"),
    ),
    tag = "v0/certificates"
)]
pub(crate) async fn verify_certificate(
    Path(search_id): Path<String>,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<impl IntoResponse, ApiError> {
    let record = certificate::Query::find_by_search_id(&conn, &search_id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(Certificate::from_db_model(record)))
}

#[utoipa::path(
    get,
    path = "/api/v0/certificates",
    responses(
        (status = OK, description = "All issued certificates", body = [Certificate]),
    ),
    tag = "v0/certificates"
)]
pub(crate) async fn list_certificates(
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<impl IntoResponse, ApiError> {
    let records = certificate::Query::list(&conn).await?;
    let records = records.into_iter().map(Certificate::from_db_model).collect::<Vec<_>>();
    Ok(Json(records))
}

#[utoipa::path(
    get,
    path = "/api/v0/certificates/{certificate_id}",
    responses(
        (status = OK, description = "The certificate", body = Certificate),
        (status = NOT_FOUND, description = "No such certificate"),
    ),
    tag = "v0/certificates",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn get_certificate(
    ExtractAdmin(_claims): ExtractAdmin,
    Path(certificate_id): Path<Uuid>,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<impl IntoResponse, ApiError> {
    let record = certificate::Query::find_by_id(&conn, certificate_id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(Certificate::from_db_model(record)))
}

#[utoipa::path(
    post,
    path = "/api/v0/certificates",
    request_body = NewCertificate,
    responses(
        (status = CREATED, description = "Certificate issued", body = Certificate),
        (status = CONFLICT, description = "Search id already in use"),
    ),
    tag = "v0/certificates",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn create_certificate(
    ExtractAdmin(_claims): ExtractAdmin,
    Extension(conn): Extension<DatabaseConnection>,
    Json(body): Json<NewCertificate>,
) -> Result<impl IntoResponse, ApiError> {
    if body.search_id.trim().is_empty() {
        return Err(ApiError::validation("search id is required"));
    }
    if body.name.trim().is_empty() {
        return Err(ApiError::validation("name is required"));
    }

    if certificate::Query::find_by_search_id(&conn, &body.search_id).await?.is_some() {
        return Err(ApiError::conflict("search id already in use"));
    }

    let record = certificate::Mutation::create(
        &conn,
        NewCertificateRecord {
            search_id: body.search_id,
            name: body.name,
            serving_event: body.serving_event,
            code: body.code,
            class: body.class,
            hsc_batch: body.hsc_batch,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(Certificate::from_db_model(record))))
}

#[utoipa::path(
    put,
    path = "/api/v0/certificates/{certificate_id}",
    request_body = UpdateCertificate,
    responses(
        (status = OK, description = "Certificate updated", body = Certificate),
        (status = NOT_FOUND, description = "No such certificate"),
    ),
    tag = "v0/certificates",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn update_certificate(
    ExtractAdmin(_claims): ExtractAdmin,
    Path(certificate_id): Path<Uuid>,
    Extension(conn): Extension<DatabaseConnection>,
    Json(body): Json<UpdateCertificate>,
) -> Result<impl IntoResponse, ApiError> {
    let record = certificate::Query::find_by_id(&conn, certificate_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    let record = certificate::Mutation::update(
        &conn,
        record,
        CertificatePatch {
            name: body.name,
            serving_event: body.serving_event,
            code: body.code,
            class: body.class,
            hsc_batch: body.hsc_batch,
        },
    )
    .await?;

    Ok(Json(Certificate::from_db_model(record)))
}

#[utoipa::path(
    delete,
    path = "/api/v0/certificates/{certificate_id}",
    responses(
        (status = NO_CONTENT, description = "Certificate removed"),
        (status = NOT_FOUND, description = "No such certificate"),
    ),
    tag = "v0/certificates",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn delete_certificate(
    ExtractAdmin(_claims): ExtractAdmin,
    Path(certificate_id): Path<Uuid>,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<impl IntoResponse, ApiError> {
    let record = certificate::Query::find_by_id(&conn, certificate_id)
        .await?
        .ok_or(ApiError::NotFound)?;
    certificate::Mutation::delete(&conn, record).await?;
    Ok(StatusCode::NO_CONTENT)
}
