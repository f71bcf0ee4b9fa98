use std::sync::Arc;
use std::time::Duration;

use axum::{Extension, Router};
use http::{Method, header};
use patrika_db::sea_orm::DatabaseConnection;
use patrika_oidc::Verifier;
use tokio::task;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::auth::AdminAuth;
use crate::opt::Auth;
use crate::routes;

const KEY_REFRESH_INTERVAL: Duration = Duration::from_secs(60);

pub(crate) async fn create_app(
    auth: Auth,
    admin_auth: AdminAuth,
    pool: DatabaseConnection,
) -> anyhow::Result<Router> {
    let verifier = Arc::new(Verifier::from_issuer(auth.oidc_issuer_url, auth.audience).await?);
    task::spawn(Arc::clone(&verifier).refresh_periodically(KEY_REFRESH_INTERVAL));

    let api_cors = CorsLayer::new()
        .allow_origin(
            auth.origins
                .iter()
                .map(|origin| origin.parse())
                .collect::<Result<Vec<_>, _>>()?,
        )
        .allow_headers([
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ORIGIN,
        ])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .max_age(Duration::from_secs(3600));

    let app = Router::new()
        .merge(routes::swagger::create_router())
        .nest(
            "/api/v0",
            Router::new()
                .nest("/status", routes::api::v0::status::create_router())
                .nest("/journal", routes::api::v0::journal::create_router())
                .nest("/admin", routes::api::v0::admin::create_router())
                .nest("/registrations", routes::api::v0::registration::create_router())
                .nest("/users", routes::api::v0::user::create_router())
                .nest("/certificates", routes::api::v0::certificate::create_router())
                .nest("/events", routes::api::v0::event::create_router())
                .nest("/orders", routes::api::v0::order::create_router())
                .nest("/courses", routes::api::v0::course::create_router())
                .layer(api_cors),
        )
        .layer(
            ServiceBuilder::new()
                .layer(Extension(pool))
                .layer(Extension(verifier))
                .layer(Extension(admin_auth)),
        )
        .with_state(());

    Ok(app)
}
