use std::error::Error;
use std::sync::Arc;

use axum::extract::{FromRequestParts, OptionalFromRequestParts};
use axum::{Extension, RequestPartsExt};
use axum_auth::AuthBearer;
use http::StatusCode;
use http::request::Parts;
use patrika_oidc::{Identity, Verifier, VerifyError};

use crate::auth::{AdminAuth, AdminClaims};

type Rejection = (StatusCode, &'static str);

/// Verified member identity. Required form rejects the request when no
/// valid token is present.
pub(crate) struct ExtractIdentity(pub Identity);

/// Verified admin session.
pub(crate) struct ExtractAdmin(pub AdminClaims);

pub(crate) fn display_name(identity: &Identity) -> String {
    identity.name.clone().unwrap_or_else(|| identity.subject.clone())
}

async fn verify_bearer(parts: &mut Parts, token: &str) -> Result<Identity, Rejection> {
    let Extension::<Arc<Verifier>>(verifier) =
        parts.extract::<Extension<Arc<Verifier>>>().await.map_err(|error| {
            tracing::error!(error = &error as &dyn Error, "identity verifier not found in app data");
            (StatusCode::INTERNAL_SERVER_ERROR, "Identity verifier not found")
        })?;

    match verifier.verify(token).await {
        Ok(identity) => Ok(identity),
        Err(VerifyError::Upstream(error)) => {
            tracing::warn!(error = &error as &dyn Error, "identity provider unreachable");
            Err((StatusCode::BAD_GATEWAY, "Identity provider unavailable"))
        }
        Err(error) => {
            tracing::debug!(error = &error as &dyn Error, "token rejected");
            Err((StatusCode::UNAUTHORIZED, "Invalid token"))
        }
    }
}

impl<S> FromRequestParts<S> for ExtractIdentity
where
    S: Send + Sync,
{
    type Rejection = Rejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Ok(AuthBearer(token)) = parts.extract::<AuthBearer>().await else {
            return Err((StatusCode::UNAUTHORIZED, "No authentication token provided"));
        };

        verify_bearer(parts, &token).await.map(Self)
    }
}

impl<S> OptionalFromRequestParts<S> for ExtractIdentity
where
    S: Send + Sync,
{
    type Rejection = Rejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Option<Self>, Self::Rejection> {
        let Ok(AuthBearer(token)) = parts.extract::<AuthBearer>().await else {
            return Ok(None);
        };

        // An unverifiable token downgrades to anonymous, but an unreachable
        // identity provider still fails the request.
        match verify_bearer(parts, &token).await {
            Ok(identity) => Ok(Some(Self(identity))),
            Err((StatusCode::BAD_GATEWAY, message)) => Err((StatusCode::BAD_GATEWAY, message)),
            Err(_) => Ok(None),
        }
    }
}

impl<S> FromRequestParts<S> for ExtractAdmin
where
    S: Send + Sync,
{
    type Rejection = Rejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Ok(AuthBearer(token)) = parts.extract::<AuthBearer>().await else {
            return Err((StatusCode::UNAUTHORIZED, "No authentication token provided"));
        };

        let Extension::<AdminAuth>(admin_auth) =
            parts.extract::<Extension<AdminAuth>>().await.map_err(|error| {
                tracing::error!(error = &error as &dyn Error, "admin auth not found in app data");
                (StatusCode::INTERNAL_SERVER_ERROR, "Admin auth not found")
            })?;

        let claims = admin_auth.verify_token(&token).map_err(|error| {
            tracing::debug!(error = &error as &dyn Error, "admin token rejected");
            (StatusCode::UNAUTHORIZED, "Invalid admin token")
        })?;

        Ok(Self(claims))
    }
}
