use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Building whose admins moderate the journal.
pub(crate) const JOURNAL_BUILDING: &str = "mainbuilding";

#[derive(Error, Debug)]
pub(crate) enum AuthError {
    #[error(transparent)]
    Jwt(#[from] jsonwebtoken::errors::Error),
    #[error("session is expired")]
    Expired,
    #[error(transparent)]
    Hash(#[from] bcrypt::BcryptError),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct AdminClaims {
    /// Admin username.
    pub sub: String,
    pub building: String,
    pub iat: i64,
    pub exp: i64,
}

impl AdminClaims {
    pub(crate) fn moderates_journal(&self) -> bool {
        normalize_building(&self.building) == JOURNAL_BUILDING
    }
}

struct InnerAdminAuth {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    setup_key: String,
    token_ttl: Duration,
}

/// Admin sessions are locally signed tokens, independent of the member
/// identity provider.
#[derive(Clone)]
pub(crate) struct AdminAuth(Arc<InnerAdminAuth>);

impl AdminAuth {
    pub(crate) fn new(secret: &str, setup_key: String, token_ttl: Duration) -> Self {
        Self(Arc::new(InnerAdminAuth {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            setup_key,
            token_ttl,
        }))
    }

    pub(crate) fn setup_key_matches(&self, candidate: &str) -> bool {
        self.0.setup_key == candidate
    }

    pub(crate) fn sign_token(&self, username: &str, building: &str) -> Result<String, AuthError> {
        let issued_at = Utc::now().timestamp();
        let claims = AdminClaims {
            sub: username.to_owned(),
            building: building.to_owned(),
            iat: issued_at,
            exp: issued_at + self.0.token_ttl.as_secs() as i64,
        };

        Ok(jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &self.0.encoding_key,
        )?)
    }

    pub(crate) fn verify_token(&self, token: &str) -> Result<AdminClaims, AuthError> {
        let validation = Validation::new(Algorithm::HS256);
        let token_data = jsonwebtoken::decode::<AdminClaims>(token, &self.0.decoding_key, &validation)
            .map_err(|error| match error.kind() {
                ErrorKind::ExpiredSignature => AuthError::Expired,
                _ => AuthError::Jwt(error),
            })?;
        Ok(token_data.claims)
    }
}

pub(crate) fn hash_password(password: &str) -> Result<String, AuthError> {
    Ok(bcrypt::hash(password, bcrypt::DEFAULT_COST)?)
}

pub(crate) fn verify_password(password: &str, hash: &str) -> Result<bool, AuthError> {
    Ok(bcrypt::verify(password, hash)?)
}

/// Buildings are entered by hand in several places; comparisons go through
/// this normalization ("Main Building" == "mainbuilding").
pub(crate) fn normalize_building(building: &str) -> String {
    building
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth() -> AdminAuth {
        AdminAuth::new("test-secret", "setup-key".to_owned(), Duration::from_secs(3600))
    }

    #[test]
    fn token_roundtrip() {
        let auth = auth();
        let token = auth.sign_token("alice", "Main Building").unwrap();
        let claims = auth.verify_token(&token).unwrap();
        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.building, "Main Building");
        assert!(claims.moderates_journal());
    }

    #[test]
    fn expired_token_is_rejected() {
        let auth = AdminAuth::new("test-secret", "setup-key".to_owned(), Duration::ZERO);
        let token = auth.sign_token("alice", "mainbuilding").unwrap();
        // default leeway is 60s, so verify against zero-leeway validation
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        let result = jsonwebtoken::decode::<AdminClaims>(
            &token,
            &DecodingKey::from_secret(b"test-secret"),
            &validation,
        );
        assert!(matches!(result.unwrap_err().kind(), ErrorKind::ExpiredSignature));
    }

    #[test]
    fn token_from_other_secret_is_rejected() {
        let token = auth().sign_token("alice", "mainbuilding").unwrap();
        let other = AdminAuth::new("other-secret", "setup-key".to_owned(), Duration::from_secs(3600));
        assert!(matches!(other.verify_token(&token), Err(AuthError::Jwt(_))));
    }

    #[test]
    fn building_normalization() {
        assert_eq!(normalize_building("Main Building"), "mainbuilding");
        assert_eq!(normalize_building("main-building"), "mainbuilding");
        assert_eq!(normalize_building("ANNEX 2"), "annex2");
        assert_ne!(normalize_building("annex"), JOURNAL_BUILDING);
    }

    #[test]
    fn password_hash_roundtrip() {
        let hash = hash_password("hunter2").unwrap();
        assert!(verify_password("hunter2", &hash).unwrap());
        assert!(!verify_password("hunter3", &hash).unwrap());
    }
}
