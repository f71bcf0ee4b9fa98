use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{DecodingKey, Validation};
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tokio::sync::RwLock;
use url::Url;

use crate::jwks::{self, JwksError};

#[derive(Error, Debug)]
pub enum VerifyError {
    #[error(transparent)]
    Jwt(jsonwebtoken::errors::Error),
    #[error("token is expired")]
    Expired,
    #[error("token header has no key id")]
    MissingKeyId,
    #[error("no key matching the token's key id")]
    KeyNotFound,
    #[error("token carries no subject")]
    MissingSubject,
    #[error(transparent)]
    Upstream(#[from] JwksError),
}

/// The verified caller. `name` is the best display name the token offered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub subject: String,
    pub email: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct UserMetadata {
    full_name: Option<String>,
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Claims {
    sub: Option<String>,
    email: Option<String>,
    name: Option<String>,
    #[serde(default)]
    user_metadata: UserMetadata,
}

impl Claims {
    fn into_identity(self) -> Result<Identity, VerifyError> {
        let subject = self.sub.ok_or(VerifyError::MissingSubject)?;
        let name = self
            .user_metadata
            .full_name
            .or(self.user_metadata.name)
            .or(self.name)
            .or_else(|| self.email.clone());

        Ok(Identity {
            subject,
            email: self.email,
            name,
        })
    }
}

/// Verifies bearer tokens against the identity provider's published signing
/// keys. Keys are cached locally; verification itself never calls out.
pub struct Verifier {
    client: Client,
    jwks_url: Url,
    audience: String,
    keys: RwLock<HashMap<String, DecodingKey>>,
}

impl Verifier {
    /// Resolves the JWKS endpoint via OpenID discovery and loads the initial
    /// key set.
    pub async fn from_issuer(issuer: Url, audience: String) -> Result<Self, JwksError> {
        let client = Client::new();
        let jwks_url = jwks::discover_jwks_url(&client, &issuer).await?;
        Self::from_jwks_url(client, jwks_url, audience).await
    }

    pub async fn from_jwks_url(
        client: Client,
        jwks_url: Url,
        audience: String,
    ) -> Result<Self, JwksError> {
        let keys = jwks::fetch_keys(&client, &jwks_url).await?;
        tracing::debug!(url = %jwks_url, keys = keys.len(), "loaded signing keys");

        Ok(Self {
            client,
            jwks_url,
            audience,
            keys: RwLock::new(keys),
        })
    }

    pub async fn refresh(&self) -> Result<(), JwksError> {
        let keys = jwks::fetch_keys(&self.client, &self.jwks_url).await?;
        tracing::debug!(keys = keys.len(), "refreshed signing keys");
        *self.keys.write().await = keys;
        Ok(())
    }

    /// Refreshes the key set on a fixed interval until the task is dropped.
    pub async fn refresh_periodically(self: Arc<Self>, interval: Duration) {
        let mut ticker = tokio::time::interval(interval);
        ticker.tick().await;
        loop {
            ticker.tick().await;
            if let Err(error) = self.refresh().await {
                tracing::warn!(error = &error as &dyn std::error::Error, "signing key refresh failed");
            }
        }
    }

    pub async fn verify(&self, token: &str) -> Result<Identity, VerifyError> {
        {
            let keys = self.keys.read().await;
            match decode(&keys, token, &self.audience) {
                Err(VerifyError::KeyNotFound) => {}
                result => return result,
            }
        }

        // Unknown key id, likely a key rotation. Refetch once and retry.
        self.refresh().await?;
        let keys = self.keys.read().await;
        decode(&keys, token, &self.audience)
    }
}

fn decode(
    keys: &HashMap<String, DecodingKey>,
    token: &str,
    audience: &str,
) -> Result<Identity, VerifyError> {
    let header = jsonwebtoken::decode_header(token).map_err(VerifyError::Jwt)?;
    let kid = header.kid.ok_or(VerifyError::MissingKeyId)?;
    let key = keys.get(&kid).ok_or(VerifyError::KeyNotFound)?;

    let mut validation = Validation::new(header.alg);
    validation.set_audience(&[audience]);

    let token_data =
        jsonwebtoken::decode::<Claims>(token, key, &validation).map_err(|error| match error.kind() {
            ErrorKind::ExpiredSignature => VerifyError::Expired,
            _ => VerifyError::Jwt(error),
        })?;

    token_data.claims.into_identity()
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::jwk::JwkSet;
    use jsonwebtoken::{Algorithm, EncodingKey, Header};
    use serde_json::json;

    const SECRET: &[u8] = b"patrika-test-secret-patrika-test";
    // SECRET in base64url, the encoding JWKS uses for oct keys
    const SECRET_B64: &str = "cGF0cmlrYS10ZXN0LXNlY3JldC1wYXRyaWthLXRlc3Q";

    fn test_keys(kid: &str) -> HashMap<String, DecodingKey> {
        let k = SECRET_B64;
        let jwk_set: JwkSet = serde_json::from_value(json!({
            "keys": [{
                "kty": "oct",
                "k": k,
                "kid": kid,
                "use": "sig",
                "alg": "HS256",
            }]
        }))
        .unwrap();
        crate::jwks::build_key_map(jwk_set).unwrap()
    }

    fn sign(kid: Option<&str>, claims: serde_json::Value) -> String {
        let mut header = Header::new(Algorithm::HS256);
        header.kid = kid.map(str::to_owned);
        jsonwebtoken::encode(&header, &claims, &EncodingKey::from_secret(SECRET)).unwrap()
    }

    fn claims(exp_offset: i64) -> serde_json::Value {
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_secs() as i64;
        json!({
            "sub": "subject-1",
            "aud": "authenticated",
            "email": "user@example.com",
            "exp": now + exp_offset,
            "user_metadata": { "full_name": "Full Name" },
        })
    }

    #[test]
    fn decodes_a_valid_token() {
        let keys = test_keys("key-1");
        let token = sign(Some("key-1"), claims(600));

        let identity = decode(&keys, &token, "authenticated").unwrap();
        assert_eq!(identity.subject, "subject-1");
        assert_eq!(identity.email.as_deref(), Some("user@example.com"));
        assert_eq!(identity.name.as_deref(), Some("Full Name"));
    }

    #[test]
    fn display_name_falls_back_to_email() {
        let keys = test_keys("key-1");
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_secs() as i64;
        let token = sign(
            Some("key-1"),
            json!({
                "sub": "subject-1",
                "aud": "authenticated",
                "email": "user@example.com",
                "exp": now + 600,
            }),
        );

        let identity = decode(&keys, &token, "authenticated").unwrap();
        assert_eq!(identity.name.as_deref(), Some("user@example.com"));
    }

    #[test]
    fn rejects_an_expired_token() {
        let keys = test_keys("key-1");
        let token = sign(Some("key-1"), claims(-600));

        assert!(matches!(
            decode(&keys, &token, "authenticated"),
            Err(VerifyError::Expired)
        ));
    }

    #[test]
    fn rejects_an_unknown_key_id() {
        let keys = test_keys("key-1");
        let token = sign(Some("key-2"), claims(600));

        assert!(matches!(
            decode(&keys, &token, "authenticated"),
            Err(VerifyError::KeyNotFound)
        ));
    }

    #[test]
    fn rejects_a_missing_key_id() {
        let keys = test_keys("key-1");
        let token = sign(None, claims(600));

        assert!(matches!(
            decode(&keys, &token, "authenticated"),
            Err(VerifyError::MissingKeyId)
        ));
    }

    #[test]
    fn rejects_a_wrong_audience() {
        let keys = test_keys("key-1");
        let token = sign(Some("key-1"), claims(600));

        assert!(matches!(
            decode(&keys, &token, "other-audience"),
            Err(VerifyError::Jwt(_))
        ));
    }
}
