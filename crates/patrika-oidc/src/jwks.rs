use std::collections::HashMap;

use jsonwebtoken::DecodingKey;
use jsonwebtoken::jwk::{JwkSet, PublicKeyUse};
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum JwksError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Jwk(#[from] jsonwebtoken::errors::Error),
    #[error("discovery document has no jwks_uri")]
    MissingJwksUri,
    #[error(transparent)]
    Url(#[from] url::ParseError),
}

#[derive(Debug, Deserialize)]
struct DiscoveryDocument {
    jwks_uri: Option<String>,
}

/// Resolves the JWKS endpoint from the issuer's OpenID discovery document.
pub(crate) async fn discover_jwks_url(client: &Client, issuer: &Url) -> Result<Url, JwksError> {
    let discovery_url = issuer.join(".well-known/openid-configuration")?;

    let document: DiscoveryDocument = client
        .get(discovery_url)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    let jwks_uri = document.jwks_uri.ok_or(JwksError::MissingJwksUri)?;
    Ok(Url::parse(&jwks_uri)?)
}

/// Fetches the key set and indexes the usable signing keys by key id.
/// Keys without a key id cannot be matched against a token header and
/// are dropped.
pub(crate) async fn fetch_keys(
    client: &Client,
    jwks_url: &Url,
) -> Result<HashMap<String, DecodingKey>, JwksError> {
    let jwk_set: JwkSet = client
        .get(jwks_url.clone())
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    build_key_map(jwk_set)
}

pub(crate) fn build_key_map(jwk_set: JwkSet) -> Result<HashMap<String, DecodingKey>, JwksError> {
    jwk_set
        .keys
        .into_iter()
        .filter(|jwk| {
            jwk.is_supported()
                && !matches!(jwk.common.public_key_use, Some(PublicKeyUse::Encryption))
        })
        .filter_map(|jwk| {
            let decoding_key = DecodingKey::from_jwk(&jwk);
            jwk.common
                .key_id
                .map(|id| decoding_key.map(|key| (id, key)).map_err(JwksError::Jwk))
        })
        .collect()
}
