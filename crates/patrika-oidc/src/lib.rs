mod jwks;
mod verifier;

pub use jwks::JwksError;
pub use verifier::{Identity, Verifier, VerifyError};
