//! Token signing and verification

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::claims::Credential;
use crate::error::AuthError;

/// HS256, no clock leeway, `sub` and `exp` mandatory
pub(crate) fn validation() -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    validation.validate_exp = true;
    validation.validate_aud = false;
    validation.set_required_spec_claims(&["exp", "sub"]);
    validation
}

/// Sign a credential
pub(crate) fn sign_credential(
    credential: &Credential,
    key: &EncodingKey,
) -> Result<String, AuthError> {
    encode(&Header::new(Algorithm::HS256), credential, key).map_err(|e| {
        tracing::error!(error = %e, "Failed to sign credential");
        AuthError::IssueFailed
    })
}

/// Verify signature and expiry, then decode the payload
pub(crate) fn verify_credential(
    token: &str,
    key: &DecodingKey,
    validation: &Validation,
) -> Result<Credential, AuthError> {
    let token_data = decode::<Credential>(token, key, validation).map_err(|e| {
        tracing::debug!(error = %e, "Credential verification failed");
        AuthError::Invalid
    })?;

    Ok(token_data.claims)
}
