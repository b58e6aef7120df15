// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Access token inspection.
//!
//! The client never verifies token signatures; it only reads `exp` to decide
//! whether a refresh is needed before sending a request.

use crate::error::ClientError;
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::Deserialize;

/// The only claim the client cares about.
#[derive(Debug, Deserialize)]
struct ExpiryClaims {
    /// Expiration time (Unix timestamp, seconds). Some issuers emit floats.
    exp: f64,
}

/// Read the `exp` claim (seconds since epoch) without verifying the token.
pub fn access_token_expiry(token: &str) -> Result<i64, ClientError> {
    let mut validation = Validation::default();
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();

    let data = decode::<ExpiryClaims>(token, &DecodingKey::from_secret(&[]), &validation)
        .map_err(|e| ClientError::InvalidToken(e.to_string()))?;

    Ok(data.claims.exp.trunc() as i64)
}

/// Whether `token` must be refreshed at `now` (Unix seconds).
///
/// A token counts as expired once `exp < now + leeway_secs`. Tokens whose
/// payload cannot be decoded are treated as expired.
pub fn is_expired(token: &str, now: i64, leeway_secs: i64) -> bool {
    match access_token_expiry(token) {
        Ok(exp) => exp < now.saturating_add(leeway_secs),
        Err(e) => {
            tracing::warn!(error = %e, "Undecodable access token, treating as expired");
            true
        }
    }
}
