// ============================
// gatekey-backend-lib/src/auth/token.rs
// ============================
//! Signed bearer token issuance and verification.
use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// Subject: the user id the token was issued for
    sub: String,
    /// Issued-at timestamp (seconds since the epoch)
    iat: u64,
}

/// Stateless HS256 token service.
///
/// Tokens carry no expiry claim: they stay valid until the signing secret
/// rotates. The secret is injected once at construction; there is no
/// ambient global.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // No exp claim is issued, so none can be required.
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Issue a signed token whose subject is `user_id`.
    pub fn issue(&self, user_id: &str) -> Result<String, AppError> {
        let issued_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| AppError::Internal(format!("system clock error: {e}")))?
            .as_secs();

        let claims = Claims {
            sub: user_id.to_owned(),
            iat: issued_at,
        };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| AppError::Internal(format!("token signing failed: {e}")))
    }

    /// Validate a token's signature and return its subject user id.
    pub fn verify(&self, token: &str) -> Result<String, AppError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims.sub)
            .map_err(|_| AppError::InvalidToken)
    }
}
