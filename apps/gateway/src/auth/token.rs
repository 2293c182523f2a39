use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tracing::{debug, warn};

use crate::auth::claims::{Claims, TokenSubject, TOKEN_ISSUER, TOKEN_TTL_SECS};
use crate::auth::error::AuthError;
use crate::auth::key_provider::KeyProvider;
use crate::logging::pii::Redacted;

/// Signs and verifies access tokens (HS256 JWT) with injected key material.
#[derive(Debug, Clone)]
pub struct TokenCodec {
    keys: Arc<KeyProvider>,
    algorithm: Algorithm,
}

impl TokenCodec {
    pub fn new(keys: Arc<KeyProvider>) -> Self {
        Self {
            keys,
            algorithm: Algorithm::HS256,
        }
    }

    pub fn keys(&self) -> &KeyProvider {
        &self.keys
    }

    /// Mint a token for `subject` that expires 30 minutes from now.
    pub fn create_token(&self, subject: &TokenSubject) -> Result<String, AuthError> {
        self.create_token_at(subject, SystemTime::now())
    }

    /// Mint a token as if the current time were `now`.
    pub fn create_token_at(
        &self,
        subject: &TokenSubject,
        now: SystemTime,
    ) -> Result<String, AuthError> {
        let key = self.keys.get_key()?;
        let iat = unix_seconds(now).ok_or_else(|| AuthError::signing("clock before Unix epoch"))?;

        let claims = Claims {
            id: subject.id,
            email: subject.email.clone(),
            role: subject.role.clone(),
            iss: TOKEN_ISSUER.to_string(),
            iat,
            exp: iat + TOKEN_TTL_SECS,
        };

        debug!(
            user_id = claims.id,
            email = %Redacted(&claims.email),
            exp = claims.exp,
            "minting access token"
        );

        encode(
            &Header::new(self.algorithm),
            &claims,
            &EncodingKey::from_secret(key.as_bytes()),
        )
        .map_err(|e| AuthError::signing(e.to_string()))
    }

    /// Verify `token` against the current time.
    pub fn verify_token(&self, token: &str) -> Result<Claims, AuthError> {
        self.verify_token_at(token, SystemTime::now())
    }

    /// Verify `token` as if the current time were `now`.
    ///
    /// Errors:
    /// - Signature or structure failure → `AuthError::TokenInvalid`
    /// - `exp <= now` → `AuthError::TokenExpired`
    /// - Foreign issuer → `AuthError::IssuerMismatch`
    ///
    /// The signature is checked before any claim is looked at, so a tampered
    /// token is always `TokenInvalid` even when it is also expired.
    pub fn verify_token_at(&self, token: &str, now: SystemTime) -> Result<Claims, AuthError> {
        let key = self.keys.get_key()?;

        // Expiry and issuer are checked below against the caller's clock.
        let mut validation = Validation::new(self.algorithm);
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims = ["exp", "iss"].iter().map(|c| c.to_string()).collect();

        let claims = decode::<Claims>(token, &DecodingKey::from_secret(key.as_bytes()), &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => AuthError::token_invalid("signature mismatch"),
                _ => AuthError::token_invalid(e.to_string()),
            })?;

        let now_secs = unix_seconds(now).unwrap_or(0);
        if claims.exp <= now_secs {
            warn!(user_id = claims.id, exp = claims.exp, "token expired");
            return Err(AuthError::TokenExpired);
        }

        if claims.iss != TOKEN_ISSUER {
            warn!(issuer = %claims.iss, "token issuer mismatch");
            return Err(AuthError::IssuerMismatch {
                found: claims.iss.clone(),
            });
        }

        debug!(user_id = claims.id, email = %Redacted(&claims.email), "token verified");
        Ok(claims)
    }
}

fn unix_seconds(t: SystemTime) -> Option<i64> {
    t.duration_since(UNIX_EPOCH)
        .ok()
        .map(|d| d.as_secs() as i64)
}
