//! Token claims shared by the codec, the middleware and downstream handlers.

use serde::{Deserialize, Serialize};

/// Authority stamped into every token we mint.
pub const TOKEN_ISSUER: &str = "Bani Dalhar";

/// Access token lifetime in seconds (30 minutes).
pub const TOKEN_TTL_SECS: i64 = 30 * 60;

/// Identity fields supplied by the caller when minting a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSubject {
    pub id: i64,
    pub email: String,
    pub role: String,
}

impl TokenSubject {
    pub fn new(id: i64, email: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
            role: role.into(),
        }
    }
}

/// Verified claims, inserted into request extensions by the auth middleware.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    pub id: i64,
    pub email: String,
    pub role: String,
    pub iss: String,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}

impl Claims {
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}
