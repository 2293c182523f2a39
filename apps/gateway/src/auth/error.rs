use thiserror::Error;

/// Failures of the authentication core.
///
/// HTTP mapping lives in `crate::error`; this type stays transport-agnostic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("key material unavailable: {detail}")]
    Configuration { detail: String },
    #[error("failed to sign token: {detail}")]
    Signing { detail: String },
    #[error("token failed integrity check: {detail}")]
    TokenInvalid { detail: String },
    #[error("token expired")]
    TokenExpired,
    #[error("token issuer mismatch: {found}")]
    IssuerMismatch { found: String },
    #[error("missing Authorization header")]
    MissingToken,
    #[error("malformed Authorization header")]
    MalformedHeader,
}

impl AuthError {
    pub fn configuration(detail: impl Into<String>) -> Self {
        Self::Configuration {
            detail: detail.into(),
        }
    }

    pub fn signing(detail: impl Into<String>) -> Self {
        Self::Signing {
            detail: detail.into(),
        }
    }

    pub fn token_invalid(detail: impl Into<String>) -> Self {
        Self::TokenInvalid {
            detail: detail.into(),
        }
    }

    /// True for failures caused by the presented token rather than by the server.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Configuration { .. } | Self::Signing { .. })
    }
}
