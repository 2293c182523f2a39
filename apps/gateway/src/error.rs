use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use crate::auth::AuthError;

pub const MSG_INVALID_CREDENTIALS: &str = "Email atau password salah";
pub const MSG_VALIDATION_FAILED: &str = "Validasi gagal";
pub const MSG_MISSING_TOKEN: &str = "Token tidak ditemukan";
pub const MSG_MALFORMED_HEADER: &str = "Format token tidak valid. Gunakan: Bearer <token>";
pub const MSG_TOKEN_EXPIRED: &str = "Token sudah kadaluarsa. Silakan login kembali";
pub const MSG_TOKEN_INVALID: &str = "Token tidak valid";
pub const MSG_INTERNAL: &str = "Terjadi kesalahan pada server";

/// One rejected request field.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Stable JSON body for every error response.
#[derive(Serialize)]
pub struct ErrorBody {
    pub status: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {errors:?}")]
    Validation { errors: Vec<FieldError> },
    #[error("Bad request: {detail}")]
    BadRequest { detail: String },
    #[error("InvalidCredentials")]
    InvalidCredentials,
    #[error("UnauthorizedMissingToken")]
    UnauthorizedMissingToken,
    #[error("UnauthorizedMalformedHeader")]
    UnauthorizedMalformedHeader,
    #[error("UnauthorizedExpiredToken")]
    UnauthorizedExpiredToken,
    #[error("UnauthorizedInvalidToken: {detail}")]
    UnauthorizedInvalidToken { detail: String },
    #[error("Upstream error: {detail}")]
    Upstream {
        public: &'static str,
        detail: String,
    },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    /// Machine-readable code, used in logs only.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "VALIDATION_FAILED",
            AppError::BadRequest { .. } => "BAD_REQUEST",
            AppError::InvalidCredentials => "INVALID_CREDENTIALS",
            AppError::UnauthorizedMissingToken => "UNAUTHORIZED_MISSING_TOKEN",
            AppError::UnauthorizedMalformedHeader => "UNAUTHORIZED_MALFORMED_HEADER",
            AppError::UnauthorizedExpiredToken => "UNAUTHORIZED_EXPIRED_TOKEN",
            AppError::UnauthorizedInvalidToken { .. } => "UNAUTHORIZED_INVALID_TOKEN",
            AppError::Upstream { .. } => "UPSTREAM_ERROR",
            AppError::Internal { .. } => "INTERNAL",
            AppError::Config { .. } => "CONFIG_ERROR",
        }
    }

    /// Client-facing message; never carries internal detail.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Validation { .. } => MSG_VALIDATION_FAILED.to_string(),
            AppError::BadRequest { detail } => detail.clone(),
            AppError::InvalidCredentials => MSG_INVALID_CREDENTIALS.to_string(),
            AppError::UnauthorizedMissingToken => MSG_MISSING_TOKEN.to_string(),
            AppError::UnauthorizedMalformedHeader => MSG_MALFORMED_HEADER.to_string(),
            AppError::UnauthorizedExpiredToken => MSG_TOKEN_EXPIRED.to_string(),
            AppError::UnauthorizedInvalidToken { .. } => MSG_TOKEN_INVALID.to_string(),
            AppError::Upstream { public, .. } => public.to_string(),
            AppError::Internal { .. } => MSG_INTERNAL.to_string(),
            AppError::Config { .. } => MSG_INTERNAL.to_string(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::UnauthorizedMissingToken => StatusCode::UNAUTHORIZED,
            AppError::UnauthorizedMalformedHeader => StatusCode::UNAUTHORIZED,
            AppError::UnauthorizedExpiredToken => StatusCode::UNAUTHORIZED,
            AppError::UnauthorizedInvalidToken { .. } => StatusCode::UNAUTHORIZED,
            AppError::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn validation(errors: Vec<FieldError>) -> Self {
        Self::Validation { errors }
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::BadRequest {
            detail: detail.into(),
        }
    }

    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials
    }

    pub fn unauthorized_missing_token() -> Self {
        Self::UnauthorizedMissingToken
    }

    pub fn upstream(public: &'static str, detail: impl Into<String>) -> Self {
        Self::Upstream {
            public,
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Configuration { detail } => AppError::config(detail),
            AuthError::Signing { detail } => AppError::internal(format!("signing failed: {detail}")),
            AuthError::TokenExpired => AppError::UnauthorizedExpiredToken,
            AuthError::MissingToken => AppError::UnauthorizedMissingToken,
            AuthError::MalformedHeader => AppError::UnauthorizedMalformedHeader,
            e @ (AuthError::TokenInvalid { .. } | AuthError::IssuerMismatch { .. }) => {
                AppError::UnauthorizedInvalidToken {
                    detail: e.to_string(),
                }
            }
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();

        if status.is_server_error() {
            error!(code = self.code(), error = %self, "request failed");
        } else {
            warn!(code = self.code(), error = %self, "request rejected");
        }

        let errors = match self {
            AppError::Validation { errors } => Some(errors.clone()),
            _ => None,
        };

        let body = ErrorBody {
            status: "error",
            message: self.public_message(),
            errors,
        };

        HttpResponse::build(status).json(body)
    }
}

#[cfg(test)]
mod tests {
    use actix_web::body::to_bytes;
    use serde_json::Value;

    use super::*;

    async fn render(err: AppError) -> (StatusCode, Value) {
        let resp = err.error_response();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[actix_web::test]
    async fn test_auth_error_mapping() {
        let cases = [
            (AuthError::MissingToken, 401, MSG_MISSING_TOKEN),
            (AuthError::MalformedHeader, 401, MSG_MALFORMED_HEADER),
            (AuthError::TokenExpired, 401, MSG_TOKEN_EXPIRED),
            (AuthError::token_invalid("bad sig"), 401, MSG_TOKEN_INVALID),
            (
                AuthError::IssuerMismatch {
                    found: "x".to_string(),
                },
                401,
                MSG_TOKEN_INVALID,
            ),
            (AuthError::configuration("AUTH_TOKEN_KEY is not set"), 500, MSG_INTERNAL),
            (AuthError::signing("boom"), 500, MSG_INTERNAL),
        ];

        for (auth_err, status, message) in cases {
            let (got_status, body) = render(auth_err.into()).await;
            assert_eq!(got_status.as_u16(), status);
            assert_eq!(body["status"], "error");
            assert_eq!(body["message"], message);
            assert!(body.get("errors").is_none());
        }
    }

    #[actix_web::test]
    async fn test_internal_detail_is_not_leaked() {
        let (status, body) = render(AppError::config("AUTH_TOKEN_KEY is not set")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body.to_string().contains("AUTH_TOKEN_KEY"));
    }

    #[actix_web::test]
    async fn test_validation_body_lists_fields() {
        let (status, body) = render(AppError::validation(vec![
            FieldError::new("email", "Email harus diisi"),
            FieldError::new("password", "Password harus diisi"),
        ]))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], MSG_VALIDATION_FAILED);
        assert_eq!(body["errors"][0]["field"], "email");
        assert_eq!(body["errors"][1]["message"], "Password harus diisi");
    }

    #[actix_web::test]
    async fn test_upstream_uses_public_message() {
        let (status, body) = render(AppError::upstream(
            "Failed to retrieve data family",
            "connection refused",
        ))
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Failed to retrieve data family");
    }
}
