//! Request validation that runs before handlers.

use lazy_regex::regex_is_match;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{AppError, FieldError};

/// Login request body. Missing fields deserialize as empty strings so they
/// are reported by [`LoginRequest::validate`] instead of the JSON parser.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl LoginRequest {
    /// Check the login precondition.
    ///
    /// The email is trimmed for these checks only; the handler still sees
    /// the value exactly as sent.
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = Vec::new();

        let email = self.email.trim();
        if email.is_empty() {
            errors.push(FieldError::new("email", "Email harus diisi"));
        } else if !is_valid_email(email) {
            errors.push(FieldError::new("email", "Format email tidak valid"));
        }

        if self.password.is_empty() {
            errors.push(FieldError::new("password", "Password harus diisi"));
        }

        if errors.is_empty() {
            debug!("login payload passed validation");
            Ok(())
        } else {
            warn!(
                fields = ?errors.iter().map(|e| e.field.as_str()).collect::<Vec<_>>(),
                "login payload failed validation"
            );
            Err(AppError::validation(errors))
        }
    }
}

fn is_valid_email(email: &str) -> bool {
    regex_is_match!(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*\.[A-Za-z]{2,}$",
        email
    )
}
