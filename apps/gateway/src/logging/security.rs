use tracing::{info, warn};

use crate::logging::pii::Redacted;

/// Log a failed login attempt. The email is redacted.
pub fn login_failed(reason: &str, email: &str) {
    warn!(
        event = "SECURITY_LOGIN_FAILED",
        email = %Redacted(email),
        reason,
        "Authentication failure"
    );
}

/// Log a successful login.
pub fn login_succeeded(user_id: i64, email: &str) {
    info!(
        event = "SECURITY_LOGIN_SUCCEEDED",
        user_id,
        email = %Redacted(email),
        "User logged in"
    );
}

/// Log a bearer token rejected by the auth middleware.
pub fn token_rejected(reason: &str, path: &str) {
    warn!(
        event = "SECURITY_TOKEN_REJECTED",
        reason,
        path,
        "Bearer token rejected"
    );
}
