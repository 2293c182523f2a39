use serde::Serialize;
use tracing::debug;

use crate::auth::{AccountLookup, TokenCodec, TokenSubject, TOKEN_TTL_SECS};
use crate::error::AppError;
use crate::logging::security;

/// Issued access token with its metadata.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LoginGrant {
    pub access_token: String,
    pub token_type: &'static str,
    pub expires_in: i64,
}

/// Check `email`/`password` against the account store and mint a token.
///
/// Unknown email and wrong password produce the same error so callers
/// cannot probe which accounts exist. Comparison is exact.
pub async fn login(
    accounts: &dyn AccountLookup,
    tokens: &TokenCodec,
    email: &str,
    password: &str,
) -> Result<LoginGrant, AppError> {
    debug!("checking credentials");

    let account = match accounts.lookup(email).await? {
        Some(account) if account.password == password => account,
        Some(_) => {
            security::login_failed("wrong_password", email);
            return Err(AppError::invalid_credentials());
        }
        None => {
            security::login_failed("unknown_email", email);
            return Err(AppError::invalid_credentials());
        }
    };

    let subject = TokenSubject::new(account.id, account.email.clone(), account.role.clone());
    let access_token = tokens.create_token(&subject)?;

    security::login_succeeded(account.id, &account.email);

    Ok(LoginGrant {
        access_token,
        token_type: "Bearer",
        expires_in: TOKEN_TTL_SECS,
    })
}
