//! Account lookup used by the login flow.

use async_trait::async_trait;

use crate::error::AppError;

/// An account as seen by the login flow.
#[derive(Clone, PartialEq, Eq)]
pub struct AccountRecord {
    pub id: i64,
    pub email: String,
    pub password: String,
    pub role: String,
}

impl std::fmt::Debug for AccountRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountRecord")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("role", &self.role)
            .finish()
    }
}

/// Pluggable credential store.
///
/// Lookups are exact: no case folding and no trimming of `email`.
#[async_trait]
pub trait AccountLookup: Send + Sync {
    async fn lookup(&self, email: &str) -> Result<Option<AccountRecord>, AppError>;
}

/// In-memory account list.
#[derive(Debug, Clone, Default)]
pub struct StaticAccounts {
    accounts: Vec<AccountRecord>,
}

impl StaticAccounts {
    pub fn new(accounts: Vec<AccountRecord>) -> Self {
        Self { accounts }
    }

    /// The single built-in administrator account.
    pub fn builtin() -> Self {
        Self::new(vec![AccountRecord {
            id: 1,
            email: "admin@mail.com".to_string(),
            password: "123".to_string(),
            role: "admin".to_string(),
        }])
    }
}

#[async_trait]
impl AccountLookup for StaticAccounts {
    async fn lookup(&self, email: &str) -> Result<Option<AccountRecord>, AppError> {
        Ok(self.accounts.iter().find(|a| a.email == email).cloned())
    }
}
