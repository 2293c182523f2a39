use std::sync::Arc;

use crate::auth::{AccountLookup, TokenCodec};
use crate::config::RuntimeEnv;
use crate::error::AppError;
use crate::upstream::FamilyRecords;

/// Application state containing shared collaborators
#[derive(Clone)]
pub struct AppState {
    /// Token signing and verification, owns the key provider
    pub tokens: TokenCodec,
    /// Credential store consulted by the login handler
    pub accounts: Arc<dyn AccountLookup>,
    /// Upstream family-record service (optional for test scenarios)
    pub family_records: Option<Arc<dyn FamilyRecords>>,
    pub runtime: RuntimeEnv,
}

impl AppState {
    pub fn new(
        tokens: TokenCodec,
        accounts: Arc<dyn AccountLookup>,
        family_records: Option<Arc<dyn FamilyRecords>>,
        runtime: RuntimeEnv,
    ) -> Self {
        Self {
            tokens,
            accounts,
            family_records,
            runtime,
        }
    }

    pub fn family_records(&self) -> Option<&Arc<dyn FamilyRecords>> {
        self.family_records.as_ref()
    }

    /// The upstream client, or a 500 if the state was built without one.
    pub fn require_family_records(&self) -> Result<&Arc<dyn FamilyRecords>, AppError> {
        self.family_records
            .as_ref()
            .ok_or_else(|| AppError::internal("family record service is not configured"))
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("tokens", &self.tokens)
            .field("family_records", &self.family_records.is_some())
            .field("runtime", &self.runtime)
            .finish_non_exhaustive()
    }
}
