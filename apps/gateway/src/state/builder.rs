use std::sync::Arc;

use crate::auth::{AccountLookup, KeyProvider, StaticAccounts, TokenCodec, TOKEN_KEY_ENV};
use crate::config::RuntimeEnv;
use crate::state::app_state::AppState;
use crate::upstream::FamilyRecords;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    keys: Option<KeyProvider>,
    accounts: Option<Arc<dyn AccountLookup>>,
    family_records: Option<Arc<dyn FamilyRecords>>,
    runtime: RuntimeEnv,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            keys: None,
            accounts: None,
            family_records: None,
            runtime: RuntimeEnv::Development,
        }
    }

    pub fn with_key_provider(mut self, keys: KeyProvider) -> Self {
        self.keys = Some(keys);
        self
    }

    pub fn with_accounts(mut self, accounts: Arc<dyn AccountLookup>) -> Self {
        self.accounts = Some(accounts);
        self
    }

    pub fn with_family_records(mut self, records: Arc<dyn FamilyRecords>) -> Self {
        self.family_records = Some(records);
        self
    }

    pub fn with_runtime(mut self, runtime: RuntimeEnv) -> Self {
        self.runtime = runtime;
        self
    }

    /// Missing pieces fall back to the env-backed key provider and the
    /// built-in account store. The key itself is not read here.
    pub fn build(self) -> AppState {
        let keys = self
            .keys
            .unwrap_or_else(|| KeyProvider::from_env(TOKEN_KEY_ENV));
        let accounts = self
            .accounts
            .unwrap_or_else(|| Arc::new(StaticAccounts::builtin()));

        AppState::new(
            TokenCodec::new(Arc::new(keys)),
            accounts,
            self.family_records,
            self.runtime,
        )
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
