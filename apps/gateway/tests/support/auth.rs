//! Token helpers for tests

use std::sync::Arc;
use std::time::{Duration, SystemTime};

use gateway::auth::{KeyProvider, TokenCodec, TokenSubject};

pub const TEST_SECRET: &str = "integration-test-secret-do-not-use";

pub fn test_keys() -> KeyProvider {
    KeyProvider::from_secret(TEST_SECRET)
}

/// Codec sharing the key material of [`test_keys`].
pub fn test_codec() -> TokenCodec {
    TokenCodec::new(Arc::new(test_keys()))
}

pub fn admin_subject() -> TokenSubject {
    TokenSubject::new(1, "admin@mail.com", "admin")
}

pub fn mint_test_token() -> String {
    test_codec()
        .create_token(&admin_subject())
        .expect("should mint token successfully")
}

/// Full Authorization header value including the "Bearer " prefix
pub fn bearer_header() -> String {
    format!("Bearer {}", mint_test_token())
}

/// Token minted two hours ago, long past its 30 minute lifetime
pub fn mint_expired_token() -> String {
    let past = SystemTime::now()
        .checked_sub(Duration::from_secs(7200))
        .expect("clock should allow subtracting two hours");
    test_codec()
        .create_token_at(&admin_subject(), past)
        .expect("should mint expired token successfully")
}
