//! Property tests for token round trips and tamper detection.
//!
//! Increase cases locally with: PROPTEST_CASES=800 cargo test --test token_props

mod common;
mod support;

include!("common/proptest_prelude.rs");

use std::time::{Duration, SystemTime};

use gateway::auth::{AuthError, TokenSubject, TOKEN_ISSUER};
use proptest::prelude::*;
use support::auth::test_codec;

fn subject_strategy() -> impl Strategy<Value = TokenSubject> {
    (
        1i64..1_000_000,
        "[a-z0-9._]{1,16}@[a-z]{2,10}\\.(com|id|org)",
        prop_oneof![Just("admin"), Just("editor"), Just("viewer")],
    )
        .prop_map(|(id, email, role)| TokenSubject::new(id, email, role))
}

/// Replace the character at `index` of the signature segment with a
/// different base64url character.
fn flip_signature_char(token: &str, index: usize, replacement_seed: u8) -> String {
    const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

    let split = token.rfind('.').expect("token should have a signature segment") + 1;
    let (head, signature) = token.split_at(split);
    let mut bytes = signature.as_bytes().to_vec();
    let i = index % bytes.len();

    let mut replacement = ALPHABET[replacement_seed as usize % ALPHABET.len()];
    if replacement == bytes[i] {
        replacement = ALPHABET[(replacement_seed as usize + 1) % ALPHABET.len()];
    }
    bytes[i] = replacement;

    format!("{head}{}", String::from_utf8(bytes).expect("base64url is ASCII"))
}

proptest! {
    #![proptest_config(proptest_prelude_config())]

    #[test]
    fn prop_round_trip_preserves_subject(subject in subject_strategy()) {
        let codec = test_codec();
        let token = codec.create_token(&subject).unwrap();
        let claims = codec.verify_token(&token).unwrap();

        prop_assert_eq!(claims.id, subject.id);
        prop_assert_eq!(claims.email, subject.email);
        prop_assert_eq!(claims.role, subject.role);
        prop_assert_eq!(claims.iss, TOKEN_ISSUER);
    }

    #[test]
    fn prop_signature_tampering_is_detected(
        subject in subject_strategy(),
        index in any::<usize>(),
        seed in any::<u8>(),
    ) {
        let codec = test_codec();
        let token = codec.create_token(&subject).unwrap();
        let tampered = flip_signature_char(&token, index, seed);
        prop_assert_ne!(&tampered, &token);

        let result = codec.verify_token(&tampered);
        prop_assert!(
            matches!(result, Err(AuthError::TokenInvalid { .. })),
            "tampered token must be invalid, got {:?}",
            result
        );
    }

    #[test]
    fn prop_stale_tokens_expire(subject in subject_strategy(), extra_secs in 0u64..86_400) {
        let codec = test_codec();
        let issued_at = SystemTime::now() - Duration::from_secs(1800 + 1 + extra_secs);
        let token = codec.create_token_at(&subject, issued_at).unwrap();

        prop_assert_eq!(codec.verify_token(&token), Err(AuthError::TokenExpired));
    }
}
