pub mod accounts;
pub mod claims;
pub mod error;
pub mod key_provider;
pub mod token;

pub use accounts::{AccountLookup, AccountRecord, StaticAccounts};
pub use claims::{Claims, TokenSubject, TOKEN_ISSUER, TOKEN_TTL_SECS};
pub use error::AuthError;
pub use key_provider::{KeyMaterial, KeyProvider, TOKEN_KEY_ENV};
pub use token::TokenCodec;
