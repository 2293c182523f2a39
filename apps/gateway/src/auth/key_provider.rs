//! Lazily resolved signing key material.
//!
//! A [`KeyProvider`] is constructed explicitly and injected into the token
//! codec. The key is resolved on first use and memoized for the lifetime of
//! the provider; resolution failures are not cached.

use std::fmt;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use tracing::{error, info};

use crate::auth::error::AuthError;

/// Environment variable holding the token key in production.
pub const TOKEN_KEY_ENV: &str = "AUTH_TOKEN_KEY";

/// Secret bytes shared by the signing and verification paths.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyMaterial(Vec<u8>);

impl KeyMaterial {
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self(secret.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Short, non-reversible identifier safe to put in logs.
    pub fn fingerprint(&self) -> String {
        blake3::hash(&self.0).to_hex()[..8].to_string()
    }
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyMaterial([REDACTED; {} bytes])", self.0.len())
    }
}

#[derive(Clone)]
enum KeySource {
    Env(String),
    Static(KeyMaterial),
}

impl fmt::Debug for KeySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeySource::Env(var) => write!(f, "Env({var})"),
            KeySource::Static(_) => f.write_str("Static"),
        }
    }
}

/// Compute-once holder for the token key.
#[derive(Debug)]
pub struct KeyProvider {
    source: KeySource,
    key: OnceCell<Arc<KeyMaterial>>,
}

impl KeyProvider {
    /// Resolve the key from the named environment variable on first use.
    pub fn from_env(var: impl Into<String>) -> Self {
        Self {
            source: KeySource::Env(var.into()),
            key: OnceCell::new(),
        }
    }

    /// Use fixed key material (tests, embedding).
    pub fn from_secret(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            source: KeySource::Static(KeyMaterial::new(secret)),
            key: OnceCell::new(),
        }
    }

    /// Return the key, resolving it on the first successful call.
    ///
    /// Concurrent first callers block on a single initialization.
    pub fn get_key(&self) -> Result<Arc<KeyMaterial>, AuthError> {
        self.key
            .get_or_try_init(|| {
                let material = self.resolve()?;
                info!(
                    source = ?self.source,
                    key_len = material.len(),
                    fingerprint = %material.fingerprint(),
                    "token key material loaded"
                );
                Ok::<_, AuthError>(Arc::new(material))
            })
            .cloned()
    }

    /// Whether the key has already been resolved.
    pub fn is_loaded(&self) -> bool {
        self.key.get().is_some()
    }

    fn resolve(&self) -> Result<KeyMaterial, AuthError> {
        match &self.source {
            KeySource::Env(var) => {
                let value = std::env::var(var).unwrap_or_default();
                if value.trim().is_empty() {
                    error!(var = %var, "token key environment variable missing or empty");
                    return Err(AuthError::configuration(format!("{var} is not set")));
                }
                Ok(KeyMaterial::new(value.into_bytes()))
            }
            KeySource::Static(material) => {
                if material.is_empty() {
                    return Err(AuthError::configuration("static key material is empty"));
                }
                Ok(material.clone())
            }
        }
    }
}
