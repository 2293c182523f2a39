use std::env;

use crate::config::env::RuntimeEnv;
use crate::error::AppError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

/// Where and how to reach the family-record service.
#[derive(Clone)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

impl std::fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Process configuration read at startup.
///
/// The token key is deliberately absent: it is resolved lazily by the
/// `KeyProvider`.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub runtime: RuntimeEnv,
    pub host: String,
    pub port: u16,
    pub upstream: UpstreamConfig,
}

impl AppConfig {
    pub fn from_env(runtime: RuntimeEnv) -> Result<Self, AppError> {
        Self::from_lookup(runtime, |key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup<F>(runtime: RuntimeEnv, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = non_empty("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match non_empty("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| AppError::config(format!("PORT must be a valid port number, got {raw:?}")))?,
            None => DEFAULT_PORT,
        };

        let base_url = non_empty("GAS_URL").ok_or_else(|| AppError::config("GAS_URL must be set"))?;
        // `API_KEY` is the name older deployments use
        let api_key = non_empty("GAS_API_KEY")
            .or_else(|| non_empty("API_KEY"))
            .ok_or_else(|| AppError::config("GAS_API_KEY (or API_KEY) must be set"))?;

        let timeout_secs = match non_empty("UPSTREAM_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                AppError::config(format!("UPSTREAM_TIMEOUT_SECS must be a number of seconds, got {raw:?}"))
            })?,
            None => DEFAULT_UPSTREAM_TIMEOUT_SECS,
        };

        Ok(Self {
            runtime,
            host,
            port,
            upstream: UpstreamConfig {
                base_url,
                api_key,
                timeout_secs,
            },
        })
    }
}
