use std::env;

use tracing::debug;

/// Deployment environment, from `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEnv {
    Development,
    Production,
}

impl RuntimeEnv {
    pub fn from_env() -> Self {
        Self::parse(&env::var("APP_ENV").unwrap_or_default())
    }

    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => RuntimeEnv::Production,
            _ => RuntimeEnv::Development,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RuntimeEnv::Development => "development",
            RuntimeEnv::Production => "production",
        }
    }

    /// Env file layered on top of `.env` for this environment.
    pub fn env_file(self) -> &'static str {
        match self {
            RuntimeEnv::Development => ".env.dev",
            RuntimeEnv::Production => ".env.production",
        }
    }

    /// Tracing filter used when `RUST_LOG` is not set.
    pub fn default_log_filter(self) -> &'static str {
        match self {
            RuntimeEnv::Development => "debug,actix_web=info,reqwest=info,hyper=info",
            RuntimeEnv::Production => "info,actix_web=info",
        }
    }
}

/// Load `.env` and the environment-specific file. Missing files are
/// ignored and variables already present in the process win.
pub fn load_env_files() -> RuntimeEnv {
    dotenvy::dotenv().ok();
    let runtime = RuntimeEnv::from_env();
    if dotenvy::from_filename(runtime.env_file()).is_ok() {
        debug!(file = runtime.env_file(), "loaded env file");
    }
    runtime
}
