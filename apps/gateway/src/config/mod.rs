pub mod app_config;
pub mod env;

pub use app_config::{AppConfig, UpstreamConfig};
pub use env::{load_env_files, RuntimeEnv};
