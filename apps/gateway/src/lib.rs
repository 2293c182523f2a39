#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod auth;
pub mod config;
pub mod error;
pub mod extractors;
pub mod logging;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;
pub mod upstream;
pub mod validation;

// Re-exports for public API
pub use auth::{Claims, KeyProvider, TokenCodec};
pub use config::{AppConfig, RuntimeEnv};
pub use error::AppError;
pub use extractors::{json_config, AuthenticatedUser};
pub use middleware::cors::cors_middleware;
pub use middleware::request_trace::RequestTrace;
pub use middleware::require_auth::RequireAuth;
pub use middleware::structured_logger::StructuredLogger;
pub use state::app_state::AppState;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    gateway_test_support::test_logging::init();
}
