//! Gateway test support utilities
//!
//! Shared helpers for integration tests: unified logging initialization and
//! assertions over the gateway's `{status, message}` error envelope.

pub mod error_body;
pub mod test_logging;
