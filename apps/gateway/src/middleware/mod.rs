pub mod cors;
pub mod request_trace;
pub mod require_auth;
pub mod structured_logger;

pub use cors::cors_middleware;
pub use request_trace::{RequestId, RequestTrace};
pub use require_auth::RequireAuth;
pub use structured_logger::StructuredLogger;
