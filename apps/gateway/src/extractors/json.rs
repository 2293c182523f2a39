//! Error mapping for `web::Json` bodies.
//!
//! Registered once through [`json_config`] so a body actix cannot read
//! renders as the gateway's `{status: "error", message}` 400 instead of
//! actix's plain-text default.

use actix_web::error::JsonPayloadError;
use actix_web::{web, HttpRequest};
use tracing::debug;

use crate::error::AppError;
use crate::logging::pii::Redacted;
use crate::middleware::request_trace::RequestId;

pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, req: &HttpRequest| {
        debug!(
            request_id = %RequestId::of(req),
            path = %req.path(),
            error = %Redacted(&err.to_string()),
            "request body rejected"
        );
        AppError::bad_request(describe(&err)).into()
    })
}

/// Client-facing reason, without echoing any of the body.
fn describe(err: &JsonPayloadError) -> &'static str {
    match err {
        JsonPayloadError::ContentType => "Content-Type harus application/json",
        JsonPayloadError::Deserialize(e) if e.is_data() => "Tipe data pada body tidak sesuai",
        JsonPayloadError::Deserialize(_) => "Body JSON tidak valid",
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            "Body terlalu besar"
        }
        _ => "Body request tidak dapat dibaca",
    }
}
