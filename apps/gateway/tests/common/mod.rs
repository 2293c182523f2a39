#![allow(dead_code)]

// tests/common/mod.rs
use actix_web::dev::ServiceResponse;
use actix_web::http::header::HeaderName;

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    gateway_test_support::test_logging::init();
}

/// Assert the response carries a non-empty `x-request-id` header and return it.
pub fn assert_request_id<B>(resp: &ServiceResponse<B>) -> String {
    let header = HeaderName::from_static("x-request-id");
    let request_id = resp
        .headers()
        .get(&header)
        .and_then(|v| v.to_str().ok())
        .expect("x-request-id header should be present and valid UTF-8")
        .to_string();
    assert!(!request_id.is_empty(), "x-request-id should not be empty");
    request_id
}
