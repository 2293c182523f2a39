//! Error envelope test helpers
//!
//! The gateway renders every failure as `{"status": "error", "message": ...}`,
//! optionally with an `errors` array for validation failures. These helpers
//! assert that contract without depending on gateway types.

use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use serde::Deserialize;
use serde_json::Value;

/// Local mirror of the gateway's error body.
#[derive(Debug, Deserialize)]
pub struct ErrorBodyLike {
    pub status: String,
    pub message: String,
    #[serde(default)]
    pub errors: Option<Vec<FieldErrorLike>>,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct FieldErrorLike {
    pub field: String,
    pub message: String,
}

/// Assert that raw response parts carry the error envelope.
///
/// Returns the parsed body so callers can make further assertions.
pub fn assert_error_body_from_parts(
    status: StatusCode,
    body_bytes: &[u8],
    expected_status: StatusCode,
    expected_message: &str,
) -> ErrorBodyLike {
    assert_eq!(status, expected_status);

    let body: ErrorBodyLike = serde_json::from_slice(body_bytes)
        .expect("Response body should be a valid error envelope");

    assert_eq!(body.status, "error");
    assert_eq!(
        body.message, expected_message,
        "unexpected error message in envelope"
    );

    body
}

/// Assert that a `ServiceResponse` carries the error envelope.
pub async fn assert_error_body(
    resp: ServiceResponse<BoxBody>,
    expected_status: StatusCode,
    expected_message: &str,
) -> ErrorBodyLike {
    let status = resp.status();
    let body = actix_web::test::read_body(resp).await;

    assert_error_body_from_parts(status, &body, expected_status, expected_message)
}

/// Read a response body as JSON, keeping the status for later assertions.
pub async fn read_status_and_json(resp: ServiceResponse<BoxBody>) -> (StatusCode, Value) {
    let status = resp.status();
    let body = actix_web::test::read_body(resp).await;
    let json = serde_json::from_slice(&body).expect("Response body should be valid JSON");
    (status, json)
}
