//! One log line when a request arrives and one when it completes.
//!
//! The completion line carries the caller's `user_id` once `RequireAuth`
//! has verified a token, and its level follows the status class. Liveness
//! probes (`/` and `/health`) stay at debug.

use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::StatusCode;
use actix_web::{Error as ActixError, HttpMessage};
use futures_util::future::LocalBoxFuture;
use tracing::{debug, event, Level};

use crate::auth::Claims;
use crate::middleware::request_trace::RequestId;

const PROBE_PATHS: [&str; 2] = ["/", "/health"];

pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

/// What we know about a request before it is handled.
struct RequestLine {
    method: String,
    path: String,
    request_id: String,
    started: Instant,
}

impl RequestLine {
    fn from_request(req: &ServiceRequest) -> Self {
        let request_id = req
            .extensions()
            .get::<RequestId>()
            .map(|id| id.0.clone())
            .unwrap_or_else(|| "unknown".to_string());

        Self {
            method: req.method().to_string(),
            path: req.path().to_string(),
            request_id,
            started: Instant::now(),
        }
    }

    fn level_for(&self, status: StatusCode) -> Level {
        if status.is_server_error() {
            Level::ERROR
        } else if status.is_client_error() {
            Level::WARN
        } else if PROBE_PATHS.contains(&self.path.as_str()) {
            Level::DEBUG
        } else {
            Level::INFO
        }
    }

    fn completed(&self, status: StatusCode, user_id: Option<i64>) {
        let duration_us = self.started.elapsed().as_micros() as u64;

        // `event!` needs a constant level
        macro_rules! emit {
            ($level:expr) => {
                event!(
                    $level,
                    http.method = %self.method,
                    url.path = %self.path,
                    http.status_code = status.as_u16(),
                    duration_us,
                    request_id = %self.request_id,
                    user_id = ?user_id,
                    "request completed"
                )
            };
        }

        match self.level_for(status) {
            Level::ERROR => emit!(Level::ERROR),
            Level::WARN => emit!(Level::WARN),
            Level::DEBUG => emit!(Level::DEBUG),
            _ => emit!(Level::INFO),
        }
    }
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let line = RequestLine::from_request(&req);
        debug!(http.method = %line.method, url.path = %line.path, request_id = %line.request_id, "request received");

        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;

            match &result {
                Ok(res) => {
                    let user_id = res.request().extensions().get::<Claims>().map(|c| c.id);
                    line.completed(res.status(), user_id);
                }
                Err(err) => line.completed(err.as_response_error().status_code(), None),
            }

            result
        })
    }
}
