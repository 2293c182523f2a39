//! Bearer-token gate for protected scopes.
//!
//! Rejections are rendered here and the wrapped service is never called.
//! On success the verified [`Claims`] are stored in request extensions.

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{self, HeaderValue};
use actix_web::{web, Error, HttpMessage};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use tracing::{debug, error};

use crate::auth::{AuthError, Claims};
use crate::error::AppError;
use crate::logging::security;
use crate::state::app_state::AppState;

pub struct RequireAuth;

impl<S, B> Transform<S, ServiceRequest> for RequireAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireAuthMiddleware { service }))
    }
}

pub struct RequireAuthMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequireAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        debug!(path = %req.path(), "checking bearer token");

        match authenticate(&req) {
            Ok(claims) => {
                debug!(user_id = claims.id, path = %req.path(), "bearer token accepted");

                // Claims must be in place before the downstream service runs
                req.extensions_mut().insert(claims);

                let fut = self.service.call(req);
                Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
            }
            Err(err) => {
                let response = req.error_response(err).map_into_right_body();
                Box::pin(async move { Ok(response) })
            }
        }
    }
}

fn authenticate(req: &ServiceRequest) -> Result<Claims, AppError> {
    let path = req.path();

    let token = extract_bearer(req.headers().get(header::AUTHORIZATION)).map_err(|err| {
        security::token_rejected(reason(&err), path);
        AppError::from(err)
    })?;

    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| AppError::internal("AppState not available"))?;

    state.tokens.verify_token(token).map_err(|err| {
        if err.is_client_error() {
            security::token_rejected(reason(&err), path);
        } else {
            // Missing key material is a server fault: 500, never 401
            error!(error = %err, path, "token verification could not run");
        }
        AppError::from(err)
    })
}

/// Pull the token out of `Authorization: Bearer <token>`.
///
/// The header must split on a single space into exactly two parts, the
/// first being `Bearer`. Anything else is a malformed header.
pub fn extract_bearer(header_value: Option<&HeaderValue>) -> Result<&str, AuthError> {
    let value = header_value.ok_or(AuthError::MissingToken)?;
    let value = value.to_str().map_err(|_| AuthError::MalformedHeader)?;

    let mut parts = value.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) => Ok(token),
        _ => Err(AuthError::MalformedHeader),
    }
}

fn reason(err: &AuthError) -> &'static str {
    match err {
        AuthError::MissingToken => "missing_token",
        AuthError::MalformedHeader => "malformed_header",
        AuthError::TokenExpired => "expired",
        AuthError::IssuerMismatch { .. } => "issuer_mismatch",
        AuthError::TokenInvalid { .. } => "invalid",
        AuthError::Configuration { .. } => "configuration",
        AuthError::Signing { .. } => "signing",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(value: &'static str) -> HeaderValue {
        HeaderValue::from_static(value)
    }

    #[test]
    fn test_extract_bearer_accepts_well_formed_header() {
        assert_eq!(extract_bearer(Some(&header("Bearer abc.def.ghi"))), Ok("abc.def.ghi"));
    }

    #[test]
    fn test_extract_bearer_missing() {
        assert_eq!(extract_bearer(None), Err(AuthError::MissingToken));
    }

    #[test]
    fn test_extract_bearer_rejects_other_shapes() {
        for value in [
            "Token abc",
            "bearer abc",
            "Bearer",
            "Bearer  abc",
            "Bearer abc def",
            "abc",
            "",
        ] {
            assert_eq!(
                extract_bearer(Some(&header(value))),
                Err(AuthError::MalformedHeader),
                "header {value:?}"
            );
        }
    }

    #[test]
    fn test_extract_bearer_rejects_non_visible_ascii() {
        let value = HeaderValue::from_bytes(b"Bearer \xffabc").unwrap();
        assert_eq!(extract_bearer(Some(&value)), Err(AuthError::MalformedHeader));
    }

    #[test]
    fn test_empty_token_reaches_verification() {
        assert_eq!(extract_bearer(Some(&header("Bearer "))), Ok(""));
    }
}
