use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use tracing::warn;

use crate::auth::Claims;
use crate::error::AppError;

/// Claims of the caller, as verified by the `RequireAuth` middleware.
///
/// Used outside a protected scope it yields 401 `Token tidak ditemukan`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser(pub Claims);

impl AuthenticatedUser {
    pub fn claims(&self) -> &Claims {
        &self.0
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let claims = req.extensions().get::<Claims>().cloned();

        ready(match claims {
            Some(claims) => Ok(AuthenticatedUser(claims)),
            None => {
                warn!(path = %req.path(), "no verified claims on request");
                Err(AppError::unauthorized_missing_token())
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use actix_web::test::TestRequest;

    use super::*;
    use crate::auth::TOKEN_ISSUER;

    fn claims() -> Claims {
        Claims {
            id: 1,
            email: "admin@mail.com".to_string(),
            role: "admin".to_string(),
            iss: TOKEN_ISSUER.to_string(),
            iat: 1_700_000_000,
            exp: 1_700_001_800,
        }
    }

    #[actix_web::test]
    async fn test_reads_claims_from_extensions() {
        let req = TestRequest::default().to_http_request();
        req.extensions_mut().insert(claims());

        let user = AuthenticatedUser::extract(&req).await.unwrap();
        assert_eq!(user.claims().email, "admin@mail.com");
        assert!(user.claims().is_admin());
    }

    #[actix_web::test]
    async fn test_missing_claims_is_unauthorized() {
        let req = TestRequest::default().to_http_request();

        let err = AuthenticatedUser::extract(&req).await.unwrap_err();
        assert!(matches!(err, AppError::UnauthorizedMissingToken));
    }
}
