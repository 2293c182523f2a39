use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::error::AppError;
use crate::services::auth::{self as auth_service, LoginGrant};
use crate::state::app_state::AppState;
use crate::validation::LoginRequest;

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub data: LoginGrant,
}

/// Exchange email and password for an access token.
async fn login(
    body: web::Json<LoginRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    body.validate()?;

    let grant = auth_service::login(
        app_state.accounts.as_ref(),
        &app_state.tokens,
        &body.email,
        &body.password,
    )
    .await?;

    Ok(HttpResponse::Ok().json(LoginResponse {
        status: "success",
        message: "Login berhasil",
        data: grant,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/login").route(web::post().to(login)));
}
