use actix_web::web;

use crate::extractors::json_config;
use crate::middleware::RequireAuth;

pub mod auth;
pub mod data_family;
pub mod health;

/// Register every route of the gateway.
///
/// `/dataFamily` is wrapped in `RequireAuth` here so tests and `main.rs`
/// exercise the same protection. Process-wide middleware (CORS, logging,
/// request ids) is added by the caller.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config());

    // "/" and "/health"
    health::configure_routes(cfg);

    // Login: /authenticate/login
    cfg.service(web::scope("/authenticate").configure(auth::configure_routes));

    // Family records: /dataFamily/**
    cfg.service(
        web::scope("/dataFamily")
            .wrap(RequireAuth)
            .configure(data_family::configure_routes),
    );
}
