use std::env;

use actix_cors::Cors;
use actix_web::http::header;

use crate::middleware::request_trace::REQUEST_ID_HEADER;

const DEFAULT_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://127.0.0.1:3000"];

/// Build CORS middleware from `CORS_ALLOWED_ORIGINS`:
/// - Only the methods the gateway serves
/// - Lightly validated origins, empty and "null" entries ignored
pub fn cors_middleware() -> Cors {
    let allowed_raw = env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default();

    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
        .expose_headers(vec![header::HeaderName::from_static(REQUEST_ID_HEADER)])
        .max_age(3600);

    for origin in allowed_origins(&allowed_raw) {
        cors = cors.allowed_origin(&origin);
    }

    cors
}

/// Comma-separated origins, e.g. `http://localhost:5173,https://silsilah.example`.
/// Falls back to localhost when nothing valid is configured.
pub fn allowed_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(|s| s.to_string())
        .collect();

    if origins.is_empty() {
        DEFAULT_ORIGINS.iter().map(|s| s.to_string()).collect()
    } else {
        origins
    }
}
