use actix_web::{web, HttpResponse};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::AppError;
use crate::extractors::AuthenticatedUser;
use crate::services::family;
use crate::state::app_state::AppState;
use crate::upstream::{FetchAction, SubmitAction};

async fn fetch_by_id(
    action: FetchAction,
    user: &AuthenticatedUser,
    id: &str,
    app_state: &AppState,
) -> Result<HttpResponse, AppError> {
    debug!(user_id = user.claims().id, action = action.as_str(), id, "family read");

    let records = app_state.require_family_records()?;
    let data = family::fetch(records.as_ref(), action, Some(id)).await?;
    Ok(HttpResponse::Ok().json(data))
}

async fn get_data_family(
    user: AuthenticatedUser,
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    fetch_by_id(FetchAction::Family, &user, &path.into_inner(), &app_state).await
}

async fn get_data_by_id(
    user: AuthenticatedUser,
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    fetch_by_id(FetchAction::ById, &user, &path.into_inner(), &app_state).await
}

async fn get_data_all(
    user: AuthenticatedUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    debug!(user_id = user.claims().id, "family read all");

    let records = app_state.require_family_records()?;
    let data = family::fetch(records.as_ref(), FetchAction::All, None).await?;
    Ok(HttpResponse::Ok().json(data))
}

async fn submit(
    action: SubmitAction,
    user: AuthenticatedUser,
    body: web::Json<Map<String, Value>>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    debug!(user_id = user.claims().id, action = action.as_str(), "family write");

    let records = app_state.require_family_records()?;
    let result = family::submit(records.as_ref(), action, &body).await?;
    Ok(HttpResponse::Ok().json(result))
}

async fn add_person(
    user: AuthenticatedUser,
    body: web::Json<Map<String, Value>>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    submit(SubmitAction::AddPerson, user, body, app_state).await
}

async fn update_person(
    user: AuthenticatedUser,
    body: web::Json<Map<String, Value>>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    submit(SubmitAction::UpdatePerson, user, body, app_state).await
}

async fn delete_person(
    user: AuthenticatedUser,
    body: web::Json<Map<String, Value>>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    submit(SubmitAction::DeletePerson, user, body, app_state).await
}

/// Family-record routes. Callers must wrap the scope in `RequireAuth`.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/getDataFamily/{id}", web::get().to(get_data_family))
        .route("/getDataById/{id}", web::get().to(get_data_by_id))
        .route("/getDataAll", web::get().to(get_data_all))
        .route("/postAddPersonData", web::post().to(add_person))
        .route("/postUpdatePersonData", web::post().to(update_person))
        .route("/postDeletePersonData", web::post().to(delete_person));
}
