use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State as AxumState, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::{
    error::AppError,
    menu::MenuItem,
    state::State,
    utils::parse_id,
    validation::validate,
};

pub const MENU: &str = "/api/menu";
pub const MENU_ITEM: &str = "/api/menu/{id}";

type AppState = AxumState<Arc<State>>;

pub async fn list_handler(AxumState(state): AppState) -> Json<Vec<MenuItem>> {
    let catalog = state.catalog.lock().await;

    Json(catalog.list().to_vec())
}

pub async fn get_handler(
    AxumState(state): AppState,
    Path(id): Path<String>,
) -> Result<Json<MenuItem>, AppError> {
    let id = parse_id(&id)?;
    let catalog = state.catalog.lock().await;

    Ok(Json(catalog.get(id)?.clone()))
}

pub async fn create_handler(
    AxumState(state): AppState,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<MenuItem>), AppError> {
    log_body(&payload);

    let body = read_body(payload)?;
    let draft = validate(&body)?;

    let item = state.catalog.lock().await.create(draft);
    info!("Created menu item {}", item.id);

    Ok((StatusCode::CREATED, Json(item)))
}

/// Existence is checked before the body is looked at, so an unknown id is a
/// 404 even when the payload is broken.
pub async fn update_handler(
    AxumState(state): AppState,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<MenuItem>, AppError> {
    log_body(&payload);

    let id = parse_id(&id)?;
    let mut catalog = state.catalog.lock().await;
    catalog.get(id)?;

    let body = read_body(payload)?;
    let item = catalog.update(id, validate(&body)?)?;
    info!("Updated menu item {id}");

    Ok(Json(item))
}

pub async fn delete_handler(
    AxumState(state): AppState,
    Path(id): Path<String>,
) -> Result<Json<MenuItem>, AppError> {
    let id = parse_id(&id)?;
    let item = state.catalog.lock().await.delete(id)?;
    info!("Deleted menu item {id}");

    Ok(Json(item))
}

fn log_body(payload: &Result<Json<Value>, JsonRejection>) {
    if let Ok(Json(body)) = payload {
        info!("Body: {body}");
    }
}

/// Bodies sent without a JSON content type are read as an empty object, so
/// they fail validation field by field.
fn read_body(payload: Result<Json<Value>, JsonRejection>) -> Result<Value, AppError> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(JsonRejection::MissingJsonContentType(rejection)) => {
            info!("Ignoring non-JSON body: {rejection}");
            Ok(Value::Object(Map::new()))
        }
        Err(rejection) => {
            warn!("Rejected payload: {rejection}");
            Err(AppError::MalformedPayload)
        }
    }
}
