use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use serde_json::json;

use shelf_types::{Item, ItemDraft, ItemId, ItemPatch};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Request body for create and full update.
///
/// Both fields are optional at the deserialization layer so that presence
/// can be checked before any store call: a missing field is a
/// request-shape error, while values that are present but out of range are
/// rejected by the store as constraint violations.
#[derive(Debug, Deserialize)]
pub struct ItemBody {
    name: Option<String>,
    price: Option<f64>,
}

impl ItemBody {
    fn into_draft(self) -> ApiResult<ItemDraft> {
        match (self.name, self.price) {
            (Some(name), Some(price)) => Ok(ItemDraft::new(name, price)),
            _ => Err(ApiError::MissingFields),
        }
    }
}

fn parse_id(raw: &str) -> ApiResult<ItemId> {
    Ok(ItemId::parse(raw)?)
}

/// Liveness handler.
pub async fn root_handler() -> Json<serde_json::Value> {
    Json(json!({ "message": "API is running" }))
}

/// Version handler.
pub async fn version_handler() -> Json<serde_json::Value> {
    Json(json!({
        "name": "shelf-server",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn list_items(State(state): State<AppState>) -> ApiResult<Json<Vec<Item>>> {
    Ok(Json(state.store.list().await?))
}

pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Item>> {
    let id = parse_id(&id)?;
    match state.store.find(&id).await? {
        Some(item) => Ok(Json(item)),
        None => Err(ApiError::NotFound),
    }
}

pub async fn create_item(
    State(state): State<AppState>,
    Json(body): Json<ItemBody>,
) -> ApiResult<(StatusCode, Json<Item>)> {
    let draft = body.into_draft()?;
    let item = state.store.insert(draft).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<ItemBody>,
) -> ApiResult<Json<Item>> {
    let id = parse_id(&id)?;
    let draft = body.into_draft()?;
    match state.store.replace(&id, draft).await? {
        Some(item) => Ok(Json(item)),
        None => Err(ApiError::NotFound),
    }
}

pub async fn patch_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<ItemPatch>,
) -> ApiResult<Json<Item>> {
    let id = parse_id(&id)?;
    match state.store.merge(&id, patch).await? {
        Some(item) => Ok(Json(item)),
        None => Err(ApiError::NotFound),
    }
}

pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&id)?;
    if state.store.delete(&id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}
