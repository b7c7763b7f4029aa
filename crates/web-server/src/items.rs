//! Demo item routes backed by a fixed in-memory catalog.

use crate::{
    AppState,
    error::AppError,
    extract::{ApiJson, ItemEchoPath, ItemPath},
};
use axum::{Json, extract::State};
use core_types::{CoreError, Item, ItemDraft};
use serde_json::{Value, json};
use std::sync::Arc;

/// # GET /item/:item_id
pub async fn echo_item(ItemEchoPath { item_id }: ItemEchoPath) -> Json<Value> {
    Json(json!({ "item_id": item_id, "name": "Foo" }))
}

/// # GET /items/:item_id
pub async fn get_item(
    ItemPath { item_id }: ItemPath,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Item>, AppError> {
    Item::find(&state.items, item_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Item not found".to_string()))
}

/// # POST /items
pub async fn create_item(ApiJson(draft): ApiJson<ItemDraft>) -> Result<Json<ItemDraft>, AppError> {
    draft.validate().map_err(|CoreError::InvalidInput(_, reason)| AppError::BadRequest(reason))?;
    Ok(Json(draft))
}
