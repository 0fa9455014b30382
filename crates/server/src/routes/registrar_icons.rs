use std::collections::BTreeMap;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::JsonApiError;
use crate::routes::auth::ServerState;

/// 注册商图标是字典：name 即主键，值为原始 SVG 标记
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IconRecord {
    pub name: String,
    pub svg: String,
}

#[derive(Deserialize)]
pub struct NameQuery {
    pub name: Option<String>,
}

pub async fn list(State(state): State<ServerState>) -> Json<BTreeMap<String, String>> {
    Json(state.store.list_icons().await)
}

/// 新增图标：同名冲突返回 409
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<IconRecord>,
) -> Result<Json<IconRecord>, JsonApiError> {
    state
        .store
        .create_icon(payload.name.clone(), payload.svg.clone())
        .await?;
    Ok(Json(payload))
}

/// 更新图标：不存在返回 404
pub async fn update(
    State(state): State<ServerState>,
    Json(payload): Json<IconRecord>,
) -> Result<Json<IconRecord>, JsonApiError> {
    state
        .store
        .update_icon(payload.name.clone(), payload.svg.clone())
        .await?;
    Ok(Json(payload))
}

/// 删除图标：不存在返回 404
pub async fn delete(
    State(state): State<ServerState>,
    Query(query): Query<NameQuery>,
) -> Result<Json<serde_json::Value>, JsonApiError> {
    let name = match query.name {
        Some(n) if !n.trim().is_empty() => n,
        _ => return Err(JsonApiError::bad_request("icon name is required")),
    };
    state.store.delete_icon(&name).await?;
    Ok(Json(serde_json::json!({"success": true})))
}
