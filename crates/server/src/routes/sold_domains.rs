use axum::{
    extract::{Query, State},
    Json,
};
use models::{SoldDomain, SoldDomainInput, SoldDomainPatch};

use crate::errors::JsonApiError;
use crate::routes::auth::ServerState;
use crate::routes::{require_id, IdQuery};

/// 列出已售域名
pub async fn list(State(state): State<ServerState>) -> Json<Vec<SoldDomain>> {
    Json(state.store.list_sold_domains().await)
}

/// 创建已售域名记录：status 缺省 sold
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<SoldDomainInput>,
) -> Result<Json<SoldDomain>, JsonApiError> {
    let created = state.store.create_sold_domain(input).await?;
    Ok(Json(created))
}

/// 按 body 中的 id 更新
pub async fn update(
    State(state): State<ServerState>,
    Json(patch): Json<SoldDomainPatch>,
) -> Result<Json<SoldDomain>, JsonApiError> {
    let id = require_id(patch.id.clone())?;
    let updated = state.store.update_sold_domain(&id, patch).await?;
    Ok(Json(updated))
}

/// 删除（幂等）
pub async fn delete(
    State(state): State<ServerState>,
    Query(query): Query<IdQuery>,
) -> Result<Json<serde_json::Value>, JsonApiError> {
    let id = require_id(query.id)?;
    let removed = state.store.delete_sold_domain(&id).await?;
    Ok(Json(serde_json::json!({"success": true, "removed": removed})))
}
