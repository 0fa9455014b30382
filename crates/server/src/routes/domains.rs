use axum::{
    extract::{Query, State},
    Json,
};
use models::{Domain, DomainInput, DomainPatch};

use crate::errors::JsonApiError;
use crate::routes::auth::ServerState;
use crate::routes::{require_id, IdQuery};

/// 列出所有域名
#[utoipa::path(get, path = "/api/domains", tag = "domains", responses((status = 200, description = "List domains")))]
pub async fn list(State(state): State<ServerState>) -> Json<Vec<Domain>> {
    Json(state.store.list_domains().await)
}

/// 创建域名：id 缺省生成，status 缺省 available
#[utoipa::path(post, path = "/api/domains", tag = "domains", request_body = crate::openapi::DomainInputDoc, responses((status = 200, description = "Created"), (status = 400, description = "Bad Request"), (status = 409, description = "Conflict")))]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<DomainInput>,
) -> Result<Json<Domain>, JsonApiError> {
    let created = state.store.create_domain(input).await?;
    Ok(Json(created))
}

/// 按 body 中的 id 更新域名
#[utoipa::path(put, path = "/api/domains", tag = "domains", request_body = crate::openapi::DomainPatchDoc, responses((status = 200, description = "Updated"), (status = 404, description = "Not Found")))]
pub async fn update(
    State(state): State<ServerState>,
    Json(patch): Json<DomainPatch>,
) -> Result<Json<Domain>, JsonApiError> {
    let id = require_id(patch.id.clone())?;
    let updated = state.store.update_domain(&id, patch).await?;
    Ok(Json(updated))
}

/// 删除域名：幂等，removed 标记是否实际删除
#[utoipa::path(delete, path = "/api/domains", tag = "domains", responses((status = 200, description = "Deleted")))]
pub async fn delete(
    State(state): State<ServerState>,
    Query(query): Query<IdQuery>,
) -> Result<Json<serde_json::Value>, JsonApiError> {
    let id = require_id(query.id)?;
    let removed = state.store.delete_domain(&id).await?;
    Ok(Json(serde_json::json!({"success": true, "removed": removed})))
}
