use axum::{
    extract::{Query, State},
    Json,
};
use models::{FriendLink, FriendLinkInput, FriendLinkPatch};

use crate::errors::JsonApiError;
use crate::routes::auth::ServerState;
use crate::routes::{require_id, IdQuery};

pub async fn list(State(state): State<ServerState>) -> Json<Vec<FriendLink>> {
    Json(state.store.list_friends().await)
}

pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<FriendLinkInput>,
) -> Result<Json<FriendLink>, JsonApiError> {
    let created = state.store.create_friend(input).await?;
    Ok(Json(created))
}

pub async fn update(
    State(state): State<ServerState>,
    Json(patch): Json<FriendLinkPatch>,
) -> Result<Json<FriendLink>, JsonApiError> {
    let id = require_id(patch.id.clone())?;
    let updated = state.store.update_friend(&id, patch).await?;
    Ok(Json(updated))
}

pub async fn delete(
    State(state): State<ServerState>,
    Query(query): Query<IdQuery>,
) -> Result<Json<serde_json::Value>, JsonApiError> {
    let id = require_id(query.id)?;
    let removed = state.store.delete_friend(&id).await?;
    Ok(Json(serde_json::json!({"success": true, "removed": removed})))
}
