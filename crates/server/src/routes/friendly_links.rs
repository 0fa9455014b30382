use axum::{
    extract::{Query, State},
    Json,
};
use models::{FriendlyLink, FriendlyLinkInput, FriendlyLinkPatch};

use crate::errors::JsonApiError;
use crate::routes::auth::ServerState;
use crate::routes::{require_id, IdQuery};

pub async fn list(State(state): State<ServerState>) -> Json<Vec<FriendlyLink>> {
    Json(state.store.list_friendly_links().await)
}

pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<FriendlyLinkInput>,
) -> Result<Json<FriendlyLink>, JsonApiError> {
    let created = state.store.create_friendly_link(input).await?;
    Ok(Json(created))
}

pub async fn update(
    State(state): State<ServerState>,
    Json(patch): Json<FriendlyLinkPatch>,
) -> Result<Json<FriendlyLink>, JsonApiError> {
    let id = require_id(patch.id.clone())?;
    let updated = state.store.update_friendly_link(&id, patch).await?;
    Ok(Json(updated))
}

pub async fn delete(
    State(state): State<ServerState>,
    Query(query): Query<IdQuery>,
) -> Result<Json<serde_json::Value>, JsonApiError> {
    let id = require_id(query.id)?;
    let removed = state.store.delete_friendly_link(&id).await?;
    Ok(Json(serde_json::json!({"success": true, "removed": removed})))
}
