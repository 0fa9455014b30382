use axum::{
    extract::{Query, State},
    Json,
};
use models::{Project, ProjectInput, ProjectPatch};

use crate::errors::JsonApiError;
use crate::routes::auth::ServerState;
use crate::routes::{require_id, IdQuery};

pub async fn list(State(state): State<ServerState>) -> Json<Vec<Project>> {
    Json(state.store.list_projects().await)
}

pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<ProjectInput>,
) -> Result<Json<Project>, JsonApiError> {
    let created = state.store.create_project(input).await?;
    Ok(Json(created))
}

pub async fn update(
    State(state): State<ServerState>,
    Json(patch): Json<ProjectPatch>,
) -> Result<Json<Project>, JsonApiError> {
    let id = require_id(patch.id.clone())?;
    let updated = state.store.update_project(&id, patch).await?;
    Ok(Json(updated))
}

pub async fn delete(
    State(state): State<ServerState>,
    Query(query): Query<IdQuery>,
) -> Result<Json<serde_json::Value>, JsonApiError> {
    let id = require_id(query.id)?;
    let removed = state.store.delete_project(&id).await?;
    Ok(Json(serde_json::json!({"success": true, "removed": removed})))
}
