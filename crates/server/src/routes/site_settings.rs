use axum::{extract::State, Json};
use models::{SiteSettings, SiteSettingsPatch};

use crate::errors::JsonApiError;
use crate::routes::auth::ServerState;

pub async fn get_settings(State(state): State<ServerState>) -> Json<SiteSettings> {
    Json(state.store.site_settings().await)
}

/// 部分更新站点设置（单例，无 id）
pub async fn update_settings(
    State(state): State<ServerState>,
    Json(patch): Json<SiteSettingsPatch>,
) -> Result<Json<SiteSettings>, JsonApiError> {
    let updated = state.store.update_site_settings(patch).await?;
    Ok(Json(updated))
}
