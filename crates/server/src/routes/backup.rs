use axum::{extract::State, Json};

use service::backup::{self, BackupData, BackupEntry};

use crate::errors::JsonApiError;
use crate::routes::auth::ServerState;

/// 导出整个文档（含凭证哈希，需登录）
pub async fn export(State(state): State<ServerState>) -> Json<BackupData> {
    Json(backup::export(state.store.export().await))
}

/// 导入备份：校验后落盘为带时间戳的快照文件
pub async fn import(
    State(state): State<ServerState>,
    Json(data): Json<BackupData>,
) -> Result<Json<serde_json::Value>, JsonApiError> {
    backup::validate(&data)?;
    let filename = backup::write_snapshot(&state.backup_dir, &data).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Backup imported successfully",
        "filename": filename,
    })))
}

/// 快照历史，按时间倒序
pub async fn history(State(state): State<ServerState>) -> Json<Vec<BackupEntry>> {
    Json(backup::history(&state.backup_dir).await)
}

/// 从备份载荷恢复整个文档
pub async fn restore(
    State(state): State<ServerState>,
    Json(data): Json<BackupData>,
) -> Result<Json<serde_json::Value>, JsonApiError> {
    backup::validate(&data)?;
    state.store.replace(data.document).await?;
    Ok(Json(serde_json::json!({"success": true})))
}

/// 恢复出厂内容，丢弃全部数据
pub async fn reset(State(state): State<ServerState>) -> Result<Json<serde_json::Value>, JsonApiError> {
    state.store.reset().await?;
    Ok(Json(serde_json::json!({"success": true})))
}
