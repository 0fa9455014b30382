//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

/// Ensure the data and backup directories exist, creating them if missing.
pub async fn ensure_env(data_dir: &str, backup_dir: &str) -> anyhow::Result<()> {
    tokio::fs::create_dir_all(data_dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {data_dir}: {e}"))?;
    tokio::fs::create_dir_all(backup_dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {backup_dir}: {e}"))?;
    Ok(())
}
