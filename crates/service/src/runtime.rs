//! Runtime environment helpers
//!
//! Thin wrapper around `common::env` to keep binary crates importing
//! `service::runtime::ensure_env` without depending directly on `common`.

/// Ensure the data and backup directories exist.
pub async fn ensure_env(data_dir: &str, backup_dir: &str) -> anyhow::Result<()> {
    common::env::ensure_env(data_dir, backup_dir).await
}
