//! Whole-document export/import and timestamped snapshot files.
//!
//! A backup is the entire document plus a version tag and creation timestamp.
//! Imported backups are written under the backup directory as
//! `backup-<timestamp>.json`; history lists snapshots newest first.

use std::path::Path;

use models::Document;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::warn;

use crate::errors::ServiceError;

pub const BACKUP_VERSION: &str = "1.0.0";

/// 备份数据结构：版本号 + 创建时间 + 完整文档
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupData {
    pub version: String,
    pub timestamp: i64,
    #[serde(flatten)]
    pub document: Document,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupItems {
    pub domains: usize,
    pub sold_domains: usize,
    pub friendly_links: usize,
    pub works: usize,
    pub projects: usize,
    pub friends: usize,
    pub registrar_icons: usize,
}

/// One entry of the snapshot history listing.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupEntry {
    pub filename: String,
    pub timestamp: i64,
    pub size: u64,
    pub items: BackupItems,
}

pub fn export(document: Document) -> BackupData {
    BackupData {
        version: BACKUP_VERSION.into(),
        timestamp: chrono::Utc::now().timestamp_millis(),
        document,
    }
}

/// Reject payloads that do not look like one of our exports.
pub fn validate(data: &BackupData) -> Result<(), ServiceError> {
    if data.version.trim().is_empty() {
        return Err(ServiceError::Validation("backup version is required".into()));
    }
    if data.timestamp <= 0 {
        return Err(ServiceError::Validation("backup timestamp is required".into()));
    }
    Ok(())
}

fn items_of(doc: &Document) -> BackupItems {
    BackupItems {
        domains: doc.domains.len(),
        sold_domains: doc.sold_domains.len(),
        friendly_links: doc.friendly_links.len(),
        works: doc.works.len(),
        projects: doc.projects.len(),
        friends: doc.friends.len(),
        registrar_icons: doc.registrar_icons.len(),
    }
}

/// Persist a backup as a timestamped snapshot file; returns the filename.
pub async fn write_snapshot(dir: &Path, data: &BackupData) -> Result<String, ServiceError> {
    fs::create_dir_all(dir)
        .await
        .map_err(|e| ServiceError::Storage(e.to_string()))?;

    let stamp = chrono::Utc::now().format("%Y-%m-%dT%H-%M-%S%.3fZ");
    let filename = format!("backup-{stamp}.json");
    let bytes =
        serde_json::to_vec_pretty(data).map_err(|e| ServiceError::Storage(e.to_string()))?;
    fs::write(dir.join(&filename), bytes)
        .await
        .map_err(|e| ServiceError::Storage(e.to_string()))?;
    Ok(filename)
}

/// List snapshots under the backup directory, newest first. Unreadable files
/// are skipped with a warning.
pub async fn history(dir: &Path) -> Vec<BackupEntry> {
    let mut entries = Vec::new();
    let mut read_dir = match fs::read_dir(dir).await {
        Ok(rd) => rd,
        Err(_) => return entries,
    };

    while let Ok(Some(entry)) = read_dir.next_entry().await {
        let filename = entry.file_name().to_string_lossy().to_string();
        if !filename.ends_with(".json") {
            continue;
        }
        let size = match entry.metadata().await {
            Ok(meta) => meta.len(),
            Err(_) => 0,
        };
        match fs::read(entry.path()).await {
            Ok(bytes) => match serde_json::from_slice::<BackupData>(&bytes) {
                Ok(data) => entries.push(BackupEntry {
                    filename,
                    timestamp: data.timestamp,
                    size,
                    items: items_of(&data.document),
                }),
                Err(e) => {
                    warn!(file = %filename, error = %e, "skipping unreadable backup snapshot");
                }
            },
            Err(e) => {
                warn!(file = %filename, error = %e, "skipping unreadable backup snapshot");
            }
        }
    }

    entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::default_document;
    use std::path::PathBuf;

    fn tmp_dir() -> PathBuf {
        std::env::temp_dir().join(format!("backups_{}", uuid::Uuid::new_v4()))
    }

    #[tokio::test]
    async fn export_flattens_document_fields() {
        let data = export(default_document());
        let json = serde_json::to_value(&data).expect("serialize");
        assert_eq!(json["version"], BACKUP_VERSION);
        assert!(json.get("domains").is_some());
        assert!(json.get("siteSettings").is_some());
        // round trip
        let parsed: BackupData = serde_json::from_value(json).expect("parse");
        assert_eq!(parsed.document.domains.len(), data.document.domains.len());
    }

    #[tokio::test]
    async fn snapshots_show_up_in_history_newest_first() {
        let dir = tmp_dir();

        let mut first = export(default_document());
        first.timestamp = 1;
        let mut second = export(default_document());
        second.timestamp = 2;

        write_snapshot(&dir, &first).await.expect("write first");
        // distinct filenames need distinct wall-clock millis
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        write_snapshot(&dir, &second).await.expect("write second");
        // a stray file is skipped, not fatal
        fs::write(dir.join("junk.json"), b"{").await.expect("write junk");

        let history = history(&dir).await;
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].timestamp, 2);
        assert_eq!(history[1].timestamp, 1);
        assert_eq!(history[0].items.domains, 5);

        let _ = fs::remove_dir_all(&dir).await;
    }

    #[test]
    fn validate_rejects_foreign_payloads() {
        let mut data = export(default_document());
        data.version = "".into();
        assert!(validate(&data).is_err());
    }
}
