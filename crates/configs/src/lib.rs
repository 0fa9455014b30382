use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 8081, worker_threads: Some(4) }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_document_file")]
    pub document_file: String,
    #[serde(default = "default_backup_dir")]
    pub backup_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            document_file: default_document_file(),
            backup_dir: default_backup_dir(),
        }
    }
}

fn default_data_dir() -> String { "data".into() }
fn default_document_file() -> String { "db.json".into() }
fn default_backup_dir() -> String { "backups".into() }

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        // 归一化 server
        self.server.normalize()?;
        // 归一化 storage（支持从环境变量覆盖数据目录）
        self.storage.normalize_from_env();
        self.storage.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port 必须在 1..=65535 范围内"));
        }
        if let Some(w) = self.worker_threads {
            if w == 0 { self.worker_threads = Some(4); }
        } else {
            self.worker_threads = Some(4);
        }
        Ok(())
    }
}

impl StorageConfig {
    pub fn normalize_from_env(&mut self) {
        // 若环境变量提供了数据目录，优先生效
        if let Ok(dir) = std::env::var("DATA_DIR") {
            if !dir.trim().is_empty() {
                self.data_dir = dir;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.data_dir.trim().is_empty() {
            return Err(anyhow!("storage.data_dir 不能为空"));
        }
        if self.document_file.trim().is_empty() {
            return Err(anyhow!("storage.document_file 不能为空"));
        }
        if self.backup_dir.trim().is_empty() {
            return Err(anyhow!("storage.backup_dir 不能为空"));
        }
        Ok(())
    }

    /// Absolute path of the JSON document backing the store.
    pub fn document_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(&self.document_file)
    }

    /// Absolute path of the backup snapshot directory.
    pub fn backup_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(&self.backup_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let mut cfg = AppConfig::default();
        cfg.normalize_and_validate().expect("defaults validate");
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.storage.document_path(), PathBuf::from("data/db.json"));
        assert_eq!(cfg.storage.backup_path(), PathBuf::from("data/backups"));
    }

    #[test]
    fn empty_host_normalized() {
        let mut cfg: AppConfig =
            toml::from_str("[server]\nhost = \"\"\nport = 9000\n").expect("parse");
        cfg.normalize_and_validate().expect("validate");
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 9000);
    }
}
