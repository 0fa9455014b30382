use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use serde::{de::DeserializeOwned, Serialize};
use tokio::{fs, sync::RwLock};
use tracing::warn;

use crate::errors::ServiceError;

/// Generic JSON file-backed whole-document store.
///
/// Keeps one deserialized document in memory behind an `RwLock` and rewrites
/// the entire file after every mutation. A missing or unparseable file is
/// replaced with the caller-supplied default document instead of failing.
#[derive(Clone)]
pub struct JsonDocStore<D> {
    inner: Arc<RwLock<D>>,
    file_path: PathBuf,
}

impl<D> JsonDocStore<D>
where
    D: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
{
    /// Open the store from a path. Falls back to `default_doc()` and persists
    /// it when the file is absent or corrupt.
    pub async fn open<P, F>(path: P, default_doc: F) -> Result<Arc<Self>, ServiceError>
    where
        P: Into<PathBuf>,
        F: FnOnce() -> D,
    {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).await.ok();
        }

        let doc = match fs::read(&file_path).await {
            Ok(bytes) => match serde_json::from_slice::<D>(&bytes) {
                Ok(doc) => doc,
                Err(e) => {
                    warn!(path = %file_path.display(), error = %e, "document unreadable, rewriting defaults");
                    let doc = default_doc();
                    persist(&file_path, &doc).await?;
                    doc
                }
            },
            Err(_) => {
                let doc = default_doc();
                persist(&file_path, &doc).await?;
                doc
            }
        };

        Ok(Arc::new(Self { inner: Arc::new(RwLock::new(doc)), file_path }))
    }

    /// Run a closure against a read snapshot of the document.
    pub async fn read<T>(&self, f: impl FnOnce(&D) -> T) -> T {
        let doc = self.inner.read().await;
        f(&doc)
    }

    /// Apply a mutation and persist the whole document. The write guard is
    /// held until the file write completes; concurrent updates serialize
    /// through the lock instead of clobbering each other's persisted state.
    pub async fn update<T>(
        &self,
        f: impl FnOnce(&mut D) -> Result<T, ServiceError>,
    ) -> Result<T, ServiceError> {
        let mut doc = self.inner.write().await;
        let out = f(&mut doc)?;
        persist(&self.file_path, &*doc).await?;
        Ok(out)
    }

    /// Overwrite the document wholesale and persist.
    pub async fn replace(&self, new_doc: D) -> Result<(), ServiceError> {
        let mut doc = self.inner.write().await;
        *doc = new_doc;
        persist(&self.file_path, &*doc).await
    }
}

async fn persist<D: Serialize>(path: &Path, doc: &D) -> Result<(), ServiceError> {
    let data = serde_json::to_vec_pretty(doc).map_err(|e| ServiceError::Storage(e.to_string()))?;
    fs::write(path, data).await.map_err(|e| ServiceError::Storage(e.to_string()))?;
    Ok(())
}
