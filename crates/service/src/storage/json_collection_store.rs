use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use tokio::{fs, sync::RwLock};
use tracing::{debug, error};

use crate::errors::ServiceError;

/// Ordered, JSON file-backed document collection.
///
/// Documents are kept in insertion order and the whole collection is
/// rewritten as a JSON array after every insert. Writes go to a sibling
/// `.tmp` file that is then renamed over the collection file, so a reader
/// never sees a half-written array.
pub struct JsonCollectionStore<T> {
    docs: RwLock<Vec<T>>,
    file_path: PathBuf,
}

fn temp_path(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}

async fn write_replace(path: &Path, data: &[u8]) -> Result<(), ServiceError> {
    let tmp = temp_path(path);
    fs::write(&tmp, data).await.map_err(|e| ServiceError::Storage(e.to_string()))?;
    fs::rename(&tmp, path).await.map_err(|e| ServiceError::Storage(e.to_string()))
}

impl<T> JsonCollectionStore<T>
where
    T: Serialize + DeserializeOwned + Clone + Send + Sync,
{
    /// Open the collection at `path`, creating parent directories and an empty
    /// `[]` file if missing. A file that exists but does not parse is an error
    /// and is left untouched.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let file_path = path.into();
        common::env::ensure_parent_dir(&file_path.to_string_lossy())
            .await
            .map_err(|e| ServiceError::Storage(e.to_string()))?;

        let docs: Vec<T> = match fs::read(&file_path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                error!(path = %file_path.display(), error = %e, "collection file is not a JSON array of documents");
                ServiceError::Storage(format!("{}: {e}", file_path.display()))
            })?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                write_replace(&file_path, b"[]").await?;
                Vec::new()
            }
            Err(e) => return Err(ServiceError::Storage(format!("{}: {e}", file_path.display()))),
        };
        debug!(path = %file_path.display(), count = docs.len(), "collection loaded");

        Ok(Arc::new(Self { docs: RwLock::new(docs), file_path }))
    }

    async fn persist(&self, docs: &[T]) -> Result<(), ServiceError> {
        let data = serde_json::to_vec(docs).map_err(|e| ServiceError::Storage(e.to_string()))?;
        write_replace(&self.file_path, &data).await
    }

    /// Append a document and persist. The write lock is held across the file
    /// write so the file always reflects a prefix-consistent order.
    pub async fn insert(&self, doc: T) -> Result<T, ServiceError> {
        let mut docs = self.docs.write().await;
        docs.push(doc.clone());
        if let Err(e) = self.persist(&docs).await {
            docs.pop();
            return Err(e);
        }
        Ok(doc)
    }

    /// All documents in insertion order.
    pub async fn list(&self) -> Vec<T> {
        self.docs.read().await.clone()
    }
}
