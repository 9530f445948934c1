//! File-based document store.
//!
//! One JSON file per document under a single directory:
//! - Exclusive `fs2` lock on a sidecar `.lock` file while writing
//! - Atomic writes via temp file + rename
//! - Shared lock while reading so a reader never sees a half-renamed pair

use async_trait::async_trait;
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::document::Document;
use crate::domain::errors::StoreError;
use crate::domain::types::LpaId;
use crate::store::DonorStore;

#[derive(Debug, Clone)]
pub struct FileDonorStore {
    dir: PathBuf,
}

impl FileDonorStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the JSON file for `lpa_id`. Identifiers that could escape the
    /// directory have no path.
    pub fn document_path(&self, lpa_id: &LpaId) -> Option<PathBuf> {
        let id = lpa_id.as_str();
        let safe = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        safe.then(|| self.dir.join(format!("{}.json", id)))
    }

    fn open_lock(&self, path: &Path) -> Result<File, StoreError> {
        std::fs::create_dir_all(&self.dir).map_err(io_error)?;
        OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(path.with_extension("lock"))
            .map_err(io_error)
    }
}

#[async_trait]
impl DonorStore for FileDonorStore {
    async fn get(&self, lpa_id: &LpaId) -> Result<Document, StoreError> {
        let path = self
            .document_path(lpa_id)
            .ok_or_else(|| StoreError::NotFound(lpa_id.clone()))?;
        if !path.exists() {
            return Err(StoreError::NotFound(lpa_id.clone()));
        }

        let lock = self.open_lock(&path)?;
        lock.lock_shared().map_err(io_error)?;
        let loaded = load_document(&path);
        let _ = FileExt::unlock(&lock);

        loaded?.ok_or_else(|| StoreError::NotFound(lpa_id.clone()))
    }

    async fn put(&self, document: &mut Document) -> Result<(), StoreError> {
        let path = self
            .document_path(&document.lpa_id)
            .ok_or_else(|| StoreError::Io {
                message: format!("unusable document id: {}", document.lpa_id),
            })?;

        let lock = self.open_lock(&path)?;
        lock.lock_exclusive().map_err(io_error)?;

        document.version += 1;
        let saved = save_document(&path, document);
        if saved.is_err() {
            document.version -= 1;
        } else {
            tracing::debug!("Wrote {} v{}", document.lpa_id, document.version);
        }
        let _ = FileExt::unlock(&lock);
        saved
    }
}

fn io_error(e: std::io::Error) -> StoreError {
    StoreError::Io {
        message: e.to_string(),
    }
}

fn load_document(path: &Path) -> Result<Option<Document>, StoreError> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(io_error(e)),
    };

    let document = serde_json::from_str(&content).map_err(|e| {
        tracing::warn!("Failed to decode document {}: {}", path.display(), e);
        StoreError::Corrupt {
            message: format!("{}: {}", path.display(), e),
        }
    })?;

    Ok(Some(document))
}

fn save_document(path: &Path, document: &Document) -> Result<(), StoreError> {
    let content = serde_json::to_string_pretty(document).map_err(|e| StoreError::Io {
        message: e.to_string(),
    })?;

    // Write to temp file, then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, content).map_err(io_error)?;
    std::fs::rename(&tmp_path, path).map_err(io_error)?;

    Ok(())
}

#[cfg(test)]
#[path = "tests/file_store_tests.rs"]
mod tests;
