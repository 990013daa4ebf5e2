//! JSON file record store.
//!
//! The whole snapshot lives in one pretty-printed JSON array. Each
//! replacement writes its own temporary file next to the store, syncs it,
//! then renames it over the canonical file, so readers see either the
//! previous or the next snapshot in full. Concurrent replacements never
//! share a temporary file; the last rename wins.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tempfile::NamedTempFile;

use passvault_core::error::{CoreError, CoreResult};
use passvault_core::traits::RecordStore;
use passvault_core::types::Record;

const TEMP_SUFFIX: &str = ".tmp";

/// File-backed record store.
///
/// Holds no in-memory state: every `load` reads the file and every
/// `replace` rewrites it.
#[derive(Debug, Clone)]
pub struct JsonFileRecordStore {
    path: PathBuf,
}

impl JsonFileRecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Canonical store file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory holding the store and its temporary siblings.
    fn dir(&self) -> &Path {
        self.path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
    }

    /// `.<file name>.` prefix shared by this store's temporary files.
    fn temp_prefix(&self) -> String {
        let name = self
            .path
            .file_name()
            .map_or_else(|| "store".into(), |n| n.to_string_lossy());
        format!(".{name}.")
    }

    fn read_sync(path: &Path) -> Vec<Record> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("Record store {} does not exist yet", path.display());
                return Vec::new();
            }
            Err(e) => {
                log::warn!("Failed to read record store {}: {e}", path.display());
                return Vec::new();
            }
        };

        let raw = raw.trim();
        if raw.is_empty() {
            return Vec::new();
        }

        match serde_json::from_str::<Vec<Record>>(raw) {
            Ok(records) => records,
            Err(e) => {
                log::warn!(
                    "Record store {} is unreadable, treating as empty: {e}",
                    path.display()
                );
                Vec::new()
            }
        }
    }

    /// Write the serialized snapshot to a fresh temporary file and flush it to disk.
    ///
    /// The file is removed if it is dropped without being committed.
    fn stage_sync(&self, json: &str) -> CoreResult<NamedTempFile> {
        let dir = self.dir();
        fs::create_dir_all(dir)
            .map_err(|e| persistence_error(&format!("create directory {}", dir.display()), &e))?;

        let mut file = tempfile::Builder::new()
            .prefix(&self.temp_prefix())
            .suffix(TEMP_SUFFIX)
            .tempfile_in(dir)
            .map_err(|e| {
                persistence_error(&format!("create temporary file in {}", dir.display()), &e)
            })?;
        file.write_all(json.as_bytes())
            .and_then(|()| file.as_file().sync_all())
            .map_err(|e| persistence_error(&format!("write {}", file.path().display()), &e))?;
        Ok(file)
    }

    /// Atomically move a staged snapshot over the canonical file.
    fn commit_sync(&self, staged: NamedTempFile) -> CoreResult<()> {
        staged.persist(&self.path).map(drop).map_err(|e| {
            persistence_error(
                &format!(
                    "rename {} to {}",
                    e.file.path().display(),
                    self.path.display()
                ),
                &e.error,
            )
        })
    }

    fn replace_sync(&self, json: &str) -> CoreResult<()> {
        let staged = self.stage_sync(json)?;
        self.commit_sync(staged)
    }
}

fn persistence_error(action: &str, err: &std::io::Error) -> CoreError {
    CoreError::PersistenceFailure(format!("Failed to {action}: {err}"))
}

#[async_trait]
impl RecordStore for JsonFileRecordStore {
    async fn load(&self) -> Vec<Record> {
        let path = self.path.clone();
        match tokio::task::spawn_blocking(move || Self::read_sync(&path)).await {
            Ok(records) => {
                log::debug!("Loaded {} records from {}", records.len(), self.path.display());
                records
            }
            Err(e) => {
                log::error!("Record store read task failed: {e}");
                Vec::new()
            }
        }
    }

    async fn replace(&self, records: &[Record]) -> CoreResult<()> {
        let json = serde_json::to_string_pretty(records)?;
        let store = self.clone();
        let count = records.len();

        tokio::task::spawn_blocking(move || store.replace_sync(&json))
            .await
            .map_err(|e| CoreError::PersistenceFailure(format!("Task join error: {e}")))?
            .inspect_err(|e| log::error!("Record store write failed: {e}"))?;

        log::debug!("Saved {count} records to {}", self.path.display());
        Ok(())
    }
}
