//! Name store — the flat JSON file mapping script identifiers to display
//! names.
//!
//! Every call re-reads the backing file; there is no in-memory cache.
//! Mutations are serialized behind a single writer lock and land via a
//! temp file + atomic rename, so a reader never observes a half-written
//! store and concurrent upserts in this process cannot lose each other's
//! entries.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::sync::Mutex;

use crate::error::GatewayError;

/// Filename of the store under the data directory.
pub const NAMES_FILE: &str = "names.json";

pub struct NameStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl NameStore {
    /// Store backed by `names.json` under the given data directory.
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(NAMES_FILE),
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and decode the whole mapping.
    pub async fn load(&self) -> Result<HashMap<String, String>, GatewayError> {
        let raw = tokio::fs::read(&self.path)
            .await
            .map_err(GatewayError::StoreUnavailable)?;
        serde_json::from_slice(&raw).map_err(GatewayError::StoreCorrupt)
    }

    /// Look up the display name recorded for one script identifier.
    pub async fn lookup(&self, id: &str) -> Result<Option<String>, GatewayError> {
        let mut names = self.load().await?;
        Ok(names.remove(id))
    }

    /// Insert or overwrite one mapping.
    ///
    /// Read-modify-write: a missing or empty file counts as an empty
    /// mapping, so the first upsert creates the store.
    pub async fn upsert(&self, id: &str, name: &str) -> Result<(), GatewayError> {
        let _guard = self.write_lock.lock().await;

        let mut names: HashMap<String, String> = match tokio::fs::read(&self.path).await {
            Ok(raw) if raw.is_empty() => HashMap::new(),
            Ok(raw) => serde_json::from_slice(&raw).map_err(GatewayError::StoreCorrupt)?,
            Err(e) if e.kind() == ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(GatewayError::StoreUnavailable(e)),
        };

        names.insert(id.to_string(), name.to_string());

        let encoded = serde_json::to_vec_pretty(&names)
            .map_err(|e| GatewayError::StoreWrite(format!("encode: {e}")))?;

        let partial = self.path.with_file_name(format!("{NAMES_FILE}.partial"));
        tokio::fs::write(&partial, &encoded)
            .await
            .map_err(|e| GatewayError::StoreWrite(format!("write {}: {e}", partial.display())))?;
        tokio::fs::rename(&partial, &self.path)
            .await
            .map_err(|e| GatewayError::StoreWrite(format!("finalize {}: {e}", self.path.display())))?;

        Ok(())
    }
}
