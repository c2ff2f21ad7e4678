//! File-backed persistence: a single JSON snapshot.
//!
//! The whole key space is serialized as one JSON object. Each persisted
//! write updates an in-memory mirror and rewrites the snapshot through a
//! temp-file-then-rename, so a crash mid-write leaves the previous snapshot
//! intact rather than a torn file.

use crate::{Persistence, PersistenceError, PersistenceResult};
use async_trait::async_trait;
use opal_types::StoreKey;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::info;

/// Persistence backend storing all entries in one JSON snapshot file.
#[derive(Debug)]
pub struct FilePersistence {
    path: PathBuf,
    // Mirror of the snapshot contents; the lock also serializes rewrites so
    // two persist calls cannot race on the temp file.
    mirror: Mutex<HashMap<StoreKey, Value>>,
}

impl FilePersistence {
    /// Opens a snapshot at `path`, reading existing contents if any.
    ///
    /// A missing file is an empty store, not an error. A file that exists
    /// but does not parse as a JSON object is reported as
    /// [`PersistenceError::Corrupt`] so the caller can decide whether to
    /// discard it.
    pub async fn open(path: impl AsRef<Path>) -> PersistenceResult<Self> {
        let path = path.as_ref().to_path_buf();
        let mirror = match tokio::fs::read_to_string(&path).await {
            Ok(data) => {
                let json: Value = serde_json::from_str(&data)?;
                let Value::Object(object) = json else {
                    return Err(PersistenceError::Corrupt(format!(
                        "snapshot {} is not a JSON object",
                        path.display()
                    )));
                };
                object
                    .into_iter()
                    .map(|(key, value)| (StoreKey::from(key), value))
                    .collect()
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                info!("no snapshot at {}, starting empty", path.display());
                HashMap::new()
            }
            Err(err) => return Err(err.into()),
        };

        Ok(Self {
            path,
            mirror: Mutex::new(mirror),
        })
    }

    /// Path of the snapshot file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn write_snapshot(&self, mirror: &HashMap<StoreKey, Value>) -> PersistenceResult<()> {
        let object: serde_json::Map<String, Value> = mirror
            .iter()
            .map(|(key, value)| (key.as_str().to_string(), value.clone()))
            .collect();
        let data = serde_json::to_vec_pretty(&Value::Object(object))?;

        let tmp = self.path.with_extension("tmp");
        tokio::fs::write(&tmp, &data).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl Persistence for FilePersistence {
    async fn load_all(&self) -> PersistenceResult<HashMap<StoreKey, Value>> {
        Ok(self.mirror.lock().await.clone())
    }

    async fn persist(&self, key: &StoreKey, value: &Value) -> PersistenceResult<()> {
        let mut mirror = self.mirror.lock().await;
        let previous = mirror.insert(key.clone(), value.clone());
        if let Err(err) = self.write_snapshot(&mirror).await {
            // Roll the mirror back so it keeps matching what is on disk.
            match previous {
                Some(value) => mirror.insert(key.clone(), value),
                None => mirror.remove(key),
            };
            return Err(err);
        }
        Ok(())
    }

    async fn persist_many(&self, entries: &[(StoreKey, Value)]) -> PersistenceResult<()> {
        let mut mirror = self.mirror.lock().await;
        let rollback = mirror.clone();
        for (key, value) in entries {
            mirror.insert(key.clone(), value.clone());
        }
        if let Err(err) = self.write_snapshot(&mirror).await {
            *mirror = rollback;
            return Err(err);
        }
        Ok(())
    }
}
