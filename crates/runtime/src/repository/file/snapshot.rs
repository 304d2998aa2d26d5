//! File-based SnapshotRepository implementation.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use game_core::SlotSnapshot;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::sync::Mutex;

use crate::repository::{RepositoryError, Result, SnapshotRepository};

const FORMAT_VERSION: u32 = 1;

/// On-disk envelope around a snapshot.
#[derive(Debug, Serialize, Deserialize)]
struct StoredSnapshot {
    version: u32,
    /// Hex SHA-256 of the snapshot contents, checked on load.
    digest: String,
    saved_at: DateTime<Utc>,
    snapshot: SlotSnapshot,
}

/// File-based implementation of SnapshotRepository.
///
/// # File Format
///
/// A single pretty-printed JSON document holding the snapshot, its digest and
/// the save time. Writes go to a temp file next to the target and are renamed
/// into place, so a crash mid-write leaves the previous snapshot intact.
pub struct FileSnapshotRepository {
    path: PathBuf,
    /// Highest revision written so far; serialises writers.
    written: Mutex<Option<u64>>,
}

impl FileSnapshotRepository {
    /// Create a repository writing to `path`, creating parent directories.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(RepositoryError::Io)?;
        }
        Ok(Self {
            path,
            written: Mutex::new(None),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }
}

#[async_trait]
impl SnapshotRepository for FileSnapshotRepository {
    async fn save(&self, snapshot: &SlotSnapshot) -> Result<()> {
        let mut written = self.written.lock().await;
        if written.is_some_and(|revision| revision > snapshot.revision) {
            tracing::debug!(
                revision = snapshot.revision,
                "ignoring snapshot older than {}",
                self.path.display()
            );
            return Ok(());
        }

        let stored = StoredSnapshot {
            version: FORMAT_VERSION,
            digest: hex::encode(snapshot.digest()),
            saved_at: Utc::now(),
            snapshot: snapshot.clone(),
        };
        let bytes =
            serde_json::to_vec_pretty(&stored).map_err(|e| RepositoryError::Json(e.to_string()))?;

        let temp_path = self.temp_path();
        fs::write(&temp_path, bytes).await.map_err(RepositoryError::Io)?;
        fs::rename(&temp_path, &self.path)
            .await
            .map_err(RepositoryError::Io)?;

        *written = Some(snapshot.revision);
        tracing::debug!(
            revision = snapshot.revision,
            digest = %stored.digest,
            "Saved snapshot to {}",
            self.path.display()
        );

        Ok(())
    }

    async fn load(&self) -> Result<Option<SlotSnapshot>> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(RepositoryError::Io(e)),
        };

        let stored: StoredSnapshot =
            serde_json::from_slice(&bytes).map_err(|e| RepositoryError::Json(e.to_string()))?;

        if stored.version != FORMAT_VERSION {
            return Err(RepositoryError::UnsupportedVersion {
                found: stored.version,
                expected: FORMAT_VERSION,
            });
        }

        let digest = hex::encode(stored.snapshot.digest());
        if digest != stored.digest {
            return Err(RepositoryError::CorruptedData(format!(
                "digest mismatch in {}: stored {}, computed {}",
                self.path.display(),
                stored.digest,
                digest
            )));
        }

        *self.written.lock().await = Some(stored.snapshot.revision);
        tracing::debug!(
            revision = stored.snapshot.revision,
            saved_at = %stored.saved_at,
            "Loaded snapshot from {}",
            self.path.display()
        );

        Ok(Some(stored.snapshot))
    }
}

impl std::fmt::Debug for FileSnapshotRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSnapshotRepository")
            .field("path", &self.path)
            .finish()
    }
}
