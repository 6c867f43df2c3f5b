use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::models::user::UserState;

/// Fixed storage key for the single persisted profile, matching the key the
/// original front-end used in browser storage.
pub const STORAGE_KEY: &str = "fundayJuniorUser";

/// Persistence collaborator: one serialized `UserState` blob under a fixed
/// key. Invoked by the composing layer after each reducer transition, never
/// by the reducer itself. Last write wins.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    dir: PathBuf,
}

impl SnapshotStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        SnapshotStore { dir: dir.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", STORAGE_KEY))
    }

    pub fn save(&self, user: &UserState) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create snapshot dir {}", self.dir.display()))?;
        let json = serde_json::to_vec_pretty(user).context("failed to serialize snapshot")?;
        let path = self.path();
        fs::write(&path, json)
            .with_context(|| format!("failed to write snapshot {}", path.display()))?;
        tracing::debug!(path = %path.display(), "snapshot saved");
        Ok(())
    }

    /// An absent snapshot means "no logged-in user", not an error. A present
    /// but unreadable snapshot is an error surfaced to the caller.
    pub fn load(&self) -> Result<Option<UserState>> {
        let path = self.path();
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("failed to read snapshot {}", path.display()))
            }
        };
        let user = serde_json::from_slice(&bytes)
            .with_context(|| format!("snapshot {} is corrupt", path.display()))?;
        Ok(Some(user))
    }

    /// Remove the persisted profile (logout).
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(self.path()) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| {
                format!("failed to remove snapshot {}", self.path().display())
            }),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}
