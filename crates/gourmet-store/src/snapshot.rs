//! # Snapshot Store
//!
//! Whole-system persistence: one file, one aggregate.
//!
//! ## Atomicity
//! ```text
//! save(system)
//!   1. serialize the whole GourmetSystem to JSON
//!   2. write it to <path>.tmp
//!   3. rename <path>.tmp over <path>
//! ```
//! The rename is the commit point, so a crash mid-save leaves either the
//! old snapshot or the new one on disk — never a torn file. Load is the
//! mirror image: deserialize the whole aggregate or fail; there is no
//! partial restore.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use gourmet_core::GourmetSystem;

use crate::error::StoreResult;

/// Persists a [`GourmetSystem`] to a single snapshot file.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    /// Creates a store over the given snapshot path. Nothing is touched
    /// on disk until [`save`](SnapshotStore::save) or
    /// [`load`](SnapshotStore::load) is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SnapshotStore { path: path.into() }
    }

    /// The snapshot path this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a snapshot currently exists on disk.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Serializes the whole system and atomically replaces the snapshot.
    pub fn save(&self, system: &GourmetSystem) -> StoreResult<()> {
        let json = serde_json::to_vec_pretty(system)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let staging = self.staging_path();
        fs::write(&staging, &json)?;
        fs::rename(&staging, &self.path)?;

        info!(
            path = %self.path.display(),
            bytes = json.len(),
            "Saved system snapshot"
        );
        Ok(())
    }

    /// Restores the whole system from the snapshot.
    pub fn load(&self) -> StoreResult<GourmetSystem> {
        let bytes = fs::read(&self.path)?;
        let system = serde_json::from_slice(&bytes)?;

        debug!(
            path = %self.path.display(),
            bytes = bytes.len(),
            "Loaded system snapshot"
        );
        Ok(system)
    }

    /// Restores the snapshot, or builds a fresh default system if none
    /// exists yet. Any other failure (unreadable file, bad format) still
    /// propagates — a corrupt snapshot should not be silently discarded.
    pub fn load_or_default(&self) -> StoreResult<GourmetSystem> {
        match self.load() {
            Ok(system) => Ok(system),
            Err(crate::error::StoreError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "No snapshot found, starting fresh");
                Ok(GourmetSystem::new())
            }
            Err(err) => Err(err),
        }
    }

    /// Sibling path the new snapshot is staged at before the rename.
    fn staging_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn store_in(dir: &tempfile::TempDir) -> SnapshotStore {
        SnapshotStore::new(dir.path().join("gourmet.json"))
    }

    #[test]
    fn test_round_trip_preserves_the_aggregate() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let mut system = GourmetSystem::new();
        let updates: BTreeMap<String, String> = [("Fries".to_string(), "500".to_string())].into();
        system.update_stock_levels(&updates).unwrap();
        let id = system.create_new_order();

        store.save(&system).unwrap();
        let restored = store.load().unwrap();

        assert_eq!(restored.ledger().quantity("Fries"), 500);
        assert!(restored.id_exists(&id));
        assert_eq!(restored.stock_levels(), system.stock_levels());
    }

    #[test]
    fn test_load_or_default_on_missing_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert!(!store.exists());
        let system = store.load_or_default().unwrap();

        // A fresh default system: full menu, everything at zero stock.
        assert!(!system.stock_levels().is_empty());
        assert!(system.stock_levels().values().all(|e| e.quantity == 0));
        // Nothing was written by loading.
        assert!(!store.exists());
    }

    #[test]
    fn test_plain_load_on_missing_snapshot_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(store.load().is_err());
    }

    #[test]
    fn test_corrupt_snapshot_propagates_instead_of_resetting() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        fs::write(store.path(), b"not json").unwrap();
        assert!(matches!(
            store.load_or_default(),
            Err(crate::error::StoreError::Format(_))
        ));
    }

    #[test]
    fn test_save_leaves_no_staging_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save(&GourmetSystem::new()).unwrap();
        store.save(&GourmetSystem::new()).unwrap(); // overwrite path too

        assert!(store.exists());
        assert!(!store.staging_path().exists());
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(dir.path().join("nested/deeper/gourmet.json"));

        store.save(&GourmetSystem::new()).unwrap();
        assert!(store.exists());
    }
}
