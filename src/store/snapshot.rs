use super::registry::Registry;

use std::fs;
use std::path::{Path, PathBuf};

/// Snapshot file name inside the data directory.
pub const SNAPSHOT_FILE: &str = "registry.json";

/// Write-only persistence of the registry's database/table-name shape.
///
/// Saved after every mutating request so the namespace topology can be
/// reconstructed after a restart by replaying the creation calls. Startup
/// never reads the file back; the registry always begins empty.
pub struct RegistrySnapshot {
    path: PathBuf,
}

impl RegistrySnapshot {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(SNAPSHOT_FILE),
        }
    }

    /// Serializes the current shape and writes the file whole. A failed
    /// write is logged and swallowed; the in-process registry already
    /// reflects the mutation.
    pub fn save(&self, registry: &Registry) {
        let raw = match serde_json::to_string(&registry.snapshot()) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::error!("Failed to serialize registry snapshot: {}", err);
                return;
            }
        };

        if let Err(err) = fs::write(&self.path, raw) {
            tracing::error!("Failed to write {}: {}", self.path.display(), err);
        }
    }
}
