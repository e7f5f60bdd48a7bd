use super::backend::{BackendKind, RecordBackend};
use super::file::FileBackend;
use super::memory::MemoryBackend;

use serde_json::Value;
use std::path::Path;

/// The unit of storage identity: one (database, table) pair bound to exactly
/// one backend chosen at construction. Operations are pure delegations to
/// the bound backend using the bound identity; the table carries no other
/// state and performs no validation.
pub struct Table {
    database: String,
    name: String,
    kind: BackendKind,
    backend: Box<dyn RecordBackend>,
}

impl Table {
    /// Binds the identity to a volatile backend when `in_memory` is set,
    /// otherwise to a durable backend writing `<database>_<table>.json`
    /// under `data_dir`.
    pub fn new(database: &str, name: &str, in_memory: bool, data_dir: &Path) -> Self {
        let (kind, backend): (BackendKind, Box<dyn RecordBackend>) = if in_memory {
            (BackendKind::Memory, Box::new(MemoryBackend::new()))
        } else {
            let path = data_dir.join(format!("{}_{}.json", database, name));
            (BackendKind::File, Box::new(FileBackend::new(path)))
        };

        Self {
            database: database.to_string(),
            name: name.to_string(),
            kind,
            backend,
        }
    }

    pub fn add(&self, record: Value) {
        self.backend.append(&self.database, &self.name, record);
    }

    pub fn get(&self) -> Vec<Value> {
        self.backend.list(&self.database, &self.name)
    }

    pub fn delete(&self, index: usize) {
        self.backend.delete(&self.database, &self.name, index);
    }

    pub fn kind(&self) -> BackendKind {
        self.kind
    }
}
