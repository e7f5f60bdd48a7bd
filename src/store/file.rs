use super::backend::RecordBackend;

use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// On-disk document layout: the file is keyed by the same (database, table)
/// pair it is named after.
type Document = HashMap<String, HashMap<String, Vec<Value>>>;

/// Durable record storage.
///
/// Persists records as a single JSON document per (database, table) pair.
/// Every operation performs a full read-modify-write cycle: load the whole
/// file, mutate, save the whole file. There is no incremental append format
/// and no partial-write protection.
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads the whole document. A missing file or unparseable contents
    /// yield an empty document.
    fn load(&self) -> Document {
        match fs::read_to_string(&self.path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_default(),
            Err(_) => Document::default(),
        }
    }

    /// Writes the whole document back. A failed write is logged and
    /// swallowed; the previous file contents stay as they were.
    fn save(&self, document: &Document) {
        let raw = match serde_json::to_string(document) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::error!("Failed to serialize {}: {}", self.path.display(), err);
                return;
            }
        };

        if let Err(err) = fs::write(&self.path, raw) {
            tracing::error!("Failed to write {}: {}", self.path.display(), err);
        }
    }
}

impl RecordBackend for FileBackend {
    fn append(&self, database: &str, table: &str, record: Value) {
        let mut document = self.load();

        document
            .entry(database.to_string())
            .or_default()
            .entry(table.to_string())
            .or_default()
            .push(record);

        self.save(&document);
    }

    fn list(&self, database: &str, table: &str) -> Vec<Value> {
        self.load()
            .get(database)
            .and_then(|tables| tables.get(table))
            .cloned()
            .unwrap_or_default()
    }

    fn delete(&self, database: &str, table: &str, index: usize) {
        let mut document = self.load();

        let records = match document
            .get_mut(database)
            .and_then(|tables| tables.get_mut(table))
        {
            Some(records) => records,
            None => return,
        };

        if index < records.len() {
            records.remove(index);
        }

        self.save(&document);
    }
}
