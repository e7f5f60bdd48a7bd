use super::backend::RecordBackend;

use dashmap::DashMap;
use serde_json::Value;

/// Volatile record storage: database -> table -> ordered records, kept in
/// process memory only and lost on restart.
pub struct MemoryBackend {
    data: DashMap<String, DashMap<String, Vec<Value>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self {
            data: DashMap::new(),
        }
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordBackend for MemoryBackend {
    fn append(&self, database: &str, table: &str, record: Value) {
        let tables = self
            .data
            .entry(database.to_string())
            .or_insert_with(|| DashMap::new());
        let mut records = tables.entry(table.to_string()).or_insert_with(Vec::new);
        records.push(record);
    }

    fn list(&self, database: &str, table: &str) -> Vec<Value> {
        if let Some(tables) = self.data.get(database) {
            if let Some(records) = tables.get(table) {
                return records.value().clone();
            }
        }

        Vec::new()
    }

    fn delete(&self, database: &str, table: &str, index: usize) {
        if let Some(tables) = self.data.get(database) {
            if let Some(mut records) = tables.get_mut(table) {
                if index < records.len() {
                    records.remove(index);
                }
            }
        }
    }
}
