use super::backend::BackendKind;
use super::table::Table;

use dashmap::DashMap;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

/// Process-wide directory of live databases and tables.
///
/// Sole source of truth for "does this database/table exist". Rebuilt fresh
/// at process start; it is never reloaded from durable files, so durable
/// tables become reachable again only after the controlling creation calls
/// are replayed.
///
/// Constructed once in `main` and injected into the router.
pub struct Registry {
    databases: DashMap<String, DashMap<String, Arc<Table>>>,
    data_dir: PathBuf,
}

impl Registry {
    /// Creates an empty registry. Durable tables created through it write
    /// their backing files under `data_dir`.
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            databases: DashMap::new(),
            data_dir,
        }
    }

    /// Inserts an empty table map for `name` if absent. Idempotent.
    pub fn create_database(&self, name: &str) {
        if !self.databases.contains_key(name) {
            self.databases.insert(name.to_string(), DashMap::new());
        }
    }

    /// Removes `name` and all its tables. Idempotent. Backing files of
    /// durable tables are left behind.
    pub fn delete_database(&self, name: &str) {
        self.databases.remove(name);
    }

    /// Implicitly creates the database if missing, then inserts a new table
    /// bound to the requested backend kind unless one already exists. A
    /// second creation is silently ignored: the existing table keeps its
    /// backend kind and records even when the `in_memory` flag differs.
    pub fn create_table(&self, database: &str, name: &str, in_memory: bool) {
        if !self.databases.contains_key(database) {
            self.create_database(database);
        }

        if let Some(tables) = self.databases.get(database) {
            if !tables.contains_key(name) {
                tables.insert(
                    name.to_string(),
                    Arc::new(Table::new(database, name, in_memory, &self.data_dir)),
                );
            }
        }
    }

    /// Pure lookup. `None` when either the database or the table is absent.
    pub fn get_table(&self, database: &str, name: &str) -> Option<Arc<Table>> {
        let tables = self.databases.get(database)?;
        let table = tables.get(name)?;
        Some(Arc::clone(table.value()))
    }

    /// The current database/table-name shape, ordered for stable snapshot
    /// output. Record contents are owned by each table's backend and are
    /// not part of the shape.
    pub fn snapshot(&self) -> BTreeMap<String, BTreeMap<String, BackendKind>> {
        let mut shape = BTreeMap::new();

        for database in self.databases.iter() {
            let tables = database
                .value()
                .iter()
                .map(|table| (table.key().clone(), table.value().kind()))
                .collect();
            shape.insert(database.key().clone(), tables);
        }

        shape
    }
}
