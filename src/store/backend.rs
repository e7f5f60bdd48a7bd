use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The uniform contract both storage strategies satisfy.
///
/// Records are opaque JSON values scoped by a (database, table) key pair.
/// Implementations treat an unknown pair as empty on reads and as a no-op on
/// deletes; `append` creates the pair on first use.
pub trait RecordBackend: Send + Sync {
    /// Adds a record to the end of the sequence for (database, table).
    /// Never fails for well-formed input; a durable save failure is logged
    /// and swallowed.
    fn append(&self, database: &str, table: &str, record: Value);

    /// Returns the full ordered sequence, or an empty sequence if the pair
    /// is unknown. Read-only.
    fn list(&self, database: &str, table: &str) -> Vec<Value>;

    /// Removes the record at position `index` (0-based). Unknown pair or
    /// out-of-range index is a silent no-op.
    fn delete(&self, database: &str, table: &str, index: usize);
}

/// Which storage strategy a table was created with.
///
/// Recorded in the registry snapshot so the namespace topology can be
/// reconstructed with the same persistence choices.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    Memory,
    File,
}
