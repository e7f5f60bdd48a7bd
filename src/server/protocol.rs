//! Store Wire Protocol
//!
//! Defines the request and response bodies exchanged with clients over HTTP.
//! All bodies are JSON, UTF-8. Record payloads themselves are opaque
//! `serde_json::Value`s and have no DTO here.

use serde::{Deserialize, Serialize};

/// Body of `POST /database`.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateDatabaseRequest {
    /// Name of the database to create. Creation is idempotent.
    pub name: String,
}

/// Body of `POST /database/{db}/{table}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateTableRequest {
    /// Selects the volatile backend when `true`; otherwise the table is
    /// durable and backed by a `<database>_<table>.json` file. Absent means
    /// durable. Ignored when the table already exists.
    #[serde(rename = "inMemory", default)]
    pub in_memory: bool,
}

/// Acknowledgment body for all mutating routes.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
