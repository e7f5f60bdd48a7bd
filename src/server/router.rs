use super::handlers::{
    handle_add_data, handle_create_database, handle_create_table, handle_delete_data,
    handle_delete_database, handle_fallback, handle_get_data, handle_list_table,
};
use crate::store::registry::Registry;
use crate::store::snapshot::RegistrySnapshot;

use axum::{
    Router,
    extract::Extension,
    routing::{delete, get, post},
};
use std::sync::Arc;

/// Assembles the REST routing table over an injected registry and snapshot
/// writer. Shared by the binary and the tests.
pub fn build_router(registry: Arc<Registry>, snapshot: Arc<RegistrySnapshot>) -> Router {
    Router::new()
        .route("/database", post(handle_create_database))
        .route("/database/:database", delete(handle_delete_database))
        .route(
            "/database/:database/:table",
            post(handle_create_table).get(handle_list_table),
        )
        .route("/data/:database/:table", post(handle_add_data))
        .route(
            "/data/:database/:table/:index",
            get(handle_get_data).delete(handle_delete_data),
        )
        .fallback(handle_fallback)
        .layer(Extension(registry))
        .layer(Extension(snapshot))
}
