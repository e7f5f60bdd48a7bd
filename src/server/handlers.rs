use super::protocol::{CreateDatabaseRequest, CreateTableRequest, MessageResponse};
use crate::store::registry::Registry;
use crate::store::snapshot::RegistrySnapshot;

use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;
use std::sync::Arc;

pub async fn handle_create_database(
    Extension(registry): Extension<Arc<Registry>>,
    Extension(snapshot): Extension<Arc<RegistrySnapshot>>,
    Json(req): Json<CreateDatabaseRequest>,
) -> (StatusCode, Json<MessageResponse>) {
    registry.create_database(&req.name);
    snapshot.save(&registry);

    tracing::info!("Created database {}", req.name);

    (
        StatusCode::OK,
        Json(MessageResponse {
            message: format!("Database {} created.", req.name),
        }),
    )
}

pub async fn handle_delete_database(
    Path(database): Path<String>,
    Extension(registry): Extension<Arc<Registry>>,
    Extension(snapshot): Extension<Arc<RegistrySnapshot>>,
) -> (StatusCode, Json<MessageResponse>) {
    registry.delete_database(&database);
    snapshot.save(&registry);

    tracing::info!("Deleted database {}", database);

    (
        StatusCode::OK,
        Json(MessageResponse {
            message: format!("Database {} deleted.", database),
        }),
    )
}

pub async fn handle_create_table(
    Path((database, table)): Path<(String, String)>,
    Extension(registry): Extension<Arc<Registry>>,
    Extension(snapshot): Extension<Arc<RegistrySnapshot>>,
    Json(req): Json<CreateTableRequest>,
) -> (StatusCode, Json<MessageResponse>) {
    registry.create_table(&database, &table, req.in_memory);
    snapshot.save(&registry);

    tracing::info!(
        "Created table {}.{} (in_memory: {})",
        database,
        table,
        req.in_memory
    );

    (
        StatusCode::OK,
        Json(MessageResponse {
            message: format!("Table {} created.", table),
        }),
    )
}

pub async fn handle_list_table(
    Path((database, table)): Path<(String, String)>,
    Extension(registry): Extension<Arc<Registry>>,
) -> Response {
    match registry.get_table(&database, &table) {
        Some(found) => (StatusCode::OK, Json(found.get())).into_response(),
        None => table_not_found(&table),
    }
}

pub async fn handle_add_data(
    Path((database, table)): Path<(String, String)>,
    Extension(registry): Extension<Arc<Registry>>,
    Extension(snapshot): Extension<Arc<RegistrySnapshot>>,
    Json(record): Json<Value>,
) -> Response {
    match registry.get_table(&database, &table) {
        Some(found) => {
            found.add(record);
            snapshot.save(&registry);

            (
                StatusCode::OK,
                Json(MessageResponse {
                    message: "Data added successfully.".to_string(),
                }),
            )
                .into_response()
        }
        None => table_not_found(&table),
    }
}

pub async fn handle_get_data(
    Path((database, table, index)): Path<(String, String, usize)>,
    Extension(registry): Extension<Arc<Registry>>,
) -> Response {
    let found = match registry.get_table(&database, &table) {
        Some(found) => found,
        None => return table_not_found(&table),
    };

    match found.get().into_iter().nth(index) {
        Some(record) => (StatusCode::OK, Json(record)).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            format!("Data with id {} not found.", index),
        )
            .into_response(),
    }
}

pub async fn handle_delete_data(
    Path((database, table, index)): Path<(String, String, usize)>,
    Extension(registry): Extension<Arc<Registry>>,
    Extension(snapshot): Extension<Arc<RegistrySnapshot>>,
) -> Response {
    match registry.get_table(&database, &table) {
        Some(found) => {
            // Out-of-range indices are a silent no-op by contract.
            found.delete(index);
            snapshot.save(&registry);

            (
                StatusCode::OK,
                Json(MessageResponse {
                    message: "Data deleted successfully.".to_string(),
                }),
            )
                .into_response()
        }
        None => table_not_found(&table),
    }
}

pub async fn handle_fallback() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "404 Not Found")
}

fn table_not_found(table: &str) -> Response {
    (StatusCode::NOT_FOUND, format!("Table {} not found.", table)).into_response()
}
