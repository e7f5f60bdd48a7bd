//! Multi-Tenant JSON Document Store
//!
//! This library crate defines the core modules behind the `docstore` binary.
//! Clients create named databases, create named tables inside a database with
//! a chosen persistence strategy, and append/list/delete JSON records over a
//! REST-style HTTP interface.
//!
//! ## Architecture Modules
//! The system is composed of two loosely coupled subsystems:
//!
//! - **`store`**: The storage core. Pairs a routing registry (database ->
//!   table) with two interchangeable record backends (volatile and
//!   file-durable) behind one uniform contract.
//! - **`server`**: The request-routing layer. Translates REST-style paths
//!   into registry/table operations, renders JSON responses, and persists the
//!   registry's shape after each mutation.

pub mod server;
pub mod store;
