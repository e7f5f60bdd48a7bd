//! HTTP Request Routing
//!
//! Maps REST-style paths onto registry and table operations and renders
//! JSON responses. Mutating routes persist the registry's current shape
//! after applying the change, so the namespace topology can be rebuilt
//! after a restart.

pub mod handlers;
pub mod protocol;
pub mod router;
