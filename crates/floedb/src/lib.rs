//! FloeDB — a partition-aware document repository and query engine.
//!
//! ## Crate layout
//! - `core`: runtime data model, query derivation, partition scoping,
//!   executors, and the repository facade.
//!
//! The `prelude` module mirrors the runtime surface used by embedding
//! applications.

pub use floedb_core as core;

pub use floedb_core::Error;

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::core::{
        document::{Document, DocumentId},
        error::{AccessError, ConfigError, Error, QueryError},
        executor::AsyncCount,
        model::EntityModel,
        partition::PartitionScope,
        query::{Cmp, Connective, DerivedShape, QueryIntent, SortDirection, SortSpec},
        repository::Repository,
        response::Response,
        schema::SchemaRegistry,
        store::{DocumentClient, StoreFault, StoreQuery, memory::MemoryClient},
        traits::{EntityKind as _, EntityValue as _},
        value::{FieldValue as _, Value},
    };
}
