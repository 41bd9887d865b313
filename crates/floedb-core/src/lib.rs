//! Core runtime for FloeDB: entity traits, values, partition scoping,
//! executors, and the repository facade exported via the `prelude`.
#![warn(unreachable_pub)]

pub mod document;
pub mod error;
pub mod executor;
pub mod model;
pub mod obs;
pub mod partition;
pub mod query;
pub mod repository;
pub mod response;
pub mod schema;
pub mod store;
pub mod traits;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

pub use error::Error;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No executors, stores, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        document::{Document, DocumentId},
        error::Error,
        model::EntityModel,
        partition::PartitionScope,
        query::{Cmp, Connective, QueryIntent, SortDirection, SortSpec},
        traits::{EntityKind, EntityValue},
        value::Value,
    };
}
