pub mod memory;
pub mod sql;

use crate::{
    document::{Document, DocumentId},
    partition::PartitionScope,
    query::descriptor::QueryDescriptor,
    value::Value,
};
use futures::channel::oneshot;
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// StoreFault
///
/// Raw fault surface of a document-store client. Faults never leave the
/// engine in this form; the executors translate every variant into the
/// public error taxonomy.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, ThisError)]
pub enum StoreFault {
    #[error("document '{id}' not found")]
    NotFound { id: String },

    #[error("document '{id}' requires a partition key value")]
    MissingPartitionKey { id: String },

    #[error("document '{id}' resides in a different partition")]
    PartitionMismatch { id: String },

    #[error("query rejected: {message}")]
    Rejected { message: String },

    #[error("store unavailable: {message}")]
    Unavailable { message: String },
}

///
/// StoreQuery
///
/// Wire form of one query: rendered SQL text with named parameters for
/// networked clients, plus the structured descriptor embedded clients
/// evaluate directly. Result ordering across partitions is owned by the
/// executor, not the client.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StoreQuery {
    pub text: String,
    pub params: Vec<(String, Value)>,
    pub descriptor: QueryDescriptor,
}

impl StoreQuery {
    #[must_use]
    pub fn new(descriptor: QueryDescriptor) -> Self {
        let (text, params) = sql::render(&descriptor);

        Self {
            text,
            params,
            descriptor,
        }
    }
}

/// Single-value producer for the asynchronous count variant.
///
/// Completes exactly once with the count or a fault; dropping the receiver
/// is the unsubscribe and no further value is delivered.
pub type CountProducer = oneshot::Receiver<Result<u64, StoreFault>>;

pub(crate) type CountSender = oneshot::Sender<Result<u64, StoreFault>>;

#[must_use]
pub(crate) fn count_channel() -> (CountSender, CountProducer) {
    oneshot::channel()
}

///
/// DocumentClient
///
/// Store-client collaborator boundary. Implementations own transport,
/// retry of transient faults, and within-partition consistency; the engine
/// owns scoping, merging, and fault translation.
///

pub trait DocumentClient: Send + Sync + 'static {
    /// Execute a query within the given scope, returning raw documents in
    /// store-defined order.
    fn execute(&self, query: &StoreQuery, scope: &PartitionScope)
    -> Result<Vec<Document>, StoreFault>;

    /// Insert or replace one document under its partition-key value.
    fn upsert(&self, doc: Document, partition: &Value) -> Result<(), StoreFault>;

    /// Delete one document by id. Fails with
    /// [`StoreFault::MissingPartitionKey`] when the partition value is
    /// required but absent.
    fn delete_by_id(&self, id: &DocumentId, partition: Option<&Value>) -> Result<(), StoreFault>;

    /// Count documents within the given scope.
    fn count(&self, scope: &PartitionScope) -> Result<u64, StoreFault>;

    /// Asynchronous count variant: returns immediately with a single-value
    /// producer completed on the client's I/O completion path.
    fn count_async(&self, scope: &PartitionScope) -> CountProducer;
}
