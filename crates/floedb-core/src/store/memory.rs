use crate::{
    document::{Document, DocumentId},
    partition::PartitionScope,
    store::{CountProducer, DocumentClient, StoreFault, StoreQuery, count_channel},
    value::Value,
};
use parking_lot::RwLock;
use std::{
    collections::BTreeMap,
    sync::atomic::{AtomicU64, Ordering},
};

///
/// CallCounts
/// Per-operation call snapshot, taken for test assertions.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CallCounts {
    pub execute: u64,
    pub upsert: u64,
    pub delete: u64,
    pub count: u64,
}

#[derive(Debug, Default)]
struct CallCounters {
    execute: AtomicU64,
    upsert: AtomicU64,
    delete: AtomicU64,
    count: AtomicU64,
}

impl CallCounters {
    fn snapshot(&self) -> CallCounts {
        CallCounts {
            execute: self.execute.load(Ordering::Relaxed),
            upsert: self.upsert.load(Ordering::Relaxed),
            delete: self.delete.load(Ordering::Relaxed),
            count: self.count.load(Ordering::Relaxed),
        }
    }
}

///
/// MemoryClient
///
/// Embedded reference client: one collection, partition value → (id →
/// document). Single-partition queries touch exactly one partition map;
/// cross-partition queries fan out over every partition and concatenate
/// in store order. Documents are unique per (partition, id) pair.
///

#[derive(Debug, Default)]
pub struct MemoryClient {
    partitions: RwLock<BTreeMap<Value, BTreeMap<DocumentId, Document>>>,
    calls: CallCounters,
}

impl MemoryClient {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Per-operation call counters since construction.
    #[must_use]
    pub fn calls(&self) -> CallCounts {
        self.calls.snapshot()
    }

    #[must_use]
    pub fn partition_count(&self) -> usize {
        self.partitions.read().len()
    }

    fn locate(&self, id: &DocumentId) -> Option<Value> {
        self.partitions
            .read()
            .iter()
            .find(|(_, docs)| docs.contains_key(id))
            .map(|(partition, _)| partition.clone())
    }
}

impl DocumentClient for MemoryClient {
    fn execute(
        &self,
        query: &StoreQuery,
        scope: &PartitionScope,
    ) -> Result<Vec<Document>, StoreFault> {
        self.calls.execute.fetch_add(1, Ordering::Relaxed);
        let partitions = self.partitions.read();

        let matches = |doc: &Document| query.descriptor.matches(doc);
        let docs = match scope {
            PartitionScope::Within(value) => partitions
                .get(value)
                .into_iter()
                .flat_map(BTreeMap::values)
                .filter(|doc| matches(doc))
                .cloned()
                .collect(),
            PartitionScope::CrossPartition => partitions
                .values()
                .flat_map(BTreeMap::values)
                .filter(|doc| matches(doc))
                .cloned()
                .collect(),
        };

        Ok(docs)
    }

    fn upsert(&self, doc: Document, partition: &Value) -> Result<(), StoreFault> {
        self.calls.upsert.fetch_add(1, Ordering::Relaxed);

        self.partitions
            .write()
            .entry(partition.clone())
            .or_default()
            .insert(doc.id.clone(), doc);

        Ok(())
    }

    fn delete_by_id(&self, id: &DocumentId, partition: Option<&Value>) -> Result<(), StoreFault> {
        self.calls.delete.fetch_add(1, Ordering::Relaxed);

        let Some(partition) = partition else {
            // The store cannot locate the partition to address the delete.
            return Err(StoreFault::MissingPartitionKey {
                id: id.to_string(),
            });
        };

        let removed = self
            .partitions
            .write()
            .get_mut(partition)
            .and_then(|docs| docs.remove(id));

        if removed.is_some() {
            return Ok(());
        }

        if self.locate(id).is_some() {
            Err(StoreFault::PartitionMismatch {
                id: id.to_string(),
            })
        } else {
            Err(StoreFault::NotFound {
                id: id.to_string(),
            })
        }
    }

    fn count(&self, scope: &PartitionScope) -> Result<u64, StoreFault> {
        self.calls.count.fetch_add(1, Ordering::Relaxed);
        let partitions = self.partitions.read();

        let count: usize = match scope {
            PartitionScope::Within(value) => {
                partitions.get(value).map_or(0, BTreeMap::len)
            }
            PartitionScope::CrossPartition => partitions.values().map(BTreeMap::len).sum(),
        };

        Ok(u64::try_from(count).unwrap_or(u64::MAX))
    }

    fn count_async(&self, scope: &PartitionScope) -> CountProducer {
        let (sender, receiver) = count_channel();

        // The embedded client has no I/O thread; completion happens on the
        // caller's thread. A dropped receiver simply discards the value.
        let result = self.count(scope);
        let _ = sender.send(result);

        receiver
    }
}

///
/// TESTS
///
