use crate::{
    query::descriptor::{Connective, QueryDescriptor},
    value::Value,
};
use serde::{Deserialize, Serialize};
use std::fmt;

///
/// PartitionScope
///
/// Either a single resolved partition-key value, or a fan-out across all
/// partitions. Single-partition queries are cheaper and carry the store's
/// within-partition consistency; cross-partition results arrive in
/// store-defined order and are treated as unordered unless a sort was
/// requested.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum PartitionScope {
    Within(Value),
    CrossPartition,
}

impl PartitionScope {
    /// Determine the scope of a descriptor.
    ///
    /// The scope is `Within` iff the predicates, taken together, pin the
    /// partition-key field to a single literal: AND-combined (or a single
    /// predicate) with one clause equating the partition key.
    #[must_use]
    pub fn resolve(descriptor: &QueryDescriptor, partition_key: &str) -> Self {
        let pinnable = descriptor.predicates.len() == 1
            || matches!(descriptor.connective, Connective::And);

        if pinnable {
            for predicate in &descriptor.predicates {
                if predicate.pins(partition_key) {
                    return Self::Within(predicate.value.clone());
                }
            }
        }

        Self::CrossPartition
    }

    #[must_use]
    pub const fn is_cross_partition(&self) -> bool {
        matches!(self, Self::CrossPartition)
    }

    #[must_use]
    pub const fn partition_value(&self) -> Option<&Value> {
        match self {
            Self::Within(value) => Some(value),
            Self::CrossPartition => None,
        }
    }
}

impl fmt::Display for PartitionScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Within(value) => write!(f, "partition={value}"),
            Self::CrossPartition => write!(f, "cross-partition"),
        }
    }
}

///
/// TESTS
///
