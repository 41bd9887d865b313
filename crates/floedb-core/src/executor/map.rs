//! Result/error mapping between the raw client surface and the typed
//! engine surface.

use crate::{
    document::Document,
    error::{AccessError, Error, QueryError},
    store::StoreFault,
    traits::{EntityKind, EntityValue},
};

/// Translate a raw store fault into the public taxonomy.
///
/// The match is exhaustive: no store fault propagates untranslated.
pub(crate) fn fault(entity: &'static str, fault: StoreFault) -> Error {
    match fault {
        StoreFault::NotFound { id } => AccessError::NotFound { entity, id }.into(),
        StoreFault::MissingPartitionKey { id } => {
            AccessError::MissingPartitionKey { entity, id }.into()
        }
        StoreFault::PartitionMismatch { id } => {
            AccessError::PartitionMismatch { entity, id }.into()
        }
        StoreFault::Rejected { message } => QueryError::Rejected { message }.into(),
        StoreFault::Unavailable { message } => AccessError::Unavailable { message }.into(),
    }
}

/// Entity-typed variant of [`fault`].
pub(crate) fn fault_for<E: EntityKind>(err: StoreFault) -> Error {
    fault(E::PATH, err)
}

/// Deserialize raw documents into typed entities.
///
/// `from_document` is total, so mapping never fails: unknown fields are
/// ignored and missing fields take their zero value.
pub(crate) fn entities_from<E: EntityValue>(docs: &[Document]) -> Vec<E> {
    docs.iter().map(E::from_document).collect()
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_fault_translates() {
        let faults = [
            StoreFault::NotFound { id: "a".to_string() },
            StoreFault::MissingPartitionKey { id: "a".to_string() },
            StoreFault::PartitionMismatch { id: "a".to_string() },
            StoreFault::Rejected { message: "bad".to_string() },
            StoreFault::Unavailable { message: "down".to_string() },
        ];

        for raw in faults {
            match fault("test::T", raw) {
                Error::Access(_) | Error::Query(_) => {}
                other => panic!("expected Access or Query, got {other:?}"),
            }
        }
    }

    #[test]
    fn rejected_maps_to_query_category() {
        let err = fault(
            "test::T",
            StoreFault::Rejected { message: "malformed".to_string() },
        );
        assert!(err.is_query());
    }
}
