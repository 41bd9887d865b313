use thiserror::Error as ThisError;

///
/// Error
///
/// Top-level error surface. Every fault leaving the engine is one of three
/// categories:
///
/// - [`ConfigError`]: registration/setup faults. Fatal, never retried.
/// - [`QueryError`]: query shape rejected before any store call.
/// - [`AccessError`]: store-side addressing failure. The caller decides
///   whether to retry with corrected partition information.
///
/// No raw store fault propagates untranslated.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Access(#[from] AccessError),
}

impl Error {
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    #[must_use]
    pub const fn is_query(&self) -> bool {
        matches!(self, Self::Query(_))
    }

    #[must_use]
    pub const fn is_access(&self) -> bool {
        matches!(self, Self::Access(_))
    }
}

///
/// ConfigError
/// Registration and setup faults, raised at startup or on first use.
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum ConfigError {
    #[error("entity '{path}' is not registered")]
    EntityNotRegistered { path: &'static str },

    #[error("entity '{path}' is already registered")]
    DuplicateEntity { path: &'static str },

    #[error("entity '{path}' declares partition key '{field}' outside its field list")]
    PartitionKeyNotDeclared {
        path: &'static str,
        field: &'static str,
    },

    #[error("entity '{path}' declares id field '{field}' outside its field list")]
    IdFieldNotDeclared {
        path: &'static str,
        field: &'static str,
    },

    #[error("entity '{path}' declares field '{field}' more than once")]
    DuplicateField {
        path: &'static str,
        field: &'static str,
    },
}

///
/// QueryError
///
/// Query-shape rejections. Always raised before the store is contacted, so
/// they are cheap and side-effect-free.
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum QueryError {
    #[error("entity '{entity}' has no field '{field}'")]
    UnknownField { entity: &'static str, field: String },

    #[error("entity '{entity}' has no sortable field '{field}'")]
    UnknownSortField { entity: &'static str, field: String },

    #[error("unsupported query shape for '{entity}': {reason}")]
    UnsupportedShape {
        entity: &'static str,
        reason: String,
    },

    #[error("no derived query named '{name}'")]
    UnknownShape { name: String },

    #[error("derived query '{name}' binds {expected} value(s), {found} supplied")]
    BindArity {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("store rejected query: {message}")]
    Rejected { message: String },
}

///
/// AccessError
///
/// Store-side addressing failures surfaced to the caller. Deleting by raw
/// id without a partition key on a partitioned entity is the documented
/// case: the store cannot locate the partition to address the delete.
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum AccessError {
    #[error("cannot address '{id}' on partitioned entity '{entity}' without a partition key")]
    MissingPartitionKey { entity: &'static str, id: String },

    #[error("document '{id}' not found for entity '{entity}'")]
    NotFound { entity: &'static str, id: String },

    #[error("document '{id}' exists under a different partition of entity '{entity}'")]
    PartitionMismatch { entity: &'static str, id: String },

    #[error("expected exactly one document for entity '{entity}', found {count}")]
    NotUnique { entity: &'static str, count: usize },

    #[error("store unavailable: {message}")]
    Unavailable { message: String },
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_predicates() {
        let err = Error::from(ConfigError::EntityNotRegistered { path: "x" });
        assert!(err.is_config());
        assert!(!err.is_query());

        let err = Error::from(QueryError::UnknownSortField {
            entity: "x",
            field: "y".to_string(),
        });
        assert!(err.is_query());

        let err = Error::from(AccessError::MissingPartitionKey {
            entity: "x",
            id: "1".to_string(),
        });
        assert!(err.is_access());
    }
}
