use crate::{
    document::Document,
    query::predicate::{self, Predicate},
};
use serde::{Deserialize, Serialize};
use std::fmt;

///
/// Connective
///
/// Exactly one logical connective combines a descriptor's predicates;
/// mixing AND and OR inside one descriptor is rejected at derivation.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum Connective {
    #[default]
    And,
    Or,
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::And => write!(f, "AND"),
            Self::Or => write!(f, "OR"),
        }
    }
}

///
/// SortDirection
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

///
/// SortSpec
/// Field + direction; valid only for fields on the entity's declared schema.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

impl SortSpec {
    #[must_use]
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    #[must_use]
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
        }
    }
}

///
/// QueryDescriptor
///
/// Validated output of derivation: ordered predicates, one connective, an
/// optional sort. Constructed per invocation and discarded after
/// execution; executors never mutate it.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QueryDescriptor {
    pub entity: &'static str,
    pub predicates: Vec<Predicate>,
    pub connective: Connective,
    pub sort: Option<SortSpec>,
}

impl QueryDescriptor {
    /// The match-all descriptor backing `find_all` / `delete_all`.
    #[must_use]
    pub const fn match_all(entity: &'static str) -> Self {
        Self {
            entity,
            predicates: Vec::new(),
            connective: Connective::And,
            sort: None,
        }
    }

    #[must_use]
    pub const fn is_match_all(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Document-side evaluation used by embedded clients.
    #[must_use]
    pub fn matches(&self, doc: &Document) -> bool {
        match self.connective {
            Connective::And => self.predicates.iter().all(|p| predicate::eval(doc, p)),
            Connective::Or => {
                self.predicates.is_empty()
                    || self.predicates.iter().any(|p| predicate::eval(doc, p))
            }
        }
    }
}

///
/// TESTS
///
