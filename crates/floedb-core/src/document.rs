use crate::value::{FieldValue, Value};
use derive_more::{Deref, From};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt};

///
/// DocumentId
///
/// Store-level identity of a document within its partition. Ids are opaque
/// text; entities project their declared id field into this form.
///

#[repr(transparent)]
#[derive(
    Clone, Debug, Default, Deref, Deserialize, Eq, From, Hash, Ord, PartialEq, PartialOrd,
    Serialize,
)]
pub struct DocumentId(pub String);

impl DocumentId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DocumentId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

///
/// Document
///
/// Wire shape exchanged with the store client: an id plus a flat, ordered
/// field map. Every document belonging to a partitioned entity type carries
/// a value for that type's partition-key field.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Document {
    pub id: DocumentId,
    pub fields: BTreeMap<String, Value>,
}

impl Document {
    #[must_use]
    pub fn new(id: impl Into<DocumentId>) -> Self {
        Self {
            id: id.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Set a field, replacing any previous value.
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl FieldValue) -> Self {
        self.fields.insert(field.into(), value.to_value());
        self
    }

    /// Field lookup; absent fields read as `Null`.
    #[must_use]
    pub fn get(&self, field: &str) -> &Value {
        self.fields.get(field).unwrap_or(&Value::Null)
    }

    /// Field text lookup with the zero value for absent or non-text fields.
    #[must_use]
    pub fn get_text(&self, field: &str) -> String {
        self.get(field).as_text().unwrap_or_default().to_string()
    }

    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }
}

///
/// TESTS
///
