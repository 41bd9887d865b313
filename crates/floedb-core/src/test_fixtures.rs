//! In-crate entity fixtures for unit tests.

use crate::{
    document::{Document, DocumentId},
    model::EntityModel,
    traits::{EntityKind, EntityValue},
    value::{FieldValue, Value},
};

///
/// Region
/// Partitioned by `zone`; `code` doubles as the document id.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Region {
    pub(crate) code: String,
    pub(crate) zone: String,
    pub(crate) label: String,
}

impl Region {
    pub(crate) fn new(code: &str, zone: &str, label: &str) -> Self {
        Self {
            code: code.to_string(),
            zone: zone.to_string(),
            label: label.to_string(),
        }
    }
}

static REGION_MODEL: EntityModel = EntityModel {
    path: "test::region::Region",
    id_field: "code",
    partition_key: "zone",
    fields: &["code", "zone", "label"],
};

impl EntityKind for Region {
    const PATH: &'static str = "test::region::Region";
    const MODEL: &'static EntityModel = &REGION_MODEL;
}

impl EntityValue for Region {
    fn id(&self) -> DocumentId {
        DocumentId::new(&self.code)
    }

    fn partition_value(&self) -> Value {
        self.zone.to_value()
    }

    fn to_document(&self) -> Document {
        Document::new(self.code.as_str())
            .with("code", self.code.as_str())
            .with("zone", self.zone.as_str())
            .with("label", self.label.as_str())
    }

    fn from_document(doc: &Document) -> Self {
        Self {
            code: doc.get_text("code"),
            zone: doc.get_text("zone"),
            label: doc.get_text("label"),
        }
    }
}

///
/// Unregistered
/// Declared but deliberately never added to a registry.
///

#[derive(Clone, Debug, Default)]
pub(crate) struct Unregistered;

static UNREGISTERED_MODEL: EntityModel = EntityModel {
    path: "test::unregistered::Unregistered",
    id_field: "id",
    partition_key: "id",
    fields: &["id"],
};

impl EntityKind for Unregistered {
    const PATH: &'static str = "test::unregistered::Unregistered";
    const MODEL: &'static EntityModel = &UNREGISTERED_MODEL;
}

impl EntityValue for Unregistered {
    fn id(&self) -> DocumentId {
        DocumentId::new("0")
    }

    fn partition_value(&self) -> Value {
        Value::Null
    }

    fn to_document(&self) -> Document {
        Document::new("0")
    }

    fn from_document(_doc: &Document) -> Self {
        Self
    }
}
