use floedb_core::{
    document::{Document, DocumentId},
    model::EntityModel,
    traits::{EntityKind, EntityValue},
    value::{FieldValue, Value},
};

///
/// Address
///
/// Partitioned by `city`; `postal_code` doubles as the document id, so the
/// same postal code may exist in more than one partition.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Address {
    pub postal_code: String,
    pub street: String,
    pub city: String,
}

impl Address {
    #[must_use]
    pub fn new(postal_code: &str, street: &str, city: &str) -> Self {
        Self {
            postal_code: postal_code.to_string(),
            street: street.to_string(),
            city: city.to_string(),
        }
    }
}

static ADDRESS_MODEL: EntityModel = EntityModel {
    path: "fixtures::address::Address",
    id_field: "postal_code",
    partition_key: "city",
    fields: &["postal_code", "street", "city"],
};

impl EntityKind for Address {
    const PATH: &'static str = "fixtures::address::Address";
    const MODEL: &'static EntityModel = &ADDRESS_MODEL;
}

impl EntityValue for Address {
    fn id(&self) -> DocumentId {
        DocumentId::new(&self.postal_code)
    }

    fn partition_value(&self) -> Value {
        self.city.to_value()
    }

    fn to_document(&self) -> Document {
        Document::new(self.postal_code.as_str())
            .with("postal_code", self.postal_code.as_str())
            .with("street", self.street.as_str())
            .with("city", self.city.as_str())
    }

    fn from_document(doc: &Document) -> Self {
        Self {
            postal_code: doc.get_text("postal_code"),
            street: doc.get_text("street"),
            city: doc.get_text("city"),
        }
    }
}

///
/// Landmark
/// Declared but never registered; exercises the configuration-error path.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Landmark {
    pub name: String,
    pub city: String,
}

static LANDMARK_MODEL: EntityModel = EntityModel {
    path: "fixtures::address::Landmark",
    id_field: "name",
    partition_key: "city",
    fields: &["name", "city"],
};

impl EntityKind for Landmark {
    const PATH: &'static str = "fixtures::address::Landmark";
    const MODEL: &'static EntityModel = &LANDMARK_MODEL;
}

impl EntityValue for Landmark {
    fn id(&self) -> DocumentId {
        DocumentId::new(&self.name)
    }

    fn partition_value(&self) -> Value {
        self.city.to_value()
    }

    fn to_document(&self) -> Document {
        Document::new(self.name.as_str())
            .with("name", self.name.as_str())
            .with("city", self.city.as_str())
    }

    fn from_document(doc: &Document) -> Self {
        Self {
            name: doc.get_text("name"),
            city: doc.get_text("city"),
        }
    }
}
