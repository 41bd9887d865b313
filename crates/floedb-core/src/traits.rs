use crate::{
    document::{Document, DocumentId},
    model::EntityModel,
    value::Value,
};

///
/// EntityKind
///
/// Schema-level contract: where an entity lives and what fields it
/// declares. Implemented once per entity type, by hand — registration is
/// explicit, there is no reflection.
///

pub trait EntityKind: Clone + 'static {
    /// Fully-qualified schema path.
    const PATH: &'static str;

    /// Static entity model; `MODEL.path` must equal `PATH`.
    const MODEL: &'static EntityModel;
}

///
/// EntityValue
///
/// Instance-level contract: mapping between a typed entity and its wire
/// document.
///
/// `from_document` is total: unknown document fields are ignored and
/// missing fields take the field type's zero value. The round trip through
/// `to_document` preserves every declared field.
///

pub trait EntityValue: EntityKind + Sized {
    /// Store-level id, projected from the declared id field.
    fn id(&self) -> DocumentId;

    /// Value of the declared partition-key field.
    fn partition_value(&self) -> Value;

    /// Project this entity into its wire document.
    fn to_document(&self) -> Document;

    /// Materialize an entity from a wire document.
    fn from_document(doc: &Document) -> Self;
}
