use crate::{
    error::{Error, QueryError},
    query::{
        descriptor::{Connective, QueryDescriptor, SortSpec},
        intent::{validate_field, validate_sort},
        predicate::{Cmp, Predicate},
    },
    schema::SchemaRegistry,
    traits::EntityKind,
    value::Value,
};
use std::collections::BTreeMap;

///
/// DerivedOp
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DerivedOp {
    Find,
    Delete,
}

///
/// DerivedShape
///
/// One named query shape: fields + comparators, a single connective, an
/// optional sort. Shapes replace method-name dispatch: each supported
/// find/delete combination is declared once and resolved against the
/// schema at registration time, not per call.
///

#[derive(Clone, Debug)]
pub struct DerivedShape {
    name: String,
    op: DerivedOp,
    fields: Vec<(String, Cmp)>,
    connective: Connective,
    sort: Option<SortSpec>,
}

impl DerivedShape {
    #[must_use]
    pub fn find(name: impl Into<String>) -> Self {
        Self::new(name, DerivedOp::Find)
    }

    #[must_use]
    pub fn delete(name: impl Into<String>) -> Self {
        Self::new(name, DerivedOp::Delete)
    }

    fn new(name: impl Into<String>, op: DerivedOp) -> Self {
        Self {
            name: name.into(),
            op,
            fields: Vec::new(),
            connective: Connective::And,
            sort: None,
        }
    }

    /// Bind a field by equality.
    #[must_use]
    pub fn by(self, field: impl Into<String>) -> Self {
        self.by_cmp(field, Cmp::Eq)
    }

    /// Bind a field with an explicit comparator.
    #[must_use]
    pub fn by_cmp(mut self, field: impl Into<String>, cmp: Cmp) -> Self {
        self.fields.push((field.into(), cmp));
        self
    }

    /// Combine bound fields with OR instead of the default AND.
    #[must_use]
    pub const fn any_of(mut self) -> Self {
        self.connective = Connective::Or;
        self
    }

    #[must_use]
    pub fn sorted(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn op(&self) -> DerivedOp {
        self.op
    }

    #[must_use]
    pub fn arity(&self) -> usize {
        self.fields.len()
    }
}

///
/// DerivedQueries
///
/// Registration-time resolved table of derived shapes for one entity type.
/// Invocation binds positional values against a shape's fields with arity
/// checking; the resulting descriptor needs no further schema validation.
///

#[derive(Debug, Default)]
pub struct DerivedQueries {
    shapes: BTreeMap<String, DerivedShape>,
}

impl DerivedQueries {
    /// Resolve a set of shapes against the registered schema.
    pub fn resolve<E: EntityKind>(
        registry: &SchemaRegistry,
        shapes: impl IntoIterator<Item = DerivedShape>,
    ) -> Result<Self, Error> {
        let model = registry.try_model::<E>()?;
        let mut resolved = BTreeMap::new();

        for shape in shapes {
            for (field, _) in &shape.fields {
                validate_field(model, field)?;
            }
            if let Some(sort) = &shape.sort {
                validate_sort(model, sort)?;
            }

            resolved.insert(shape.name.clone(), shape);
        }

        Ok(Self { shapes: resolved })
    }

    /// Bind positional values against a named shape.
    pub fn bind<E: EntityKind>(
        &self,
        name: &str,
        values: Vec<Value>,
    ) -> Result<(DerivedOp, QueryDescriptor), QueryError> {
        let shape = self.shapes.get(name).ok_or_else(|| QueryError::UnknownShape {
            name: name.to_string(),
        })?;

        if values.len() != shape.fields.len() {
            return Err(QueryError::BindArity {
                name: name.to_string(),
                expected: shape.fields.len(),
                found: values.len(),
            });
        }

        let predicates = shape
            .fields
            .iter()
            .zip(values)
            .map(|((field, cmp), value)| Predicate::new(field.clone(), *cmp, value))
            .collect();

        let descriptor = QueryDescriptor {
            entity: E::PATH,
            predicates,
            connective: shape.connective,
            sort: shape.sort.clone(),
        };

        Ok((shape.op, descriptor))
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.shapes.contains_key(name)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{schema::SchemaRegistry, test_fixtures::Region, value::FieldValue};

    fn registry() -> SchemaRegistry {
        SchemaRegistry::builder()
            .entity::<Region>()
            .unwrap()
            .build()
    }

    fn table() -> DerivedQueries {
        DerivedQueries::resolve::<Region>(
            &registry(),
            [
                DerivedShape::find("by_zone").by("zone"),
                DerivedShape::find("by_code_or_label").by("code").by("label").any_of(),
                DerivedShape::delete("delete_by_zone").by("zone"),
            ],
        )
        .unwrap()
    }

    #[test]
    fn bind_produces_descriptor() {
        let (op, descriptor) = table()
            .bind::<Region>("by_zone", vec!["north".to_value()])
            .unwrap();

        assert_eq!(op, DerivedOp::Find);
        assert_eq!(descriptor.connective, Connective::And);
        assert_eq!(descriptor.predicates.len(), 1);
        assert_eq!(descriptor.predicates[0].field, "zone");
    }

    #[test]
    fn or_shape_binds_in_declared_order() {
        let (_, descriptor) = table()
            .bind::<Region>("by_code_or_label", vec!["r1".to_value(), "west".to_value()])
            .unwrap();

        assert_eq!(descriptor.connective, Connective::Or);
        assert_eq!(descriptor.predicates[0].field, "code");
        assert_eq!(descriptor.predicates[1].field, "label");
    }

    #[test]
    fn arity_mismatch_is_rejected() {
        let result = table().bind::<Region>("by_zone", vec![]);

        assert!(matches!(
            result,
            Err(QueryError::BindArity { expected: 1, found: 0, .. })
        ));
    }

    #[test]
    fn unknown_shape_is_rejected() {
        let result = table().bind::<Region>("by_altitude", vec![]);
        assert!(matches!(result, Err(QueryError::UnknownShape { .. })));
    }

    #[test]
    fn unknown_field_fails_at_registration() {
        let result = DerivedQueries::resolve::<Region>(
            &registry(),
            [DerivedShape::find("bad").by("altitude")],
        );

        assert!(matches!(
            result,
            Err(Error::Query(QueryError::UnknownField { field, .. })) if field == "altitude"
        ));
    }
}
