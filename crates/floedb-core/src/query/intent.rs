use crate::{
    error::{Error, QueryError},
    model::EntityModel,
    query::{
        descriptor::{Connective, QueryDescriptor, SortSpec},
        predicate::{Cmp, Predicate},
    },
    schema::SchemaRegistry,
    traits::EntityKind,
    value::FieldValue,
};
use std::marker::PhantomData;

///
/// QueryIntent
///
/// Typed, declarative query intent for a specific entity type.
///
/// The intent is schema-agnostic at construction; field names, the
/// connective shape, and the sort are validated only during derivation,
/// before any store call is made.
///

#[derive(Clone, Debug)]
pub struct QueryIntent<E: EntityKind> {
    predicates: Vec<Predicate>,
    connectives: Vec<Connective>,
    sort: Option<SortSpec>,
    _marker: PhantomData<E>,
}

impl<E: EntityKind> Default for QueryIntent<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EntityKind> QueryIntent<E> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            predicates: Vec::new(),
            connectives: Vec::new(),
            sort: None,
            _marker: PhantomData,
        }
    }

    /// Add the first clause.
    #[must_use]
    pub fn filter(self, field: impl Into<String>, cmp: Cmp, value: impl FieldValue) -> Self {
        self.push(None, Predicate::new(field, cmp, value))
    }

    /// Add an AND-combined clause.
    #[must_use]
    pub fn and(self, field: impl Into<String>, cmp: Cmp, value: impl FieldValue) -> Self {
        self.push(Some(Connective::And), Predicate::new(field, cmp, value))
    }

    /// Add an OR-combined clause.
    #[must_use]
    pub fn or(self, field: impl Into<String>, cmp: Cmp, value: impl FieldValue) -> Self {
        self.push(Some(Connective::Or), Predicate::new(field, cmp, value))
    }

    /// Equality sugar for the common single-field shape.
    #[must_use]
    pub fn eq(self, field: impl Into<String>, value: impl FieldValue) -> Self {
        self.filter(field, Cmp::Eq, value)
    }

    /// Replace the sort specification.
    #[must_use]
    pub fn sort(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }

    #[must_use]
    pub fn sort_asc(self, field: impl Into<String>) -> Self {
        self.sort(SortSpec::asc(field))
    }

    #[must_use]
    pub fn sort_desc(self, field: impl Into<String>) -> Self {
        self.sort(SortSpec::desc(field))
    }

    fn push(mut self, connective: Option<Connective>, predicate: Predicate) -> Self {
        // A combinator on an empty intent behaves like the first clause.
        if let Some(connective) = connective
            && !self.predicates.is_empty()
        {
            self.connectives.push(connective);
        }
        self.predicates.push(predicate);
        self
    }

    /// Derive a validated [`QueryDescriptor`].
    ///
    /// Rejections (unknown field, unknown sort field, mixed connectives)
    /// surface here, before the store is contacted.
    pub fn derive(&self, registry: &SchemaRegistry) -> Result<QueryDescriptor, Error> {
        let model = registry.try_model::<E>()?;

        let connective = self.resolve_connective()?;
        for predicate in &self.predicates {
            validate_field(model, &predicate.field)?;
        }

        if let Some(sort) = &self.sort {
            validate_sort(model, sort)?;
        }

        Ok(QueryDescriptor {
            entity: E::PATH,
            predicates: self.predicates.clone(),
            connective,
            sort: self.sort.clone(),
        })
    }

    fn resolve_connective(&self) -> Result<Connective, QueryError> {
        let mut resolved = None;

        for connective in &self.connectives {
            match resolved {
                None => resolved = Some(*connective),
                Some(current) if current == *connective => {}
                Some(_) => {
                    return Err(QueryError::UnsupportedShape {
                        entity: E::PATH,
                        reason: "predicates mix AND and OR connectives".to_string(),
                    });
                }
            }
        }

        Ok(resolved.unwrap_or_default())
    }
}

/// Case-sensitive schema check for a predicate field.
pub(crate) fn validate_field(model: &EntityModel, field: &str) -> Result<(), QueryError> {
    if model.contains_field(field) {
        Ok(())
    } else {
        Err(QueryError::UnknownField {
            entity: model.path,
            field: field.to_string(),
        })
    }
}

/// Schema-wide sort validation: any declared field is sortable.
pub(crate) fn validate_sort(model: &EntityModel, sort: &SortSpec) -> Result<(), QueryError> {
    if model.contains_field(&sort.field) {
        Ok(())
    } else {
        Err(QueryError::UnknownSortField {
            entity: model.path,
            field: sort.field.clone(),
        })
    }
}

///
/// TESTS
///
