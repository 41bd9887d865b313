use crate::{
    document::Document,
    value::{FieldValue, Value, strict_cmp},
};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

///
/// Cmp
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Cmp {
    Eq,
    Ne,
    Lt,
    Lte,
    Gt,
    Gte,
    Contains,
    StartsWith,
}

///
/// Predicate
/// A basic comparison: `field cmp value`.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Predicate {
    pub field: String,
    pub cmp: Cmp,
    pub value: Value,
}

impl Predicate {
    #[must_use]
    pub fn new(field: impl Into<String>, cmp: Cmp, value: impl FieldValue) -> Self {
        Self {
            field: field.into(),
            cmp,
            value: value.to_value(),
        }
    }

    #[must_use]
    pub fn eq(field: impl Into<String>, value: impl FieldValue) -> Self {
        Self::new(field, Cmp::Eq, value)
    }

    /// True when this predicate pins `field` to a single literal.
    #[must_use]
    pub fn pins(&self, field: &str) -> bool {
        self.field == field && self.cmp == Cmp::Eq && !self.value.is_null()
    }
}

/// Evaluate a predicate against a document.
///
/// Ordering comparisons only hold between same-variant values; text
/// operators only hold on text. Everything else is a non-match, never an
/// error.
#[must_use]
pub fn eval(doc: &Document, predicate: &Predicate) -> bool {
    let actual = doc.get(&predicate.field);

    match predicate.cmp {
        Cmp::Eq => actual == &predicate.value,
        Cmp::Ne => actual != &predicate.value,
        Cmp::Lt => ordered(actual, &predicate.value, Ordering::is_lt),
        Cmp::Lte => ordered(actual, &predicate.value, Ordering::is_le),
        Cmp::Gt => ordered(actual, &predicate.value, Ordering::is_gt),
        Cmp::Gte => ordered(actual, &predicate.value, Ordering::is_ge),
        Cmp::Contains => text_pair(actual, &predicate.value)
            .is_some_and(|(actual, expected)| actual.contains(expected)),
        Cmp::StartsWith => text_pair(actual, &predicate.value)
            .is_some_and(|(actual, expected)| actual.starts_with(expected)),
    }
}

fn ordered(actual: &Value, expected: &Value, accept: fn(Ordering) -> bool) -> bool {
    strict_cmp(actual, expected).is_some_and(accept)
}

fn text_pair<'a>(actual: &'a Value, expected: &'a Value) -> Option<(&'a str, &'a str)> {
    Some((actual.as_text()?, expected.as_text()?))
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn doc() -> Document {
        Document::new("d1")
            .with("city", "akureyri")
            .with("population", 19_000)
    }

    #[test]
    fn eq_and_ne() {
        assert!(eval(&doc(), &Predicate::eq("city", "akureyri")));
        assert!(!eval(&doc(), &Predicate::eq("city", "Akureyri")));
        assert!(eval(&doc(), &Predicate::new("city", Cmp::Ne, "husavik")));
    }

    #[test]
    fn ordering_is_same_variant_only() {
        assert!(eval(&doc(), &Predicate::new("population", Cmp::Gt, 10_000)));
        assert!(!eval(&doc(), &Predicate::new("population", Cmp::Gt, "10000")));
        assert!(!eval(&doc(), &Predicate::new("missing", Cmp::Lt, 1)));
    }

    #[test]
    fn text_operators() {
        assert!(eval(&doc(), &Predicate::new("city", Cmp::Contains, "urey")));
        assert!(eval(&doc(), &Predicate::new("city", Cmp::StartsWith, "aku")));
        assert!(!eval(
            &doc(),
            &Predicate::new("population", Cmp::Contains, "19")
        ));
    }

    #[test]
    fn pins_requires_eq_on_literal() {
        assert!(Predicate::eq("city", "x").pins("city"));
        assert!(!Predicate::eq("city", "x").pins("zone"));
        assert!(!Predicate::new("city", Cmp::Ne, "x").pins("city"));
        assert!(!Predicate::eq("city", Value::Null).pins("city"));
    }
}
