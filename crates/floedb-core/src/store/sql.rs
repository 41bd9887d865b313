//! SQL text rendering for networked document-store clients.

use crate::{
    query::descriptor::{Connective, QueryDescriptor, SortDirection},
    query::predicate::{Cmp, Predicate},
    value::Value,
};
use std::fmt::Write;

/// Render a descriptor into parameterized SQL text.
///
/// Parameters are named `@p0..@pN` in predicate order; the caller binds
/// them wire-side. The text is diagnostic for embedded clients, which
/// evaluate the structured descriptor instead.
#[must_use]
pub fn render(descriptor: &QueryDescriptor) -> (String, Vec<(String, Value)>) {
    let mut text = String::from("SELECT * FROM c");
    let mut params = Vec::with_capacity(descriptor.predicates.len());

    for (i, predicate) in descriptor.predicates.iter().enumerate() {
        let keyword = if i == 0 {
            "WHERE"
        } else {
            match descriptor.connective {
                Connective::And => "AND",
                Connective::Or => "OR",
            }
        };

        let param = format!("@p{i}");
        write!(text, " {keyword} {}", clause(predicate, &param)).expect("write to String");
        params.push((param, predicate.value.clone()));
    }

    if let Some(sort) = &descriptor.sort {
        let direction = match sort.direction {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        };
        write!(text, " ORDER BY c.{} {direction}", sort.field).expect("write to String");
    }

    (text, params)
}

fn clause(predicate: &Predicate, param: &str) -> String {
    let field = &predicate.field;

    match predicate.cmp {
        Cmp::Eq => format!("c.{field} = {param}"),
        Cmp::Ne => format!("c.{field} <> {param}"),
        Cmp::Lt => format!("c.{field} < {param}"),
        Cmp::Lte => format!("c.{field} <= {param}"),
        Cmp::Gt => format!("c.{field} > {param}"),
        Cmp::Gte => format!("c.{field} >= {param}"),
        Cmp::Contains => format!("CONTAINS(c.{field}, {param})"),
        Cmp::StartsWith => format!("STARTSWITH(c.{field}, {param})"),
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        query::descriptor::{Connective, SortSpec},
        value::FieldValue,
    };

    fn descriptor(connective: Connective, predicates: Vec<Predicate>) -> QueryDescriptor {
        QueryDescriptor {
            entity: "test::T",
            predicates,
            connective,
            sort: None,
        }
    }

    #[test]
    fn match_all_renders_bare_select() {
        let (text, params) = render(&QueryDescriptor::match_all("test::T"));
        assert_eq!(text, "SELECT * FROM c");
        assert!(params.is_empty());
    }

    #[test]
    fn and_chain_renders_in_order() {
        let d = descriptor(
            Connective::And,
            vec![
                Predicate::eq("postal_code", "101"),
                Predicate::eq("city", "reykjavik"),
            ],
        );
        let (text, params) = render(&d);

        assert_eq!(
            text,
            "SELECT * FROM c WHERE c.postal_code = @p0 AND c.city = @p1"
        );
        assert_eq!(params[0], ("@p0".to_string(), "101".to_value()));
        assert_eq!(params[1], ("@p1".to_string(), "reykjavik".to_value()));
    }

    #[test]
    fn or_and_functions_render() {
        let d = descriptor(
            Connective::Or,
            vec![
                Predicate::new("street", Cmp::StartsWith, "lauga"),
                Predicate::new("city", Cmp::Contains, "vik"),
            ],
        );
        let (text, _) = render(&d);

        assert_eq!(
            text,
            "SELECT * FROM c WHERE STARTSWITH(c.street, @p0) OR CONTAINS(c.city, @p1)"
        );
    }

    #[test]
    fn sort_renders_order_by() {
        let mut d = descriptor(Connective::And, vec![Predicate::eq("city", "x")]);
        d.sort = Some(SortSpec::desc("street"));
        let (text, _) = render(&d);

        assert_eq!(
            text,
            "SELECT * FROM c WHERE c.city = @p0 ORDER BY c.street DESC"
        );
    }
}
