use crate::{
    error::{AccessError, Error},
    traits::EntityValue,
};

///
/// Response
/// Materialized query result: entities in result order.
///

#[derive(Debug)]
pub struct Response<E: EntityValue>(pub Vec<E>);

impl<E: EntityValue> Response<E> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Require exactly one entity.
    pub fn one(self) -> Result<E, Error> {
        match self.0.len() {
            1 => Ok(self.0.into_iter().next().unwrap()),
            0 => Err(AccessError::NotFound {
                entity: E::PATH,
                id: String::new(),
            }
            .into()),
            count => Err(AccessError::NotUnique {
                entity: E::PATH,
                count,
            }
            .into()),
        }
    }

    /// Require at most one entity.
    #[must_use]
    pub fn one_opt(mut self) -> Option<E> {
        if self.0.len() == 1 { self.0.pop() } else { None }
    }

    /// Consume the response and collect all entities.
    #[must_use]
    pub fn entities(self) -> Vec<E> {
        self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.0.iter()
    }
}

impl<E: EntityValue> IntoIterator for Response<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, E: EntityValue> IntoIterator for &'a Response<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::Region;

    #[test]
    fn one_requires_exactly_one() {
        let response = Response(vec![Region::new("r1", "north", "a")]);
        assert!(response.one().is_ok());

        let response: Response<Region> = Response(vec![]);
        assert!(response.one().is_err());

        let response = Response(vec![
            Region::new("r1", "north", "a"),
            Region::new("r2", "south", "b"),
        ]);
        assert!(response.one().is_err());
    }

    #[test]
    fn one_opt_is_none_unless_single() {
        let response: Response<Region> = Response(vec![]);
        assert!(response.one_opt().is_none());

        let response = Response(vec![Region::new("r1", "north", "a")]);
        assert_eq!(response.one_opt().unwrap().code, "r1");
    }
}
