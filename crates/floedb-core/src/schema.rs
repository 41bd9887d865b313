use crate::{error::ConfigError, model::EntityModel, traits::EntityKind};
use std::collections::BTreeMap;

///
/// SchemaRegistry
///
/// Immutable path → model lookup, built once at startup. Partitioned
/// operations on an entity type that was never registered fail with
/// [`ConfigError::EntityNotRegistered`].
///

#[derive(Debug, Default)]
pub struct SchemaRegistry {
    entities: BTreeMap<&'static str, &'static EntityModel>,
}

impl SchemaRegistry {
    #[must_use]
    pub fn builder() -> SchemaRegistryBuilder {
        SchemaRegistryBuilder::default()
    }

    /// Look up the registered model for an entity type.
    pub fn try_model<E: EntityKind>(&self) -> Result<&'static EntityModel, ConfigError> {
        self.entities
            .get(E::PATH)
            .copied()
            .ok_or(ConfigError::EntityNotRegistered { path: E::PATH })
    }

    /// Resolve the declared partition-key field for an entity type.
    pub fn partition_key<E: EntityKind>(&self) -> Result<&'static str, ConfigError> {
        self.try_model::<E>().map(|model| model.partition_key)
    }

    #[must_use]
    pub fn is_registered<E: EntityKind>(&self) -> bool {
        self.entities.contains_key(E::PATH)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

///
/// SchemaRegistryBuilder
/// Explicit startup registration; validates each model as it is added.
///

#[derive(Debug, Default)]
pub struct SchemaRegistryBuilder {
    entities: BTreeMap<&'static str, &'static EntityModel>,
}

impl SchemaRegistryBuilder {
    /// Register an entity type, validating its declaration invariants.
    pub fn entity<E: EntityKind>(mut self) -> Result<Self, ConfigError> {
        if self.entities.contains_key(E::PATH) {
            return Err(ConfigError::DuplicateEntity { path: E::PATH });
        }

        E::MODEL.validate()?;
        self.entities.insert(E::PATH, E::MODEL);

        Ok(self)
    }

    #[must_use]
    pub fn build(self) -> SchemaRegistry {
        SchemaRegistry {
            entities: self.entities,
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{Region, Unregistered};

    #[test]
    fn registered_entity_resolves() {
        let registry = SchemaRegistry::builder()
            .entity::<Region>()
            .unwrap()
            .build();

        assert!(registry.is_registered::<Region>());
        assert_eq!(registry.partition_key::<Region>().unwrap(), "zone");
    }

    #[test]
    fn unregistered_entity_fails() {
        let registry = SchemaRegistry::builder()
            .entity::<Region>()
            .unwrap()
            .build();

        match registry.try_model::<Unregistered>() {
            Err(ConfigError::EntityNotRegistered { path }) => {
                assert_eq!(path, Unregistered::PATH);
            }
            other => panic!("expected EntityNotRegistered, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_registration_fails() {
        let result = SchemaRegistry::builder()
            .entity::<Region>()
            .unwrap()
            .entity::<Region>();

        assert!(matches!(
            result,
            Err(ConfigError::DuplicateEntity { path }) if path == Region::PATH
        ));
    }
}
