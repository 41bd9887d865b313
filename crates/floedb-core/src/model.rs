use crate::error::ConfigError;

///
/// EntityModel
/// Static runtime model for one entity type.
///

#[derive(Debug)]
pub struct EntityModel {
    /// Fully-qualified type path (for registry dispatch and diagnostics).
    pub path: &'static str,
    /// Field projected into the store-level document id.
    pub id_field: &'static str,
    /// Field whose value selects the physical partition.
    pub partition_key: &'static str,
    /// Ordered field list (authoritative for validation).
    pub fields: &'static [&'static str],
}

impl EntityModel {
    /// Field lookup; names match case-sensitively.
    #[must_use]
    pub fn contains_field(&self, field: &str) -> bool {
        self.fields.iter().any(|f| *f == field)
    }

    #[must_use]
    pub fn is_partition_key(&self, field: &str) -> bool {
        self.partition_key == field
    }

    /// Declaration invariants, checked once at registration.
    pub fn validate(&'static self) -> Result<(), ConfigError> {
        if !self.contains_field(self.partition_key) {
            return Err(ConfigError::PartitionKeyNotDeclared {
                path: self.path,
                field: self.partition_key,
            });
        }

        if !self.contains_field(self.id_field) {
            return Err(ConfigError::IdFieldNotDeclared {
                path: self.path,
                field: self.id_field,
            });
        }

        for (i, field) in self.fields.iter().enumerate() {
            if self.fields[..i].contains(field) {
                return Err(ConfigError::DuplicateField {
                    path: self.path,
                    field,
                });
            }
        }

        Ok(())
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    static GOOD: EntityModel = EntityModel {
        path: "test::Good",
        id_field: "id",
        partition_key: "region",
        fields: &["id", "region", "label"],
    };

    static BAD_PK: EntityModel = EntityModel {
        path: "test::BadPk",
        id_field: "id",
        partition_key: "region",
        fields: &["id", "label"],
    };

    static DUP_FIELD: EntityModel = EntityModel {
        path: "test::Dup",
        id_field: "id",
        partition_key: "id",
        fields: &["id", "label", "label"],
    };

    #[test]
    fn valid_model_passes() {
        assert!(GOOD.validate().is_ok());
        assert!(GOOD.contains_field("label"));
        assert!(!GOOD.contains_field("Label"));
        assert!(GOOD.is_partition_key("region"));
    }

    #[test]
    fn undeclared_partition_key_is_rejected() {
        match BAD_PK.validate() {
            Err(ConfigError::PartitionKeyNotDeclared { field, .. }) => {
                assert_eq!(field, "region");
            }
            other => panic!("expected PartitionKeyNotDeclared, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_field_is_rejected() {
        match DUP_FIELD.validate() {
            Err(ConfigError::DuplicateField { field, .. }) => assert_eq!(field, "label"),
            other => panic!("expected DuplicateField, got {other:?}"),
        }
    }
}
