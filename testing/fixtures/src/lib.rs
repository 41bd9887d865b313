//! Shared entity and seed fixtures for FloeDB test surfaces.

pub mod address;
pub mod constants;

pub use address::{Address, Landmark};

use floedb_core::{error::Error, schema::SchemaRegistry};

/// Registry with the [`Address`] entity registered.
///
/// [`Landmark`] is deliberately left out so tests can exercise the
/// unregistered-entity path.
pub fn fixture_registry() -> Result<SchemaRegistry, Error> {
    let registry = SchemaRegistry::builder().entity::<Address>()?.build();

    Ok(registry)
}

/// Four addresses across three city partitions; two share a postal code
/// and two share a city.
#[must_use]
pub fn seed_addresses() -> Vec<Address> {
    use crate::constants::*;

    vec![
        Address::new(POSTAL_CODE, STREET, CITY),
        Address::new(POSTAL_CODE_1, STREET_1, CITY_0),
        Address::new(POSTAL_CODE_0, STREET_0, CITY),
        Address::new(POSTAL_CODE, STREET_2, CITY_1),
    ]
}
