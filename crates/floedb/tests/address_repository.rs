//! End-to-end repository behavior over the partitioned Address fixture.

use floedb::prelude::*;
use floedb_testing_fixtures::{Address, Landmark, constants::*, fixture_registry, seed_addresses};
use futures::executor::block_on;
use std::sync::Arc;

fn repository() -> (Arc<MemoryClient>, Repository<Address, MemoryClient>) {
    let client = Arc::new(MemoryClient::new());
    let registry = Arc::new(fixture_registry().unwrap());

    let repo = Repository::with_derived(
        Arc::clone(&client),
        registry,
        [
            DerivedShape::find("by_postal_code").by("postal_code"),
            DerivedShape::find("by_city").by("city"),
            DerivedShape::find("by_street_or_city").by("street").by("city").any_of(),
            DerivedShape::find("by_postal_code_and_city").by("postal_code").by("city"),
            DerivedShape::delete("delete_by_city").by("city"),
            DerivedShape::delete("delete_by_postal_code_and_city")
                .by("postal_code")
                .by("city"),
        ],
    )
    .unwrap();

    (client, repo)
}

fn seeded() -> (Arc<MemoryClient>, Repository<Address, MemoryClient>) {
    let (client, repo) = repository();
    repo.save_all(seed_addresses()).unwrap();
    (client, repo)
}

#[test]
fn find_all_returns_each_saved_entity() {
    let (_, repo) = seeded();

    let result = repo.find_all().unwrap();
    assert_eq!(result.len(), 4);
}

#[test]
fn find_by_postal_code_spans_partitions() {
    let (_, repo) = seeded();

    let result = repo.find_with("by_postal_code", [POSTAL_CODE]).unwrap();

    assert_eq!(result.len(), 2);
    for address in &result {
        assert_eq!(address.postal_code, POSTAL_CODE);
    }
}

#[test]
fn find_by_partitioned_city() {
    let (_, repo) = seeded();

    let result = repo.find_with("by_city", [CITY]).unwrap();

    assert_eq!(result.len(), 2);
    for address in &result {
        assert_eq!(address.city, CITY);
    }
}

#[test]
fn find_by_street_or_city_returns_union() {
    let (_, repo) = seeded();

    let mut result = repo
        .find_with("by_street_or_city", [STREET_1, CITY])
        .unwrap()
        .entities();
    let mut reference = vec![
        Address::new(POSTAL_CODE, STREET, CITY),
        Address::new(POSTAL_CODE_1, STREET_1, CITY_0),
        Address::new(POSTAL_CODE_0, STREET_0, CITY),
    ];

    result.sort_by(|a, b| a.postal_code.cmp(&b.postal_code));
    reference.sort_by(|a, b| a.postal_code.cmp(&b.postal_code));

    assert_eq!(result, reference);
}

#[test]
fn count_tracks_deletes() {
    let (_, repo) = seeded();

    assert_eq!(repo.count().unwrap(), 4);

    repo.delete_with("delete_by_city", [CITY]).unwrap();
    assert_eq!(repo.count().unwrap(), 2);
}

#[test]
fn count_equals_find_all_len() {
    let (_, repo) = seeded();

    assert_eq!(repo.count().unwrap(), repo.find_all().unwrap().len() as u64);
}

#[test]
fn count_all_async_emits_exactly_one_value() {
    let (_, repo) = seeded();

    let count = block_on(repo.count_all_async()).unwrap();
    assert_eq!(count, 4);

    repo.delete_with("delete_by_city", [CITY]).unwrap();

    let count = block_on(repo.count_all_async()).unwrap();
    assert_eq!(count, 2);
}

#[test]
fn delete_by_id_without_partition_key_fails() {
    let (_, repo) = seeded();

    let result = repo.delete_by_id(POSTAL_CODE);
    assert!(matches!(
        result,
        Err(Error::Access(AccessError::MissingPartitionKey { .. }))
    ));

    // Never a silent no-op.
    assert_eq!(repo.count().unwrap(), 4);
}

#[test]
fn delete_by_id_and_partitioned_city() {
    let (_, repo) = seeded();

    repo.delete_with("delete_by_postal_code_and_city", [POSTAL_CODE, CITY])
        .unwrap();

    let result = repo.find_all().unwrap();
    assert_eq!(result.len(), 3);
}

#[test]
fn delete_by_partitioned_city() {
    let (_, repo) = seeded();

    let deleted = repo.delete_with("delete_by_city", [CITY]).unwrap();
    assert_eq!(deleted, 2);

    let result = repo.find_all().unwrap();
    assert_eq!(result.len(), 2);
    for address in &result {
        assert_ne!(address.city, CITY);
    }
}

#[test]
fn save_updates_existing_entity() {
    let (_, repo) = seeded();

    repo.save(Address::new(POSTAL_CODE, NEW_STREET, CITY)).unwrap();

    let result = repo
        .find_with("by_postal_code_and_city", [POSTAL_CODE, CITY])
        .unwrap();

    assert_eq!(result.len(), 1);
    let address = result.one().unwrap();
    assert_eq!(address.street, NEW_STREET);
    assert_eq!(address.postal_code, POSTAL_CODE);
    assert_eq!(repo.count().unwrap(), 4);
}

#[test]
fn round_trip_by_postal_code_and_city() {
    let (_, repo) = seeded();

    let result = repo
        .find(
            QueryIntent::new()
                .eq("postal_code", POSTAL_CODE)
                .and("city", Cmp::Eq, CITY),
        )
        .unwrap();

    let address = result.one().unwrap();
    assert_eq!(address.street, STREET);
}

#[test]
fn sort_field_outside_schema_fails_before_any_store_call() {
    let (client, repo) = seeded();
    let executes_before = client.calls().execute;

    let result = repo.find_all_sorted(SortSpec::asc("country"));

    assert!(matches!(
        result,
        Err(Error::Query(QueryError::UnknownSortField { field, .. })) if field == "country"
    ));
    assert_eq!(client.calls().execute, executes_before);
}

#[test]
fn find_all_sorted_by_declared_field() {
    let (_, repo) = seeded();

    let result = repo.find_all_sorted(SortSpec::asc("street")).unwrap();
    let streets: Vec<_> = result.into_iter().map(|a| a.street).collect();

    let mut expected = streets.clone();
    expected.sort();
    assert_eq!(streets, expected);
    assert_eq!(streets.len(), 4);
}

#[test]
fn mixed_connectives_fail_before_any_store_call() {
    let (client, repo) = seeded();
    let executes_before = client.calls().execute;

    let result = repo.find(
        QueryIntent::new()
            .eq("street", STREET)
            .and("city", Cmp::Eq, CITY)
            .or("postal_code", Cmp::Eq, POSTAL_CODE),
    );

    assert!(matches!(
        result,
        Err(Error::Query(QueryError::UnsupportedShape { .. }))
    ));
    assert_eq!(client.calls().execute, executes_before);
}

#[test]
fn unregistered_entity_is_a_configuration_error() {
    let client = Arc::new(MemoryClient::new());
    let registry = Arc::new(fixture_registry().unwrap());

    let result = Repository::<Landmark, _>::new(client, registry);

    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::EntityNotRegistered { .. }))
    ));
}

#[test]
fn derived_bind_arity_is_checked() {
    let (_, repo) = seeded();

    let result = repo.find_with("by_postal_code_and_city", [POSTAL_CODE]);

    assert!(matches!(
        result,
        Err(Error::Query(QueryError::BindArity {
            expected: 2,
            found: 1,
            ..
        }))
    ));
}
