use crate::{
    document::DocumentId,
    error::{Error, QueryError},
    executor::{AsyncCount, Context, CountExecutor, DeleteExecutor, LoadExecutor, SaveExecutor},
    query::{
        QueryIntent,
        derived::{DerivedOp, DerivedQueries, DerivedShape},
        descriptor::{QueryDescriptor, SortSpec},
    },
    response::Response,
    schema::SchemaRegistry,
    store::DocumentClient,
    traits::EntityValue,
    value::FieldValue,
};
use std::{marker::PhantomData, sync::Arc};

///
/// Repository
///
/// Public CRUD + derived-query surface for one entity type, composing the
/// schema registry, derivation, partition scoping, executors, and fault
/// mapping. Construction fails if the entity type was never registered.
///

pub struct Repository<E: EntityValue, C: DocumentClient> {
    client: Arc<C>,
    registry: Arc<SchemaRegistry>,
    derived: DerivedQueries,
    debug: bool,
    _marker: PhantomData<E>,
}

impl<E: EntityValue, C: DocumentClient> Repository<E, C> {
    /// Create a repository with no derived shapes.
    pub fn new(client: Arc<C>, registry: Arc<SchemaRegistry>) -> Result<Self, Error> {
        Self::with_derived(client, registry, std::iter::empty())
    }

    /// Create a repository with a set of named derived shapes, resolved
    /// against the schema now rather than per call.
    pub fn with_derived(
        client: Arc<C>,
        registry: Arc<SchemaRegistry>,
        shapes: impl IntoIterator<Item = DerivedShape>,
    ) -> Result<Self, Error> {
        let derived = DerivedQueries::resolve::<E>(&registry, shapes)?;

        Ok(Self {
            client,
            registry,
            derived,
            debug: false,
            _marker: PhantomData,
        })
    }

    /// Enable debug logging for subsequent operations.
    #[must_use]
    pub const fn debug(mut self) -> Self {
        self.debug = true;
        self
    }

    fn ctx(&self) -> Context<E, C> {
        Context::new(
            Arc::clone(&self.client),
            Arc::clone(&self.registry),
            self.debug,
        )
    }

    //
    // Low-level executors
    //

    /// Get a [`LoadExecutor`] for executing validated load descriptors.
    #[must_use]
    pub fn load(&self) -> LoadExecutor<E, C> {
        LoadExecutor::new(self.ctx())
    }

    /// Get a [`SaveExecutor`] for upserting entities.
    #[must_use]
    pub fn save_executor(&self) -> SaveExecutor<E, C> {
        SaveExecutor::new(self.ctx())
    }

    /// Get a [`DeleteExecutor`] for deleting by id or descriptor.
    #[must_use]
    pub fn delete_executor(&self) -> DeleteExecutor<E, C> {
        DeleteExecutor::new(self.ctx())
    }

    /// Get a [`CountExecutor`].
    #[must_use]
    pub fn count_executor(&self) -> CountExecutor<E, C> {
        CountExecutor::new(self.ctx())
    }

    //
    // Save
    //

    /// Upsert one entity; saving an existing id replaces its document.
    pub fn save(&self, entity: E) -> Result<E, Error> {
        self.save_executor().save(entity)
    }

    /// Upsert multiple entities.
    pub fn save_all(&self, entities: impl IntoIterator<Item = E>) -> Result<Vec<E>, Error> {
        self.save_executor().save_many(entities)
    }

    //
    // Find
    //

    /// All entities, cross-partition, in store-defined order.
    pub fn find_all(&self) -> Result<Response<E>, Error> {
        self.load().execute(QueryDescriptor::match_all(E::PATH))
    }

    /// All entities, ordered by a schema-validated sort.
    ///
    /// An unknown sort field fails before any store interaction.
    pub fn find_all_sorted(&self, sort: SortSpec) -> Result<Response<E>, Error> {
        let descriptor = QueryIntent::<E>::new().sort(sort).derive(&self.registry)?;
        self.load().execute(descriptor)
    }

    /// Execute a query intent.
    pub fn find(&self, intent: QueryIntent<E>) -> Result<Response<E>, Error> {
        let descriptor = intent.derive(&self.registry)?;
        self.load().execute(descriptor)
    }

    /// Execute a registered derived find shape with positional values.
    pub fn find_with<I, V>(&self, name: &str, values: I) -> Result<Response<E>, Error>
    where
        I: IntoIterator<Item = V>,
        V: FieldValue,
    {
        let descriptor = self.bind(name, values, DerivedOp::Find)?;
        self.load().execute(descriptor)
    }

    //
    // Delete
    //

    /// Delete by raw id without a partition key.
    ///
    /// Always fails with `AccessError::MissingPartitionKey` on a
    /// partitioned entity; use [`Self::delete_by_id_in`] to address the
    /// partition.
    pub fn delete_by_id(&self, id: impl Into<DocumentId>) -> Result<(), Error> {
        self.delete_executor().by_id(&id.into(), None)
    }

    /// Delete by id within a known partition.
    pub fn delete_by_id_in(
        &self,
        id: impl Into<DocumentId>,
        partition: impl FieldValue,
    ) -> Result<(), Error> {
        self.delete_executor()
            .by_id(&id.into(), Some(&partition.to_value()))
    }

    /// Delete all entities, returning the deleted count.
    pub fn delete_all(&self) -> Result<u64, Error> {
        self.delete_executor().all()
    }

    /// Delete every entity matching an intent, returning the count.
    pub fn delete(&self, intent: QueryIntent<E>) -> Result<u64, Error> {
        let descriptor = intent.derive(&self.registry)?;
        self.delete_executor().execute(descriptor)
    }

    /// Execute a registered derived delete shape with positional values.
    pub fn delete_with<I, V>(&self, name: &str, values: I) -> Result<u64, Error>
    where
        I: IntoIterator<Item = V>,
        V: FieldValue,
    {
        let descriptor = self.bind(name, values, DerivedOp::Delete)?;
        self.delete_executor().execute(descriptor)
    }

    //
    // Count
    //

    /// Synchronous count; equals `find_all().len()` at the same logical
    /// point.
    pub fn count(&self) -> Result<u64, Error> {
        self.count_executor().all()
    }

    /// Asynchronous count: returns immediately with a single-value
    /// producer that completes exactly once.
    #[must_use]
    pub fn count_all_async(&self) -> AsyncCount {
        self.count_executor().all_async()
    }

    fn bind<I, V>(&self, name: &str, values: I, expected: DerivedOp) -> Result<QueryDescriptor, Error>
    where
        I: IntoIterator<Item = V>,
        V: FieldValue,
    {
        let values = values.into_iter().map(|v| v.to_value()).collect();
        let (op, descriptor) = self.derived.bind::<E>(name, values)?;

        if op == expected {
            Ok(descriptor)
        } else {
            Err(QueryError::UnsupportedShape {
                entity: E::PATH,
                reason: format!("derived shape '{name}' is not registered for this operation"),
            }
            .into())
        }
    }
}

///
/// TESTS
///
