use crate::{
    document::DocumentId,
    error::Error,
    executor::{Context, map},
    obs::{self, ExecKind, MetricsEvent, Span},
    partition::PartitionScope,
    query::descriptor::QueryDescriptor,
    store::{DocumentClient, StoreQuery},
    traits::EntityValue,
    value::Value,
};

///
/// DeleteExecutor
///

pub struct DeleteExecutor<E: EntityValue, C: DocumentClient> {
    ctx: Context<E, C>,
}

impl<E: EntityValue, C: DocumentClient> DeleteExecutor<E, C> {
    pub(crate) const fn new(ctx: Context<E, C>) -> Self {
        Self { ctx }
    }

    /// Delete one document by id.
    ///
    /// On a partitioned entity, passing no partition value is a documented
    /// expected failure (`AccessError::MissingPartitionKey`), never a
    /// silent no-op: the store cannot locate the partition to address the
    /// delete.
    pub fn by_id(&self, id: &DocumentId, partition: Option<&Value>) -> Result<(), Error> {
        let mut span = Span::<E>::new(ExecKind::Delete);
        self.ctx.model()?;

        self.ctx.debug_log(format!(
            "delete id={id} partition={}",
            partition.map_or_else(|| "<none>".to_string(), Value::to_string)
        ));

        self.ctx
            .client
            .delete_by_id(id, partition)
            .map_err(map::fault_for::<E>)?;

        span.set_rows(1);
        Ok(())
    }

    /// Delete every document matching a validated descriptor, returning
    /// the count of deleted items.
    ///
    /// Deletes by a non-partition-key field resolve cross-partition: a
    /// read of the matching documents followed by a delete-by-id per hit,
    /// each addressed with the partition value its document carries.
    pub fn execute(&self, descriptor: QueryDescriptor) -> Result<u64, Error> {
        let mut span = Span::<E>::new(ExecKind::Delete);

        let model = self.ctx.model()?;
        let scope = PartitionScope::resolve(&descriptor, model.partition_key);
        if scope.is_cross_partition() {
            obs::record(MetricsEvent::PartitionFanout {
                entity_path: E::PATH,
            });
        }
        self.ctx.debug_log(format!("delete scope: {scope}"));

        let query = StoreQuery::new(descriptor);
        let matches = self
            .ctx
            .client
            .execute(&query, &scope)
            .map_err(map::fault_for::<E>)?;

        let mut deleted = 0u64;
        for doc in matches {
            let partition = doc.get(model.partition_key).clone();
            self.ctx
                .client
                .delete_by_id(&doc.id, Some(&partition))
                .map_err(map::fault_for::<E>)?;
            deleted += 1;
        }

        span.set_rows(usize::try_from(deleted).unwrap_or(usize::MAX));
        Ok(deleted)
    }

    /// Delete all documents of this entity type.
    pub fn all(&self) -> Result<u64, Error> {
        self.execute(QueryDescriptor::match_all(E::PATH))
    }
}
