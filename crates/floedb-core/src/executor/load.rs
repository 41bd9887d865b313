use crate::{
    document::Document,
    error::Error,
    executor::{Context, map},
    obs::{self, ExecKind, MetricsEvent, Span},
    partition::PartitionScope,
    query::descriptor::{QueryDescriptor, SortDirection, SortSpec},
    response::Response,
    store::{DocumentClient, StoreQuery},
    traits::EntityValue,
    value::canonical_cmp,
};

///
/// LoadExecutor
///

pub struct LoadExecutor<E: EntityValue, C: DocumentClient> {
    ctx: Context<E, C>,
}

impl<E: EntityValue, C: DocumentClient> LoadExecutor<E, C> {
    pub(crate) const fn new(ctx: Context<E, C>) -> Self {
        Self { ctx }
    }

    /// Execute a validated load descriptor.
    ///
    /// Single-partition scopes issue one scoped query; cross-partition
    /// scopes fan out and the merged result is treated as unordered unless
    /// the descriptor carries a sort, which is applied here after the
    /// merge.
    pub fn execute(&self, descriptor: QueryDescriptor) -> Result<Response<E>, Error> {
        let mut span = Span::<E>::new(ExecKind::Load);

        let model = self.ctx.model()?;
        let scope = PartitionScope::resolve(&descriptor, model.partition_key);
        if scope.is_cross_partition() {
            obs::record(MetricsEvent::PartitionFanout {
                entity_path: E::PATH,
            });
        }
        self.ctx.debug_log(format!("load scope: {scope}"));

        let sort = descriptor.sort.clone();
        let query = StoreQuery::new(descriptor);
        let mut docs = self
            .ctx
            .client
            .execute(&query, &scope)
            .map_err(map::fault_for::<E>)?;

        if let Some(sort) = &sort {
            sort_docs(&mut docs, sort);
        }

        let entities = map::entities_from::<E>(&docs);
        span.set_rows(entities.len());

        Ok(Response(entities))
    }
}

/// Post-merge ordering over the raw documents, by canonical value order of
/// the sort field.
fn sort_docs(docs: &mut [Document], sort: &SortSpec) {
    docs.sort_by(|a, b| {
        let ordering = canonical_cmp(a.get(&sort.field), b.get(&sort.field));
        match sort.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

///
/// TESTS
///
