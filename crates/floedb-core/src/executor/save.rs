use crate::{
    error::Error,
    executor::{Context, map},
    obs::{ExecKind, Span},
    store::DocumentClient,
    traits::EntityValue,
};

///
/// SaveExecutor
///

pub struct SaveExecutor<E: EntityValue, C: DocumentClient> {
    ctx: Context<E, C>,
}

impl<E: EntityValue, C: DocumentClient> SaveExecutor<E, C> {
    pub(crate) const fn new(ctx: Context<E, C>) -> Self {
        Self { ctx }
    }

    /// Upsert one entity under its partition-key value, returning the
    /// stored value. Saving an existing id replaces the document.
    pub fn save(&self, entity: E) -> Result<E, Error> {
        let mut span = Span::<E>::new(ExecKind::Save);
        self.ctx.model()?;

        let partition = entity.partition_value();
        self.ctx
            .debug_log(format!("upsert id={} partition={partition}", entity.id()));

        self.ctx
            .client
            .upsert(entity.to_document(), &partition)
            .map_err(map::fault_for::<E>)?;

        span.set_rows(1);
        Ok(entity)
    }

    /// Upsert multiple entities, returning stored values.
    pub fn save_many(&self, entities: impl IntoIterator<Item = E>) -> Result<Vec<E>, Error> {
        entities.into_iter().map(|entity| self.save(entity)).collect()
    }
}
