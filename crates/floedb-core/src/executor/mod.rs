pub mod count;
pub mod delete;
pub mod load;
mod map;
pub mod save;

pub use count::{AsyncCount, CountExecutor};
pub use delete::DeleteExecutor;
pub use load::LoadExecutor;
pub use save::SaveExecutor;

use crate::{
    error::Error, model::EntityModel, schema::SchemaRegistry, store::DocumentClient,
    traits::EntityKind,
};
use std::{marker::PhantomData, sync::Arc};

///
/// Context
///
/// Shared per-executor state: the store client, the schema registry, and
/// the verbosity flag. Executors are cheap per-call values; no state is
/// shared between invocations beyond these handles.
///

pub(crate) struct Context<E: EntityKind, C: DocumentClient> {
    pub client: Arc<C>,
    pub registry: Arc<SchemaRegistry>,
    pub debug: bool,
    _marker: PhantomData<E>,
}

impl<E: EntityKind, C: DocumentClient> Context<E, C> {
    pub(crate) const fn new(client: Arc<C>, registry: Arc<SchemaRegistry>, debug: bool) -> Self {
        Self {
            client,
            registry,
            debug,
            _marker: PhantomData,
        }
    }

    /// Registered model lookup; partitioned operations on an unregistered
    /// entity type stop here.
    pub(crate) fn model(&self) -> Result<&'static EntityModel, Error> {
        Ok(self.registry.try_model::<E>()?)
    }

    pub(crate) fn debug_log(&self, message: impl AsRef<str>) {
        if self.debug {
            tracing::debug!(entity = E::PATH, "{}", message.as_ref());
        }
    }
}

impl<E: EntityKind, C: DocumentClient> Clone for Context<E, C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            registry: Arc::clone(&self.registry),
            debug: self.debug,
            _marker: PhantomData,
        }
    }
}
