use crate::{
    error::{AccessError, Error},
    executor::{Context, map},
    obs::{ExecKind, Span},
    partition::PartitionScope,
    store::{CountProducer, DocumentClient},
    traits::EntityValue,
};
use futures::channel::oneshot::Canceled;
use std::{
    future::Future,
    pin::Pin,
    task::{Context as TaskContext, Poll},
};

///
/// CountExecutor
///

pub struct CountExecutor<E: EntityValue, C: DocumentClient> {
    ctx: Context<E, C>,
}

impl<E: EntityValue, C: DocumentClient> CountExecutor<E, C> {
    pub(crate) const fn new(ctx: Context<E, C>) -> Self {
        Self { ctx }
    }

    /// Synchronous count across all partitions.
    pub fn all(&self) -> Result<u64, Error> {
        let mut span = Span::<E>::new(ExecKind::Count);
        self.ctx.model()?;

        let count = self
            .ctx
            .client
            .count(&PartitionScope::CrossPartition)
            .map_err(map::fault_for::<E>)?;

        span.set_rows(usize::try_from(count).unwrap_or(usize::MAX));
        Ok(count)
    }

    /// Asynchronous count variant.
    ///
    /// Returns immediately; the producer completes exactly once with the
    /// count or an error, on the client's completion path. Registration
    /// faults are delivered through the producer, preserving the
    /// one-emission contract.
    #[must_use]
    pub fn all_async(&self) -> AsyncCount {
        let _span = Span::<E>::new(ExecKind::Count);

        match self.ctx.model() {
            Err(err) => AsyncCount::failed(err),
            Ok(_) => {
                let producer = self.ctx.client.count_async(&PartitionScope::CrossPartition);
                AsyncCount::pending(E::PATH, producer)
            }
        }
    }
}

///
/// AsyncCount
///
/// Single-value count producer: resolves exactly once with the count or an
/// error, never both. Dropping it is the unsubscribe; the underlying
/// channel registration is released and no value is delivered afterwards.
///

pub struct AsyncCount {
    entity: &'static str,
    state: State,
}

enum State {
    Pending(CountProducer),
    Failed(Option<Error>),
}

impl AsyncCount {
    const fn pending(entity: &'static str, producer: CountProducer) -> Self {
        Self {
            entity,
            state: State::Pending(producer),
        }
    }

    const fn failed(err: Error) -> Self {
        Self {
            entity: "",
            state: State::Failed(Some(err)),
        }
    }
}

impl Future for AsyncCount {
    type Output = Result<u64, Error>;

    fn poll(self: Pin<&mut Self>, cx: &mut TaskContext<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();

        match &mut this.state {
            State::Failed(err) => {
                Poll::Ready(Err(err.take().expect("AsyncCount polled after completion")))
            }
            State::Pending(producer) => match Pin::new(producer).poll(cx) {
                Poll::Pending => Poll::Pending,
                Poll::Ready(Ok(Ok(count))) => Poll::Ready(Ok(count)),
                Poll::Ready(Ok(Err(fault))) => Poll::Ready(Err(map::fault(this.entity, fault))),
                Poll::Ready(Err(Canceled)) => Poll::Ready(Err(AccessError::Unavailable {
                    message: "count producer dropped before completion".to_string(),
                }
                .into())),
            },
        }
    }
}

///
/// TESTS
///
