//! Metrics sink boundary.
//!
//! Executor logic never touches metrics state directly; all
//! instrumentation flows through [`MetricsEvent`] and the process-local
//! sink.

use crate::traits::EntityKind;
use std::{cell::RefCell, marker::PhantomData};

thread_local! {
    static STATE: RefCell<MetricsState> = RefCell::new(MetricsState::default());
}

///
/// ExecKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExecKind {
    Load,
    Save,
    Delete,
    Count,
}

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug)]
pub enum MetricsEvent {
    ExecStart {
        kind: ExecKind,
        entity_path: &'static str,
    },
    ExecFinish {
        kind: ExecKind,
        entity_path: &'static str,
        rows: u64,
    },
    PartitionFanout {
        entity_path: &'static str,
    },
}

///
/// MetricsState
/// Saturating per-thread counters; snapshot-readable from tests.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MetricsState {
    pub load_calls: u64,
    pub save_calls: u64,
    pub delete_calls: u64,
    pub count_calls: u64,
    pub rows_returned: u64,
    pub fanouts: u64,
}

/// Record one event into the process-local state.
pub fn record(event: MetricsEvent) {
    STATE.with_borrow_mut(|state| match event {
        MetricsEvent::ExecStart { kind, .. } => {
            let slot = match kind {
                ExecKind::Load => &mut state.load_calls,
                ExecKind::Save => &mut state.save_calls,
                ExecKind::Delete => &mut state.delete_calls,
                ExecKind::Count => &mut state.count_calls,
            };
            *slot = slot.saturating_add(1);
        }
        MetricsEvent::ExecFinish { rows, .. } => {
            state.rows_returned = state.rows_returned.saturating_add(rows);
        }
        MetricsEvent::PartitionFanout { .. } => {
            state.fanouts = state.fanouts.saturating_add(1);
        }
    });
}

#[must_use]
pub fn snapshot() -> MetricsState {
    STATE.with_borrow(|state| *state)
}

pub fn reset() {
    STATE.with_borrow_mut(|state| *state = MetricsState::default());
}

///
/// Span
/// Records ExecStart on construction and ExecFinish on drop.
///

pub struct Span<E: EntityKind> {
    kind: ExecKind,
    rows: u64,
    _marker: PhantomData<E>,
}

impl<E: EntityKind> Span<E> {
    #[must_use]
    pub fn new(kind: ExecKind) -> Self {
        record(MetricsEvent::ExecStart {
            kind,
            entity_path: E::PATH,
        });

        Self {
            kind,
            rows: 0,
            _marker: PhantomData,
        }
    }

    pub fn set_rows(&mut self, rows: usize) {
        self.rows = u64::try_from(rows).unwrap_or(u64::MAX);
    }
}

impl<E: EntityKind> Drop for Span<E> {
    fn drop(&mut self) {
        record(MetricsEvent::ExecFinish {
            kind: self.kind,
            entity_path: E::PATH,
            rows: self.rows,
        });
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::Region;

    #[test]
    fn span_records_start_and_finish() {
        reset();

        {
            let mut span = Span::<Region>::new(ExecKind::Load);
            span.set_rows(3);
        }

        let state = snapshot();
        assert_eq!(state.load_calls, 1);
        assert_eq!(state.rows_returned, 3);
    }

    #[test]
    fn fanout_counter() {
        reset();
        record(MetricsEvent::PartitionFanout {
            entity_path: Region::PATH,
        });
        assert_eq!(snapshot().fanouts, 1);
    }
}
