//! `CallQueue` — sparse per-tick traffic queue.
//!
//! Most ticks nobody calls a lift.  The queue keys calls by tick so the
//! simulation loop only touches ticks that actually have something to apply.

use std::collections::BTreeMap;

use lift_core::Tick;

use crate::{CallKind, TrafficCall};

/// Maps simulation ticks to the calls that happen during them.
///
/// Calls for the same tick keep their insertion order.
#[derive(Default, Debug)]
pub struct CallQueue {
    inner: BTreeMap<Tick, Vec<CallKind>>,
    /// Cached total call count for O(1) `len()`.
    total: usize,
}

impl CallQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a queue from an unordered list of calls.
    pub fn from_calls<I: IntoIterator<Item = TrafficCall>>(calls: I) -> Self {
        let mut queue = Self::new();
        for call in calls {
            queue.push(call.tick, call.kind);
        }
        queue
    }

    pub fn push(&mut self, tick: Tick, kind: CallKind) {
        self.inner.entry(tick).or_default().push(kind);
        self.total += 1;
    }

    /// Remove and return every call scheduled for exactly `tick`.
    ///
    /// Returns `None` when nothing is queued for that tick.
    pub fn drain_tick(&mut self, tick: Tick) -> Option<Vec<CallKind>> {
        let calls = self.inner.remove(&tick)?;
        self.total -= calls.len();
        Some(calls)
    }

    /// The earliest tick with at least one queued call.
    pub fn next_tick(&self) -> Option<Tick> {
        self.inner.keys().next().copied()
    }

    /// Total number of queued calls across all ticks.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of distinct ticks that have at least one queued call.
    pub fn tick_count(&self) -> usize {
        self.inner.len()
    }
}

impl Extend<TrafficCall> for CallQueue {
    fn extend<I: IntoIterator<Item = TrafficCall>>(&mut self, calls: I) {
        for call in calls {
            self.push(call.tick, call.kind);
        }
    }
}
