//! Timer scheduler
//!
//! Owns every pending timer of a mounted shell on a virtual millisecond
//! clock. Controllers keep the [`TimerId`] of the tick they scheduled and
//! cancel it explicitly when the state that produced it is replaced or the
//! controller is torn down. A cancelled id never fires.

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

new_key_type! {
    /// Handle to a scheduled timer
    pub struct TimerId;
}

/// A timer waiting for the clock to reach its due time
#[derive(Debug, Clone, Copy)]
struct PendingTimer {
    due_ms: u64,
    /// Scheduling order, breaks ties between timers due at the same instant
    seq: u64,
}

/// The timer scheduler driven by the shell's clock
#[derive(Debug, Default)]
pub struct TimerScheduler {
    timers: SlotMap<TimerId, PendingTimer>,
    now_ms: u64,
    next_seq: u64,
}

impl TimerScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Schedule a timer to fire `delay_ms` from now
    pub fn schedule(&mut self, delay_ms: u64) -> TimerId {
        let timer = PendingTimer {
            due_ms: self.now_ms.saturating_add(delay_ms),
            seq: self.next_seq,
        };
        self.next_seq += 1;
        let id = self.timers.insert(timer);
        tracing::trace!("timer {:?} scheduled for t={}ms", id, timer.due_ms);
        id
    }

    /// Cancel a pending timer. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let cancelled = self.timers.remove(id).is_some();
        if cancelled {
            tracing::trace!("timer {:?} cancelled", id);
        }
        cancelled
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.timers.contains_key(id)
    }

    /// Due time of a pending timer
    pub fn due_at(&self, id: TimerId) -> Option<u64> {
        self.timers.get(id).map(|t| t.due_ms)
    }

    /// Get the number of pending timers
    pub fn pending_count(&self) -> usize {
        self.timers.len()
    }

    /// Earliest due time among pending timers
    pub fn next_due_ms(&self) -> Option<u64> {
        self.timers.values().map(|t| t.due_ms).min()
    }

    /// Remove and return the earliest timer due at or before `until_ms`
    ///
    /// The clock moves to the fired timer's due time, so anything the caller
    /// schedules in response is measured from the moment the timer fired.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<TimerId> {
        let (id, timer) = self
            .timers
            .iter()
            .filter(|(_, t)| t.due_ms <= until_ms)
            .min_by_key(|(_, t)| (t.due_ms, t.seq))
            .map(|(id, t)| (id, *t))?;

        self.timers.remove(id);
        self.now_ms = self.now_ms.max(timer.due_ms);
        Some(id)
    }

    /// Move the clock to `until_ms` once every due timer has been drained
    pub fn finish_advance(&mut self, until_ms: u64) {
        self.now_ms = self.now_ms.max(until_ms);
    }

    /// Advance the clock by `ms`, firing due timers in order
    ///
    /// `on_fire` may schedule further timers; those fire within the same
    /// call if they fall due before the target time.
    pub fn advance<F>(&mut self, ms: u64, mut on_fire: F) -> SmallVec<[TimerId; 4]>
    where
        F: FnMut(&mut Self, TimerId),
    {
        let target = self.now_ms.saturating_add(ms);
        let mut fired = SmallVec::new();
        while let Some(id) = self.pop_due(target) {
            fired.push(id);
            on_fire(self, id);
        }
        self.finish_advance(target);
        fired
    }
}
