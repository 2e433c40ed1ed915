// SPDX-License-Identifier: MPL-2.0
//! Single-shot timer bookkeeping.
//!
//! The scheduler owns no thread and no runtime. It records deadlines and hands
//! due timers back one at a time when the host polls it, which keeps every
//! expiry an ordinary, serialized mutation of the store.

use std::collections::{BTreeMap, HashMap};
use std::time::Instant;

/// Opaque handle identifying one scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

/// Deadline-ordered set of pending single-shot timers.
///
/// Timers fire earliest deadline first; timers sharing a deadline fire in the
/// order they were scheduled.
#[derive(Debug)]
pub struct Scheduler<T> {
    next_handle: u64,
    queue: BTreeMap<(Instant, u64), T>,
    deadlines: HashMap<u64, Instant>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            next_handle: 0,
            queue: BTreeMap::new(),
            deadlines: HashMap::new(),
        }
    }
}

impl<T> Scheduler<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `target` to fire once `deadline` is reached.
    pub fn schedule(&mut self, deadline: Instant, target: T) -> TimerHandle {
        let seq = self.next_handle;
        self.next_handle += 1;
        self.queue.insert((deadline, seq), target);
        self.deadlines.insert(seq, deadline);
        TimerHandle(seq)
    }

    /// Cancels a pending timer.
    ///
    /// Returns `false` if the timer already fired or was cancelled before.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        match self.deadlines.remove(&handle.0) {
            Some(deadline) => self.queue.remove(&(deadline, handle.0)).is_some(),
            None => false,
        }
    }

    /// Returns whether `handle` is still waiting to fire.
    #[must_use]
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.deadlines.contains_key(&handle.0)
    }

    /// Deadline of the next timer to fire, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.queue.first_key_value().map(|((deadline, _), _)| *deadline)
    }

    /// Removes and returns the earliest timer whose deadline is at or before
    /// `now`. Call repeatedly to drain every due timer.
    pub fn pop_due(&mut self, now: Instant) -> Option<(TimerHandle, T)> {
        let (&(deadline, seq), _) = self.queue.first_key_value()?;
        if deadline > now {
            return None;
        }
        let target = self.queue.remove(&(deadline, seq))?;
        self.deadlines.remove(&seq);
        Some((TimerHandle(seq), target))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Drops every pending timer.
    pub fn clear(&mut self) {
        self.queue.clear();
        self.deadlines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn pop_due_respects_deadline_order() {
        let base = Instant::now();
        let mut scheduler = Scheduler::new();
        scheduler.schedule(base + Duration::from_millis(30), "late");
        scheduler.schedule(base + Duration::from_millis(10), "early");

        let now = base + Duration::from_millis(50);
        assert_eq!(scheduler.pop_due(now).map(|(_, t)| t), Some("early"));
        assert_eq!(scheduler.pop_due(now).map(|(_, t)| t), Some("late"));
        assert!(scheduler.pop_due(now).is_none());
    }

    #[test]
    fn equal_deadlines_fire_in_scheduling_order() {
        let deadline = Instant::now();
        let mut scheduler = Scheduler::new();
        scheduler.schedule(deadline, 1);
        scheduler.schedule(deadline, 2);
        scheduler.schedule(deadline, 3);

        let fired: Vec<_> = std::iter::from_fn(|| scheduler.pop_due(deadline))
            .map(|(_, t)| t)
            .collect();
        assert_eq!(fired, vec![1, 2, 3]);
    }

    #[test]
    fn timers_in_the_future_are_not_due() {
        let base = Instant::now();
        let mut scheduler = Scheduler::new();
        scheduler.schedule(base + Duration::from_secs(1), ());

        assert!(scheduler.pop_due(base).is_none());
        assert_eq!(scheduler.next_deadline(), Some(base + Duration::from_secs(1)));
    }

    #[test]
    fn cancel_is_idempotent() {
        let base = Instant::now();
        let mut scheduler = Scheduler::new();
        let handle = scheduler.schedule(base, ());

        assert!(scheduler.is_pending(handle));
        assert!(scheduler.cancel(handle));
        assert!(!scheduler.cancel(handle));
        assert!(!scheduler.is_pending(handle));
        assert!(scheduler.is_empty());
    }

    #[test]
    fn fired_timer_cannot_be_cancelled() {
        let base = Instant::now();
        let mut scheduler = Scheduler::new();
        let handle = scheduler.schedule(base, ());

        assert!(scheduler.pop_due(base).is_some());
        assert!(!scheduler.cancel(handle));
    }
}
