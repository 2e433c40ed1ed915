// SPDX-License-Identifier: MPL-2.0
//! Ordered toast collection with subscriber fan-out.
//!
//! `ToastStore` is a cheap, cloneable handle over single-threaded shared
//! state. Every mutation finishes by notifying subscribers exactly once, and
//! no internal borrow is held while subscribers or action callbacks run, so
//! they may freely call back into the store.

use super::clock::{Clock, SystemClock};
use super::entity::{Callback, Toast, ToastId, ToastRequest, ToastSnapshot};
use super::scheduler::Scheduler;
use crate::config::DEFAULT_TOAST_DURATION_MS;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::rc::{Rc, Weak};
use std::time::{Duration, Instant};
use tracing::{debug, error, warn};

/// Upper bound on notification passes triggered by subscribers mutating the
/// store from inside a notification.
const MAX_NOTIFY_ROUNDS: usize = 16;

/// Runtime parameters of a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreSettings {
    /// Countdown given to every non-preserved toast.
    pub duration: Duration,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(DEFAULT_TOAST_DURATION_MS),
        }
    }
}

type Listener = Rc<RefCell<dyn FnMut()>>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

#[derive(Default)]
struct State {
    next_id: u64,
    toasts: Vec<Toast>,
    scheduler: Scheduler<ToastId>,
}

struct Shared {
    state: RefCell<State>,
    listeners: RefCell<Listeners>,
    dispatching: Cell<bool>,
    pending: Cell<bool>,
    clock: Rc<dyn Clock>,
    settings: StoreSettings,
}

/// Resets the dispatch flag even if a subscriber panics.
struct DispatchGuard<'a>(&'a Cell<bool>);

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

#[derive(Debug, Clone, Copy)]
enum Trigger {
    Action,
    Undo,
}

/// Handle returned by [`ToastStore::subscribe`].
#[must_use = "dropping the handle keeps the listener registered; call `unsubscribe` to remove it"]
pub struct ListenerHandle {
    id: u64,
    shared: Weak<Shared>,
}

impl ListenerHandle {
    /// Deregisters the listener. Safe to call from inside a notification.
    pub fn unsubscribe(self) {
        if let Some(shared) = self.shared.upgrade() {
            shared
                .listeners
                .borrow_mut()
                .entries
                .retain(|(id, _)| *id != self.id);
        }
    }
}

impl fmt::Debug for ListenerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerHandle").field("id", &self.id).finish()
    }
}

/// Ordered collection of toasts (oldest first).
#[derive(Clone)]
pub struct ToastStore {
    shared: Rc<Shared>,
}

impl Default for ToastStore {
    fn default() -> Self {
        Self::new(Rc::new(SystemClock), StoreSettings::default())
    }
}

impl fmt::Debug for ToastStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.shared.state.borrow();
        f.debug_struct("ToastStore")
            .field("toasts", &state.toasts)
            .field("pending_timers", &state.scheduler.len())
            .field("listeners", &self.shared.listeners.borrow().entries.len())
            .finish()
    }
}

impl ToastStore {
    pub fn new(clock: Rc<dyn Clock>, settings: StoreSettings) -> Self {
        Self {
            shared: Rc::new(Shared {
                state: RefCell::new(State::default()),
                listeners: RefCell::new(Listeners::default()),
                dispatching: Cell::new(false),
                pending: Cell::new(false),
                clock,
                settings,
            }),
        }
    }

    /// Store with default settings driven by `clock`.
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self::new(Rc::new(clock), StoreSettings::default())
    }

    #[must_use]
    pub fn settings(&self) -> StoreSettings {
        self.shared.settings
    }

    #[must_use]
    pub fn now(&self) -> Instant {
        self.shared.clock.now()
    }

    /// Creates a toast, arms its countdown and notifies subscribers.
    pub fn add(&self, request: ToastRequest) -> ToastId {
        let now = self.now();
        let id = {
            let mut state = self.shared.state.borrow_mut();
            let state = &mut *state;

            let id = ToastId::new(state.next_id);
            state.next_id += 1;

            if request.action().is_some() && !request.is_preserved() {
                // Action prompts still expire unless the caller preserves them.
                debug!(%id, "action toast armed with a dismissal timer");
            }

            let mut toast = Toast::new(id, request, self.shared.settings.duration, now);
            toast.arm(&mut state.scheduler, now);
            debug!(%id, kind = %toast.kind(), preserve = toast.is_preserved(), "toast added");
            state.toasts.push(toast);
            id
        };
        self.notify();
        id
    }

    /// Removes a toast and cancels its timer.
    ///
    /// Returns `false` without notifying when `id` is unknown.
    pub fn remove(&self, id: ToastId) -> bool {
        match self.take(id) {
            Some(toast) => {
                debug!(%id, "toast removed");
                drop(toast);
                self.notify();
                true
            }
            None => false,
        }
    }

    /// Removes every toast with a single notification.
    pub fn clear(&self) {
        let drained: Vec<Toast> = {
            let mut state = self.shared.state.borrow_mut();
            state.scheduler.clear();
            state.toasts.drain(..).collect()
        };
        if !drained.is_empty() {
            debug!(count = drained.len(), "toasts cleared");
            drop(drained);
            self.notify();
        }
    }

    /// Registers a listener invoked after every mutation.
    pub fn subscribe(&self, listener: impl FnMut() + 'static) -> ListenerHandle {
        let mut listeners = self.shared.listeners.borrow_mut();
        let id = listeners.next_id;
        listeners.next_id += 1;
        let listener: Listener = Rc::new(RefCell::new(listener));
        listeners.entries.push((id, listener));
        ListenerHandle {
            id,
            shared: Rc::downgrade(&self.shared),
        }
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.shared.listeners.borrow().entries.len()
    }

    /// Pauses one toast's countdown. No-op when it is not armed.
    pub fn pause(&self, id: ToastId) -> bool {
        let now = self.now();
        let mut state = self.shared.state.borrow_mut();
        let state = &mut *state;
        state
            .toasts
            .iter_mut()
            .find(|toast| toast.id() == id)
            .is_some_and(|toast| toast.pause(&mut state.scheduler, now))
    }

    /// Resumes one toast's countdown. No-op when it is already armed.
    pub fn resume(&self, id: ToastId) -> bool {
        let now = self.now();
        let mut state = self.shared.state.borrow_mut();
        let state = &mut *state;
        state
            .toasts
            .iter_mut()
            .find(|toast| toast.id() == id)
            .is_some_and(|toast| toast.resume(&mut state.scheduler, now))
    }

    /// Pauses every armed countdown. Returns how many were paused.
    pub fn pause_all(&self) -> usize {
        let now = self.now();
        let mut state = self.shared.state.borrow_mut();
        let state = &mut *state;
        let paused = state
            .toasts
            .iter_mut()
            .filter_map(|toast| toast.pause(&mut state.scheduler, now).then_some(()))
            .count();
        debug!(paused, "toast timers paused");
        paused
    }

    /// Resumes every paused countdown. Returns how many were resumed.
    pub fn resume_all(&self) -> usize {
        let now = self.now();
        let mut state = self.shared.state.borrow_mut();
        let state = &mut *state;
        let resumed = state
            .toasts
            .iter_mut()
            .filter_map(|toast| toast.resume(&mut state.scheduler, now).then_some(()))
            .count();
        debug!(resumed, "toast timers resumed");
        resumed
    }

    /// Fires every timer that is due, removing one toast and notifying once
    /// per expiry. Returns the number of toasts that expired.
    pub fn fire_due_timers(&self) -> usize {
        let now = self.now();
        let mut expired = 0;
        loop {
            let due = self.shared.state.borrow_mut().scheduler.pop_due(now);
            let Some((_, id)) = due else {
                break;
            };
            if let Some(toast) = self.take(id) {
                debug!(%id, "toast expired");
                drop(toast);
                expired += 1;
                self.notify();
            }
        }
        expired
    }

    /// Deadline of the next pending dismissal.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.shared.state.borrow().scheduler.next_deadline()
    }

    /// Records a toast's rendered height. Only the first measurement counts;
    /// recording it is a mutation and notifies subscribers.
    pub fn set_measured_height(&self, id: ToastId, height: f32) -> bool {
        let recorded = self
            .shared
            .state
            .borrow_mut()
            .toasts
            .iter_mut()
            .find(|toast| toast.id() == id)
            .is_some_and(|toast| toast.record_height(height));
        if recorded {
            self.notify();
        }
        recorded
    }

    /// Removes an action prompt and runs its action callback.
    pub fn trigger_action(&self, id: ToastId) -> bool {
        self.trigger(id, Trigger::Action)
    }

    /// Removes an action prompt and runs its undo callback.
    pub fn trigger_undo(&self, id: ToastId) -> bool {
        self.trigger(id, Trigger::Undo)
    }

    #[must_use]
    pub fn contains(&self, id: ToastId) -> bool {
        self.shared
            .state
            .borrow()
            .toasts
            .iter()
            .any(|toast| toast.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shared.state.borrow().toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shared.state.borrow().toasts.is_empty()
    }

    #[must_use]
    pub fn is_armed(&self, id: ToastId) -> bool {
        self.shared
            .state
            .borrow()
            .toasts
            .iter()
            .any(|toast| toast.id() == id && toast.is_armed())
    }

    /// Time left before `id` dismisses itself. `None` for unknown or
    /// preserved toasts.
    #[must_use]
    pub fn remaining(&self, id: ToastId) -> Option<Duration> {
        let now = self.now();
        self.shared
            .state
            .borrow()
            .toasts
            .iter()
            .find(|toast| toast.id() == id)
            .and_then(|toast| toast.countdown().map(|c| c.remaining_at(now)))
    }

    /// Ids in insertion order.
    #[must_use]
    pub fn ids(&self) -> Vec<ToastId> {
        self.shared
            .state
            .borrow()
            .toasts
            .iter()
            .map(Toast::id)
            .collect()
    }

    /// Owned copies of every toast, oldest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<ToastSnapshot> {
        let now = self.now();
        self.shared
            .state
            .borrow()
            .toasts
            .iter()
            .map(|toast| toast.snapshot(now))
            .collect()
    }

    fn take(&self, id: ToastId) -> Option<Toast> {
        let mut state = self.shared.state.borrow_mut();
        let state = &mut *state;
        let index = state.toasts.iter().position(|toast| toast.id() == id)?;
        let mut toast = state.toasts.remove(index);
        toast.cancel_timer(&mut state.scheduler);
        Some(toast)
    }

    fn trigger(&self, id: ToastId, trigger: Trigger) -> bool {
        let Some(mut toast) = self.take(id) else {
            return false;
        };
        let (on_action, on_undo) = toast.take_callbacks();
        drop(toast);
        debug!(%id, ?trigger, "toast triggered");
        self.notify();

        let callback = match trigger {
            Trigger::Action => on_action,
            Trigger::Undo => on_undo,
        };
        if let Some(callback) = callback {
            run_isolated(id, &callback);
        }
        true
    }

    fn notify(&self) {
        let shared = &self.shared;
        if shared.dispatching.replace(true) {
            // Nested mutation: the running dispatch will do one more pass.
            shared.pending.set(true);
            return;
        }
        let _guard = DispatchGuard(&shared.dispatching);

        let mut rounds = 0;
        loop {
            shared.pending.set(false);
            let listeners: Vec<Listener> = shared
                .listeners
                .borrow()
                .entries
                .iter()
                .map(|(_, listener)| Rc::clone(listener))
                .collect();

            for listener in listeners {
                if let Ok(mut listener) = listener.try_borrow_mut() {
                    (&mut *listener)();
                }
            }

            rounds += 1;
            if !shared.pending.get() {
                break;
            }
            if rounds >= MAX_NOTIFY_ROUNDS {
                warn!(rounds, "subscribers keep mutating the toast store, dropping further passes");
                shared.pending.set(false);
                break;
            }
        }
    }
}

fn run_isolated(id: ToastId, callback: &Callback) {
    if panic::catch_unwind(AssertUnwindSafe(|| callback())).is_err() {
        error!(%id, "toast callback panicked");
    }
}
