// SPDX-License-Identifier: MPL-2.0
//! Toast entity and its dismissal countdown.
//!
//! A countdown is an explicit `remaining`/`started` pair plus an optional
//! scheduler handle. Pausing folds the elapsed time into `remaining`, resuming
//! schedules a fresh timer for whatever is left, so pause/resume cycles never
//! add or lose unpaused time.

use super::scheduler::{Scheduler, TimerHandle};
use std::fmt;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Callback attached to an action prompt. Return values are ignored.
pub type Callback = Rc<dyn Fn()>;

/// Unique, monotonically increasing toast identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    pub(crate) fn new(value: u64) -> Self {
        Self(value)
    }

    /// Raw numeric value (creation order, starting at 0).
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Kind of notification. Fixed at creation; only affects styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToastKind {
    /// General purpose message, the only kind that supports actions.
    #[default]
    Message,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    pub const ALL: [ToastKind; 4] = [
        ToastKind::Message,
        ToastKind::Success,
        ToastKind::Warning,
        ToastKind::Error,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ToastKind::Message => "message",
            ToastKind::Success => "success",
            ToastKind::Warning => "warning",
            ToastKind::Error => "error",
        }
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything needed to create a toast.
///
/// ```
/// use toast_stack::toast::{ToastKind, ToastRequest};
///
/// let request = ToastRequest::message("Monitor paused")
///     .with_action("Resume")
///     .on_action(|| println!("resumed"))
///     .on_undo(|| println!("undone"));
/// assert_eq!(request.kind(), ToastKind::Message);
/// assert_eq!(request.action(), Some("Resume"));
/// ```
#[derive(Clone, Default)]
pub struct ToastRequest {
    text: String,
    kind: ToastKind,
    preserve: bool,
    action: Option<String>,
    on_action: Option<Callback>,
    on_undo_action: Option<Callback>,
}

impl ToastRequest {
    pub fn new(kind: ToastKind, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind,
            ..Self::default()
        }
    }

    pub fn message(text: impl Into<String>) -> Self {
        Self::new(ToastKind::Message, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(ToastKind::Warning, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, text)
    }

    /// Keeps the toast until the user removes it.
    #[must_use]
    pub fn preserve(mut self, preserve: bool) -> Self {
        self.preserve = preserve;
        self
    }

    /// Turns the toast into an action prompt labelled `label`.
    #[must_use]
    pub fn with_action(mut self, label: impl Into<String>) -> Self {
        self.action = Some(label.into());
        self
    }

    #[must_use]
    pub fn on_action(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_action = Some(Rc::new(callback));
        self
    }

    #[must_use]
    pub fn on_undo(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_undo_action = Some(Rc::new(callback));
        self
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn kind(&self) -> ToastKind {
        self.kind
    }

    #[must_use]
    pub fn is_preserved(&self) -> bool {
        self.preserve
    }

    #[must_use]
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }
}

impl fmt::Debug for ToastRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastRequest")
            .field("text", &self.text)
            .field("kind", &self.kind)
            .field("preserve", &self.preserve)
            .field("action", &self.action)
            .field("on_action", &self.on_action.is_some())
            .field("on_undo_action", &self.on_undo_action.is_some())
            .finish()
    }
}

/// Time left before a toast dismisses itself.
#[derive(Debug, Clone)]
pub struct Countdown {
    remaining: Duration,
    started: Instant,
    timer: Option<TimerHandle>,
}

impl Countdown {
    fn new(remaining: Duration, now: Instant) -> Self {
        Self {
            remaining,
            started: now,
            timer: None,
        }
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.timer.is_some()
    }

    /// Time left as of `now`, accounting for a running timer.
    #[must_use]
    pub fn remaining_at(&self, now: Instant) -> Duration {
        if self.is_armed() {
            self.remaining
                .saturating_sub(now.saturating_duration_since(self.started))
        } else {
            self.remaining
        }
    }

    fn arm(&mut self, id: ToastId, scheduler: &mut Scheduler<ToastId>, now: Instant) {
        self.started = now;
        self.timer = Some(scheduler.schedule(now + self.remaining, id));
    }

    fn pause(&mut self, scheduler: &mut Scheduler<ToastId>, now: Instant) -> bool {
        let Some(handle) = self.timer.take() else {
            return false;
        };
        scheduler.cancel(handle);
        let elapsed = now.saturating_duration_since(self.started);
        self.remaining = self.remaining.saturating_sub(elapsed);
        true
    }

    fn disarm(&mut self, scheduler: &mut Scheduler<ToastId>) {
        if let Some(handle) = self.timer.take() {
            scheduler.cancel(handle);
        }
    }
}

/// One notification held by the store.
pub struct Toast {
    id: ToastId,
    text: String,
    kind: ToastKind,
    action: Option<String>,
    on_action: Option<Callback>,
    on_undo_action: Option<Callback>,
    /// `None` for preserved toasts: they never get a timer.
    countdown: Option<Countdown>,
    measured_height: Option<f32>,
}

impl Toast {
    pub(crate) fn new(id: ToastId, request: ToastRequest, duration: Duration, now: Instant) -> Self {
        let ToastRequest {
            text,
            kind,
            preserve,
            action,
            on_action,
            on_undo_action,
        } = request;

        Self {
            id,
            text,
            kind,
            action,
            on_action,
            on_undo_action,
            countdown: (!preserve).then(|| Countdown::new(duration, now)),
            measured_height: None,
        }
    }

    /// Starts the countdown. Preserved toasts are left untouched.
    pub fn arm(&mut self, scheduler: &mut Scheduler<ToastId>, now: Instant) {
        let id = self.id;
        if let Some(countdown) = self.countdown.as_mut() {
            countdown.disarm(scheduler);
            countdown.arm(id, scheduler, now);
        }
    }

    /// Stops the countdown, keeping the unelapsed time.
    ///
    /// Returns `false` (and does nothing) when no timer is armed.
    pub fn pause(&mut self, scheduler: &mut Scheduler<ToastId>, now: Instant) -> bool {
        self.countdown
            .as_mut()
            .is_some_and(|countdown| countdown.pause(scheduler, now))
    }

    /// Re-arms a paused countdown with whatever time is left.
    ///
    /// Returns `false` when a timer is already armed or the toast is preserved.
    pub fn resume(&mut self, scheduler: &mut Scheduler<ToastId>, now: Instant) -> bool {
        let id = self.id;
        match self.countdown.as_mut() {
            Some(countdown) if !countdown.is_armed() => {
                countdown.arm(id, scheduler, now);
                true
            }
            _ => false,
        }
    }

    pub(crate) fn cancel_timer(&mut self, scheduler: &mut Scheduler<ToastId>) {
        if let Some(countdown) = self.countdown.as_mut() {
            countdown.disarm(scheduler);
        }
    }

    /// Records the rendered height. Only the first finite measurement sticks.
    pub(crate) fn record_height(&mut self, height: f32) -> bool {
        if self.measured_height.is_some() || !height.is_finite() {
            return false;
        }
        self.measured_height = Some(height.max(0.0));
        true
    }

    pub(crate) fn take_callbacks(&mut self) -> (Option<Callback>, Option<Callback>) {
        (self.on_action.take(), self.on_undo_action.take())
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn kind(&self) -> ToastKind {
        self.kind
    }

    #[must_use]
    pub fn is_preserved(&self) -> bool {
        self.countdown.is_none()
    }

    #[must_use]
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.countdown.as_ref().is_some_and(Countdown::is_armed)
    }

    #[must_use]
    pub fn countdown(&self) -> Option<&Countdown> {
        self.countdown.as_ref()
    }

    #[must_use]
    pub fn measured_height(&self) -> Option<f32> {
        self.measured_height
    }

    /// Owned, read-only copy suitable for rendering.
    #[must_use]
    pub fn snapshot(&self, now: Instant) -> ToastSnapshot {
        ToastSnapshot {
            id: self.id,
            text: self.text.clone(),
            kind: self.kind,
            preserve: self.is_preserved(),
            action: self.action.clone(),
            measured_height: self.measured_height,
            remaining: self.countdown.as_ref().map(|c| c.remaining_at(now)),
            armed: self.is_armed(),
        }
    }
}

impl fmt::Debug for Toast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Toast")
            .field("id", &self.id)
            .field("text", &self.text)
            .field("kind", &self.kind)
            .field("action", &self.action)
            .field("countdown", &self.countdown)
            .field("measured_height", &self.measured_height)
            .finish_non_exhaustive()
    }
}

/// Point-in-time view of a toast.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastSnapshot {
    pub id: ToastId,
    pub text: String,
    pub kind: ToastKind,
    pub preserve: bool,
    pub action: Option<String>,
    pub measured_height: Option<f32>,
    /// Time left before auto-dismiss, `None` for preserved toasts.
    pub remaining: Option<Duration>,
    pub armed: bool,
}
