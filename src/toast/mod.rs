// SPDX-License-Identifier: MPL-2.0
//! Toast engine: entities, their dismissal timers, the store and the stacking
//! layout.
//!
//! Nothing in this module depends on a rendering toolkit. The store is driven
//! by a [`Clock`] and polled with [`ToastStore::fire_due_timers`]; the layout
//! is a pure function over measured heights.
//!
//! # Components
//!
//! - [`clock`] - time sources (system and manual)
//! - [`scheduler`] - single-shot timer bookkeeping
//! - [`entity`] - `Toast`, its countdown and creation request
//! - [`store`] - ordered collection with subscriber fan-out
//! - [`layout`] - card pile placement
//!
//! # Usage
//!
//! ```
//! use std::time::Duration;
//! use toast_stack::toast::{ManualClock, ToastRequest, ToastStore};
//!
//! let clock = ManualClock::new();
//! let store = ToastStore::with_clock(clock.clone());
//!
//! let id = store.add(ToastRequest::success("Monitor saved"));
//! clock.advance(Duration::from_millis(3000));
//! store.fire_due_timers();
//! assert!(!store.contains(id));
//! ```

pub mod clock;
pub mod entity;
pub mod layout;
pub mod scheduler;
pub mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use entity::{Callback, Countdown, Toast, ToastId, ToastKind, ToastRequest, ToastSnapshot};
pub use layout::{CardInput, CardPlacement, LayoutParams, StackLayout};
pub use scheduler::{Scheduler, TimerHandle};
pub use store::{ListenerHandle, StoreSettings, ToastStore};
