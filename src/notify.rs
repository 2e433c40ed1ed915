// SPDX-License-Identifier: MPL-2.0
//! Notification entry points.
//!
//! A [`Notifier`] bundles a store with the surface that displays it. Every
//! call mounts the surface first, so a toast can never be added to a stack
//! nobody renders.
//!
//! The free functions forward to a per-thread default notifier, created on
//! first use. Applications that want configured settings install their own
//! with [`set_default_notifier`] before the first toast.
//!
//! ```
//! use toast_stack::notify::{self, MessageOptions};
//!
//! notify::success("Monitor saved");
//! let id = notify::message(
//!     MessageOptions::new("Monitor deleted")
//!         .action("Undo")
//!         .on_undo(|| println!("restored")),
//! );
//!
//! let notifier = notify::default_notifier();
//! assert!(notifier.surface().is_mounted());
//! assert!(notifier.store().contains(id));
//! ```

use crate::config::{Anchor, ToastConfig};
use crate::toast::{Clock, LayoutParams, SystemClock, ToastId, ToastKind, ToastRequest, ToastStore};
use crate::ui::notifications::Surface;
use std::cell::RefCell;
use std::rc::Rc;

/// Options of a general purpose message.
#[derive(Debug, Default)]
pub struct MessageOptions {
    request: ToastRequest,
}

impl MessageOptions {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            request: ToastRequest::message(text),
        }
    }

    #[must_use]
    pub fn preserve(mut self, preserve: bool) -> Self {
        self.request = self.request.preserve(preserve);
        self
    }

    /// Label of the action button.
    #[must_use]
    pub fn action(mut self, label: impl Into<String>) -> Self {
        self.request = self.request.with_action(label);
        self
    }

    #[must_use]
    pub fn on_action(mut self, callback: impl Fn() + 'static) -> Self {
        self.request = self.request.on_action(callback);
        self
    }

    #[must_use]
    pub fn on_undo(mut self, callback: impl Fn() + 'static) -> Self {
        self.request = self.request.on_undo(callback);
        self
    }
}

impl From<MessageOptions> for ToastRequest {
    fn from(options: MessageOptions) -> Self {
        options.request
    }
}

impl From<&str> for MessageOptions {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for MessageOptions {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// Store, surface and anchor corner. Clones share all three.
#[derive(Debug, Clone, Default)]
pub struct Notifier {
    store: ToastStore,
    surface: Surface,
    anchor: Anchor,
}

impl Notifier {
    #[must_use]
    pub fn new(store: ToastStore, surface: Surface, anchor: Anchor) -> Self {
        Self {
            store,
            surface,
            anchor,
        }
    }

    /// Builds a notifier from the `[toasts]` settings.
    #[must_use]
    pub fn from_config(config: &ToastConfig) -> Self {
        Self::with_clock(Rc::new(SystemClock), config)
    }

    #[must_use]
    pub fn with_clock(clock: Rc<dyn Clock>, config: &ToastConfig) -> Self {
        Self::new(
            ToastStore::new(clock, config.store_settings()),
            Surface::new(config.layout_params()),
            config.anchor,
        )
    }

    #[must_use]
    pub fn store(&self) -> &ToastStore {
        &self.store
    }

    #[must_use]
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    #[must_use]
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    #[must_use]
    pub fn layout_params(&self) -> &LayoutParams {
        self.surface.params()
    }

    /// Mounts the surface if needed. Returns `true` on the mounting call.
    pub fn ensure_mounted(&self) -> bool {
        self.surface.mount(&self.store, self.anchor)
    }

    /// General purpose message, the only kind supporting actions.
    pub fn message(&self, options: impl Into<MessageOptions>) -> ToastId {
        let options: MessageOptions = options.into();
        self.push(options.into())
    }

    pub fn success(&self, text: impl Into<String>) -> ToastId {
        self.push(ToastRequest::new(ToastKind::Success, text))
    }

    pub fn warning(&self, text: impl Into<String>) -> ToastId {
        self.push(ToastRequest::new(ToastKind::Warning, text))
    }

    pub fn error(&self, text: impl Into<String>) -> ToastId {
        self.push(ToastRequest::new(ToastKind::Error, text))
    }

    fn push(&self, request: ToastRequest) -> ToastId {
        self.ensure_mounted();
        // Settle removals first, so an emptied stack drops its hover.
        self.surface.sync(&self.store);
        self.store.add(request)
    }
}

thread_local! {
    static DEFAULT_NOTIFIER: RefCell<Option<Notifier>> = const { RefCell::new(None) };
}

/// The notifier used by the free functions of this module.
pub fn default_notifier() -> Notifier {
    DEFAULT_NOTIFIER.with(|slot| slot.borrow_mut().get_or_insert_with(Notifier::default).clone())
}

/// Replaces the default notifier, returning the previous one.
///
/// Toasts already shown by the previous notifier stay in its store.
pub fn set_default_notifier(notifier: Notifier) -> Option<Notifier> {
    DEFAULT_NOTIFIER.with(|slot| slot.borrow_mut().replace(notifier))
}

pub fn message(options: impl Into<MessageOptions>) -> ToastId {
    default_notifier().message(options)
}

pub fn success(text: impl Into<String>) -> ToastId {
    default_notifier().success(text)
}

pub fn warning(text: impl Into<String>) -> ToastId {
    default_notifier().warning(text)
}

pub fn error(text: impl Into<String>) -> ToastId {
    default_notifier().error(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::ManualClock;
    use std::cell::Cell;

    fn notifier() -> (ManualClock, Notifier) {
        let clock = ManualClock::new();
        let notifier = Notifier::with_clock(Rc::new(clock.clone()), &ToastConfig::default());
        (clock, notifier)
    }

    #[test]
    fn first_toast_mounts_the_surface() {
        let (_, notifier) = notifier();
        assert!(!notifier.surface().is_mounted());

        notifier.success("saved");
        assert!(notifier.surface().is_mounted());
        assert_eq!(notifier.surface().anchor(), Some(Anchor::BottomRight));
        assert!(!notifier.ensure_mounted());
    }

    #[test]
    fn shortcuts_use_their_kind_and_timer() {
        let (_, notifier) = notifier();
        notifier.success("a");
        notifier.warning("b");
        notifier.error("c");

        let kinds: Vec<ToastKind> = notifier.store().snapshot().iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![ToastKind::Success, ToastKind::Warning, ToastKind::Error]
        );
        assert!(notifier.store().snapshot().iter().all(|t| t.armed && !t.preserve));
    }

    #[test]
    fn message_carries_options() {
        let (_, notifier) = notifier();
        let undone = Rc::new(Cell::new(false));
        let flag = Rc::clone(&undone);

        let id = notifier.message(
            MessageOptions::new("Deleted")
                .preserve(true)
                .action("Undo")
                .on_undo(move || flag.set(true)),
        );
        let toasts = notifier.store().snapshot();
        let toast = &toasts[0];
        assert_eq!(toast.kind, ToastKind::Message);
        assert_eq!(toast.action.as_deref(), Some("Undo"));
        assert!(toast.preserve);

        assert!(notifier.store().trigger_undo(id));
        assert!(undone.get());
        assert!(notifier.store().is_empty());
    }

    #[test]
    fn plain_text_converts_to_message() {
        let (clock, notifier) = notifier();
        notifier.message("hello");
        clock.advance_ms(3000);
        assert_eq!(notifier.store().fire_due_timers(), 1);
    }

    #[test]
    fn config_reaches_store_and_layout() {
        let config = ToastConfig {
            duration_ms: Some(5000),
            visible_limit: Some(2),
            anchor: Anchor::TopLeft,
            ..ToastConfig::default()
        };
        let notifier = Notifier::from_config(&config);
        assert_eq!(notifier.store().settings().duration.as_millis(), 5000);
        assert_eq!(notifier.layout_params().visible_limit, 2);
        assert_eq!(notifier.anchor(), Anchor::TopLeft);
    }

    #[test]
    fn new_toast_after_emptied_stack_is_not_held_by_stale_hover() {
        let (clock, notifier) = notifier();
        let first = notifier.success("one");
        assert!(notifier.surface().set_hovered(notifier.store(), true));
        assert!(notifier.store().remove(first));

        let second = notifier.success("two");
        assert!(!notifier.surface().is_hovered());
        assert!(notifier.store().is_armed(second));

        clock.advance_ms(3000);
        assert_eq!(notifier.store().fire_due_timers(), 1);
    }

    #[test]
    fn free_functions_share_the_default_notifier() {
        let (_, custom) = notifier();
        set_default_notifier(custom.clone());

        let first = success("one");
        let second = warning("two");
        assert!(second > first);
        assert_eq!(custom.store().len(), 2);
        assert!(custom.surface().is_mounted());

        error("three");
        message("four");
        assert_eq!(default_notifier().store().len(), 4);
    }
}
