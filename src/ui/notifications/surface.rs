// SPDX-License-Identifier: MPL-2.0
//! Mount point of the toast stack.
//!
//! The surface owns everything the store does not: which cards have been
//! painted, which have finished their entrance, and whether the pointer is
//! over the stack. It listens to the store but never reads it from inside the
//! listener; the listener only bumps a revision counter and the bookkeeping is
//! reconciled on the next frame.

use super::measure::Measure;
use crate::config::Anchor;
use crate::toast::{layout, CardInput, LayoutParams, ListenerHandle, StackLayout, ToastId, ToastStore};
use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

/// Handle to the (possibly not yet mounted) toast layer.
///
/// Clones share the same layer.
#[derive(Clone, Default)]
pub struct Surface {
    params: LayoutParams,
    layer: Rc<RefCell<Option<Layer>>>,
}

struct Layer {
    anchor: Anchor,
    revision: Rc<Cell<u64>>,
    synced_revision: u64,
    rendered: HashSet<ToastId>,
    shown: HashSet<ToastId>,
    hovered: bool,
    listener: ListenerHandle,
}

impl Layer {
    fn retain(&mut self, live: &HashSet<ToastId>) {
        self.rendered.retain(|id| live.contains(id));
        self.shown.retain(|id| live.contains(id));
        if live.is_empty() {
            self.hovered = false;
        }
    }
}

impl fmt::Debug for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layer = self.layer.borrow();
        f.debug_struct("Surface")
            .field("params", &self.params)
            .field("mounted", &layer.is_some())
            .field("anchor", &layer.as_ref().map(|layer| layer.anchor))
            .field("hovered", &layer.as_ref().is_some_and(|layer| layer.hovered))
            .finish()
    }
}

impl Surface {
    #[must_use]
    pub fn new(params: LayoutParams) -> Self {
        Self {
            params,
            layer: Rc::default(),
        }
    }

    #[must_use]
    pub fn params(&self) -> &LayoutParams {
        &self.params
    }

    /// Creates the layer and subscribes it to `store`.
    ///
    /// Returns `false` if a layer already exists; the anchor of the first
    /// mount wins.
    pub fn mount(&self, store: &ToastStore, anchor: Anchor) -> bool {
        if self.layer.borrow().is_some() {
            return false;
        }

        let revision = Rc::new(Cell::new(0_u64));
        let counter = Rc::clone(&revision);
        let listener = store.subscribe(move || counter.set(counter.get().wrapping_add(1)));

        *self.layer.borrow_mut() = Some(Layer {
            anchor,
            revision,
            synced_revision: 0,
            rendered: HashSet::new(),
            shown: HashSet::new(),
            hovered: false,
            listener,
        });
        tracing::debug!(?anchor, "toast surface mounted");
        true
    }

    /// Drops the layer and its store subscription.
    pub fn unmount(&self) -> bool {
        let Some(layer) = self.layer.borrow_mut().take() else {
            return false;
        };
        layer.listener.unsubscribe();
        tracing::debug!("toast surface unmounted");
        true
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.layer.borrow().is_some()
    }

    #[must_use]
    pub fn anchor(&self) -> Option<Anchor> {
        self.layer.borrow().as_ref().map(|layer| layer.anchor)
    }

    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.layer.borrow().as_ref().is_some_and(|layer| layer.hovered)
    }

    /// Number of store notifications seen since mounting.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.layer
            .borrow()
            .as_ref()
            .map_or(0, |layer| layer.revision.get())
    }

    /// Drops bookkeeping for toasts no longer in `store`.
    pub fn sync(&self, store: &ToastStore) {
        let mut guard = self.layer.borrow_mut();
        let Some(layer) = guard.as_mut() else {
            return;
        };
        let revision = layer.revision.get();
        if revision == layer.synced_revision {
            return;
        }
        let live: HashSet<ToastId> = store.ids().into_iter().collect();
        layer.retain(&live);
        layer.synced_revision = revision;
    }

    /// Advances card entrances by one paint frame.
    ///
    /// Cards painted for the first time are measured and recorded as
    /// rendered; cards rendered on an earlier frame become shown. Returns
    /// whether anything changed.
    pub fn on_frame(&self, store: &ToastStore, measure: &dyn Measure) -> bool {
        self.sync(store);
        let toasts = store.snapshot();

        let mut changed = false;
        let mut unmeasured = Vec::new();
        {
            let mut guard = self.layer.borrow_mut();
            let Some(layer) = guard.as_mut() else {
                return false;
            };
            for toast in &toasts {
                // A card becomes shown on the frame after its first paint.
                let first_paint = layer.rendered.insert(toast.id);
                if first_paint || layer.shown.insert(toast.id) {
                    changed = true;
                }
                if toast.measured_height.is_none() {
                    unmeasured.push(toast);
                }
            }
        }

        // The layer borrow is released: set_measured_height notifies listeners.
        for toast in unmeasured {
            let height = measure.measure(toast);
            if store.set_measured_height(toast.id, height) {
                tracing::trace!(id = %toast.id, height, "toast measured");
                changed = true;
            }
        }
        changed
    }

    /// Records a pointer transition over the stack.
    ///
    /// Entering pauses every timer, leaving resumes them. Repeated calls with
    /// the same state are ignored.
    pub fn set_hovered(&self, store: &ToastStore, hovered: bool) -> bool {
        {
            let mut guard = self.layer.borrow_mut();
            let Some(layer) = guard.as_mut() else {
                return false;
            };
            if layer.hovered == hovered {
                return false;
            }
            layer.hovered = hovered;
        }

        let affected = if hovered {
            store.pause_all()
        } else {
            store.resume_all()
        };
        tracing::debug!(hovered, affected, "toast stack hover changed");
        true
    }

    /// Computes the current placement of every card.
    #[must_use]
    pub fn layout(&self, store: &ToastStore) -> Option<StackLayout> {
        let guard = self.layer.borrow();
        let layer = guard.as_ref()?;
        let cards: Vec<CardInput> = store
            .snapshot()
            .into_iter()
            .map(|toast| CardInput {
                id: toast.id,
                measured_height: toast.measured_height,
                shown: layer.shown.contains(&toast.id),
            })
            .collect();
        Some(layout::compute(&cards, layer.hovered, &self.params))
    }

    /// Whether another paint frame is needed to finish an entrance.
    #[must_use]
    pub fn needs_frame(&self, store: &ToastStore) -> bool {
        let guard = self.layer.borrow();
        let Some(layer) = guard.as_ref() else {
            return false;
        };
        store
            .snapshot()
            .iter()
            .any(|toast| toast.measured_height.is_none() || !layer.shown.contains(&toast.id))
    }
}
