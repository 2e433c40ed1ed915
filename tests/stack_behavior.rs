// SPDX-License-Identifier: MPL-2.0
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use toast_stack::config::ToastConfig;
use toast_stack::notify::{MessageOptions, Notifier};
use toast_stack::toast::{ManualClock, ToastSnapshot};
use toast_stack::ui::notifications::Measure;

const CARD_HEIGHT: f32 = 48.0;

fn measure() -> impl Measure {
    |_: &ToastSnapshot| CARD_HEIGHT
}

fn notifier() -> (ManualClock, Notifier) {
    let clock = ManualClock::new();
    let notifier = Notifier::with_clock(Rc::new(clock.clone()), &ToastConfig::default());
    (clock, notifier)
}

/// Runs frames until every card has finished its entrance.
fn settle(notifier: &Notifier) {
    let store = notifier.store();
    let surface = notifier.surface();
    for _ in 0..4 {
        if !surface.needs_frame(store) {
            break;
        }
        surface.on_frame(store, &measure());
    }
}

/// Advances the clock in small steps, firing timers like a host tick.
fn run_for(clock: &ManualClock, notifier: &Notifier, ms: u64) {
    for _ in 0..ms / 100 {
        clock.advance_ms(100);
        notifier.store().fire_due_timers();
    }
    notifier.surface().sync(notifier.store());
}

#[test]
fn success_toast_sits_at_baseline_then_expires() {
    let (clock, notifier) = notifier();
    let id = notifier.success("Saved");
    assert_eq!(id.value(), 0);
    settle(&notifier);

    let layout = notifier.surface().layout(notifier.store()).unwrap();
    let card = layout.get(id).unwrap();
    assert_eq!(card.offset, 0.0);
    assert_eq!(card.translate_y, 0.0);
    assert_eq!(card.scale, 1.0);

    run_for(&clock, &notifier, 2900);
    assert!(notifier.store().contains(id));
    run_for(&clock, &notifier, 100);
    assert!(notifier.store().is_empty());
}

#[test]
fn hovering_delays_removal_by_the_hover_time() {
    let (clock, notifier) = notifier();
    let id = notifier.success("Saved");
    settle(&notifier);
    let store = notifier.store();
    let surface = notifier.surface();

    run_for(&clock, &notifier, 500);
    surface.set_hovered(store, true);
    run_for(&clock, &notifier, 1000);
    surface.set_hovered(store, false);

    assert_eq!(store.remaining(id), Some(Duration::from_millis(2500)));
    run_for(&clock, &notifier, 2400);
    assert!(store.contains(id));
    run_for(&clock, &notifier, 100);
    assert!(!store.contains(id));
}

#[test]
fn fourth_toast_hides_the_oldest_until_one_leaves() {
    let (_, notifier) = notifier();
    let ids: Vec<_> = (0..4).map(|i| notifier.error(format!("down {i}"))).collect();
    settle(&notifier);
    let store = notifier.store();
    let surface = notifier.surface();

    let layout = surface.layout(store).unwrap();
    assert_eq!(layout.visible_count(), 3);
    let oldest = layout.get(ids[0]).unwrap();
    assert!(!oldest.visible && !oldest.interactive);
    assert_eq!(oldest.opacity, 0.0);
    assert!(layout.get(ids[3]).unwrap().visible);

    store.remove(ids[2]);
    let layout = surface.layout(store).unwrap();
    assert_eq!(layout.visible_count(), 3);
    let promoted = layout.get(ids[0]).unwrap();
    assert!(promoted.visible && promoted.interactive);
    assert_eq!(promoted.depth, 2);
}

#[test]
fn hover_pauses_every_timer_and_expands_the_stack() {
    let (clock, notifier) = notifier();
    for i in 0..5 {
        notifier.warning(format!("slow {i}"));
    }
    settle(&notifier);
    let store = notifier.store();
    let surface = notifier.surface();

    surface.set_hovered(store, true);
    assert!(store.ids().iter().all(|id| !store.is_armed(*id)));

    let layout = surface.layout(store).unwrap();
    assert!(layout.expanded);
    assert!(layout.cards.iter().all(|card| card.scale == 1.0));
    let second = layout.cards.iter().find(|card| card.depth == 2).unwrap();
    assert_eq!(second.offset, 2.0 * CARD_HEIGHT + surface.params().gap);

    run_for(&clock, &notifier, 60_000);
    assert_eq!(store.len(), 5);

    surface.set_hovered(store, false);
    assert!(store.ids().iter().all(|id| store.is_armed(*id)));
    run_for(&clock, &notifier, 3000);
    assert!(store.is_empty());
    assert!(!surface.is_hovered());
}

#[test]
fn preserved_toasts_stay_until_removed() {
    let (clock, notifier) = notifier();
    let kept = notifier.message(MessageOptions::new("Maintenance tonight").preserve(true));
    notifier.success("Saved");

    run_for(&clock, &notifier, 60_000);
    assert_eq!(notifier.store().ids(), vec![kept]);

    assert!(notifier.store().remove(kept));
    assert!(notifier.store().is_empty());
}

#[test]
fn ids_increase_across_removals() {
    let (_, notifier) = notifier();
    let mut last = None;
    for i in 0..20 {
        let id = notifier.message(format!("note {i}"));
        if i % 3 == 0 {
            notifier.store().remove(id);
        }
        if let Some(previous) = last {
            assert!(id > previous);
        }
        last = Some(id);
    }
}

#[test]
fn action_prompt_runs_callback_once_and_disappears() {
    let (_, notifier) = notifier();
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let id = notifier.message(
        MessageOptions::new("Monitor deleted")
            .action("Confirm")
            .on_action(move || counter.set(counter.get() + 1)),
    );

    assert!(notifier.store().trigger_action(id));
    assert!(!notifier.store().trigger_action(id));
    assert_eq!(calls.get(), 1);
    assert!(notifier.store().is_empty());
}

#[test]
fn action_prompt_without_preserve_still_expires() {
    let (clock, notifier) = notifier();
    let id = notifier.message(MessageOptions::new("Monitor deleted").action("Undo"));
    assert!(notifier.store().is_armed(id));

    run_for(&clock, &notifier, 3000);
    assert!(!notifier.store().contains(id));
}

#[test]
fn panicking_callback_does_not_block_removal() {
    let (_, notifier) = notifier();
    let id = notifier.message(
        MessageOptions::new("Monitor deleted")
            .action("Undo")
            .on_undo(|| panic!("callback failure")),
    );

    assert!(notifier.store().trigger_undo(id));
    assert!(notifier.store().is_empty());
    assert!(notifier.success("still working").value() > id.value());
}
