// SPDX-License-Identifier: MPL-2.0
//! Stacking layout for the toast pile.
//!
//! Pure math: given the ordered cards (oldest first), whether each one has
//! finished its entrance, and whether the pointer is over the stack, compute
//! where every card sits. Rendering code only applies the result.
//!
//! Depth counts back from the newest card (depth 0). Offsets grow upwards,
//! so a card's vertical translation is `-offset` once it is shown and
//! `+height` (fully below the stack) while it is still entering.

use super::entity::ToastId;
use crate::config::{
    DEFAULT_COLLAPSED_STEP, DEFAULT_FALLBACK_HEIGHT, DEFAULT_SCALE_STEP, DEFAULT_STACK_GAP,
    DEFAULT_VISIBLE_LIMIT,
};

/// Tunables of the stacking layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    /// Number of newest cards rendered opaque and interactive.
    pub visible_limit: usize,
    /// Space between cards when the stack is expanded.
    pub gap: f32,
    /// Fixed spacing between older cards when the stack is collapsed.
    pub collapsed_step: f32,
    /// Scale lost per depth step when collapsed.
    pub scale_step: f32,
    /// Height assumed for cards that have not been measured yet.
    pub fallback_height: f32,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            visible_limit: DEFAULT_VISIBLE_LIMIT,
            gap: DEFAULT_STACK_GAP,
            collapsed_step: DEFAULT_COLLAPSED_STEP,
            scale_step: DEFAULT_SCALE_STEP,
            fallback_height: DEFAULT_FALLBACK_HEIGHT,
        }
    }
}

impl LayoutParams {
    fn height_of(&self, card: &CardInput) -> f32 {
        card.measured_height.unwrap_or(self.fallback_height)
    }
}

/// Layout input for one card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardInput {
    pub id: ToastId,
    pub measured_height: Option<f32>,
    /// Whether the entrance has completed.
    pub shown: bool,
}

/// Computed placement of one card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPlacement {
    pub id: ToastId,
    /// 0 for the newest card.
    pub depth: usize,
    /// Height used for layout (measured or fallback).
    pub height: f32,
    /// Distance above the baseline once shown.
    pub offset: f32,
    /// Vertical translation to apply right now.
    pub translate_y: f32,
    pub scale: f32,
    pub opacity: f32,
    pub z_index: i32,
    pub visible: bool,
    pub interactive: bool,
    pub entering: bool,
}

/// Result of a layout pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StackLayout {
    /// Placements in insertion order (oldest first).
    pub cards: Vec<CardPlacement>,
    /// Sum of the heights of the visible cards.
    pub height: f32,
    /// Largest `offset + height` among visible cards.
    pub extent: f32,
    pub expanded: bool,
}

impl StackLayout {
    /// Number of opaque, interactive cards.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.cards.iter().filter(|card| card.visible).count()
    }

    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&CardPlacement> {
        self.cards.iter().find(|card| card.id == id)
    }

    /// Placements ordered back to front, ready to be layered.
    pub fn paint_order(&self) -> impl Iterator<Item = &CardPlacement> {
        let mut ordered: Vec<&CardPlacement> = self.cards.iter().collect();
        ordered.sort_by_key(|card| card.z_index);
        ordered.into_iter()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Computes the placement of every card.
///
/// `cards` must be in insertion order, oldest first.
#[must_use]
pub fn compute(cards: &[CardInput], expanded: bool, params: &LayoutParams) -> StackLayout {
    let Some(newest) = cards.last() else {
        return StackLayout {
            expanded,
            ..StackLayout::default()
        };
    };

    let newest_height = params.height_of(newest);
    let count = cards.len();
    let mut placements = Vec::with_capacity(count);

    // Walk from the newest card back, accumulating the offset contributed by
    // each intermediate card.
    let mut offset = 0.0_f32;
    for (depth, card) in cards.iter().rev().enumerate() {
        let height = params.height_of(card);
        if depth == 1 {
            offset = newest_height;
        } else if depth > 1 {
            let intermediate = &cards[count - depth];
            offset += if expanded {
                params.height_of(intermediate) + params.gap
            } else {
                params.collapsed_step
            };
        }

        let visible = depth < params.visible_limit;
        let scale = if expanded {
            1.0
        } else {
            (1.0 - params.scale_step * depth as f32).max(0.0)
        };
        let entering = !card.shown;

        placements.push(CardPlacement {
            id: card.id,
            depth,
            height,
            offset,
            translate_y: if entering { height } else { -offset },
            scale,
            opacity: if visible { 1.0 } else { 0.0 },
            z_index: -(depth as i32),
            visible,
            interactive: visible,
            entering,
        });
    }
    placements.reverse();

    let (height, extent) = placements
        .iter()
        .filter(|card| card.visible)
        .fold((0.0_f32, 0.0_f32), |(sum, extent), card| {
            (sum + card.height, extent.max(card.offset + card.height))
        });

    StackLayout {
        cards: placements,
        height,
        extent,
        expanded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(heights: &[Option<f32>]) -> Vec<CardInput> {
        heights
            .iter()
            .enumerate()
            .map(|(i, h)| CardInput {
                id: ToastId::new(i as u64),
                measured_height: *h,
                shown: true,
            })
            .collect()
    }

    fn params() -> LayoutParams {
        LayoutParams {
            visible_limit: 3,
            gap: 8.0,
            collapsed_step: 20.0,
            scale_step: 0.05,
            fallback_height: 64.0,
        }
    }

    #[test]
    fn empty_input_yields_empty_layout() {
        let layout = compute(&[], true, &params());
        assert!(layout.is_empty());
        assert_eq!(layout.height, 0.0);
        assert!(layout.expanded);
    }

    #[test]
    fn newest_card_sits_at_baseline_with_full_scale() {
        let layout = compute(&cards(&[Some(50.0), Some(70.0)]), false, &params());
        let newest = layout.cards.last().unwrap();

        assert_eq!(newest.depth, 0);
        assert_eq!(newest.offset, 0.0);
        assert_eq!(newest.translate_y, 0.0);
        assert_eq!(newest.scale, 1.0);
        assert_eq!(newest.z_index, 0);
    }

    #[test]
    fn collapsed_offsets_use_fixed_step() {
        let layout = compute(
            &cards(&[Some(90.0), Some(80.0), Some(70.0), Some(60.0)]),
            false,
            &params(),
        );
        let offsets: Vec<f32> = layout.cards.iter().map(|c| c.offset).collect();
        // newest height 60, then +20 per intermediate card
        assert_eq!(offsets, vec![100.0, 80.0, 60.0, 0.0]);
    }

    #[test]
    fn expanded_offsets_use_heights_and_gap() {
        let layout = compute(
            &cards(&[Some(90.0), Some(80.0), Some(70.0), Some(60.0)]),
            true,
            &params(),
        );
        let offsets: Vec<f32> = layout.cards.iter().map(|c| c.offset).collect();
        assert_eq!(offsets, vec![60.0 + 78.0 + 88.0, 60.0 + 78.0, 60.0, 0.0]);
    }

    #[test]
    fn unmeasured_cards_use_fallback_height() {
        let layout = compute(&cards(&[None, Some(40.0), None]), true, &params());
        assert_eq!(layout.cards[1].offset, 64.0);
        assert_eq!(layout.cards[0].offset, 64.0 + 40.0 + 8.0);
        assert_eq!(layout.height, 64.0 + 40.0 + 64.0);
    }

    #[test]
    fn scale_falls_off_only_when_collapsed() {
        let input = cards(&[Some(50.0), Some(50.0), Some(50.0)]);
        let collapsed = compute(&input, false, &params());
        let expanded = compute(&input, true, &params());

        let expected = [0.9, 0.95, 1.0];
        for (card, want) in collapsed.cards.iter().zip(expected) {
            assert!((card.scale - want).abs() < 1e-6, "depth {}", card.depth);
        }
        assert!(expanded.cards.iter().all(|c| c.scale == 1.0));
    }

    #[test]
    fn only_newest_three_are_visible() {
        let layout = compute(&cards(&[Some(50.0); 5]), false, &params());

        assert_eq!(layout.visible_count(), 3);
        assert!(!layout.cards[0].visible && !layout.cards[1].visible);
        assert_eq!(layout.cards[0].opacity, 0.0);
        assert!(!layout.cards[1].interactive);
        assert!(layout.cards[2..].iter().all(|c| c.visible && c.interactive));
        assert_eq!(layout.height, 150.0);
    }

    #[test]
    fn z_index_is_negative_depth() {
        let layout = compute(&cards(&[Some(50.0); 4]), false, &params());
        let z: Vec<i32> = layout.cards.iter().map(|c| c.z_index).collect();
        assert_eq!(z, vec![-3, -2, -1, 0]);

        let painted: Vec<usize> = layout.paint_order().map(|c| c.depth).collect();
        assert_eq!(painted, vec![3, 2, 1, 0]);
    }

    #[test]
    fn entering_card_is_translated_below_the_stack() {
        let mut input = cards(&[Some(50.0), Some(40.0)]);
        input[1].shown = false;
        input[0].shown = false;

        let layout = compute(&input, false, &params());
        assert!(layout.cards[1].entering);
        assert_eq!(layout.cards[1].translate_y, 40.0);
        // Offset is still computed; only the translation differs.
        assert_eq!(layout.cards[0].offset, 40.0);
        assert_eq!(layout.cards[0].translate_y, 50.0);
    }

    #[test]
    fn extent_covers_the_highest_visible_card() {
        let layout = compute(&cards(&[Some(30.0), Some(40.0), Some(50.0)]), true, &params());
        // top card: offset 50 + 40 + 8 = 98, height 30
        assert_eq!(layout.extent, 128.0);
        assert_eq!(layout.height, 120.0);
    }
}
