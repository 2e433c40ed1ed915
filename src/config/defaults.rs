// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Timing**: Dismissal countdown and host tick interval
//! - **Stack**: Visible window and card spacing
//! - **Scale**: Depth-based shrinking of collapsed cards

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Default countdown before a toast dismisses itself (in milliseconds).
pub const DEFAULT_TOAST_DURATION_MS: u64 = 3000;

/// Minimum toast countdown (in milliseconds).
pub const MIN_TOAST_DURATION_MS: u64 = 500;

/// Maximum toast countdown (in milliseconds).
pub const MAX_TOAST_DURATION_MS: u64 = 60_000;

/// Default interval at which the host polls for due timers (in milliseconds).
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Minimum tick interval (in milliseconds).
pub const MIN_TICK_INTERVAL_MS: u64 = 10;

/// Maximum tick interval (in milliseconds).
pub const MAX_TICK_INTERVAL_MS: u64 = 1000;

// ==========================================================================
// Stack Defaults
// ==========================================================================

/// Number of newest toasts rendered opaque and interactive.
pub const DEFAULT_VISIBLE_LIMIT: usize = 3;

/// Minimum visible window.
pub const MIN_VISIBLE_LIMIT: usize = 1;

/// Maximum visible window.
pub const MAX_VISIBLE_LIMIT: usize = 10;

/// Space between cards while the stack is expanded (in pixels).
pub const DEFAULT_STACK_GAP: f32 = 8.0;

/// Spacing between older cards while the stack is collapsed (in pixels).
pub const DEFAULT_COLLAPSED_STEP: f32 = 20.0;

/// Height assumed for a card that has not been measured yet (in pixels).
pub const DEFAULT_FALLBACK_HEIGHT: f32 = 64.0;

/// Upper bound for any spacing value (in pixels).
pub const MAX_SPACING: f32 = 200.0;

// ==========================================================================
// Scale Defaults
// ==========================================================================

/// Scale lost per depth step while collapsed (5%).
pub const DEFAULT_SCALE_STEP: f32 = 0.05;

/// Maximum scale step.
pub const MAX_SCALE_STEP: f32 = 0.25;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_TOAST_DURATION_MS > 0);
    assert!(DEFAULT_TOAST_DURATION_MS >= MIN_TOAST_DURATION_MS);
    assert!(DEFAULT_TOAST_DURATION_MS <= MAX_TOAST_DURATION_MS);

    assert!(MIN_TICK_INTERVAL_MS > 0);
    assert!(DEFAULT_TICK_INTERVAL_MS >= MIN_TICK_INTERVAL_MS);
    assert!(DEFAULT_TICK_INTERVAL_MS <= MAX_TICK_INTERVAL_MS);

    assert!(MIN_VISIBLE_LIMIT > 0);
    assert!(DEFAULT_VISIBLE_LIMIT >= MIN_VISIBLE_LIMIT);
    assert!(DEFAULT_VISIBLE_LIMIT <= MAX_VISIBLE_LIMIT);

    assert!(DEFAULT_STACK_GAP >= 0.0 && DEFAULT_STACK_GAP <= MAX_SPACING);
    assert!(DEFAULT_COLLAPSED_STEP >= 0.0 && DEFAULT_COLLAPSED_STEP <= MAX_SPACING);
    assert!(DEFAULT_FALLBACK_HEIGHT > 0.0 && DEFAULT_FALLBACK_HEIGHT <= MAX_SPACING);

    assert!(DEFAULT_SCALE_STEP >= 0.0 && DEFAULT_SCALE_STEP <= MAX_SCALE_STEP);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults_are_valid() {
        assert_eq!(DEFAULT_TOAST_DURATION_MS, 3000);
        assert!(DEFAULT_TICK_INTERVAL_MS < DEFAULT_TOAST_DURATION_MS);
    }

    #[test]
    fn stack_defaults_are_valid() {
        assert_eq!(DEFAULT_VISIBLE_LIMIT, 3);
        assert_eq!(DEFAULT_COLLAPSED_STEP, 20.0);
        assert!(DEFAULT_FALLBACK_HEIGHT > DEFAULT_COLLAPSED_STEP);
    }

    #[test]
    fn scale_default_keeps_visible_cards_readable() {
        let smallest = 1.0 - DEFAULT_SCALE_STEP * (DEFAULT_VISIBLE_LIMIT - 1) as f32;
        assert!(smallest > 0.5);
    }
}
