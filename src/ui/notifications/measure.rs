// SPDX-License-Identifier: MPL-2.0
//! Card height measurement.
//!
//! Iced lays widgets out after `view` returns, so the surface cannot read a
//! card's size back. Instead it asks a [`Measure`] implementation once per
//! card, on the first frame the card is rendered.

use crate::toast::ToastSnapshot;
use crate::ui::design_tokens::{sizing, spacing, typography};

/// Computes the rendered height of a toast card.
pub trait Measure {
    fn measure(&self, toast: &ToastSnapshot) -> f32;
}

impl<F> Measure for F
where
    F: Fn(&ToastSnapshot) -> f32,
{
    fn measure(&self, toast: &ToastSnapshot) -> f32 {
        self(toast)
    }
}

/// Estimates card height from the text length and the card chrome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    pub card_width: f32,
    pub padding: f32,
    pub font_size: f32,
    /// Average glyph advance as a fraction of the font size.
    pub char_width_ratio: f32,
    pub line_height: f32,
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self {
            card_width: sizing::TOAST_WIDTH,
            padding: spacing::SM,
            font_size: typography::BODY,
            char_width_ratio: 0.55,
            line_height: typography::LINE_HEIGHT,
        }
    }
}

impl TextMetrics {
    fn text_width(&self, has_action: bool) -> f32 {
        let chrome = 2.0 * self.padding + sizing::GLYPH_WIDTH + spacing::XS;
        let controls = if has_action {
            0.0
        } else {
            sizing::DISMISS_WIDTH + spacing::XS
        };
        (self.card_width - chrome - controls).max(1.0)
    }

    fn line_count(&self, text: &str, has_action: bool) -> usize {
        let per_line = (self.text_width(has_action) / (self.font_size * self.char_width_ratio))
            .floor()
            .max(1.0) as usize;
        text.lines()
            .map(|line| line.chars().count().div_ceil(per_line).max(1))
            .sum::<usize>()
            .max(1)
    }
}

impl Measure for TextMetrics {
    fn measure(&self, toast: &ToastSnapshot) -> f32 {
        let has_action = toast.action.is_some();
        let lines = self.line_count(&toast.text, has_action) as f32;
        let mut height = 2.0 * self.padding + lines * self.font_size * self.line_height;
        if has_action {
            height += spacing::XS + sizing::ACTION_ROW_HEIGHT;
        }
        height
    }
}
