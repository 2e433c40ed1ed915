// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Colors, spacing and sizes shared by the toast cards and the demo shell.

## Organization

- **Palette**: Base and semantic colors
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border** / **Radius** / **Shadow**: Card chrome

## Examples

```
use toast_stack::ui::design_tokens::{palette, spacing};

let accent = palette::SUCCESS_500;
let padding = spacing::SM; // 12px
assert!(accent.g > accent.r && padding > 0.0);
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Width of a toast card at full scale.
    pub const TOAST_WIDTH: f32 = 320.0;

    /// Width reserved for the kind glyph.
    pub const GLYPH_WIDTH: f32 = 20.0;

    /// Width reserved for the dismiss button on plain toasts.
    pub const DISMISS_WIDTH: f32 = 64.0;

    /// Height of the button row of an action prompt.
    pub const ACTION_ROW_HEIGHT: f32 = 30.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Medium title - Demo heading
    pub const TITLE_MD: f32 = 20.0;

    /// Large body - Kind glyphs
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Toast text
    pub const BODY: f32 = 14.0;

    /// Caption - Toast buttons
    pub const CAPTION: f32 = 12.0;

    /// Line height multiplier applied by the text renderer.
    pub const LINE_HEIGHT: f32 = 1.3;
}

// ============================================================================
// Border / Radius / Shadow
// ============================================================================

pub mod border {
    /// Medium border - Toast accents
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const MD: f32 = 8.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(sizing::TOAST_WIDTH > sizing::GLYPH_WIDTH + sizing::DISMISS_WIDTH);

    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);
    assert!(typography::LINE_HEIGHT >= 1.0);
};
