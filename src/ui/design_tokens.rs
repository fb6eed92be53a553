// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the page's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base and brand colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

Section heights live in [`crate::page::metrics`] because the page layout
depends on them.

## Examples

```
use iced_folio::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let card_bg = Color {
    a: opacity::CARD,
    ..palette::GRAY_800
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.067, 0.094, 0.153); // #111827
    pub const GRAY_800: Color = Color::from_rgb(0.122, 0.161, 0.216); // #1F2937
    pub const GRAY_700: Color = Color::from_rgb(0.216, 0.255, 0.318); // #374151
    pub const GRAY_400: Color = Color::from_rgb(0.612, 0.639, 0.686); // #9CA3AF
    pub const GRAY_300: Color = Color::from_rgb(0.820, 0.835, 0.859); // #D1D5DB
    pub const GRAY_100: Color = Color::from_rgb(0.953, 0.957, 0.965); // #F3F4F6
    pub const GRAY_50: Color = Color::from_rgb(0.976, 0.980, 0.984); // #F9FAFB

    // Brand colors
    pub const BLUE_400: Color = Color::from_rgb(0.376, 0.647, 0.980); // #60A5FA
    pub const BLUE_500: Color = Color::from_rgb(0.231, 0.510, 0.965); // #3B82F6
    pub const BLUE_600: Color = Color::from_rgb(0.145, 0.388, 0.922); // #2563EB
    pub const PURPLE_500: Color = Color::from_rgb(0.659, 0.333, 0.969); // #A855F7

    // Contact channels
    pub const LINKEDIN: Color = Color::from_rgb(0.0, 0.467, 0.710); // #0077B5
    pub const WHATSAPP: Color = Color::from_rgb(0.145, 0.827, 0.400); // #25D366
    pub const RED_500: Color = Color::from_rgb(0.937, 0.267, 0.267); // #EF4444
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const TINT: f32 = 0.1;
    pub const BAND: f32 = 0.3;
    pub const CARD: f32 = 0.5;
    pub const HOVER: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    /// Flag button artwork in the language toggle.
    pub const FLAG_WIDTH: f32 = 32.0;
    pub const FLAG_HEIGHT: f32 = 22.0;

    /// Horizontal padding inside call-to-action buttons.
    pub const BUTTON_PADDING_X: f32 = 24.0;
    /// Vertical padding inside call-to-action buttons.
    pub const BUTTON_PADDING_Y: f32 = 12.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font sizes for the page hierarchy.

    /// Owner name in the hero banner (wide windows).
    pub const DISPLAY_LG: f32 = 72.0;

    /// Owner name in the hero banner (narrow windows).
    pub const DISPLAY_MD: f32 = 48.0;

    /// Hero subtitle.
    pub const LEAD: f32 = 24.0;

    /// Section headings.
    pub const HEADING: f32 = 36.0;

    /// Technology card titles.
    pub const CARD_TITLE: f32 = 20.0;

    /// Long-form body text.
    pub const BODY_LG: f32 = 18.0;

    /// Standard body text.
    pub const BODY: f32 = 16.0;

    /// Secondary lines such as link targets.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const XL: f32 = 16.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::XL > spacing::LG);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::CARD > 0.0 && opacity::CARD < 1.0);

    // Typography validation
    assert!(typography::DISPLAY_LG > typography::DISPLAY_MD);
    assert!(typography::DISPLAY_MD > typography::HEADING);
    assert!(typography::HEADING > typography::LEAD);
    assert!(typography::LEAD > typography::CARD_TITLE);
    assert!(typography::CARD_TITLE > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);
};
