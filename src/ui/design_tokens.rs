// SPDX-License-Identifier: MPL-2.0
//! Design tokens centralisés suivant le Design Tokens W3C standard.
//!
//! - **Palette**: Base colors
//! - **Opacity**: Standardized opacity levels
//! - **Spacing**: Spacing scale (8px grid)
//! - **Sizing**: Component sizes
//! - **Typography**: Font size scale
//! - **Border**: Border width scale
//! - **Radius**: Border radii
//! - **Shadow**: Shadow definitions

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Brand colors (blue scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0); // Medium light blue
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9); // Primary blue
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8); // Medium dark blue

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_PRESSED: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
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
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const INPUT_HEIGHT: f32 = 40.0;

    // Component widths
    pub const FORM_WIDTH: f32 = 360.0;
    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Medium title - App name, prominent labels
    pub const TITLE_MD: f32 = 20.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Small body - Hints, secondary labels
    pub const BODY_SM: f32 = 13.0;

    /// Caption - Inline errors, small info
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Subtle separators, input fields
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Emphasis borders, toast accents
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
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
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);

    // Typography validation
    assert!(typography::TITLE_MD > typography::BODY);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
