// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the feed and its toasts.
//!
//! Colors, spacing, sizes and shadows live here so widgets never hardcode
//! numbers. Color tags carried by feed users resolve through [`tag_color`].

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.33);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.44);

    // Priority accents
    pub const PRIORITY_LOW: Color = Color::from_rgb(0.392, 0.588, 1.0);
    pub const PRIORITY_MEDIUM: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const PRIORITY_HIGH: Color = Color::from_rgb(0.898, 0.224, 0.208);

    // User color tags
    pub const ROSE: Color = Color::from_rgb(0.957, 0.247, 0.369);
    pub const SKY: Color = Color::from_rgb(0.055, 0.647, 0.914);
    pub const AMBER: Color = Color::from_rgb(0.961, 0.620, 0.043);
    pub const EMERALD: Color = Color::from_rgb(0.063, 0.725, 0.506);
    pub const VIOLET: Color = Color::from_rgb(0.545, 0.361, 0.965);
    pub const TEAL: Color = Color::from_rgb(0.078, 0.722, 0.651);
    pub const ORANGE: Color = Color::from_rgb(0.976, 0.451, 0.086);
    pub const INDIGO: Color = Color::from_rgb(0.388, 0.400, 0.945);
}

/// Resolves a user color tag, falling back to neutral gray.
#[must_use]
pub fn tag_color(tag: Option<&str>) -> Color {
    match tag {
        Some("rose") => palette::ROSE,
        Some("sky") => palette::SKY,
        Some("amber") => palette::AMBER,
        Some("emerald") => palette::EMERALD,
        Some("violet") => palette::VIOLET,
        Some("teal") => palette::TEAL,
        Some("orange") => palette::ORANGE,
        Some("indigo") => palette::INDIGO,
        _ => palette::GRAY_400,
    }
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    /// Toasts that started fading.
    pub const FADING: f32 = 0.35;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
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
    pub const AVATAR: f32 = 32.0;
    pub const TOAST_WIDTH: f32 = 340.0;
    pub const FEED_WIDTH: f32 = 520.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    pub const TITLE_MD: f32 = 20.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    /// Toast accent outline.
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const FULL: f32 = 9999.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

const _: () = {
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(opacity::FADING > 0.0 && opacity::FADING < opacity::OPAQUE);
    assert!(typography::BODY > typography::CAPTION);
    assert!(border::WIDTH_MD > border::WIDTH_SM);
    assert!(sizing::FEED_WIDTH > sizing::TOAST_WIDTH);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_resolve_to_distinct_colors() {
        let tags = [
            "rose", "sky", "amber", "emerald", "violet", "teal", "orange", "indigo",
        ];
        let colors: Vec<Color> = tags.iter().map(|t| tag_color(Some(t))).collect();
        for (i, a) in colors.iter().enumerate() {
            assert_ne!(*a, palette::GRAY_400, "{} should not fall back", tags[i]);
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn unknown_tag_falls_back_to_gray() {
        assert_eq!(tag_color(Some("plaid")), palette::GRAY_400);
        assert_eq!(tag_color(None), palette::GRAY_400);
    }
}
