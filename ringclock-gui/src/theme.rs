//! Custom dark theme and color definitions for ringclock-gui
//!
//! Dark glass surfaces so the gradient rings carry the color.

use iced::theme::{Custom, Palette};
use iced::Theme;
use std::sync::Arc;

/// Background, text and accent colors
pub mod colors {
    use iced::Color;
    use ringclock::domain::Rgb;

    // ═══════════════════════════════════════════════════════════════════════════
    // BACKGROUND LAYERS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Deepest background (#08080c)
    pub const BG_BASE: Color = Color::from_rgb(0.03, 0.03, 0.05);

    /// Card/panel background (#0f1018)
    pub const BG_SURFACE: Color = Color::from_rgb(0.06, 0.063, 0.094);

    /// Elevated elements (#181824)
    pub const BG_ELEVATED: Color = Color::from_rgb(0.094, 0.094, 0.14);

    /// Overlay/hover (#22223a)
    pub const BG_OVERLAY: Color = Color::from_rgb(0.133, 0.133, 0.227);

    /// Subtle luminous border
    pub const GLASS_BORDER: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.1);

    // ═══════════════════════════════════════════════════════════════════════════
    // TEXT COLORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Primary text (#f5f5ff)
    pub const TEXT_PRIMARY: Color = Color::from_rgb(0.96, 0.96, 1.0);

    /// Secondary text (#9999bb)
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.60, 0.60, 0.73);

    /// Muted/disabled text (#555577)
    pub const TEXT_MUTED: Color = Color::from_rgb(0.33, 0.33, 0.47);

    // ═══════════════════════════════════════════════════════════════════════════
    // ACCENTS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Primary accent (#00d4ff)
    pub const ACCENT_CYAN: Color = Color::from_rgb(0.0, 0.83, 1.0);

    /// Success (#00ffa3)
    pub const ACCENT_GREEN: Color = Color::from_rgb(0.0, 1.0, 0.64);

    /// Warning (#ffaa00)
    pub const ACCENT_ORANGE: Color = Color::from_rgb(1.0, 0.667, 0.0);

    /// Error (#ff2d55)
    pub const ACCENT_RED: Color = Color::from_rgb(1.0, 0.176, 0.333);

    /// Convert a domain color to an iced color
    pub fn to_color(rgb: Rgb) -> Color {
        let [r, g, b] = rgb.to_unit();
        Color::from_rgb(r, g, b)
    }

    /// Create a color with modified alpha
    pub fn with_alpha(color: Color, alpha: f32) -> Color {
        Color { a: alpha, ..color }
    }
}

/// Create the custom ringclock dark theme
pub fn ringclock_theme() -> Theme {
    Theme::Custom(Arc::new(Custom::new(
        "ringclock-dark".to_string(),
        Palette {
            background: colors::BG_BASE,
            text: colors::TEXT_PRIMARY,
            primary: colors::ACCENT_CYAN,
            success: colors::ACCENT_GREEN,
            danger: colors::ACCENT_RED,
        },
    )))
}

/// Spacing constants
pub mod spacing {
    /// Extra small spacing (4px)
    pub const XS: u16 = 4;
    /// Small spacing (8px)
    pub const SM: u16 = 8;
    /// Medium spacing (16px)
    pub const MD: u16 = 16;
    /// Large spacing (24px)
    pub const LG: u16 = 24;
}

/// Font sizes
pub mod font_size {
    /// Extra small (10px) - Labels
    pub const XS: u16 = 10;
    /// Small (12px) - Captions
    pub const SM: u16 = 12;
    /// Base (14px) - Body text
    pub const BASE: u16 = 14;
    /// Large (16px) - Emphasis
    pub const LG: u16 = 16;
    /// Display (36px) - Digital clock
    pub const DISPLAY: u16 = 36;
}

/// Border radius constants
pub mod radius {
    /// Medium radius (8px)
    pub const MD: f32 = 8.0;
    /// Large radius (12px)
    pub const LG: f32 = 12.0;
}
