//! Application views
//!
//! The clock face and the settings panel share one window.

pub mod face;
pub mod settings;

pub use face::view_face;
pub use settings::view_settings;

use crate::theme::{colors, radius};
use iced::widget::container;
use iced::Theme;

/// Panel background shared by both views
pub fn card_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(colors::BG_SURFACE.into()),
        border: iced::Border {
            color: colors::BG_ELEVATED,
            width: 1.0,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}
