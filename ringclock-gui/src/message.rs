//! Application message definitions
//!
//! Hierarchical message structure following The Elm Architecture.

use ringclock::domain::{ClockId, TimeUnit};
use ringclock::services::StopSlot;
use std::time::Instant;

/// Top-level application messages
#[derive(Debug, Clone)]
pub enum Message {
    // === Clocks ===
    /// Add a 5-second clock
    AddClock,

    /// Settings list messages
    Panel(PanelMessage),

    // === Gradient ===
    /// Color text edited
    ColorInput(StopSlot, String),

    /// Color text committed
    ColorSubmitted(StopSlot),

    /// Drop the middle gradient stop
    ClearMiddle,

    // === Actions ===
    /// Resort, push colors to the rings and restart the loop
    ApplySettings,

    /// Show or hide remaining-time labels
    ToggleLabels,

    // === Rendering ===
    /// Frame tick from the render subscription
    Frame(Instant),

    /// Keyboard shortcut pressed
    KeyPressed(KeyboardShortcut),

    /// Dismiss error/notification
    DismissNotification,
}

/// Settings list messages, one row per clock
#[derive(Debug, Clone)]
pub enum PanelMessage {
    /// Period text edited
    PeriodInput(ClockId, String),

    /// Period text committed
    PeriodSubmitted(ClockId),

    /// Unit picked
    UnitSelected(ClockId, TimeUnit),

    /// Remove button pressed
    Remove(ClockId),
}

/// Keyboard shortcuts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardShortcut {
    /// Add a clock (Ctrl+N)
    AddClock,
    /// Apply settings (Ctrl+Enter)
    Apply,
    /// Toggle labels (Ctrl+L)
    ToggleLabels,
    /// Dismiss notification (Escape)
    Dismiss,
}

impl KeyboardShortcut {
    /// Message this shortcut triggers
    pub fn to_message(self) -> Message {
        match self {
            KeyboardShortcut::AddClock => Message::AddClock,
            KeyboardShortcut::Apply => Message::ApplySettings,
            KeyboardShortcut::ToggleLabels => Message::ToggleLabels,
            KeyboardShortcut::Dismiss => Message::DismissNotification,
        }
    }
}
