//! Application state definitions
//!
//! Contains all state types for the ringclock-gui application.

use ringclock::domain::{ClockId, ColorStops};
use ringclock::services::{ClockFace, Frame, PanelRow, StopSlot};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Main application state
#[derive(Debug)]
pub struct AppState {
    /// Clocks, gradient and render loop
    pub face: ClockFace,

    /// Last computed frame
    pub frame: Option<Frame>,

    /// Period text being edited, per clock
    pub period_drafts: HashMap<ClockId, String>,

    /// Color text being edited
    pub color_drafts: ColorDrafts,

    /// Digital wall clock text
    pub wall_clock: String,

    /// Current notification/error message
    pub notification: Option<Notification>,
}

impl AppState {
    /// Create a new application state around a face
    pub fn new(face: ClockFace) -> Self {
        let color_drafts = ColorDrafts::from_stops(face.stops());
        Self {
            face,
            frame: None,
            period_drafts: HashMap::new(),
            color_drafts,
            wall_clock: String::new(),
            notification: None,
        }
    }

    /// Text shown in a row's period input
    pub fn period_text(&self, row: &PanelRow) -> String {
        self.period_drafts
            .get(&row.id)
            .cloned()
            .unwrap_or_else(|| row.length.to_string())
    }

    /// Forget drafts for clocks that no longer exist
    pub fn prune_drafts(&mut self) {
        let store = self.face.store();
        self.period_drafts.retain(|id, _| store.contains(*id));
    }

    /// Reset color inputs to the edited gradient
    pub fn sync_color_drafts(&mut self) {
        self.color_drafts = ColorDrafts::from_stops(self.face.stops());
    }

    /// Reset one color input, leaving the others as typed
    pub fn reset_color_draft(&mut self, slot: StopSlot) {
        let synced = ColorDrafts::from_stops(self.face.stops());
        self.color_drafts.set(slot, synced.get(slot).to_string());
    }

    /// Refresh the digital clock text
    pub fn refresh_wall_clock(&mut self) {
        self.wall_clock = chrono::Local::now().format("%H:%M:%S").to_string();
    }

    /// Set a notification
    pub fn set_notification(&mut self, notification: Notification) {
        self.notification = Some(notification);
    }

    /// Clear the current notification
    pub fn clear_notification(&mut self) {
        self.notification = None;
    }
}

/// Color input text per gradient stop
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorDrafts {
    pub inner: String,
    /// Empty while the gradient has two stops
    pub middle: String,
    pub outer: String,
}

impl ColorDrafts {
    /// Fill inputs from a gradient
    pub fn from_stops(stops: &ColorStops) -> Self {
        Self {
            inner: stops.inner.to_string(),
            middle: stops.middle.map(|c| c.to_string()).unwrap_or_default(),
            outer: stops.outer.to_string(),
        }
    }

    pub fn get(&self, slot: StopSlot) -> &str {
        match slot {
            StopSlot::Inner => &self.inner,
            StopSlot::Middle => &self.middle,
            StopSlot::Outer => &self.outer,
        }
    }

    pub fn set(&mut self, slot: StopSlot, text: String) {
        match slot {
            StopSlot::Inner => self.inner = text,
            StopSlot::Middle => self.middle = text,
            StopSlot::Outer => self.outer = text,
        }
    }
}

/// Notification message to display
#[derive(Debug, Clone)]
pub struct Notification {
    /// Message content
    pub message: String,

    /// Notification level
    pub level: NotificationLevel,

    /// When the notification was created
    pub created_at: Instant,

    /// Duration before auto-dismiss (None = manual dismiss)
    pub duration: Option<Duration>,
}

impl Notification {
    /// Create a success notification
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Success,
            created_at: Instant::now(),
            duration: Some(Duration::from_secs(2)),
        }
    }

    /// Create a warning notification
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Warning,
            created_at: Instant::now(),
            duration: Some(Duration::from_secs(4)),
        }
    }

    /// Create an error notification
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Error,
            created_at: Instant::now(),
            duration: None,
        }
    }

    /// Check if notification should be dismissed
    pub fn should_dismiss(&self) -> bool {
        match self.duration {
            Some(duration) => self.created_at.elapsed() >= duration,
            None => false,
        }
    }
}

/// Notification severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    /// Success message
    Success,
    /// Warning message
    Warning,
    /// Error message
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;
    use ringclock::domain::{ClockPeriod, Rgb, TimeUnit};

    #[test]
    fn test_color_drafts_from_stops() {
        let drafts = ColorDrafts::from_stops(&ColorStops::default());
        assert_eq!(drafts.get(StopSlot::Inner), "#4d004b");
        assert_eq!(drafts.get(StopSlot::Middle), "");
        assert_eq!(drafts.get(StopSlot::Outer), "#d1e1ff");

        let stops = ColorStops::with_middle(
            Rgb::new(0, 0, 0),
            Rgb::new(0x80, 0x80, 0x80),
            Rgb::new(0xff, 0xff, 0xff),
        );
        let mut drafts = ColorDrafts::from_stops(&stops);
        assert_eq!(drafts.middle, "#808080");
        drafts.set(StopSlot::Middle, "#123".to_string());
        assert_eq!(drafts.get(StopSlot::Middle), "#123");
    }

    #[test]
    fn test_reset_color_draft_keeps_other_inputs() {
        let mut state = AppState::new(ClockFace::default());
        state.color_drafts.set(StopSlot::Inner, "#zz".to_string());
        state.color_drafts.set(StopSlot::Middle, "#123".to_string());

        state.reset_color_draft(StopSlot::Inner);
        assert_eq!(state.color_drafts.inner, "#4d004b");
        assert_eq!(state.color_drafts.middle, "#123");
    }

    #[test]
    fn test_period_text_prefers_draft() {
        let mut face = ClockFace::default();
        let id = face
            .add_clock_with(ClockPeriod::clamped(12), TimeUnit::Seconds)
            .unwrap();
        let mut state = AppState::new(face);
        let row = state.face.rows().remove(0);

        assert_eq!(state.period_text(&row), "12");
        state.period_drafts.insert(id, "4".to_string());
        assert_eq!(state.period_text(&row), "4");
    }

    #[test]
    fn test_prune_drafts_after_remove() {
        let mut face = ClockFace::default();
        let id = face.add_clock().unwrap();
        let mut state = AppState::new(face);
        state.period_drafts.insert(id, "9".to_string());
        state.period_drafts.insert(ClockId::new(99), "9".to_string());

        state.prune_drafts();
        assert_eq!(state.period_drafts.len(), 1);
    }

    #[test]
    fn test_notification_dismiss() {
        let success = Notification::success("ok");
        assert!(!success.should_dismiss());

        let error = Notification::error("bad");
        assert_eq!(error.level, NotificationLevel::Error);
        assert!(error.duration.is_none());
        assert!(!error.should_dismiss());
    }

    #[test]
    fn test_wall_clock_format() {
        let mut state = AppState::new(ClockFace::default());
        state.refresh_wall_clock();
        assert_eq!(state.wall_clock.len(), 8);
        assert_eq!(state.wall_clock.matches(':').count(), 2);
    }
}
