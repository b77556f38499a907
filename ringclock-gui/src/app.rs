//! Main application structure
//!
//! Implements the Elm Architecture (TEA) pattern for ringclock-gui.

use crate::message::{KeyboardShortcut, Message, PanelMessage};
use crate::services::GuiConfig;
use crate::state::{AppState, Notification, NotificationLevel};
use crate::theme::{colors, font_size, ringclock_theme, spacing};
use crate::views;

use iced::keyboard::{self, key::Named, Key, Modifiers};
use iced::widget::{button, column, container, horizontal_space, row, text};
use iced::{Alignment, Element, Length, Subscription, Task, Theme};
use ringclock::services::{ClockFace, PanelEvent, PanelOutcome, StopSlot};
use std::time::{Duration, Instant};

/// Main application
pub struct RingClockGui {
    /// Application state
    state: AppState,

    /// GUI preferences
    config: GuiConfig,
}

impl RingClockGui {
    /// Create a new application instance and start the render loop
    pub fn new(face: ClockFace, config: GuiConfig) -> (Self, Task<Message>) {
        let mut state = AppState::new(face);
        let now = Instant::now();
        state.face.init(now);
        state.frame = state.face.tick(now);
        state.refresh_wall_clock();

        (Self { state, config }, Task::none())
    }

    /// Update application state based on a message
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::AddClock => {
                match self.state.face.add_clock() {
                    Some(id) => log::debug!("Added clock {}", id),
                    None => self.state.set_notification(Notification::warning(format!(
                        "At most {} clocks",
                        self.state.face.store().capacity()
                    ))),
                }
                Task::none()
            }

            Message::Panel(panel_msg) => self.handle_panel(panel_msg),

            Message::ColorInput(slot, raw) => {
                // Inner and outer preview in the color bar straight away;
                // the optional middle stop waits for a commit
                if slot != StopSlot::Middle && self.state.face.set_stop(slot, &raw).is_ok() {
                    log::debug!("Gradient stop {:?} set to {}", slot, raw);
                }
                self.state.color_drafts.set(slot, raw);
                Task::none()
            }

            Message::ColorSubmitted(slot) => {
                self.commit_color_draft(slot);
                Task::none()
            }

            Message::ClearMiddle => {
                self.state.face.clear_middle();
                self.state.reset_color_draft(StopSlot::Middle);
                Task::none()
            }

            Message::ApplySettings => {
                // Inputs left uncommitted are taken as they read now
                let mut accepted = self.commit_period_drafts();
                accepted &= self.commit_color_draft(StopSlot::Middle);

                let now = Instant::now();
                let generation = self.state.face.apply_settings(now);
                self.state.sync_color_drafts();
                self.state.frame = self.state.face.tick(now);
                log::info!("Settings applied, render loop generation {}", generation);
                if accepted {
                    self.state
                        .set_notification(Notification::success("Settings applied"));
                }
                Task::none()
            }

            Message::ToggleLabels => {
                let show = !self.state.face.show_labels();
                self.state.face.set_show_labels(show);
                Task::none()
            }

            Message::Frame(now) => {
                self.state.frame = self.state.face.tick(now);
                self.state.refresh_wall_clock();

                if let Some(ref notif) = self.state.notification {
                    if notif.should_dismiss() {
                        self.state.clear_notification();
                    }
                }
                Task::none()
            }

            Message::KeyPressed(shortcut) => self.update(shortcut.to_message()),

            Message::DismissNotification => {
                self.state.clear_notification();
                Task::none()
            }
        }
    }

    /// Route a settings list message into the clock face
    fn handle_panel(&mut self, message: PanelMessage) -> Task<Message> {
        let event = match message {
            PanelMessage::PeriodInput(id, raw) => {
                self.state.period_drafts.insert(id, raw);
                return Task::none();
            }
            PanelMessage::PeriodSubmitted(id) => {
                let Some(raw) = self.state.period_drafts.remove(&id) else {
                    return Task::none();
                };
                PanelEvent::PeriodEdited { id, raw }
            }
            PanelMessage::UnitSelected(id, unit) => PanelEvent::UnitChanged { id, unit },
            PanelMessage::Remove(id) => PanelEvent::Removed { id },
        };

        self.apply_panel_event(event);
        Task::none()
    }

    /// Apply one panel event, reporting rejected input
    ///
    /// Returns `false` if the event was rejected.
    fn apply_panel_event(&mut self, event: PanelEvent) -> bool {
        match self.state.face.handle_panel(event) {
            Ok(PanelOutcome::Removed { id }) => {
                log::debug!("Removed clock {}", id);
                self.state.prune_drafts();
            }
            Ok(PanelOutcome::Updated { id, resorted }) => {
                log::debug!("Updated clock {} (resorted: {})", id, resorted);
            }
            Ok(PanelOutcome::Ignored) => {}
            Err(e) => {
                log::warn!("Rejected period input: {}", e);
                self.state.set_notification(Notification::error(e.to_string()));
                return false;
            }
        }
        true
    }

    /// Commit every pending period input, in store order
    fn commit_period_drafts(&mut self) -> bool {
        let mut accepted = true;
        for id in self.state.face.store().ids() {
            if let Some(raw) = self.state.period_drafts.remove(&id) {
                accepted &= self.apply_panel_event(PanelEvent::PeriodEdited { id, raw });
            }
        }
        self.state.period_drafts.clear();
        accepted
    }

    /// Commit a color input to the edited gradient
    ///
    /// An empty middle input removes the middle stop. Rejected text is
    /// reported and the input reset to the current stop.
    fn commit_color_draft(&mut self, slot: StopSlot) -> bool {
        let raw = self.state.color_drafts.get(slot).to_string();
        if slot == StopSlot::Middle && raw.trim().is_empty() {
            self.state.face.clear_middle();
            self.state.reset_color_draft(slot);
            return true;
        }
        match self.state.face.set_stop(slot, &raw) {
            Ok(_) => {
                self.state.reset_color_draft(slot);
                true
            }
            Err(e) => {
                log::warn!("Rejected color input {:?}: {}", raw, e);
                self.state.set_notification(Notification::error(e.to_string()));
                self.state.reset_color_draft(slot);
                false
            }
        }
    }

    /// Render the application
    pub fn view(&self) -> Element<'_, Message> {
        let face = container(views::view_face(&self.state, &self.config.display))
            .width(Length::FillPortion(3))
            .height(Length::Fill)
            .padding(spacing::MD);

        let settings = container(views::view_settings(&self.state))
            .width(Length::FillPortion(2))
            .height(Length::Fill);

        let main_layout = row![face, settings].height(Length::Fill);

        let with_notification = if let Some(ref notif) = self.state.notification {
            column![main_layout, self.view_notification(notif)]
        } else {
            column![main_layout]
        };

        container(with_notification)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(colors::BG_BASE.into()),
                ..Default::default()
            })
            .into()
    }

    /// Render the notification toast
    fn view_notification<'a>(&'a self, notif: &'a Notification) -> Element<'a, Message> {
        let color = match notif.level {
            NotificationLevel::Success => colors::ACCENT_GREEN,
            NotificationLevel::Warning => colors::ACCENT_ORANGE,
            NotificationLevel::Error => colors::ACCENT_RED,
        };

        let dismiss_btn = button(text("x").size(font_size::SM))
            .on_press(Message::DismissNotification)
            .padding(spacing::XS)
            .style(move |_theme: &Theme, status| {
                let text_col = match status {
                    button::Status::Hovered => color,
                    _ => colors::TEXT_SECONDARY,
                };
                button::Style {
                    background: None,
                    text_color: text_col,
                    ..Default::default()
                }
            });

        let content = row![
            text(&notif.message)
                .size(font_size::BASE)
                .color(colors::TEXT_PRIMARY),
            horizontal_space(),
            dismiss_btn,
        ]
        .align_y(Alignment::Center)
        .spacing(spacing::SM);

        container(content)
            .padding(spacing::MD)
            .width(Length::Fill)
            .style(move |_theme| container::Style {
                background: Some(colors::BG_SURFACE.into()),
                border: iced::Border {
                    color: colors::with_alpha(color, 0.6),
                    width: 1.5,
                    radius: 12.0.into(),
                },
                ..Default::default()
            })
            .into()
    }

    /// Get theme
    pub fn theme(&self) -> Theme {
        ringclock_theme()
    }

    /// Get title
    pub fn title(&self) -> String {
        String::from("ringclock")
    }

    /// Set up subscriptions
    ///
    /// Frames only flow while the render loop runs, from a single timer.
    pub fn subscription(&self) -> Subscription<Message> {
        let keys = keyboard::on_key_press(handle_keyboard_shortcut);

        if !self.state.face.render_loop().is_running() {
            return keys;
        }

        let interval = Duration::from_millis(self.config.display.frame_interval_ms());
        Subscription::batch([iced::time::every(interval).map(Message::Frame), keys])
    }
}

/// Handle keyboard shortcuts
fn handle_keyboard_shortcut(key: Key, modifiers: Modifiers) -> Option<Message> {
    if modifiers.control() {
        match &key {
            Key::Character(c) => match c.as_str() {
                "n" | "N" => return Some(Message::KeyPressed(KeyboardShortcut::AddClock)),
                "l" | "L" => return Some(Message::KeyPressed(KeyboardShortcut::ToggleLabels)),
                _ => {}
            },
            Key::Named(Named::Enter) => {
                return Some(Message::KeyPressed(KeyboardShortcut::Apply));
            }
            _ => {}
        }
    }

    if let Key::Named(Named::Escape) = key {
        return Some(Message::KeyPressed(KeyboardShortcut::Dismiss));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use ringclock::domain::{ClockPeriod, TimeUnit};
    use ringclock::services::{ClockStore, RenderLoop};

    fn app_with(lengths: &[i64]) -> RingClockGui {
        let mut store = ClockStore::new();
        for &len in lengths {
            store.add(ClockPeriod::clamped(len), TimeUnit::Seconds);
        }
        let face = ClockFace::new(store, Default::default(), RenderLoop::default());
        RingClockGui::new(face, GuiConfig::default()).0
    }

    fn ids(app: &RingClockGui) -> Vec<u32> {
        app.state.face.store().ids().iter().map(|id| id.value()).collect()
    }

    #[test]
    fn test_new_starts_loop_with_frame() {
        let app = app_with(&[5, 5, 5]);
        assert!(app.state.face.render_loop().is_running());
        assert_eq!(app.state.frame.as_ref().map(|f| f.rings.len()), Some(3));
    }

    #[test]
    fn test_add_until_full_warns() {
        let mut app = app_with(&[]);
        for _ in 0..5 {
            let _ = app.update(Message::AddClock);
        }
        assert!(app.state.notification.is_none());

        let _ = app.update(Message::AddClock);
        assert_eq!(app.state.face.store().len(), 5);
        assert!(matches!(
            app.state.notification.as_ref().map(|n| n.level),
            Some(NotificationLevel::Warning)
        ));
    }

    #[test]
    fn test_period_submit_resorts() {
        let mut app = app_with(&[5, 31]);
        let second = app.state.face.store().ids()[1];

        let _ = app.update(Message::Panel(PanelMessage::PeriodInput(second, "60".into())));
        assert_eq!(ids(&app), vec![0, 1]);

        let _ = app.update(Message::Panel(PanelMessage::PeriodSubmitted(second)));
        assert_eq!(ids(&app), vec![1, 0]);
        assert_eq!(app.state.face.store().get(second).map(|c| c.length.get()), Some(60));
        assert!(app.state.period_drafts.is_empty());
    }

    #[test]
    fn test_bad_period_shows_error() {
        let mut app = app_with(&[5]);
        let id = app.state.face.store().ids()[0];

        let _ = app.update(Message::Panel(PanelMessage::PeriodInput(id, "abc".into())));
        let _ = app.update(Message::Panel(PanelMessage::PeriodSubmitted(id)));

        assert_eq!(app.state.face.store().get(id).map(|c| c.length.get()), Some(5));
        assert!(matches!(
            app.state.notification.as_ref().map(|n| n.level),
            Some(NotificationLevel::Error)
        ));
    }

    #[test]
    fn test_color_preview_then_apply() {
        let mut app = app_with(&[5]);
        let before = app.state.frame.as_ref().map(|f| f.rings[0].fill);

        let _ = app.update(Message::ColorInput(StopSlot::Inner, "#ff0000".into()));
        assert_eq!(app.state.face.stops().inner.to_string(), "#ff0000");
        let _ = app.update(Message::Frame(Instant::now()));
        assert_eq!(app.state.frame.as_ref().map(|f| f.rings[0].fill), before);

        let _ = app.update(Message::ApplySettings);
        let fill = app.state.frame.as_ref().map(|f| f.rings[0].fill.to_string());
        assert_eq!(fill.as_deref(), Some("#ff0000"));
    }

    #[test]
    fn test_middle_stop_waits_for_commit() {
        let mut app = app_with(&[5]);
        let _ = app.update(Message::ColorInput(StopSlot::Middle, "#8".into()));
        let _ = app.update(Message::ColorInput(StopSlot::Middle, "#808".into()));
        assert_eq!(app.state.face.stops().len(), 2);
        assert_eq!(app.state.color_drafts.middle, "#808");

        let _ = app.update(Message::ColorSubmitted(StopSlot::Middle));
        assert_eq!(app.state.face.stops().len(), 3);
        assert_eq!(app.state.color_drafts.middle, "#880088");
    }

    #[test]
    fn test_empty_middle_submit_clears_stop() {
        let mut app = app_with(&[5]);
        let _ = app.update(Message::ColorInput(StopSlot::Middle, "#808080".into()));
        let _ = app.update(Message::ColorSubmitted(StopSlot::Middle));
        assert_eq!(app.state.face.stops().len(), 3);

        let _ = app.update(Message::ColorInput(StopSlot::Middle, String::new()));
        let _ = app.update(Message::ColorSubmitted(StopSlot::Middle));
        assert_eq!(app.state.face.stops().len(), 2);
        assert_eq!(app.state.color_drafts.middle, "");
    }

    #[test]
    fn test_apply_commits_pending_period() {
        let mut app = app_with(&[5, 31]);
        let first = app.state.face.store().ids()[0];

        let _ = app.update(Message::Panel(PanelMessage::PeriodInput(first, "60".into())));
        let _ = app.update(Message::ApplySettings);

        assert_eq!(app.state.face.store().get(first).map(|c| c.length.get()), Some(60));
        assert_eq!(ids(&app), vec![0, 1]);
        assert!(app.state.period_drafts.is_empty());
        assert!(matches!(
            app.state.notification.as_ref().map(|n| n.level),
            Some(NotificationLevel::Success)
        ));
    }

    #[test]
    fn test_apply_reports_rejected_pending_period() {
        let mut app = app_with(&[5, 31]);
        let [first, second] = [app.state.face.store().ids()[0], app.state.face.store().ids()[1]];

        let _ = app.update(Message::Panel(PanelMessage::PeriodInput(first, "soon".into())));
        let _ = app.update(Message::Panel(PanelMessage::PeriodInput(second, "2".into())));
        let _ = app.update(Message::ApplySettings);

        assert_eq!(app.state.face.store().get(first).map(|c| c.length.get()), Some(5));
        assert_eq!(app.state.face.store().get(second).map(|c| c.length.get()), Some(2));
        assert_eq!(ids(&app), vec![0, 1]);
        assert!(matches!(
            app.state.notification.as_ref().map(|n| n.level),
            Some(NotificationLevel::Error)
        ));
    }

    #[test]
    fn test_apply_commits_pending_middle_stop() {
        let mut app = app_with(&[5, 5]);
        let _ = app.update(Message::ColorInput(StopSlot::Middle, "#00ff00".into()));
        let _ = app.update(Message::ApplySettings);

        assert_eq!(app.state.face.applied_stops().len(), 3);
        assert_eq!(app.state.color_drafts.middle, "#00ff00");
    }

    #[test]
    fn test_apply_restarts_single_loop() {
        let mut app = app_with(&[5]);
        let before = app.state.face.render_loop().generation();
        let _ = app.update(Message::ApplySettings);
        let _ = app.update(Message::KeyPressed(KeyboardShortcut::Apply));
        assert_eq!(app.state.face.render_loop().generation(), before + 2);
        assert!(app.state.face.render_loop().is_running());
    }

    #[test]
    fn test_keyboard_mapping() {
        assert!(matches!(
            handle_keyboard_shortcut(Key::Character("n".into()), Modifiers::CTRL),
            Some(Message::KeyPressed(KeyboardShortcut::AddClock))
        ));
        assert!(matches!(
            handle_keyboard_shortcut(Key::Named(Named::Escape), Modifiers::empty()),
            Some(Message::KeyPressed(KeyboardShortcut::Dismiss))
        ));
        assert!(handle_keyboard_shortcut(Key::Character("n".into()), Modifiers::empty()).is_none());
    }
}
