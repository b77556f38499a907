//! Clock face view
//!
//! Digital clock, the ring canvas and a status line.

use crate::message::Message;
use crate::services::DisplayPrefs;
use crate::state::AppState;
use crate::theme::{colors, font_size, spacing};
use crate::views::card_style;
use crate::widgets::RingFace;

use iced::widget::{container, horizontal_space, row, text, Canvas, Column};
use iced::{Alignment, Element, Length};
use ringclock::services::{ColorMode, TimeBase};

/// Render the clock face
pub fn view_face<'a>(state: &'a AppState, display: &DisplayPrefs) -> Element<'a, Message> {
    let rings = state
        .frame
        .as_ref()
        .map(|f| f.rings.as_slice())
        .unwrap_or_default();

    let face = RingFace::new(rings, state.face.show_labels(), display.show_tracks);
    let canvas: Element<'_, Message> = Canvas::new(face)
        .width(Length::Fill)
        .height(Length::Fill)
        .into();

    let mut content = Column::new().spacing(spacing::MD).align_x(Alignment::Center);

    if display.show_digital_clock {
        content = content.push(
            text(&state.wall_clock)
                .size(font_size::DISPLAY)
                .color(colors::TEXT_PRIMARY),
        );
    }

    content = content.push(canvas).push(view_status(state));

    container(content)
        .padding(spacing::LG)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(card_style)
        .into()
}

/// Loop state, time base and color mode
fn view_status(state: &AppState) -> Element<'_, Message> {
    let render = state.face.render_loop();

    let (running, color) = if render.is_running() {
        ("Running", colors::ACCENT_GREEN)
    } else {
        ("Stopped", colors::TEXT_MUTED)
    };

    let time_base = match render.time_base() {
        TimeBase::Wall => "wall time",
        TimeBase::Elapsed => "elapsed time",
    };
    let color_mode = match render.color_mode() {
        ColorMode::Index => "color by ring",
        ColorMode::Progress => "color by progress",
    };

    row![
        text(running).size(font_size::SM).color(color),
        horizontal_space(),
        text(format!("{} · {}", time_base, color_mode))
            .size(font_size::SM)
            .color(colors::TEXT_MUTED),
    ]
    .align_y(Alignment::Center)
    .width(Length::Fill)
    .into()
}
