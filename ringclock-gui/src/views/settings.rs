//! Settings view
//!
//! Clock list, gradient stops and the apply action.

use crate::message::{Message, PanelMessage};
use crate::state::AppState;
use crate::theme::{colors, font_size, radius, spacing};
use crate::views::card_style;
use crate::widgets::ColorBar;

use iced::widget::{
    button, column, container, horizontal_space, pick_list, row, scrollable, text, text_input,
    Canvas, Column,
};
use iced::{Alignment, Element, Length, Theme};
use ringclock::domain::TimeUnit;
use ringclock::services::{PanelRow, StopSlot};

/// Render the settings view
pub fn view_settings(state: &AppState) -> Element<'_, Message> {
    let content = column![
        view_clocks(state),
        view_colors(state),
        view_actions(state),
        view_keyboard_shortcuts(),
    ]
    .spacing(spacing::LG)
    .padding(spacing::LG)
    .width(Length::Fill);

    scrollable(content).height(Length::Fill).into()
}

/// Clock list with add button
fn view_clocks(state: &AppState) -> Element<'_, Message> {
    let store = state.face.store();

    let title = text("Clocks")
        .size(font_size::LG)
        .color(colors::TEXT_PRIMARY);

    let count = text(format!("{}/{}", store.len(), store.capacity()))
        .size(font_size::SM)
        .color(colors::TEXT_MUTED);

    let add_btn = button(text("Add clock").size(font_size::BASE))
        .on_press_maybe(state.face.can_add().then_some(Message::AddClock))
        .padding([spacing::XS, spacing::MD])
        .style(if state.face.can_add() {
            primary_button_style
        } else {
            disabled_button_style
        });

    let header = row![title, horizontal_space(), count, add_btn]
        .spacing(spacing::MD)
        .align_y(Alignment::Center);

    let rows: Vec<Element<'_, Message>> = state
        .face
        .rows()
        .iter()
        .map(|r| view_clock_row(state, r))
        .collect();

    let list: Element<'_, Message> = if rows.is_empty() {
        text("No clocks yet")
            .size(font_size::BASE)
            .color(colors::TEXT_MUTED)
            .into()
    } else {
        Column::with_children(rows).spacing(spacing::SM).into()
    };

    container(column![header, list].spacing(spacing::MD))
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(card_style)
        .into()
}

/// One clock: title, period input, unit picker, remove button
fn view_clock_row<'a>(state: &AppState, clock: &PanelRow) -> Element<'a, Message> {
    let id = clock.id;

    let title = text(clock.title.clone())
        .size(font_size::BASE)
        .color(colors::TEXT_SECONDARY)
        .width(Length::Fixed(72.0));

    let period = text_input(
        &format!("{}-{}", clock.min, clock.max),
        &state.period_text(clock),
    )
    .on_input(move |s| Message::Panel(PanelMessage::PeriodInput(id, s)))
    .on_submit(Message::Panel(PanelMessage::PeriodSubmitted(id)))
    .padding(spacing::XS)
    .size(font_size::BASE)
    .width(Length::Fixed(64.0));

    let unit = pick_list(TimeUnit::ALL, Some(clock.unit), move |u| {
        Message::Panel(PanelMessage::UnitSelected(id, u))
    })
    .padding(spacing::XS)
    .text_size(font_size::BASE);

    let remove_btn = button(text("Remove").size(font_size::SM))
        .on_press(Message::Panel(PanelMessage::Remove(id)))
        .padding([spacing::XS, spacing::SM])
        .style(danger_button_style);

    row![title, period, unit, horizontal_space(), remove_btn]
        .spacing(spacing::SM)
        .align_y(Alignment::Center)
        .into()
}

/// Gradient stop inputs and preview bar
fn view_colors(state: &AppState) -> Element<'_, Message> {
    let title = text("Colors")
        .size(font_size::LG)
        .color(colors::TEXT_PRIMARY);

    let inputs = column![
        view_color_input(state, StopSlot::Inner, "Inner", "#4d004b"),
        view_color_input(state, StopSlot::Middle, "Middle", "none"),
        view_color_input(state, StopSlot::Outer, "Outer", "#d1e1ff"),
    ]
    .spacing(spacing::SM);

    let has_middle = state.face.stops().middle.is_some();
    let clear_btn = button(text("Remove middle").size(font_size::SM))
        .on_press_maybe(has_middle.then_some(Message::ClearMiddle))
        .padding([spacing::XS, spacing::SM])
        .style(if has_middle {
            active_button_style
        } else {
            disabled_button_style
        });

    let bar: Element<'_, Message> = Canvas::new(ColorBar::new(*state.face.stops()))
        .width(Length::Fill)
        .height(Length::Fixed(30.0))
        .into();

    let hint = text("Press Enter to commit a color; rings pick it up on Apply")
        .size(font_size::XS)
        .color(colors::TEXT_MUTED);

    container(column![title, inputs, clear_btn, bar, hint].spacing(spacing::MD))
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(card_style)
        .into()
}

fn view_color_input<'a>(
    state: &AppState,
    slot: StopSlot,
    label: &'static str,
    placeholder: &str,
) -> Element<'a, Message> {
    let input = text_input(placeholder, state.color_drafts.get(slot))
        .on_input(move |s| Message::ColorInput(slot, s))
        .on_submit(Message::ColorSubmitted(slot))
        .padding(spacing::XS)
        .size(font_size::BASE)
        .width(Length::Fixed(110.0));

    row![
        text(label)
            .size(font_size::BASE)
            .color(colors::TEXT_SECONDARY)
            .width(Length::Fixed(72.0)),
        input,
    ]
    .spacing(spacing::SM)
    .align_y(Alignment::Center)
    .into()
}

/// Labels toggle and apply button
fn view_actions(state: &AppState) -> Element<'_, Message> {
    let labels_on = state.face.show_labels();
    let labels_btn = button(
        text(if labels_on { "Labels: on" } else { "Labels: off" }).size(font_size::BASE),
    )
    .on_press(Message::ToggleLabels)
    .padding([spacing::SM, spacing::MD])
    .style(if labels_on {
        active_button_style
    } else {
        inactive_button_style
    });

    let apply_btn = button(text("Apply").size(font_size::BASE))
        .on_press(Message::ApplySettings)
        .padding([spacing::SM, spacing::LG])
        .style(primary_button_style);

    row![labels_btn, horizontal_space(), apply_btn]
        .align_y(Alignment::Center)
        .width(Length::Fill)
        .into()
}

/// Keyboard shortcuts section
fn view_keyboard_shortcuts() -> Element<'static, Message> {
    let title = text("Keyboard Shortcuts")
        .size(font_size::LG)
        .color(colors::TEXT_PRIMARY);

    let shortcuts = column![
        view_shortcut_row("Ctrl+N", "Add clock"),
        view_shortcut_row("Ctrl+Enter", "Apply settings"),
        view_shortcut_row("Ctrl+L", "Toggle labels"),
        view_shortcut_row("Esc", "Dismiss notification"),
    ]
    .spacing(spacing::XS);

    container(column![title, shortcuts].spacing(spacing::MD))
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(card_style)
        .into()
}

fn view_shortcut_row(shortcut: &'static str, description: &'static str) -> Element<'static, Message> {
    row![
        container(
            text(shortcut)
                .size(font_size::SM)
                .color(colors::ACCENT_CYAN)
        )
        .padding([spacing::XS, spacing::SM])
        .style(|_theme| container::Style {
            background: Some(colors::BG_ELEVATED.into()),
            border: iced::Border {
                color: colors::BG_SURFACE,
                width: 1.0,
                radius: 4.0.into(),
            },
            ..Default::default()
        }),
        horizontal_space().width(Length::Fixed(spacing::MD as f32)),
        text(description)
            .size(font_size::BASE)
            .color(colors::TEXT_SECONDARY),
    ]
    .align_y(Alignment::Center)
    .into()
}

fn primary_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let bg = match status {
        button::Status::Hovered => colors::ACCENT_GREEN,
        _ => colors::ACCENT_CYAN,
    };
    button::Style {
        background: Some(bg.into()),
        text_color: colors::BG_BASE,
        border: iced::Border {
            color: bg,
            width: 0.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

fn active_button_style(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: Some(colors::BG_ELEVATED.into()),
        text_color: colors::ACCENT_CYAN,
        border: iced::Border {
            color: colors::ACCENT_CYAN,
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

fn inactive_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let border = match status {
        button::Status::Hovered => colors::TEXT_SECONDARY,
        _ => colors::BG_OVERLAY,
    };
    button::Style {
        background: Some(colors::BG_ELEVATED.into()),
        text_color: colors::TEXT_SECONDARY,
        border: iced::Border {
            color: border,
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

fn danger_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let (bg, fg) = match status {
        button::Status::Hovered => (colors::ACCENT_RED, colors::BG_BASE),
        _ => (colors::BG_ELEVATED, colors::ACCENT_RED),
    };
    button::Style {
        background: Some(bg.into()),
        text_color: fg,
        border: iced::Border {
            color: colors::ACCENT_RED,
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

fn disabled_button_style(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: Some(colors::BG_ELEVATED.into()),
        text_color: colors::TEXT_MUTED,
        border: iced::Border {
            color: colors::BG_OVERLAY,
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}
