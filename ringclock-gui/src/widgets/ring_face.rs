//! Ring face widget
//!
//! Concentric clock rings, innermost first, each filled clockwise from
//! 12 o'clock by the share of its cycle already elapsed.

use crate::message::Message;
use crate::theme::colors;

use iced::alignment::{Horizontal, Vertical};
use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke, Text};
use iced::{mouse, Color, Point, Radians, Rectangle, Renderer, Theme, Vector};
use ringclock::domain::geometry::{face_extent, point_at, BAND_WIDTH};
use ringclock::services::RingFrame;
use std::f32::consts::{FRAC_PI_2, TAU};

/// Space kept free around the outermost ring
const MARGIN: f32 = 16.0;

/// Clock face canvas
pub struct RingFace {
    rings: Vec<RingFrame>,
    show_labels: bool,
    show_tracks: bool,
}

impl RingFace {
    /// Create a face from the rings of one frame
    pub fn new(rings: &[RingFrame], show_labels: bool, show_tracks: bool) -> Self {
        Self {
            rings: rings.to_vec(),
            show_labels,
            show_tracks,
        }
    }
}

impl canvas::Program<Message> for RingFace {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = frame.center();
        let scale = layout_scale(bounds.width, bounds.height, self.rings.len());

        if self.rings.is_empty() {
            frame.fill_text(Text {
                content: "No clocks".to_string(),
                position: center,
                color: colors::TEXT_MUTED,
                size: 14.0.into(),
                horizontal_alignment: Horizontal::Center,
                vertical_alignment: Vertical::Center,
                ..Text::default()
            });
            return vec![frame.into_geometry()];
        }

        for ring in &self.rings {
            let color = colors::to_color(ring.fill);

            if self.show_tracks {
                let mid = (ring.radius + BAND_WIDTH / 2.0) * scale;
                frame.stroke(
                    &Path::circle(center, mid),
                    Stroke::default()
                        .with_width(BAND_WIDTH * scale)
                        .with_color(colors::with_alpha(colors::to_color(ring.base_color), 0.12)),
                );
            }

            draw_segment(&mut frame, center, scale, ring, color);

            if self.show_labels {
                let mid = (ring.radius + BAND_WIDTH / 2.0) * scale;
                frame.fill_text(Text {
                    content: ring.label.clone(),
                    position: center + Vector::new(-6.0, -mid),
                    color: colors::TEXT_SECONDARY,
                    size: (11.0 * scale.max(0.6)).into(),
                    horizontal_alignment: Horizontal::Right,
                    vertical_alignment: Vertical::Center,
                    ..Text::default()
                });
            }
        }

        vec![frame.into_geometry()]
    }
}

/// Draw the filled part of one ring as a round-capped stroke
fn draw_segment(frame: &mut Frame, center: Point, scale: f32, ring: &RingFrame, color: Color) {
    if ring.segment.is_empty() {
        return;
    }

    let line = ring.segment.centerline();

    if line.is_dot() {
        let (x, y) = point_at(line.start_angle, line.radius * scale);
        let dot = Path::circle(center + Vector::new(x, y), line.cap_radius * scale);
        frame.fill(&dot, color);
        return;
    }

    // A full turn leaves no visible gap between the caps
    let (start, end) = if ring.segment.sweep() >= TAU - f32::EPSILON {
        (0.0, TAU)
    } else {
        (line.start_angle, line.end_angle)
    };

    let arc = Path::new(|builder| {
        builder.arc(canvas::path::Arc {
            center,
            radius: line.radius * scale,
            start_angle: Radians(to_canvas_angle(start)),
            end_angle: Radians(to_canvas_angle(end)),
        });
    });

    frame.stroke(
        &arc,
        Stroke::default()
            .with_width(2.0 * line.cap_radius * scale)
            .with_color(color)
            .with_line_cap(canvas::LineCap::Round),
    );
}

/// Convert a clockwise-from-12 angle to the canvas convention (clockwise from 3)
pub fn to_canvas_angle(angle: f32) -> f32 {
    angle - FRAC_PI_2
}

/// Pixels per face unit so that all rings fit the bounds
pub fn layout_scale(width: f32, height: f32, count: usize) -> f32 {
    let available = (width.min(height) / 2.0 - MARGIN).max(0.0);
    available / face_extent(count)
}
