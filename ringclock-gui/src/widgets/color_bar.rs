//! Color bar widget
//!
//! Horizontal preview of the gradient being edited, with a tick under
//! each stop.

use crate::message::Message;
use crate::theme::colors;

use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke};
use iced::{mouse, Point, Rectangle, Renderer, Size, Theme};
use ringclock::domain::{ColorScale, ColorStops};

/// Number of flat slices the gradient is drawn with
const SLICES: usize = 96;

/// Gradient preview bar
pub struct ColorBar {
    stops: ColorStops,
}

impl ColorBar {
    /// Create a bar for a gradient
    pub fn new(stops: ColorStops) -> Self {
        Self { stops }
    }
}

impl canvas::Program<Message> for ColorBar {
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
        let bar_height = (bounds.height - 6.0).max(0.0);
        let scale = ColorScale::build(&self.stops);

        // Slices overlap by a pixel so no seams show
        let slice = bounds.width / SLICES as f32;
        for (i, (_, color)) in scale.samples(SLICES).into_iter().enumerate() {
            let rect = Path::rectangle(
                Point::new(i as f32 * slice, 0.0),
                Size::new(slice + 1.0, bar_height),
            );
            frame.fill(&rect, colors::to_color(color));
        }

        frame.stroke(
            &Path::rectangle(Point::ORIGIN, Size::new(bounds.width, bar_height)),
            Stroke::default()
                .with_width(1.0)
                .with_color(colors::GLASS_BORDER),
        );

        for (offset, _) in self.stops.gradient_offsets() {
            let x = stop_x(offset, bounds.width);
            let tick = Path::line(Point::new(x, bar_height), Point::new(x, bounds.height));
            frame.stroke(
                &tick,
                Stroke::default()
                    .with_width(2.0)
                    .with_color(colors::TEXT_SECONDARY),
            );
        }

        vec![frame.into_geometry()]
    }
}

/// Horizontal position of a stop given as a percentage offset
fn stop_x(offset: f32, width: f32) -> f32 {
    (offset / 100.0 * width).clamp(1.0, (width - 1.0).max(1.0))
}
