//! Custom canvas widgets for ringclock-gui

mod color_bar;
mod ring_face;

pub use color_bar::ColorBar;
pub use ring_face::RingFace;
