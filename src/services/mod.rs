//! Business logic services
//!
//! The clock store, the settings-panel projection, the render loop and the
//! face controller that ties them together.

pub mod face;
pub mod panel;
pub mod render;
pub mod store;

pub use face::{ClockFace, StopSlot};
pub use panel::{PanelEvent, PanelOutcome, PanelRow, SettingsPanel};
pub use render::{
    compute_frame, ColorMode, Frame, LoopState, RenderLoop, RingFrame, TimeBase,
};
pub use store::{ClockStore, DEFAULT_CAPACITY};
