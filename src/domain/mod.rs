//! Domain models for ringclock
//!
//! This module contains all domain types with validation.
//! Types are validated on construction (fail-fast pattern).

pub mod clock;
pub mod color;
pub mod geometry;

pub use clock::{ClockId, ClockPatch, ClockPeriod, ClockRecord, TimeUnit};
pub use color::{index_fraction, ColorScale, ColorStops, Rgb};
pub use geometry::{arc, ring_radius, Centerline, RingSegment};
