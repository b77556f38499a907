//! Clock face controller state
//!
//! Owns the clock store, the gradient and the render loop, and exposes the
//! user actions as methods. Gradient edits show up in the color bar
//! straight away but only reach the rings when settings are applied.

use crate::domain::{ClockId, ClockPeriod, ColorStops, Rgb, TimeUnit};
use crate::error::DomainError;
use crate::services::panel::{PanelEvent, PanelOutcome, PanelRow, SettingsPanel};
use crate::services::render::{Frame, RenderLoop};
use crate::services::store::ClockStore;
use std::time::Instant;

/// Which gradient stop a color edit targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopSlot {
    Inner,
    Middle,
    Outer,
}

/// Application state for one clock face
#[derive(Debug, Clone)]
pub struct ClockFace {
    store: ClockStore,
    /// Gradient being edited
    stops: ColorStops,
    /// Gradient the rings are drawn with
    applied_stops: ColorStops,
    render: RenderLoop,
    show_labels: bool,
}

impl Default for ClockFace {
    fn default() -> Self {
        Self::new(ClockStore::new(), ColorStops::default(), RenderLoop::default())
    }
}

impl ClockFace {
    /// Assemble a face from its parts
    pub fn new(store: ClockStore, stops: ColorStops, render: RenderLoop) -> Self {
        Self {
            store,
            stops,
            applied_stops: stops,
            render,
            show_labels: true,
        }
    }

    /// Show or hide remaining-time labels
    pub fn with_labels(mut self, show_labels: bool) -> Self {
        self.show_labels = show_labels;
        self
    }

    /// Start rendering for the first time
    pub fn init(&mut self, now: Instant) -> u64 {
        self.render.start(now)
    }

    /// Add a clock with the default period (5 seconds)
    pub fn add_clock(&mut self) -> Option<ClockId> {
        self.add_clock_with(ClockPeriod::DEFAULT, TimeUnit::Seconds)
    }

    /// Add a clock; `None` when the store is full
    pub fn add_clock_with(&mut self, length: ClockPeriod, unit: TimeUnit) -> Option<ClockId> {
        self.store.add(length, unit)
    }

    /// Apply a settings-list edit
    ///
    /// # Errors
    /// Returns `DomainError::InvalidPeriod` for non-numeric period text
    pub fn handle_panel(&mut self, event: PanelEvent) -> Result<PanelOutcome, DomainError> {
        SettingsPanel::apply(&mut self.store, event)
    }

    /// Set a gradient stop from color-picker text
    ///
    /// Setting the middle stop on a two-stop gradient inserts it.
    ///
    /// # Errors
    /// Returns `DomainError::InvalidColor` if the text is not a hex color
    pub fn set_stop(&mut self, slot: StopSlot, raw: &str) -> Result<Rgb, DomainError> {
        let color: Rgb = raw.parse()?;
        match slot {
            StopSlot::Inner => self.stops.set_inner(color),
            StopSlot::Middle => self.stops.set_middle(color),
            StopSlot::Outer => self.stops.set_outer(color),
        }
        Ok(color)
    }

    /// Drop the middle gradient stop
    pub fn clear_middle(&mut self) {
        self.stops.clear_middle();
    }

    /// Commit settings: resort, push the edited gradient to the rings and
    /// restart the render loop
    ///
    /// Returns the generation of the restarted loop.
    pub fn apply_settings(&mut self, now: Instant) -> u64 {
        self.store.sort_by_effective_duration();
        self.applied_stops = self.stops;
        self.render.start(now)
    }

    /// Compute the frame for `now`; `None` while the loop is idle
    pub fn tick(&self, now: Instant) -> Option<Frame> {
        self.render.tick(now, &self.store, &self.applied_stops)
    }

    /// Rows for the settings list
    pub fn rows(&self) -> Vec<PanelRow> {
        SettingsPanel::project(&self.store)
    }

    pub fn store(&self) -> &ClockStore {
        &self.store
    }

    /// Gradient as currently edited
    pub fn stops(&self) -> &ColorStops {
        &self.stops
    }

    /// Gradient the rings use
    pub fn applied_stops(&self) -> &ColorStops {
        &self.applied_stops
    }

    pub fn render_loop(&self) -> &RenderLoop {
        &self.render
    }

    pub fn render_loop_mut(&mut self) -> &mut RenderLoop {
        &mut self.render
    }

    pub fn show_labels(&self) -> bool {
        self.show_labels
    }

    pub fn set_show_labels(&mut self, show: bool) {
        self.show_labels = show;
    }

    /// Check whether another clock fits
    pub fn can_add(&self) -> bool {
        !self.store.is_full()
    }
}
