//! Render loop
//!
//! Turns the clock store into per-frame ring geometry, labels and colors.
//! Nothing is carried between frames except the loop's own start time; every
//! frame is recomputed from a single time reading.

use crate::domain::{
    arc, index_fraction, ring_radius, ClockId, ClockRecord, ColorScale, ColorStops, Rgb,
    RingSegment, TimeUnit,
};
use crate::services::store::ClockStore;
use serde::{Deserialize, Serialize};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

/// Where frame time is read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeBase {
    /// Seconds since the UNIX epoch; dials agree with the wall clock
    #[default]
    Wall,
    /// Seconds since the loop last started; a restart rewinds every dial
    Elapsed,
}

/// Which color fills a ring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Fixed color from the ring's position among all rings
    #[default]
    Index,
    /// Color follows the ring's own fill fraction
    Progress,
}

/// Loop lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// No frame callback registered
    Idle,
    /// One frame callback registered
    Running {
        /// Incremented on every start
        generation: u64,
        /// When this run started
        epoch: Instant,
    },
}

/// Per-frame driver with at most one active run
#[derive(Debug, Clone)]
pub struct RenderLoop {
    state: LoopState,
    generation: u64,
    time_base: TimeBase,
    color_mode: ColorMode,
}

impl Default for RenderLoop {
    fn default() -> Self {
        Self::new(TimeBase::default(), ColorMode::default())
    }
}

impl RenderLoop {
    /// Create an idle loop
    pub fn new(time_base: TimeBase, color_mode: ColorMode) -> Self {
        Self {
            state: LoopState::Idle,
            generation: 0,
            time_base,
            color_mode,
        }
    }

    /// Start a new run, stopping the current one first
    ///
    /// Returns the generation of the new run.
    pub fn start(&mut self, now: Instant) -> u64 {
        if self.stop() {
            log::debug!("Stopped render loop generation {}", self.generation);
        }
        self.generation += 1;
        self.state = LoopState::Running {
            generation: self.generation,
            epoch: now,
        };
        log::info!("Render loop started (generation {})", self.generation);
        self.generation
    }

    /// Return to idle; returns whether a run was stopped
    pub fn stop(&mut self) -> bool {
        let was_running = self.is_running();
        self.state = LoopState::Idle;
        was_running
    }

    /// Current lifecycle state
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Check whether a run is active
    pub fn is_running(&self) -> bool {
        matches!(self.state, LoopState::Running { .. })
    }

    /// Generation of the latest run (0 if never started)
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Time source used by [`RenderLoop::tick`]
    pub fn time_base(&self) -> TimeBase {
        self.time_base
    }

    /// Change the time source; takes effect on the next frame
    pub fn set_time_base(&mut self, time_base: TimeBase) {
        self.time_base = time_base;
    }

    /// Fill color rule
    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    /// Change the fill color rule
    pub fn set_color_mode(&mut self, color_mode: ColorMode) {
        self.color_mode = color_mode;
    }

    /// Frame time in seconds for a tick at `now`, or `None` while idle
    pub fn frame_time(&self, now: Instant) -> Option<f64> {
        let LoopState::Running { epoch, .. } = self.state else {
            return None;
        };
        let seconds = match self.time_base {
            TimeBase::Wall => wall_seconds(),
            TimeBase::Elapsed => now.saturating_duration_since(epoch).as_secs_f64(),
        };
        Some(seconds)
    }

    /// Compute one frame; `None` while idle
    pub fn tick(&self, now: Instant, store: &ClockStore, stops: &ColorStops) -> Option<Frame> {
        let time = self.frame_time(now)?;
        Some(compute_frame(time, store, stops, self.color_mode))
    }
}

/// Seconds since the UNIX epoch
pub fn wall_seconds() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0)
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    /// Time the frame was computed for, in seconds
    pub time: f64,
    /// One entry per clock, innermost first
    pub rings: Vec<RingFrame>,
}

impl Frame {
    /// Look up the ring drawn for a clock
    pub fn ring(&self, id: ClockId) -> Option<&RingFrame> {
        self.rings.iter().find(|r| r.id == id)
    }
}

/// Drawing data for a single clock
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RingFrame {
    pub id: ClockId,
    /// Position among the rings, 0 = innermost
    pub index: usize,
    /// Inner radius
    pub radius: f32,
    /// Cycle length in seconds
    pub effective_duration: u32,
    /// Share of the current cycle elapsed, in [0, 1)
    pub fraction: f32,
    pub segment: RingSegment,
    /// Time left in the cycle, e.g. "12s" or "3m"
    pub label: String,
    /// Color from the ring's position
    pub base_color: Rgb,
    /// Color from the fill fraction
    pub live_color: Rgb,
    /// Color to fill with under the active color mode
    pub fill: Rgb,
}

/// Compute a frame for time `time` (seconds)
///
/// Rings are laid out in store order; with an empty store the frame simply
/// has no rings.
pub fn compute_frame(
    time: f64,
    store: &ClockStore,
    stops: &ColorStops,
    color_mode: ColorMode,
) -> Frame {
    let scale = ColorScale::build(stops);
    let count = store.len();

    let rings = store
        .iter()
        .enumerate()
        .map(|(index, clock)| {
            let duration = clock.effective_duration();
            let fraction = fill_fraction(time, duration);
            let radius = ring_radius(index);
            let base_color = scale.sample(index_fraction(index, count));
            let live_color = scale.sample(fraction);

            RingFrame {
                id: clock.id,
                index,
                radius,
                effective_duration: duration,
                fraction,
                segment: arc(radius, fraction),
                label: remaining_label(time, clock),
                base_color,
                live_color,
                fill: match color_mode {
                    ColorMode::Index => base_color,
                    ColorMode::Progress => live_color,
                },
            }
        })
        .collect();

    Frame { time, rings }
}

/// Share of the current cycle elapsed at `time`
pub fn fill_fraction(time: f64, duration: u32) -> f32 {
    if duration == 0 {
        return 0.0;
    }
    let duration = duration as f64;
    let fraction = (time.rem_euclid(duration) / duration) as f32;
    // f64 -> f32 rounding can land exactly on 1.0
    if fraction >= 1.0 {
        0.0
    } else {
        fraction
    }
}

/// Time left in the current cycle, rounded up, in the clock's own unit
pub fn remaining_label(time: f64, clock: &ClockRecord) -> String {
    format!(
        "{}{}",
        remaining_units(time, clock.length.get(), clock.unit),
        clock.unit.suffix()
    )
}

/// Whole units left in a cycle of `length` units at `time`
pub fn remaining_units(time: f64, length: u8, unit: TimeUnit) -> u32 {
    let duration = length as f64 * unit.seconds() as f64;
    let remaining = duration - time.rem_euclid(duration);
    ((remaining / unit.seconds() as f64).ceil() as u32).clamp(1, length.max(1) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ClockPeriod, Rgb};
    use std::f32::consts::PI;
    use std::time::Duration;

    fn store_with(lengths: &[(i64, TimeUnit)]) -> ClockStore {
        let mut store = ClockStore::new();
        for &(n, unit) in lengths {
            store.add(ClockPeriod::clamped(n), unit);
        }
        store
    }

    #[test]
    fn test_start_stops_previous_run() {
        let mut render = RenderLoop::default();
        assert_eq!(render.state(), LoopState::Idle);

        let now = Instant::now();
        assert_eq!(render.start(now), 1);
        assert_eq!(render.start(now), 2);
        assert!(matches!(
            render.state(),
            LoopState::Running { generation: 2, .. }
        ));

        assert!(render.stop());
        assert!(!render.stop());
        assert!(!render.is_running());
    }

    #[test]
    fn test_idle_tick_produces_nothing() {
        let render = RenderLoop::default();
        let store = store_with(&[(5, TimeUnit::Seconds)]);
        assert!(render
            .tick(Instant::now(), &store, &ColorStops::default())
            .is_none());
    }

    #[test]
    fn test_empty_store_tick() {
        let mut render = RenderLoop::default();
        let now = Instant::now();
        render.start(now);
        let frame = render
            .tick(now, &ClockStore::new(), &ColorStops::default())
            .unwrap();
        assert!(frame.rings.is_empty());
    }

    #[test]
    fn test_elapsed_time_base_rewinds_on_restart() {
        let mut render = RenderLoop::new(TimeBase::Elapsed, ColorMode::Index);
        let epoch = Instant::now();
        render.start(epoch);
        let later = epoch + Duration::from_millis(2500);
        assert_eq!(render.frame_time(later), Some(2.5));

        render.start(later);
        assert_eq!(render.frame_time(later), Some(0.0));
    }

    #[test]
    fn test_fraction_and_label() {
        let store = store_with(&[(5, TimeUnit::Seconds), (2, TimeUnit::Minutes)]);
        let frame = compute_frame(61.25, &store, &ColorStops::default(), ColorMode::Index);

        let five = &frame.rings[0];
        assert!((five.fraction - 0.25).abs() < 1e-6);
        assert_eq!(five.label, "4s");
        assert_eq!(five.radius, 50.0);
        assert!((five.segment.sweep() - PI / 2.0).abs() < 1e-5);

        let two_min = &frame.rings[1];
        assert_eq!(two_min.radius, 80.0);
        assert_eq!(two_min.effective_duration, 120);
        assert_eq!(two_min.label, "1m");
    }

    #[test]
    fn test_label_at_cycle_start_shows_full_length() {
        let store = store_with(&[(5, TimeUnit::Seconds), (3, TimeUnit::Minutes)]);
        let frame = compute_frame(0.0, &store, &ColorStops::default(), ColorMode::Index);
        assert_eq!(frame.rings[0].label, "5s");
        assert_eq!(frame.rings[1].label, "3m");
        assert_eq!(frame.rings[0].fraction, 0.0);
        assert!(frame.rings[0].segment.is_empty());
    }

    #[test]
    fn test_index_colors_span_gradient() {
        let store = store_with(&[
            (5, TimeUnit::Seconds),
            (5, TimeUnit::Seconds),
            (5, TimeUnit::Seconds),
        ]);
        let stops = ColorStops::new(Rgb::new(0, 0, 0), Rgb::new(200, 100, 0));
        let frame = compute_frame(1.0, &store, &stops, ColorMode::Index);
        assert_eq!(frame.rings[0].fill, stops.inner);
        assert_eq!(frame.rings[1].fill, Rgb::new(100, 50, 0));
        assert_eq!(frame.rings[2].fill, stops.outer);
    }

    #[test]
    fn test_single_clock_uses_inner_color() {
        let store = store_with(&[(5, TimeUnit::Seconds)]);
        let stops = ColorStops::default();
        let frame = compute_frame(3.0, &store, &stops, ColorMode::Index);
        assert_eq!(frame.rings[0].base_color, stops.inner);
    }

    #[test]
    fn test_progress_color_mode() {
        let store = store_with(&[(4, TimeUnit::Seconds)]);
        let stops = ColorStops::new(Rgb::new(0, 0, 0), Rgb::new(200, 200, 200));
        let frame = compute_frame(2.0, &store, &stops, ColorMode::Progress);
        assert_eq!(frame.rings[0].fill, Rgb::new(100, 100, 100));
        assert_eq!(frame.rings[0].fill, frame.rings[0].live_color);
    }

    #[test]
    fn test_fill_fraction_range() {
        assert_eq!(fill_fraction(10.0, 5), 0.0);
        assert!((fill_fraction(1_700_000_003.0, 60) - (23.0 / 60.0)).abs() < 1e-4);
        assert_eq!(fill_fraction(-1.0, 4), 0.75);
        assert_eq!(fill_fraction(3.0, 0), 0.0);
    }

    #[test]
    fn test_remaining_units() {
        assert_eq!(remaining_units(0.5, 10, TimeUnit::Seconds), 10);
        assert_eq!(remaining_units(59.0, 2, TimeUnit::Minutes), 2);
        assert_eq!(remaining_units(61.0, 2, TimeUnit::Minutes), 1);
    }
}
