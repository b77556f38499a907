//! Configuration system
//!
//! Handles TOML config file parsing and CLI argument merging.

pub mod builder;
pub mod file;

pub use builder::ConfigBuilder;
pub use file::ConfigFile;

use crate::domain::{ClockPeriod, ColorStops, Rgb, TimeUnit};
use crate::error::{ConfigError, DomainError};
use crate::services::{ClockFace, ClockStore, ColorMode, RenderLoop, TimeBase, DEFAULT_CAPACITY};
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,
    /// Gradient colors
    pub colors: ColorConfig,
    /// Clocks present at startup
    pub clocks: ClockList,
}

/// General configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Enable verbose logging
    pub verbose: bool,
    /// Maximum number of clocks
    pub capacity: usize,
    /// Frame time source
    pub time_base: TimeBase,
    /// Ring fill color rule
    pub color_mode: ColorMode,
    /// Draw remaining-time labels
    pub show_labels: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            capacity: DEFAULT_CAPACITY,
            time_base: TimeBase::Wall,
            color_mode: ColorMode::Index,
            show_labels: true,
        }
    }
}

/// Gradient color configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    /// Inner stop, hex
    pub inner: String,
    /// Optional middle stop, hex
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle: Option<String>,
    /// Outer stop, hex
    pub outer: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        let stops = ColorStops::default();
        Self {
            inner: stops.inner.to_string(),
            middle: None,
            outer: stops.outer.to_string(),
        }
    }
}

impl ColorConfig {
    /// Convert to ColorStops domain object
    pub fn to_stops(&self) -> Result<ColorStops, DomainError> {
        let inner: Rgb = self.inner.parse()?;
        let outer: Rgb = self.outer.parse()?;
        Ok(match &self.middle {
            Some(middle) => ColorStops::with_middle(inner, middle.parse()?, outer),
            None => ColorStops::new(inner, outer),
        })
    }
}

/// Startup clock configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockConfig {
    /// Period length (1-60); out-of-range values are clamped
    pub length: i64,
    /// Period unit
    #[serde(default)]
    pub unit: TimeUnit,
}

/// Startup clocks, defaulting to three 5-second clocks
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClockList(pub Vec<ClockConfig>);

impl Default for ClockList {
    fn default() -> Self {
        Self(
            (0..3)
                .map(|_| ClockConfig {
                    length: ClockPeriod::DEFAULT.get() as i64,
                    unit: TimeUnit::Seconds,
                })
                .collect(),
        )
    }
}

impl Config {
    /// Check values that cannot be repaired by clamping
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.general.capacity == 0 {
            return Err(ConfigError::InvalidValue {
                key: "general.capacity".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        self.colors
            .to_stops()
            .map_err(|e| ConfigError::InvalidValue {
                key: "colors".to_string(),
                message: e.to_string(),
            })?;

        Ok(())
    }

    /// Build the initial clock face
    ///
    /// Clock lengths outside 1-60 are clamped and clocks beyond capacity are
    /// dropped, each with a warning.
    pub fn to_face(&self) -> Result<ClockFace, ConfigError> {
        self.validate()?;

        let mut store = ClockStore::with_capacity(self.general.capacity);
        for (i, clock) in self.clocks.0.iter().enumerate() {
            let length = ClockPeriod::clamped(clock.length);
            if length.get() as i64 != clock.length {
                log::warn!(
                    "Clock {} length {} out of range, using {}",
                    i,
                    clock.length,
                    length
                );
            }
            if store.add(length, clock.unit).is_none() {
                log::warn!(
                    "Ignoring {} configured clock(s) beyond capacity {}",
                    self.clocks.0.len() - i,
                    self.general.capacity
                );
                break;
            }
        }

        let stops = self.colors.to_stops().map_err(|e| ConfigError::InvalidValue {
            key: "colors".to_string(),
            message: e.to_string(),
        })?;
        let render = RenderLoop::new(self.general.time_base, self.general.color_mode);

        Ok(ClockFace::new(store, stops, render).with_labels(self.general.show_labels))
    }
}
