//! Clock-related domain types
//!
//! Provides validated types for clock identity, period length and unit.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sequential clock identifier
///
/// Handed out by the store from a monotonic counter, so an id is never
/// reused within a session even after its clock is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClockId(u32);

impl ClockId {
    /// Wrap a raw id value
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw id value
    #[inline]
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ClockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Clock period length (1-60)
///
/// Validated on construction. Raw numbers coming from input controls go
/// through [`ClockPeriod::clamped`] or [`ClockPeriod::parse_clamped`], which
/// pull out-of-range values back into bounds instead of rejecting them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ClockPeriod(u8);

impl ClockPeriod {
    /// Minimum valid period
    pub const MIN: u8 = 1;
    /// Maximum valid period
    pub const MAX: u8 = 60;
    /// Period given to newly added clocks
    pub const DEFAULT: ClockPeriod = ClockPeriod(5);

    /// Create a new ClockPeriod with validation
    ///
    /// # Errors
    /// Returns `DomainError::InvalidPeriod` if value is outside 1-60
    pub fn new(value: u8) -> Result<Self, DomainError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(DomainError::InvalidPeriod(value.to_string()));
        }
        Ok(Self(value))
    }

    /// Create a ClockPeriod, clamping the value into 1-60
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    /// Parse text from a numeric input field and clamp it into range
    ///
    /// Surrounding whitespace is ignored. Fractional input is truncated
    /// toward zero before clamping, like a number field with step 1.
    ///
    /// # Errors
    /// Returns `DomainError::InvalidPeriod` if the text is not a number
    pub fn parse_clamped(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if let Ok(whole) = trimmed.parse::<i64>() {
            return Ok(Self::clamped(whole));
        }
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Self::clamped(value.trunc() as i64)),
            _ => Err(DomainError::InvalidPeriod(raw.to_string())),
        }
    }

    /// Get the period as a plain number
    #[inline]
    pub const fn get(&self) -> u8 {
        self.0
    }
}

impl Default for ClockPeriod {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for ClockPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for ClockPeriod {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ClockPeriod> for u8 {
    fn from(period: ClockPeriod) -> Self {
        period.0
    }
}

/// Unit a clock period is counted in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeUnit {
    /// Period counts seconds
    #[default]
    #[serde(rename = "sec")]
    Seconds,
    /// Period counts minutes
    #[serde(rename = "min")]
    Minutes,
}

impl TimeUnit {
    /// All units, in picker order
    pub const ALL: [TimeUnit; 2] = [TimeUnit::Seconds, TimeUnit::Minutes];

    /// Number of seconds in one unit
    pub const fn seconds(&self) -> u32 {
        match self {
            TimeUnit::Seconds => 1,
            TimeUnit::Minutes => 60,
        }
    }

    /// Short name used in config files and pickers
    pub const fn as_str(&self) -> &'static str {
        match self {
            TimeUnit::Seconds => "sec",
            TimeUnit::Minutes => "min",
        }
    }

    /// Single-letter suffix for remaining-time labels
    pub const fn suffix(&self) -> char {
        match self {
            TimeUnit::Seconds => 's',
            TimeUnit::Minutes => 'm',
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeUnit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sec" | "s" | "second" | "seconds" => Ok(TimeUnit::Seconds),
            "min" | "m" | "minute" | "minutes" => Ok(TimeUnit::Minutes),
            _ => Err(DomainError::InvalidUnit(s.to_string())),
        }
    }
}

/// A single clock: how long one cycle lasts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockRecord {
    /// Store-assigned identifier
    pub id: ClockId,
    /// Cycle length in `unit`s
    pub length: ClockPeriod,
    /// Unit of `length`
    pub unit: TimeUnit,
}

impl ClockRecord {
    /// Create a new clock record
    pub fn new(id: ClockId, length: ClockPeriod, unit: TimeUnit) -> Self {
        Self { id, length, unit }
    }

    /// Cycle length normalized to seconds
    #[inline]
    pub fn effective_duration(&self) -> u32 {
        self.length.get() as u32 * self.unit.seconds()
    }

    /// Display title used in the settings list
    pub fn title(&self) -> String {
        format!("clock {}", self.id)
    }
}

/// Partial update for a clock record
///
/// Fields left as `None` keep their current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClockPatch {
    /// New period length
    pub length: Option<ClockPeriod>,
    /// New unit
    pub unit: Option<TimeUnit>,
}

impl ClockPatch {
    /// Patch that only changes the length
    pub fn length(length: ClockPeriod) -> Self {
        Self {
            length: Some(length),
            unit: None,
        }
    }

    /// Patch that only changes the unit
    pub fn unit(unit: TimeUnit) -> Self {
        Self {
            length: None,
            unit: Some(unit),
        }
    }

    /// Merge this patch into a record
    pub fn apply_to(&self, record: &mut ClockRecord) {
        if let Some(length) = self.length {
            record.length = length;
        }
        if let Some(unit) = self.unit {
            record.unit = unit;
        }
    }
}
