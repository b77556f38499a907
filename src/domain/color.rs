//! Gradient color types
//!
//! Hex colors, the 2- or 3-stop gradient the user edits, and the linear
//! color scale derived from it.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from channel values
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as fractions (0.0-1.0), for renderers that want floats
    pub fn to_unit(&self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }

    /// Linear interpolation in RGB space, rounding each channel
    pub fn lerp(self, to: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| -> u8 {
            let a = a as f32;
            (a + (b as f32 - a) * t).round().clamp(0.0, 255.0) as u8
        };
        Rgb::new(mix(self.r, to.r), mix(self.g, to.g), mix(self.b, to.b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = DomainError;

    /// Parse `#rrggbb` or `#rgb`; the `#` is optional
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidColor(s.to_string());
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if !hex.is_ascii() || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());

        match hex.len() {
            6 => Ok(Rgb::new(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            3 => {
                // #abc expands to #aabbcc
                let short = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
                Ok(Rgb::new(short(0)?, short(1)?, short(2)?))
            }
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Rgb {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}

/// Ordered gradient stops: inner, optional middle, outer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorStops {
    /// Color at the start of the gradient
    pub inner: Rgb,
    /// Optional color at the midpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle: Option<Rgb>,
    /// Color at the end of the gradient
    pub outer: Rgb,
}

impl Default for ColorStops {
    fn default() -> Self {
        Self {
            inner: Rgb::new(0x4d, 0x00, 0x4b),
            middle: None,
            outer: Rgb::new(0xd1, 0xe1, 0xff),
        }
    }
}

impl ColorStops {
    /// Two-stop gradient
    pub fn new(inner: Rgb, outer: Rgb) -> Self {
        Self {
            inner,
            middle: None,
            outer,
        }
    }

    /// Three-stop gradient
    pub fn with_middle(inner: Rgb, middle: Rgb, outer: Rgb) -> Self {
        Self {
            inner,
            middle: Some(middle),
            outer,
        }
    }

    /// Build from an ordered list of 2 or 3 colors
    ///
    /// # Errors
    /// Returns `DomainError::InvalidStopCount` for any other length
    pub fn from_slice(colors: &[Rgb]) -> Result<Self, DomainError> {
        match *colors {
            [inner, outer] => Ok(Self::new(inner, outer)),
            [inner, middle, outer] => Ok(Self::with_middle(inner, middle, outer)),
            _ => Err(DomainError::InvalidStopCount(colors.len())),
        }
    }

    /// Stops in gradient order
    pub fn to_vec(&self) -> Vec<Rgb> {
        match self.middle {
            Some(middle) => vec![self.inner, middle, self.outer],
            None => vec![self.inner, self.outer],
        }
    }

    /// Number of stops (2 or 3)
    pub fn len(&self) -> usize {
        if self.middle.is_some() {
            3
        } else {
            2
        }
    }

    /// A gradient always has stops
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Replace the inner color
    pub fn set_inner(&mut self, color: Rgb) {
        self.inner = color;
    }

    /// Replace the outer (last) color
    pub fn set_outer(&mut self, color: Rgb) {
        self.outer = color;
    }

    /// Insert the middle color, or replace it if one is already set
    pub fn set_middle(&mut self, color: Rgb) {
        self.middle = Some(color);
    }

    /// Drop back to a two-stop gradient
    pub fn clear_middle(&mut self) {
        self.middle = None;
    }

    /// Percent offsets (0-100) of each stop along the gradient
    pub fn gradient_offsets(&self) -> Vec<(f32, Rgb)> {
        let stops = self.to_vec();
        let last = (stops.len() - 1) as f32;
        stops
            .into_iter()
            .enumerate()
            .map(|(i, color)| (100.0 * i as f32 / last, color))
            .collect()
    }
}

/// Continuous color function over [0, 1]
///
/// The domain is `[0, 1]` for two stops and `[0, 0.5, 1]` for three;
/// colors are interpolated linearly between neighbouring stops.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScale {
    domain: Vec<f32>,
    range: Vec<Rgb>,
}

impl ColorScale {
    /// Derive a scale from gradient stops
    pub fn build(stops: &ColorStops) -> Self {
        let range = stops.to_vec();
        let domain = if range.len() == 2 {
            vec![0.0, 1.0]
        } else {
            vec![0.0, 0.5, 1.0]
        };
        Self { domain, range }
    }

    /// Sample the scale; `t` is clamped into [0, 1]
    pub fn sample(&self, t: f32) -> Rgb {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        // Segment whose upper bound is the first domain value >= t
        let upper = self
            .domain
            .iter()
            .position(|&d| d >= t)
            .unwrap_or(self.domain.len() - 1)
            .max(1);
        let lower = upper - 1;

        let (d0, d1) = (self.domain[lower], self.domain[upper]);
        let local = if d1 > d0 { (t - d0) / (d1 - d0) } else { 0.0 };
        self.range[lower].lerp(self.range[upper], local)
    }

    /// Sample `n` evenly spaced colors from 0 to 1 inclusive
    pub fn samples(&self, n: usize) -> Vec<(f32, Rgb)> {
        (0..n)
            .map(|i| {
                let t = index_fraction(i, n);
                (t, self.sample(t))
            })
            .collect()
    }
}

/// Position of item `index` among `count` items, spread over [0, 1]
///
/// A lone item sits at 0 rather than dividing by zero.
pub fn index_fraction(index: usize, count: usize) -> f32 {
    if count <= 1 {
        return 0.0;
    }
    index as f32 / (count - 1) as f32
}
