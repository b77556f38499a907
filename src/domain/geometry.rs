//! Ring segment geometry
//!
//! Angles are in radians, measured clockwise from 12 o'clock, and
//! coordinates are screen offsets from the face center (y grows downward).

use serde::Serialize;
use std::f32::consts::{PI, TAU};
use std::fmt::Write;

/// Radial thickness of every ring
pub const BAND_WIDTH: f32 = 20.0;
/// Requested corner rounding; limited to half the band when drawn
pub const CORNER_RADIUS: f32 = 20.0;
/// Inner radius of the innermost ring
pub const BASE_RADIUS: f32 = 50.0;
/// Distance between the inner edges of neighbouring rings
pub const RING_SPACING: f32 = 30.0;

/// Inner radius of the ring at position `index`
pub fn ring_radius(index: usize) -> f32 {
    BASE_RADIUS + index as f32 * RING_SPACING
}

/// Outer radius of the outermost ring when `count` rings are shown
pub fn face_extent(count: usize) -> f32 {
    if count == 0 {
        return BASE_RADIUS;
    }
    ring_radius(count - 1) + BAND_WIDTH
}

/// Cartesian offset of the point at `angle` and distance `radius`
pub fn point_at(angle: f32, radius: f32) -> (f32, f32) {
    (radius * angle.sin(), -radius * angle.cos())
}

/// Build the segment for a ring of inner radius `radius` filled to `fraction`
///
/// `fraction` is clamped into [0, 1]; zero gives an empty segment.
pub fn arc(radius: f32, fraction: f32) -> RingSegment {
    let fraction = if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    };
    RingSegment {
        inner_radius: radius,
        outer_radius: radius + BAND_WIDTH,
        corner_radius: CORNER_RADIUS,
        start_angle: 0.0,
        end_angle: TAU * fraction,
    }
}

/// A rounded annular sector
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RingSegment {
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub corner_radius: f32,
    pub start_angle: f32,
    pub end_angle: f32,
}

/// Mid-band arc with round caps, for stroke-based drawing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Centerline {
    /// Distance of the stroke from the center
    pub radius: f32,
    /// Where the stroke starts (cap centers lie on the end points)
    pub start_angle: f32,
    pub end_angle: f32,
    /// Radius of the round caps; the stroke width is twice this
    pub cap_radius: f32,
}

impl Centerline {
    /// Segment too short for a stroke; draw a dot of `cap_radius` instead
    pub fn is_dot(&self) -> bool {
        self.end_angle <= self.start_angle
    }
}

impl RingSegment {
    /// Angle covered by the segment
    pub fn sweep(&self) -> f32 {
        (self.end_angle - self.start_angle).max(0.0)
    }

    /// Nothing to draw
    pub fn is_empty(&self) -> bool {
        self.sweep() <= f32::EPSILON
    }

    /// Band thickness
    pub fn thickness(&self) -> f32 {
        self.outer_radius - self.inner_radius
    }

    /// Corner radius actually used: never more than half the band
    pub fn effective_corner_radius(&self) -> f32 {
        self.corner_radius.min(self.thickness() / 2.0).max(0.0)
    }

    /// Mid-band arc whose round-capped stroke covers the segment
    ///
    /// The caps stay inside the segment's angular span. When the sweep is
    /// too small for two full caps, the result collapses to a dot centered
    /// on the segment, sized to fit between its edges.
    pub fn centerline(&self) -> Centerline {
        let radius = (self.inner_radius + self.outer_radius) / 2.0;
        let cap = self.effective_corner_radius();
        let cap_angle = cap_angle(cap, radius);
        let sweep = self.sweep();

        if sweep > 2.0 * cap_angle {
            Centerline {
                radius,
                start_angle: self.start_angle + cap_angle,
                end_angle: self.end_angle - cap_angle,
                cap_radius: cap,
            }
        } else {
            let mid = self.start_angle + sweep / 2.0;
            Centerline {
                radius,
                start_angle: mid,
                end_angle: mid,
                cap_radius: (radius * (sweep / 2.0).sin()).min(cap),
            }
        }
    }

    /// SVG path data for the filled segment
    pub fn to_svg_path(&self) -> String {
        let mut d = String::new();

        if self.is_empty() {
            let (x, y) = point_at(self.start_angle, self.outer_radius);
            let _ = write!(d, "M{},{}Z", num(x), num(y));
            return d;
        }

        let line = self.centerline();
        let cap = line.cap_radius;

        if line.is_dot() {
            // Two half circles around the dot center
            let (cx, cy) = point_at(line.start_angle, line.radius);
            let _ = write!(
                d,
                "M{},{}A{},{},0,1,1,{},{}A{},{},0,1,1,{},{}Z",
                num(cx),
                num(cy - cap),
                num(cap),
                num(cap),
                num(cx),
                num(cy + cap),
                num(cap),
                num(cap),
                num(cx),
                num(cy - cap),
            );
            return d;
        }

        let (outer, inner) = (line.radius + cap, line.radius - cap);
        let large = if line.end_angle - line.start_angle > PI { 1 } else { 0 };

        let (ox0, oy0) = point_at(line.start_angle, outer);
        let (ox1, oy1) = point_at(line.end_angle, outer);
        let (ix1, iy1) = point_at(line.end_angle, inner);
        let (ix0, iy0) = point_at(line.start_angle, inner);

        let _ = write!(d, "M{},{}", num(ox0), num(oy0));
        let _ = write!(
            d,
            "A{},{},0,{},1,{},{}",
            num(outer),
            num(outer),
            large,
            num(ox1),
            num(oy1)
        );
        let _ = write!(d, "A{},{},0,0,1,{},{}", num(cap), num(cap), num(ix1), num(iy1));
        if inner > 0.0 {
            let _ = write!(
                d,
                "A{},{},0,{},0,{},{}",
                num(inner),
                num(inner),
                large,
                num(ix0),
                num(iy0)
            );
        } else {
            d.push_str("L0,0");
        }
        let _ = write!(d, "A{},{},0,0,1,{},{}Z", num(cap), num(cap), num(ox0), num(oy0));
        d
    }
}

/// Angle subtended at the center by a cap of radius `cap` at distance `radius`
fn cap_angle(cap: f32, radius: f32) -> f32 {
    if radius <= 0.0 {
        return 0.0;
    }
    (cap / radius).clamp(0.0, 1.0).asin()
}

/// Format a coordinate with at most three decimals
fn num(value: f32) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    // Avoid "-0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    let mut s = format!("{:.3}", rounded);
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_quarter_turn_arc() {
        let seg = arc(50.0, 0.25);
        assert_eq!(seg.inner_radius, 50.0);
        assert_eq!(seg.outer_radius, 70.0);
        assert_eq!(seg.start_angle, 0.0);
        assert!(close(seg.sweep(), FRAC_PI_2));
    }

    #[test]
    fn test_zero_fraction_is_degenerate_not_error() {
        let seg = arc(80.0, 0.0);
        assert!(seg.is_empty());
        assert_eq!(seg.to_svg_path(), "M0,-100Z");
    }

    #[test]
    fn test_fraction_is_clamped() {
        assert!(close(arc(50.0, 1.5).sweep(), TAU));
        assert_eq!(arc(50.0, -0.2).sweep(), 0.0);
        assert_eq!(arc(50.0, f32::NAN).sweep(), 0.0);
    }

    #[test]
    fn test_ring_radius_nesting() {
        assert_eq!(ring_radius(0), 50.0);
        assert_eq!(ring_radius(1), 80.0);
        assert_eq!(ring_radius(4), 170.0);
        assert_eq!(face_extent(5), 190.0);
        assert_eq!(face_extent(0), BASE_RADIUS);
    }

    #[test]
    fn test_corner_radius_limited_to_half_band() {
        let seg = arc(50.0, 0.5);
        assert_eq!(seg.corner_radius, 20.0);
        assert_eq!(seg.effective_corner_radius(), 10.0);
    }

    #[test]
    fn test_centerline_stays_inside_span() {
        let seg = arc(50.0, 0.25);
        let line = seg.centerline();
        assert_eq!(line.radius, 60.0);
        assert_eq!(line.cap_radius, 10.0);
        assert!(line.start_angle > 0.0);
        assert!(line.end_angle < FRAC_PI_2);
        assert!(!line.is_dot());
        // Cap at the start touches the 12 o'clock ray
        let (x, _) = point_at(line.start_angle, line.radius);
        assert!(close(x, line.cap_radius));
    }

    #[test]
    fn test_tiny_sweep_collapses_to_dot() {
        let seg = arc(50.0, 0.001);
        let line = seg.centerline();
        assert!(line.is_dot());
        assert!(line.cap_radius < 10.0);
        assert!(seg.to_svg_path().starts_with('M'));
    }

    #[test]
    fn test_point_at_quarter_turn() {
        let (x, y) = point_at(FRAC_PI_2, 10.0);
        assert!(close(x, 10.0));
        assert!(close(y, 0.0));
    }

    #[test]
    fn test_svg_path_shape() {
        let d = arc(50.0, 0.75).to_svg_path();
        assert!(d.starts_with("M"));
        assert!(d.ends_with('Z'));
        // outer arc, end cap, inner arc, start cap
        assert_eq!(d.matches('A').count(), 4);
        // three quarters exceeds half a turn
        assert!(d.contains("A70,70,0,1,1"));
    }

    #[test]
    fn test_num_formatting() {
        assert_eq!(num(70.0), "70");
        assert_eq!(num(-0.0001), "0");
        assert_eq!(num(12.34567), "12.346");
    }
}
