// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Unit-circle helpers.
//!
//! Slices live on the unit circle centered at the origin (the chart's view box is
//! `-1 -1 2 2`). Labels are placed in percentages of the host box, so they go through
//! [`to_percent_position`] instead.

use kurbo::Point;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Angle at which the first slice starts: twelve o'clock, in y-down screen coordinates.
pub const START_ANGLE: f64 = -core::f64::consts::FRAC_PI_2;

/// The point at [`START_ANGLE`], written out exactly rather than through `cos`/`sin`.
pub const START_POINT: Point = Point::new(0.0, -1.0);

/// Fraction of the radius at which labels are placed.
pub const LABEL_SCALE: f64 = 0.8;

/// Returns `(cos(angle), sin(angle))`.
pub fn point_on_unit_circle(angle: f64) -> Point {
    Point::new(angle.cos(), angle.sin())
}

/// A position inside the host box, in percent of its width and height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PercentPosition {
    /// Offset from the left edge, in percent.
    pub left: f64,
    /// Offset from the top edge, in percent.
    pub top: f64,
}

/// Maps a point in unit-circle coordinates to a percentage position in the host box.
///
/// `scale` shrinks the point towards the center first; labels use [`LABEL_SCALE`].
pub fn to_percent_position(point: Point, scale: f64) -> PercentPosition {
    PercentPosition {
        left: (point.x * scale * 0.5 + 0.5) * 100.0,
        top: (point.y * scale * 0.5 + 0.5) * 100.0,
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use core::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-12, "{a} != {b}");
    }

    #[test]
    fn unit_circle_points_follow_cos_sin() {
        let p = point_on_unit_circle(0.0);
        assert_eq!(p, Point::new(1.0, 0.0));

        let p = point_on_unit_circle(FRAC_PI_2);
        assert_close(p.x, 0.0);
        assert_close(p.y, 1.0);

        let p = point_on_unit_circle(PI);
        assert_close(p.x, -1.0);
        assert_close(p.y, 0.0);
    }

    #[test]
    fn start_point_matches_start_angle() {
        let p = point_on_unit_circle(START_ANGLE);
        assert_close(p.x, START_POINT.x);
        assert_close(p.y, START_POINT.y);
    }

    #[test]
    fn label_position_uses_point_four_of_the_box() {
        for theta in [0.0, FRAC_PI_4, 1.0, PI, -FRAC_PI_2, 5.5] {
            let pos = to_percent_position(point_on_unit_circle(theta), LABEL_SCALE);
            assert_close(pos.left, (theta.cos() * 0.4 + 0.5) * 100.0);
            assert_close(pos.top, (theta.sin() * 0.4 + 0.5) * 100.0);
        }
    }

    #[test]
    fn center_maps_to_fifty_percent() {
        let pos = to_percent_position(Point::ORIGIN, LABEL_SCALE);
        assert_eq!(pos, PercentPosition { left: 50.0, top: 50.0 });
    }
}
