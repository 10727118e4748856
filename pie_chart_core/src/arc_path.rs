// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slice (wedge) path generation.
//!
//! Each slice is a closed wedge: center, out to the running start point, a unit-radius arc to
//! the slice's end point, and back to the center. Slices are chained, so a slice can only be
//! computed from the [`SliceCursor`] its predecessor returned.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use core::f64::consts::{PI, TAU};

use kurbo::{Arc, BezPath, Point, SvgArc, Vec2};

use crate::error::ComputationError;
use crate::geometry::{START_ANGLE, START_POINT, point_on_unit_circle};

/// The running angle and boundary point carried from one slice to the next.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliceCursor {
    /// Angle, in radians, where the next slice starts.
    pub angle: f64,
    /// Point on the unit circle where the next slice starts.
    pub point: Point,
}

impl SliceCursor {
    /// The cursor for the first slice of a chart (twelve o'clock).
    pub const START: Self = Self {
        angle: START_ANGLE,
        point: START_POINT,
    };
}

impl Default for SliceCursor {
    fn default() -> Self {
        Self::START
    }
}

/// Exact description of one wedge on the unit circle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WedgePath {
    /// Boundary point where the arc starts.
    pub start: Point,
    /// Boundary point where the arc ends.
    pub end: Point,
    /// Whether the arc spans more than half a turn.
    pub large_arc: bool,
}

impl WedgePath {
    /// Returns the SVG large-arc flag (`"1"` or `"0"`).
    pub fn large_arc_flag(&self) -> &'static str {
        if self.large_arc { "1" } else { "0" }
    }

    /// Returns the arc portion as an SVG-style elliptical arc (radius 1, clockwise sweep).
    pub fn to_svg_arc(&self) -> SvgArc {
        SvgArc {
            from: self.start,
            to: self.end,
            radii: Vec2::new(1.0, 1.0),
            x_rotation: 0.0,
            large_arc: self.large_arc,
            sweep: true,
        }
    }

    /// Returns the SVG path data for the wedge.
    ///
    /// The format is `M 0 0 L sx sy A 1 1 0 <large> 1 ex ey L 0 0`.
    pub fn to_svg(&self) -> String {
        format!(
            "M 0 0 L {} {} A 1 1 0 {} 1 {} {} L 0 0",
            self.start.x,
            self.start.y,
            self.large_arc_flag(),
            self.end.x,
            self.end.y
        )
    }

    /// Converts the wedge into cubic Béziers, for renderers without native arc support.
    ///
    /// A zero-length arc degenerates to the two radial lines.
    pub fn to_bez_path(&self, tolerance: f64) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(Point::ORIGIN);
        path.line_to(self.start);
        match Arc::from_svg_arc(&self.to_svg_arc()) {
            Some(arc) => path.extend(arc.append_iter(tolerance)),
            None => path.line_to(self.end),
        }
        path.line_to(Point::ORIGIN);
        path.close_path();
        path
    }
}

/// The result of computing one slice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComputedSlice {
    /// The slice's wedge.
    pub path: WedgePath,
    /// Share of the full turn actually drawn: `value / total * progress`.
    pub ratio: f64,
    /// Angle where the slice starts.
    pub start_angle: f64,
    /// Angle where the slice ends.
    pub end_angle: f64,
    /// Cursor for the following slice.
    pub next: SliceCursor,
}

impl ComputedSlice {
    /// Angle halfway through the slice, used to anchor its label.
    pub fn mid_angle(&self) -> f64 {
        self.start_angle + self.ratio * PI
    }

    /// The boundary point where the slice ends.
    pub fn boundary_point(&self) -> Point {
        self.next.point
    }
}

/// Computes one slice and the cursor for the next one.
///
/// `value` is expected to be non-negative; negative values are rejected by the series
/// validation in [`crate::ChartEngine`], not here.
pub fn compute_slice(
    value: f64,
    total: f64,
    progress: f64,
    cursor: SliceCursor,
) -> Result<ComputedSlice, ComputationError> {
    if !(total > 0.0) {
        return Err(ComputationError::NonPositiveTotal(total));
    }
    if total.is_infinite() {
        return Err(ComputationError::NonFiniteTotal);
    }
    if !(0.0..=1.0).contains(&progress) {
        return Err(ComputationError::InvalidProgress(progress));
    }

    let ratio = (value / total) * progress;
    let end_angle = cursor.angle + ratio * TAU;
    let end = point_on_unit_circle(end_angle);

    Ok(ComputedSlice {
        path: WedgePath {
            start: cursor.point,
            end,
            large_arc: ratio > 0.5,
        },
        ratio,
        start_angle: cursor.angle,
        end_angle,
        next: SliceCursor {
            angle: end_angle,
            point: end,
        },
    })
}
