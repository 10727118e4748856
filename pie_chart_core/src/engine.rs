// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One full redraw of the chart.
//!
//! [`compute_segments`] is the pure part: it validates the series, then chains
//! [`compute_slice`] over it. [`ChartEngine`] owns the surface handles and publishes the
//! segments of each frame to the surface.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use kurbo::Point;
use peniko::Color;

use crate::arc_path::{SliceCursor, WedgePath, compute_slice};
use crate::error::{ComputationError, ConfigurationError};
use crate::geometry::{LABEL_SCALE, point_on_unit_circle, to_percent_position};
use crate::palette::{LabelSet, Palette};
use crate::series::{ChartConfig, DataSeries, PieChartSpec};
use crate::surface::RenderSurface;

/// One slice of one frame.
///
/// Segments are recomputed from scratch every frame and never mutated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcSegment {
    /// Position of the slice in the series.
    pub index: usize,
    /// Angle where the slice starts (the previous slice's end angle).
    pub start_angle: f64,
    /// Angle where the slice ends.
    pub end_angle: f64,
    /// Share of the full turn drawn this frame.
    pub ratio: f64,
    /// Whether the arc spans more than half a turn.
    pub large_arc: bool,
    /// Fill color, wrapped from the palette.
    pub color: Color,
    /// End point of the slice on the unit circle.
    pub boundary_point: Point,
    /// The slice's wedge geometry.
    pub path: WedgePath,
    /// Label anchor angle (the slice's angular midpoint); only set on the final frame.
    pub label_angle: Option<f64>,
}

/// Computes every segment for a frame at `progress`.
///
/// The series is checked before any slice is computed: a negative value or a non-positive
/// sum fails the whole frame.
pub fn compute_segments(
    values: &DataSeries,
    palette: &Palette,
    progress: f64,
) -> Result<Vec<ArcSegment>, ComputationError> {
    let total = values.total()?;
    if !(0.0..=1.0).contains(&progress) {
        return Err(ComputationError::InvalidProgress(progress));
    }
    let is_final = progress == 1.0;

    let mut cursor = SliceCursor::START;
    let mut out = Vec::with_capacity(values.len());
    for (index, &value) in values.values().iter().enumerate() {
        let slice = compute_slice(value, total, progress, cursor)?;
        out.push(ArcSegment {
            index,
            start_angle: slice.start_angle,
            end_angle: slice.end_angle,
            ratio: slice.ratio,
            large_arc: slice.path.large_arc,
            color: palette.color(index),
            boundary_point: slice.boundary_point(),
            path: slice.path,
            label_angle: is_final.then(|| slice.mid_angle()),
        });
        cursor = slice.next;
    }
    Ok(out)
}

/// Owns the chart inputs and the surface primitives, and redraws on request.
pub struct ChartEngine<S: RenderSurface> {
    surface: S,
    values: DataSeries,
    labels: LabelSet,
    palette: Palette,
    config: ChartConfig,
    paths: Vec<S::Path>,
    lines: Vec<S::Line>,
    label_handles: Vec<S::Label>,
}

impl<S: RenderSurface + fmt::Debug> fmt::Debug for ChartEngine<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChartEngine")
            .field("surface", &self.surface)
            .field("values", &self.values)
            .field("labels", &self.labels)
            .field("palette", &self.palette)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<S: RenderSurface> ChartEngine<S> {
    /// Validates `spec` and creates one path and line per value and one label per label.
    pub fn new(spec: PieChartSpec, mut surface: S) -> Result<Self, ConfigurationError> {
        spec.validate()?;
        let PieChartSpec {
            values,
            labels,
            palette,
            config,
        } = spec;

        surface.configure(&config);
        let paths = (0..values.len())
            .map(|i| surface.create_path(i, palette.color(i)))
            .collect();
        let lines = (0..values.len())
            .map(|i| surface.create_line(i, config.gap_width))
            .collect();
        let label_handles = labels
            .iter()
            .enumerate()
            .map(|(i, text)| surface.create_label(i, text))
            .collect();
        log::debug!(
            "chart engine created: {} slices, {} labels",
            values.len(),
            labels.len()
        );

        Ok(Self {
            surface,
            values,
            labels,
            palette,
            config,
            paths,
            lines,
            label_handles,
        })
    }

    /// Redraws every slice at `progress` and, when `progress == 1`, places the labels.
    ///
    /// On error nothing is pushed to the surface.
    pub fn draw(&mut self, progress: f64) -> Result<(), ComputationError> {
        let segments = compute_segments(&self.values, &self.palette, progress).inspect_err(|e| {
            log::warn!("draw at progress {progress} rejected: {e}");
        })?;

        for segment in &segments {
            self.surface
                .update_path(&self.paths[segment.index], &segment.path);
            self.surface
                .update_line(&self.lines[segment.index], segment.boundary_point);
            if let (Some(angle), Some(label)) =
                (segment.label_angle, self.label_handles.get(segment.index))
            {
                let position = to_percent_position(point_on_unit_circle(angle), LABEL_SCALE);
                self.surface.set_label_position(label, position);
            }
        }
        Ok(())
    }

    /// Shows or hides the label of slice `index`. Returns `false` if that slice has no label.
    pub fn set_label_active(&mut self, index: usize, active: bool) -> bool {
        match self.label_handles.get(index) {
            Some(label) => {
                self.surface.set_label_active(label, active);
                true
            }
            None => false,
        }
    }

    /// Returns `true` if slice `index` has a label.
    pub fn has_label(&self, index: usize) -> bool {
        index < self.label_handles.len()
    }

    /// Returns the number of slices.
    pub fn slice_count(&self) -> usize {
        self.values.len()
    }

    /// Returns the value series.
    pub fn values(&self) -> &DataSeries {
        &self.values
    }

    /// Returns the labels.
    pub fn labels(&self) -> &LabelSet {
        &self.labels
    }

    /// Returns the palette.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Returns the config.
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Returns the surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Returns the surface mutably.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Consumes the engine and returns the surface.
    pub fn into_surface(self) -> S {
        self.surface
    }
}
