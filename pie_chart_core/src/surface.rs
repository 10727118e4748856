// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The render surface capability.
//!
//! The core never builds DOM/SVG nodes itself. It asks a [`RenderSurface`] for opaque handles,
//! one path, one separator line and (when a label exists) one label per slice, then pushes
//! geometry into those handles every frame.

use kurbo::Point;
use peniko::Color;

use crate::arc_path::WedgePath;
use crate::geometry::PercentPosition;
use crate::series::ChartConfig;

/// A host that can create and update chart primitives.
///
/// Handles are owned by the chart and passed back by reference on every update.
pub trait RenderSurface {
    /// Handle to a filled slice path.
    type Path;
    /// Handle to a separator line running from the center to a slice boundary.
    type Line;
    /// Handle to a text label positioned in percent of the host box.
    type Label;

    /// Called once, before any primitive is created.
    ///
    /// Surfaces use this to set up the donut hole (radius `config.donut_radius`) and the
    /// separator stroke width.
    fn configure(&mut self, config: &ChartConfig) {
        let _ = config;
    }

    /// Creates the path for slice `index`, filled with `fill`.
    fn create_path(&mut self, index: usize, fill: Color) -> Self::Path;

    /// Creates the separator line for slice `index`, starting at the center.
    fn create_line(&mut self, index: usize, stroke_width: f64) -> Self::Line;

    /// Creates the (initially hidden) label for slice `index`.
    fn create_label(&mut self, index: usize, text: &str) -> Self::Label;

    /// Replaces a slice's wedge geometry.
    fn update_path(&mut self, path: &Self::Path, wedge: &WedgePath);

    /// Moves a separator line's outer endpoint.
    fn update_line(&mut self, line: &Self::Line, end: Point);

    /// Places a label.
    fn set_label_position(&mut self, label: &Self::Label, position: PercentPosition);

    /// Shows or hides a label.
    fn set_label_active(&mut self, label: &Self::Label, active: bool);
}
