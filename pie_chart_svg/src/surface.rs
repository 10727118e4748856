// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Retained SVG/HTML render surface.

use std::fmt::Write as _;

use kurbo::Point;
use peniko::Color;
use pie_chart_core::{ChartConfig, PercentPosition, RenderSurface, WedgePath};

/// Stylesheet for the HTML produced by [`SvgSurface::to_html_string`].
///
/// Labels are centered on their anchor and fade in when `is-active` is set; hovered slices
/// are dimmed.
pub const PIE_CHART_CSS: &str = r#".pie-chart {
  display: block;
  position: relative;
}
.pie-chart svg {
  width: 100%;
  height: 100%;
}
.pie-chart path {
  cursor: pointer;
  transition: opacity .3s;
}
.pie-chart path:hover {
  opacity: .5;
}
.pie-chart .label {
  position: absolute;
  top: 0;
  left: 0;
  font-size: .8rem;
  padding: .1em .2em;
  transform: translate(-50%, -50%);
  background-color: var(--tooltip-bg, #FFF);
  opacity: 0;
  transition: opacity .3s;
  pointer-events: none;
}
.pie-chart .is-active {
  opacity: 1;
}
"#;

/// Handle to a slice path on an [`SvgSurface`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathHandle(usize);

/// Handle to a separator line on an [`SvgSurface`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineHandle(usize);

/// Handle to a label on an [`SvgSurface`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LabelHandle(usize);

#[derive(Clone, Debug)]
struct SvgPath {
    fill: Color,
    d: Option<String>,
}

#[derive(Clone, Debug)]
struct SvgLine {
    stroke_width: f64,
    end: Option<Point>,
}

#[derive(Clone, Debug)]
struct SvgLabel {
    text: String,
    position: Option<PercentPosition>,
    active: bool,
}

/// A [`RenderSurface`] that keeps the latest geometry and serializes it on demand.
///
/// The SVG uses a `-1 -1 2 2` view box. Slices are drawn inside a group masked by a white
/// rect, a black donut-hole circle, and one black separator line per slice.
#[derive(Clone, Debug)]
pub struct SvgSurface {
    mask_id: String,
    donut_radius: f64,
    bezier_tolerance: Option<f64>,
    paths: Vec<SvgPath>,
    lines: Vec<SvgLine>,
    labels: Vec<SvgLabel>,
}

impl Default for SvgSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgSurface {
    /// Creates an empty surface with mask id `graphMask`.
    pub fn new() -> Self {
        Self {
            mask_id: "graphMask".to_string(),
            donut_radius: 0.0,
            bezier_tolerance: None,
            paths: Vec::new(),
            lines: Vec::new(),
            labels: Vec::new(),
        }
    }

    /// Sets the mask element id. Use distinct ids when several charts share a document.
    pub fn with_mask_id(mut self, id: impl Into<String>) -> Self {
        self.set_mask_id(id);
        self
    }

    /// Replaces the mask element id, e.g. before serializing another snapshot of the same
    /// chart into a document that already holds earlier ones.
    pub fn set_mask_id(&mut self, id: impl Into<String>) {
        self.mask_id = id.into();
    }

    /// Returns the mask element id.
    pub fn mask_id(&self) -> &str {
        &self.mask_id
    }

    /// Emits slices as cubic Béziers (flattened at `tolerance`) instead of SVG arc commands.
    pub fn with_bezier_paths(mut self, tolerance: f64) -> Self {
        self.bezier_tolerance = Some(tolerance);
        self
    }

    /// Returns the latest path data of slice `index`, if it has been drawn.
    pub fn path_data(&self, index: usize) -> Option<&str> {
        self.paths.get(index)?.d.as_deref()
    }

    /// Returns the outer endpoint of separator line `index`, if it has been drawn.
    pub fn line_end(&self, index: usize) -> Option<Point> {
        self.lines.get(index)?.end
    }

    /// Returns the position of label `index`, if it has been placed.
    pub fn label_position(&self, index: usize) -> Option<PercentPosition> {
        self.labels.get(index)?.position
    }

    /// Returns `true` if label `index` exists and is shown.
    pub fn is_label_active(&self, index: usize) -> bool {
        self.labels.get(index).is_some_and(|l| l.active)
    }

    /// Serializes the slices and mask as a standalone SVG element.
    pub fn to_svg_string(&self) -> String {
        let mut out = String::new();
        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="-1 -1 2 2">"#);
        out.push('\n');

        let _ = writeln!(out, r#"<g mask="url(#{})">"#, escape_xml(&self.mask_id));
        for path in &self.paths {
            let Some(d) = &path.d else {
                continue;
            };
            let _ = write!(out, r#"<path d="{d}""#);
            write_paint_attr(&mut out, "fill", path.fill);
            out.push_str("/>\n");
        }
        out.push_str("</g>\n");

        let _ = writeln!(out, r#"<mask id="{}">"#, escape_xml(&self.mask_id));
        out.push_str(r##"<rect fill="#fff" x="-1" y="-1" width="2" height="2"/>"##);
        out.push('\n');
        let _ = writeln!(out, r##"<circle fill="#000" r="{}"/>"##, self.donut_radius);
        for line in &self.lines {
            let Some(end) = line.end else {
                continue;
            };
            let _ = writeln!(
                out,
                r##"<line stroke="#000" stroke-width="{}" x1="0" y1="0" x2="{}" y2="{}"/>"##,
                line.stroke_width, end.x, end.y
            );
        }
        out.push_str("</mask>\n");

        out.push_str("</svg>\n");
        out
    }

    /// Serializes the SVG and the labels inside a `.pie-chart` container of the given size.
    ///
    /// Pair with [`PIE_CHART_CSS`].
    pub fn to_html_string(&self, width_px: f64, height_px: f64) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<div class="pie-chart" style="width: {width_px}px; height: {height_px}px">"#
        );
        out.push_str(&self.to_svg_string());
        for label in &self.labels {
            let class = if label.active { "label is-active" } else { "label" };
            let _ = write!(out, r#"<div class="{class}""#);
            if let Some(p) = label.position {
                let _ = write!(out, r#" style="left: {}%; top: {}%""#, p.left, p.top);
            }
            out.push('>');
            out.push_str(&escape_xml(&label.text));
            out.push_str("</div>\n");
        }
        out.push_str("</div>\n");
        out
    }
}

impl RenderSurface for SvgSurface {
    type Path = PathHandle;
    type Line = LineHandle;
    type Label = LabelHandle;

    fn configure(&mut self, config: &ChartConfig) {
        self.donut_radius = config.donut_radius;
    }

    fn create_path(&mut self, _index: usize, fill: Color) -> PathHandle {
        self.paths.push(SvgPath { fill, d: None });
        PathHandle(self.paths.len() - 1)
    }

    fn create_line(&mut self, _index: usize, stroke_width: f64) -> LineHandle {
        self.lines.push(SvgLine {
            stroke_width,
            end: None,
        });
        LineHandle(self.lines.len() - 1)
    }

    fn create_label(&mut self, _index: usize, text: &str) -> LabelHandle {
        self.labels.push(SvgLabel {
            text: text.to_string(),
            position: None,
            active: false,
        });
        LabelHandle(self.labels.len() - 1)
    }

    fn update_path(&mut self, path: &PathHandle, wedge: &WedgePath) {
        let d = match self.bezier_tolerance {
            Some(tolerance) => wedge.to_bez_path(tolerance).to_svg(),
            None => wedge.to_svg(),
        };
        if let Some(p) = self.paths.get_mut(path.0) {
            p.d = Some(d);
        }
    }

    fn update_line(&mut self, line: &LineHandle, end: Point) {
        if let Some(l) = self.lines.get_mut(line.0) {
            l.end = Some(end);
        }
    }

    fn set_label_position(&mut self, label: &LabelHandle, position: PercentPosition) {
        if let Some(l) = self.labels.get_mut(label.0) {
            l.position = Some(position);
        }
    }

    fn set_label_active(&mut self, label: &LabelHandle, active: bool) {
        if let Some(l) = self.labels.get_mut(label.0) {
            l.active = active;
        }
    }
}

fn svg_paint(color: Color) -> (String, Option<f64>) {
    let rgba = color.to_rgba8();
    let value = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
    let opacity = if rgba.a == 255 {
        None
    } else {
        Some(f64::from(rgba.a) / 255.0)
    };
    (value, opacity)
}

fn write_paint_attr(out: &mut String, name: &str, color: Color) {
    let (value, opacity) = svg_paint(color);
    let _ = write!(out, r#" {name}="{value}""#);
    if let Some(o) = opacity {
        let _ = write!(out, r#" {name}-opacity="{o}""#);
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
