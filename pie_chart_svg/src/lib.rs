// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG/HTML host for `pie_chart_core`.
//!
//! - [`SvgSurface`] implements `RenderSurface` by retaining primitives and serializing them as an
//!   SVG (unit view box, donut mask, gap lines) plus absolutely positioned HTML labels.
//! - [`FrameQueue`] implements `Scheduler` as a plain queue of frame tokens, for hosts that
//!   drive frames from their own loop (or from tests).

mod frame_queue;
mod surface;

pub use frame_queue::FrameQueue;
pub use surface::{LabelHandle, LineHandle, PIE_CHART_CSS, PathHandle, SvgSurface};
