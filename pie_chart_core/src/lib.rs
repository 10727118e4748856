// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Computational core for an animated pie/donut chart.
//!
//! The crate turns an ordered series of non-negative values into contiguous angular slices,
//! describes each slice as an exact arc wedge, reveals the chart progressively over a fixed
//! duration, and tracks which slice label is active under the pointer.
//!
//! Everything host-specific is behind two capabilities:
//! - [`RenderSurface`] creates path/line/label primitives and accepts geometry updates.
//! - [`Scheduler`] hands out cancellable frame requests.
//!
//! The pieces, leaf-first:
//! - **Geometry**: [`point_on_unit_circle`] and [`to_percent_position`].
//! - **Arc paths**: [`compute_slice`] chains one slice onto its predecessor.
//! - **Animation**: [`AnimationDriver`] maps elapsed time to draw progress.
//! - **Engine**: [`ChartEngine`] walks the series and publishes updates to the surface.
//! - **Interaction**: [`InteractionDispatcher`] maps hover to label visibility and notifications.
//!
//! [`PieChart`] wires these together behind an explicit `init`/`start`/`teardown` lifecycle.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod animation;
mod arc_path;
mod attributes;
mod chart;
mod engine;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod geometry;
mod interaction;
mod palette;
mod scheduler;
mod series;
mod surface;

pub use animation::{AnimationDriver, AnimationState, FrameOutcome};
pub use arc_path::{ComputedSlice, SliceCursor, WedgePath, compute_slice};
pub use chart::{FrameStatus, PieChart};
pub use engine::{ArcSegment, ChartEngine, compute_segments};
pub use error::{ComputationError, ConfigurationError};
pub use geometry::{
    LABEL_SCALE, PercentPosition, START_ANGLE, START_POINT, point_on_unit_circle,
    to_percent_position,
};
pub use interaction::{InteractionDispatcher, LabelTransition, SliceHoverEvent, SubscriptionId};
pub use palette::{DEFAULT_PALETTE, LabelSet, Palette};
pub use scheduler::{FrameToken, Scheduler};
pub use series::{ChartConfig, DataSeries, PieChartSpec};
pub use surface::RenderSurface;
