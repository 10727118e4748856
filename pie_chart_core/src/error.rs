// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for chart construction and per-frame computation.

extern crate alloc;

use alloc::string::String;

use thiserror::Error;

/// Errors surfaced while building a chart.
///
/// A chart is never constructed from input that would produce undefined geometry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    /// The value series is empty.
    #[error("value series is empty")]
    EmptyValues,
    /// A value entry is unparseable or not finite.
    #[error("invalid value at index {index}: {raw:?}")]
    InvalidValue {
        /// Position of the entry in the series.
        index: usize,
        /// The offending input text.
        raw: String,
    },
    /// The color palette is empty.
    #[error("color palette is empty")]
    EmptyPalette,
    /// A color entry could not be parsed.
    #[error("invalid color at index {index}: {raw:?}")]
    InvalidColor {
        /// Position of the entry in the palette.
        index: usize,
        /// The offending input text.
        raw: String,
    },
    /// More labels than values were supplied.
    #[error("{labels} labels supplied for {values} values")]
    TooManyLabels {
        /// Number of labels.
        labels: usize,
        /// Number of values.
        values: usize,
    },
    /// The gap width is negative or not finite.
    #[error("gap width must be finite and >= 0, got {0}")]
    InvalidGapWidth(f64),
    /// The donut radius is outside `[0, 1)`.
    #[error("donut radius must be in [0, 1), got {0}")]
    InvalidDonutRadius(f64),
    /// The animation duration is zero.
    #[error("animation duration must be > 0 ms, got {0}")]
    InvalidDuration(u32),
    /// A scalar attribute could not be parsed.
    #[error("invalid `{name}` attribute: {raw:?}")]
    InvalidAttribute {
        /// Attribute name.
        name: &'static str,
        /// The offending input text.
        raw: String,
    },
    /// A required attribute is absent.
    #[error("missing required `{0}` attribute")]
    MissingAttribute(&'static str),
}

/// Errors that reject a single draw cycle before any geometry is computed.
///
/// These are recoverable: the caller decides whether to retry with other input.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ComputationError {
    /// The values sum to zero (or less), so no slice has a defined share.
    #[error("sum of values must be > 0, got {0}")]
    NonPositiveTotal(f64),
    /// The values are finite but their sum overflows, so every share would round to zero.
    #[error("sum of values overflows f64")]
    NonFiniteTotal,
    /// A value is negative.
    #[error("value at index {index} is negative: {value}")]
    NegativeValue {
        /// Position of the value in the series.
        index: usize,
        /// The negative value.
        value: f64,
    },
    /// Draw progress outside `[0, 1]` or NaN.
    #[error("draw progress must be in [0, 1], got {0}")]
    InvalidProgress(f64),
}
