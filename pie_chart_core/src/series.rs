// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart inputs: the value series, display configuration, and the bundle handed to
//! [`crate::PieChart::init`].
//!
//! All of these are fixed once a chart is built.

extern crate alloc;

use alloc::format;
use alloc::vec::Vec;

use crate::error::{ComputationError, ConfigurationError};
use crate::palette::{LabelSet, Palette};

/// Ordered slice values. Insertion order is draw order.
#[derive(Clone, Debug, PartialEq)]
pub struct DataSeries {
    values: Vec<f64>,
}

impl DataSeries {
    /// Creates a series, rejecting an empty list or non-finite entries.
    ///
    /// Negative entries are accepted here and rejected per draw cycle by [`Self::total`].
    pub fn new(values: Vec<f64>) -> Result<Self, ConfigurationError> {
        if values.is_empty() {
            return Err(ConfigurationError::EmptyValues);
        }
        if let Some((index, v)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigurationError::InvalidValue {
                index,
                raw: format!("{v}"),
            });
        }
        Ok(Self { values })
    }

    /// Returns the values in draw order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the number of slices.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `false`: [`Self::new`] rejects empty series. Provided to pair with [`Self::len`].
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Checks the series is drawable and returns its sum.
    ///
    /// Fails on the first negative value, when the sum is not strictly positive, or when it
    /// overflows.
    pub fn total(&self) -> Result<f64, ComputationError> {
        if let Some((index, &value)) = self.values.iter().enumerate().find(|(_, v)| **v < 0.0) {
            return Err(ComputationError::NegativeValue { index, value });
        }
        let total: f64 = self.values.iter().sum();
        if !(total > 0.0) {
            return Err(ComputationError::NonPositiveTotal(total));
        }
        if total.is_infinite() {
            return Err(ComputationError::NonFiniteTotal);
        }
        Ok(total)
    }
}

/// Display and timing options.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartConfig {
    /// Stroke width of the separator lines between slices, in view-box units.
    pub gap_width: f64,
    /// Radius of the hole punched out of the center; `0` draws a solid pie.
    pub donut_radius: f64,
    /// Length of the reveal animation.
    pub animation_duration_ms: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            gap_width: 0.0,
            donut_radius: 0.0,
            animation_duration_ms: 1000,
        }
    }
}

impl ChartConfig {
    /// Sets the separator stroke width.
    pub fn with_gap_width(mut self, gap_width: f64) -> Self {
        self.gap_width = gap_width;
        self
    }

    /// Sets the donut hole radius.
    pub fn with_donut_radius(mut self, donut_radius: f64) -> Self {
        self.donut_radius = donut_radius;
        self
    }

    /// Sets the animation duration.
    pub fn with_animation_duration_ms(mut self, ms: u32) -> Self {
        self.animation_duration_ms = ms;
        self
    }

    /// Checks `gap_width >= 0`, `0 <= donut_radius < 1`, and a non-zero duration.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !(self.gap_width.is_finite() && self.gap_width >= 0.0) {
            return Err(ConfigurationError::InvalidGapWidth(self.gap_width));
        }
        if !(0.0..1.0).contains(&self.donut_radius) {
            return Err(ConfigurationError::InvalidDonutRadius(self.donut_radius));
        }
        if self.animation_duration_ms == 0 {
            return Err(ConfigurationError::InvalidDuration(0));
        }
        Ok(())
    }
}

/// Everything needed to build a chart.
#[derive(Clone, Debug, PartialEq)]
pub struct PieChartSpec {
    /// Slice values.
    pub values: DataSeries,
    /// Slice labels; may be shorter than `values`.
    pub labels: LabelSet,
    /// Slice colors.
    pub palette: Palette,
    /// Display and timing options.
    pub config: ChartConfig,
}

impl PieChartSpec {
    /// Creates a spec with the default palette, no labels, and the default config.
    pub fn new(values: Vec<f64>) -> Result<Self, ConfigurationError> {
        Ok(Self {
            values: DataSeries::new(values)?,
            labels: LabelSet::default(),
            palette: Palette::default(),
            config: ChartConfig::default(),
        })
    }

    /// Sets the labels.
    pub fn with_labels(mut self, labels: LabelSet) -> Self {
        self.labels = labels;
        self
    }

    /// Sets the palette.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Sets the config.
    pub fn with_config(mut self, config: ChartConfig) -> Self {
        self.config = config;
        self
    }

    /// Checks cross-field constraints (label count) and the config.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.labels.len() > self.values.len() {
            return Err(ConfigurationError::TooManyLabels {
                labels: self.labels.len(),
                values: self.values.len(),
            });
        }
        self.config.validate()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    #[test]
    fn empty_or_non_finite_series_is_a_configuration_error() {
        assert_eq!(DataSeries::new(vec![]), Err(ConfigurationError::EmptyValues));
        assert!(matches!(
            DataSeries::new(vec![1.0, f64::NAN]),
            Err(ConfigurationError::InvalidValue { index: 1, .. })
        ));
        assert!(matches!(
            DataSeries::new(vec![f64::INFINITY]),
            Err(ConfigurationError::InvalidValue { index: 0, .. })
        ));
    }

    #[test]
    fn total_rejects_negative_and_zero_sums() {
        let zero = DataSeries::new(vec![0.0, 0.0]).unwrap();
        assert_eq!(zero.total(), Err(ComputationError::NonPositiveTotal(0.0)));

        let negative = DataSeries::new(vec![3.0, -1.0]).unwrap();
        assert_eq!(
            negative.total(),
            Err(ComputationError::NegativeValue {
                index: 1,
                value: -1.0
            })
        );

        let ok = DataSeries::new(vec![1.0, 1.0, 2.0, 4.0]).unwrap();
        assert!(!ok.is_empty());
        assert_eq!(ok.total(), Ok(8.0));
    }

    #[test]
    fn total_rejects_overflowing_sums() {
        let huge = DataSeries::new(vec![1e308, 1e308]).unwrap();
        assert_eq!(huge.total(), Err(ComputationError::NonFiniteTotal));

        let large = DataSeries::new(vec![1e307, 1e307]).unwrap();
        assert_eq!(large.total(), Ok(2e307));
    }

    #[test]
    fn config_bounds() {
        assert_eq!(ChartConfig::default().validate(), Ok(()));
        assert_eq!(
            ChartConfig::default().with_gap_width(-0.1).validate(),
            Err(ConfigurationError::InvalidGapWidth(-0.1))
        );
        assert_eq!(
            ChartConfig::default().with_donut_radius(1.0).validate(),
            Err(ConfigurationError::InvalidDonutRadius(1.0))
        );
        assert_eq!(
            ChartConfig::default()
                .with_animation_duration_ms(0)
                .validate(),
            Err(ConfigurationError::InvalidDuration(0))
        );
        assert_eq!(
            ChartConfig::default()
                .with_donut_radius(0.5)
                .with_gap_width(0.02)
                .validate(),
            Ok(())
        );
    }

    #[test]
    fn more_labels_than_values_is_rejected() {
        let spec = PieChartSpec::new(vec![1.0])
            .unwrap()
            .with_labels(LabelSet::new(["a", "b"]));
        assert_eq!(
            spec.validate(),
            Err(ConfigurationError::TooManyLabels {
                labels: 2,
                values: 1
            })
        );
    }
}
