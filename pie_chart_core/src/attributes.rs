// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Building a [`PieChartSpec`] from element-style string attributes.
//!
//! List attributes (`data`, `colors`, `labels`) are `;`-separated and may end with one
//! trailing separator. Entries keep their position: a blank `data` or `colors` entry is an
//! error reported at that position, a blank label is an empty label. Scalars are `gap`,
//! `donut` and `duration`. Unknown names are ignored.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use peniko::Color;
use peniko::color::{Srgb, parse_color};

use crate::error::ConfigurationError;
use crate::palette::{LabelSet, Palette};
use crate::series::{ChartConfig, DataSeries, PieChartSpec};

#[derive(Default)]
struct RawAttributes<'a> {
    data: Option<&'a str>,
    colors: Option<&'a str>,
    labels: Option<&'a str>,
    gap: Option<&'a str>,
    donut: Option<&'a str>,
    duration: Option<&'a str>,
}

impl PieChartSpec {
    /// Parses a spec from `(name, value)` attribute pairs.
    ///
    /// `data` is required. A missing `colors` attribute selects [`crate::DEFAULT_PALETTE`];
    /// a present but empty one is an error. The resulting spec is validated.
    pub fn from_attributes<'a>(
        attrs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, ConfigurationError> {
        let mut raw = RawAttributes::default();
        for (name, value) in attrs {
            match name {
                "data" => raw.data = Some(value),
                "colors" => raw.colors = Some(value),
                "labels" => raw.labels = Some(value),
                "gap" => raw.gap = Some(value),
                "donut" => raw.donut = Some(value),
                "duration" => raw.duration = Some(value),
                _ => {}
            }
        }

        let data = raw.data.ok_or(ConfigurationError::MissingAttribute("data"))?;
        let values = parse_values(data)?;

        let palette = match raw.colors {
            Some(colors) => Palette::new(parse_colors(colors)?)?,
            None => Palette::default(),
        };

        let labels = raw
            .labels
            .map(|l| LabelSet::new(split_list(l)))
            .unwrap_or_default();

        let mut config = ChartConfig::default();
        if let Some(gap) = raw.gap {
            config.gap_width = parse_scalar("gap", gap)?;
        }
        if let Some(donut) = raw.donut {
            config.donut_radius = parse_scalar("donut", donut)?;
        }
        if let Some(duration) = raw.duration {
            config.animation_duration_ms = parse_scalar("duration", duration)?;
        }

        let spec = Self {
            values,
            labels,
            palette,
            config,
        };
        spec.validate()?;
        Ok(spec)
    }
}

/// Splits on `;` and trims, dropping only a blank final entry so `"a;b;"` has two entries.
fn split_list(list: &str) -> Vec<&str> {
    let mut entries: Vec<&str> = list.split(';').map(str::trim).collect();
    if entries.last().is_some_and(|e| e.is_empty()) {
        entries.pop();
    }
    entries
}

fn parse_values(list: &str) -> Result<DataSeries, ConfigurationError> {
    let values = split_list(list)
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            entry
                .parse::<f64>()
                .map_err(|_| ConfigurationError::InvalidValue {
                    index,
                    raw: entry.to_string(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;
    DataSeries::new(values)
}

fn parse_colors(list: &str) -> Result<Vec<Color>, ConfigurationError> {
    split_list(list)
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            parse_color(entry)
                .map(|c| c.to_alpha_color::<Srgb>())
                .map_err(|_| ConfigurationError::InvalidColor {
                    index,
                    raw: entry.to_string(),
                })
        })
        .collect()
}

fn parse_scalar<T: core::str::FromStr>(
    name: &'static str,
    raw: &str,
) -> Result<T, ConfigurationError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigurationError::InvalidAttribute {
            name,
            raw: String::from(raw),
        })
}

#[cfg(test)]
mod tests {
    extern crate std;

    use peniko::color::palette::css;

    use super::*;
    use crate::palette::DEFAULT_PALETTE;

    #[test]
    fn parses_full_attribute_set() {
        let spec = PieChartSpec::from_attributes([
            ("data", "1;1;2;4"),
            ("colors", "#ff0000; blue"),
            ("labels", "a;b;c"),
            ("gap", "0.02"),
            ("donut", "0.5"),
            ("duration", "750"),
            ("class", "ignored"),
        ])
        .unwrap();

        assert_eq!(spec.values.values(), &[1.0, 1.0, 2.0, 4.0]);
        assert_eq!(spec.palette.len(), 2);
        assert_eq!(spec.palette.color(1), css::BLUE);
        assert_eq!(spec.labels.get(2), Some("c"));
        assert_eq!(spec.labels.get(3), None);
        assert_eq!(spec.config.gap_width, 0.02);
        assert_eq!(spec.config.donut_radius, 0.5);
        assert_eq!(spec.config.animation_duration_ms, 750);
    }

    #[test]
    fn blank_labels_keep_their_position() {
        let spec = PieChartSpec::from_attributes([("data", "1;2;3"), ("labels", "a;;c")]).unwrap();
        assert_eq!(spec.labels.get(1), Some(""));
        assert_eq!(spec.labels.get(2), Some("c"));
    }

    #[test]
    fn absent_optional_attributes_use_defaults() {
        let spec = PieChartSpec::from_attributes([("data", "3;2")]).unwrap();
        assert_eq!(spec.palette.colors(), &DEFAULT_PALETTE);
        assert!(spec.labels.is_empty());
        assert_eq!(spec.config, ChartConfig::default());
    }

    #[test]
    fn missing_data_is_an_error() {
        assert_eq!(
            PieChartSpec::from_attributes([("colors", "red")]),
            Err(ConfigurationError::MissingAttribute("data"))
        );
    }

    #[test]
    fn malformed_entries_are_reported_with_their_index() {
        assert_eq!(
            PieChartSpec::from_attributes([("data", "1;x;3")]),
            Err(ConfigurationError::InvalidValue {
                index: 1,
                raw: "x".into()
            })
        );
        assert!(matches!(
            PieChartSpec::from_attributes([("data", "1"), ("colors", "red;notacolor")]),
            Err(ConfigurationError::InvalidColor { index: 1, .. })
        ));
        assert!(matches!(
            PieChartSpec::from_attributes([("data", "1"), ("donut", "wide")]),
            Err(ConfigurationError::InvalidAttribute { name: "donut", .. })
        ));
    }

    #[test]
    fn present_but_empty_colors_is_an_error() {
        assert_eq!(
            PieChartSpec::from_attributes([("data", "1"), ("colors", "")]),
            Err(ConfigurationError::EmptyPalette)
        );
    }

    #[test]
    fn empty_data_is_an_error() {
        assert_eq!(
            PieChartSpec::from_attributes([("data", "  ")]),
            Err(ConfigurationError::EmptyValues)
        );
        // Only the final blank is dropped; the one before it is a malformed entry.
        assert_eq!(
            PieChartSpec::from_attributes([("data", " ; ")]),
            Err(ConfigurationError::InvalidValue {
                index: 0,
                raw: "".into()
            })
        );
    }

    #[test]
    fn blank_data_entries_are_reported_at_their_position() {
        assert_eq!(
            PieChartSpec::from_attributes([("data", "1;;2;3"), ("labels", "a;b;c")]),
            Err(ConfigurationError::InvalidValue {
                index: 1,
                raw: "".into()
            })
        );
        assert_eq!(
            PieChartSpec::from_attributes([("data", "1;;x")]),
            Err(ConfigurationError::InvalidValue {
                index: 1,
                raw: "".into()
            })
        );
        assert_eq!(
            PieChartSpec::from_attributes([("data", "1;2;x")]),
            Err(ConfigurationError::InvalidValue {
                index: 2,
                raw: "x".into()
            })
        );
        assert!(matches!(
            PieChartSpec::from_attributes([("data", "1"), ("colors", "red;;blue")]),
            Err(ConfigurationError::InvalidColor { index: 1, .. })
        ));
    }

    #[test]
    fn one_trailing_separator_is_allowed() {
        let spec = PieChartSpec::from_attributes([
            ("data", "1;2;"),
            ("colors", "red;blue;"),
            ("labels", "a;b;"),
        ])
        .unwrap();
        assert_eq!(spec.values.values(), &[1.0, 2.0]);
        assert_eq!(spec.palette.len(), 2);
        assert_eq!(spec.labels.len(), 2);
        assert_eq!(spec.labels.get(1), Some("b"));
    }

    #[test]
    fn config_constraints_apply() {
        assert_eq!(
            PieChartSpec::from_attributes([("data", "1"), ("donut", "1")]),
            Err(ConfigurationError::InvalidDonutRadius(1.0))
        );
        assert_eq!(
            PieChartSpec::from_attributes([("data", "1"), ("labels", "a;b")]),
            Err(ConfigurationError::TooManyLabels {
                labels: 2,
                values: 1
            })
        );
    }
}
