// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slice colors and labels, paired with the value series by position.
//!
//! Colors wrap around (`index % len`); labels may run out, in which case the remaining slices
//! simply have no label.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use peniko::Color;

use crate::error::ConfigurationError;

/// The palette used when no colors are configured (purple through orange).
pub const DEFAULT_PALETTE: [Color; 8] = [
    Color::from_rgb8(0x55, 0x09, 0x5c),
    Color::from_rgb8(0x7e, 0x02, 0x5f),
    Color::from_rgb8(0xa3, 0x07, 0x5c),
    Color::from_rgb8(0xc4, 0x20, 0x54),
    Color::from_rgb8(0xdf, 0x3e, 0x48),
    Color::from_rgb8(0xf2, 0x5f, 0x39),
    Color::from_rgb8(0xfd, 0x82, 0x24),
    Color::from_rgb8(0xff, 0xa6, 0x00),
];

/// A non-empty, cyclically indexed list of slice colors.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Creates a palette, rejecting an empty color list.
    pub fn new(colors: Vec<Color>) -> Result<Self, ConfigurationError> {
        if colors.is_empty() {
            return Err(ConfigurationError::EmptyPalette);
        }
        Ok(Self { colors })
    }

    /// Returns the color for slice `index`, wrapping around the palette.
    pub fn color(&self, index: usize) -> Color {
        self.colors[index % self.colors.len()]
    }

    /// Returns the number of distinct colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns `false`: [`Self::new`] rejects empty palettes. Provided to pair with [`Self::len`].
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Returns the colors in order.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_PALETTE.to_vec(),
        }
    }
}

/// Slice labels, paired with values by position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LabelSet {
    labels: Vec<String>,
}

impl LabelSet {
    /// Creates a label set.
    pub fn new(labels: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the label for slice `index`, or `None` past the end of the set.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Returns the number of labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` if there are no labels.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterates the labels in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;
    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn colors_wrap_around() {
        let palette = Palette::new(vec![css::RED, css::GREEN, css::BLUE]).unwrap();
        assert_eq!(palette.color(0), css::RED);
        assert_eq!(palette.color(2), css::BLUE);
        assert_eq!(palette.color(3), css::RED);
        assert_eq!(palette.color(7), css::GREEN);
    }

    #[test]
    fn empty_palette_is_rejected() {
        assert_eq!(Palette::new(Vec::new()), Err(ConfigurationError::EmptyPalette));
    }

    #[test]
    fn default_palette_has_eight_colors() {
        let palette = Palette::default();
        assert_eq!(palette.len(), 8);
        assert!(!palette.is_empty());
        let first = palette.color(0).to_rgba8();
        assert_eq!((first.r, first.g, first.b, first.a), (0x55, 0x09, 0x5c, 0xff));
        assert_eq!(palette.color(8), palette.color(0));
    }

    #[test]
    fn missing_labels_are_absent() {
        let labels = LabelSet::new(["a", "b"]);
        assert_eq!(labels.get(1), Some("b"));
        assert_eq!(labels.get(2), None);
        assert_eq!(LabelSet::default().get(0), None);
    }
}
