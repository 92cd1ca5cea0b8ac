// Copyright 2025 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legend rows: one formatted readout per track.
//!
//! Markup is left to renderers; this module only decides what each row says.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use peniko::Color;

#[cfg(not(any(feature = "std", test)))]
use crate::float::FloatExt;
use crate::track::{Track, TrackSet};

/// Most fractional digits a legend value will show.
pub const MAX_DECIMALS: usize = 6;

/// A single legend row.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendRow {
    /// Track index.
    pub index: usize,
    /// Formatted value, including any prefix symbol.
    pub label: String,
    /// Swatch color.
    pub color: Color,
    /// Track name.
    pub name: String,
}

impl LegendRow {
    /// Builds the row for `track`.
    pub fn for_track(index: usize, track: &Track, symbol: Option<&str>) -> Self {
        Self {
            index,
            label: format_value(track.value(), track.step(), symbol),
            color: track.color(),
            name: String::from(track.name()),
        }
    }
}

/// Builds every row, in track order.
pub fn legend_rows(tracks: &TrackSet, symbol: Option<&str>) -> Vec<LegendRow> {
    tracks
        .iter()
        .enumerate()
        .map(|(index, track)| LegendRow::for_track(index, track, symbol))
        .collect()
}

/// Formats `value` with as many decimals as `step` needs, behind an optional `symbol`.
///
/// ```
/// use rondel_core::format_value;
///
/// assert_eq!(format_value(40.0, 10.0, Some("$")), "$40");
/// assert_eq!(format_value(0.75, 0.25, None), "0.75");
/// ```
pub fn format_value(value: f64, step: f64, symbol: Option<&str>) -> String {
    let decimals = step_decimals(step);
    let symbol = symbol.unwrap_or("");
    if !value.is_finite() {
        return alloc::format!("{symbol}{value}");
    }
    // Avoid printing "-0".
    let value = if value == 0.0 { 0.0 } else { value };
    alloc::format!("{symbol}{value:.decimals$}")
}

/// Number of fractional digits needed to print multiples of `step` exactly.
fn step_decimals(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 {
        return 0;
    }
    let scales = [1.0, 1e1, 1e2, 1e3, 1e4, 1e5];
    for (decimals, scale) in scales.into_iter().enumerate() {
        let scaled = step * scale;
        if (scaled - scaled.round()).abs() < 1e-9 * scale {
            return decimals;
        }
    }
    MAX_DECIMALS
}

#[cfg(test)]
mod tests {
    extern crate std;

    use peniko::color::palette::css;

    use super::*;
    use crate::config::TrackSpec;

    #[test]
    fn decimals_follow_the_step() {
        assert_eq!(step_decimals(1.0), 0);
        assert_eq!(step_decimals(10.0), 0);
        assert_eq!(step_decimals(0.5), 1);
        assert_eq!(step_decimals(0.25), 2);
        assert_eq!(step_decimals(0.1), 1);
        assert_eq!(step_decimals(1.0 / 3.0), MAX_DECIMALS);
    }

    #[test]
    fn values_carry_the_symbol_prefix() {
        assert_eq!(format_value(25.0, 1.0, Some("$")), "$25");
        assert_eq!(format_value(2.5, 0.5, Some("€")), "€2.5");
        assert_eq!(format_value(-0.0, 1.0, None), "0");
        assert_eq!(format_value(0.30000000000000004, 0.1, None), "0.3");
    }

    #[test]
    fn rows_mirror_tracks() {
        let tracks = TrackSet::from_specs(&[
            TrackSpec::new(50.0, 0.0, 100.0)
                .with_initial_value(40.0)
                .with_color(css::TOMATO)
                .with_name("Transportation"),
            TrackSpec::new(90.0, 0.0, 1.0).with_step(0.05),
        ])
        .unwrap();
        let rows = legend_rows(&tracks, Some("$"));
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].label, "$40");
        assert_eq!(rows[0].name, "Transportation");
        assert_eq!(rows[0].color, css::TOMATO);
        assert_eq!(rows[1].label, "$0.00");
        assert_eq!(rows[1].name, "No name");
    }
}
