// Copyright 2025 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Track model.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use peniko::Color;

use crate::config::{ConfigError, SliderConfig, TrackSpec};
use crate::value_map::ValueRange;

/// One concentric ring of the slider.
///
/// The stored value always satisfies `min <= value <= max` and sits on a
/// `min + k*step` boundary; [`TrackSet::set_value`] is the only way to change it.
#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    radius: f64,
    range: ValueRange,
    value: f64,
    color: Color,
    name: String,
    active: bool,
}

impl Track {
    fn from_spec(spec: &TrackSpec) -> Self {
        let range = ValueRange::new(spec.min, spec.max, spec.step);
        Self {
            radius: spec.radius,
            range,
            value: range.quantize(spec.initial_value),
            color: spec.color,
            name: spec.name.clone(),
            active: false,
        }
    }

    /// Ring radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Value bounds and step.
    pub fn range(&self) -> ValueRange {
        self.range
    }

    /// Lowest value.
    pub fn min(&self) -> f64 {
        self.range.min
    }

    /// Highest value.
    pub fn max(&self) -> f64 {
        self.range.max
    }

    /// Quantization step.
    pub fn step(&self) -> f64 {
        self.range.step
    }

    /// Current value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Value angle of the current value (0° at the top, clockwise).
    pub fn angle(&self) -> f64 {
        self.range.angle_of(self.value)
    }

    /// Display color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this track is currently being dragged.
    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// The slider's tracks, in index order.
///
/// The set is built once and never grows or shrinks, so indices stay stable for the
/// slider's lifetime.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackSet {
    tracks: Vec<Track>,
}

impl TrackSet {
    /// Validates `specs` and builds the set.
    ///
    /// Initial values are quantized to their step.
    pub fn from_specs(specs: &[TrackSpec]) -> Result<Self, ConfigError> {
        for (index, spec) in specs.iter().enumerate() {
            spec.validate(index)?;
        }
        Ok(Self::build(specs))
    }

    /// Validates a whole slider configuration and builds its tracks.
    pub fn from_config(config: &SliderConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(&config.tracks))
    }

    /// Builds from specs that already passed validation.
    fn build(specs: &[TrackSpec]) -> Self {
        Self {
            tracks: specs.iter().map(Track::from_spec).collect(),
        }
    }

    /// Number of tracks.
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Returns `true` if there are no tracks.
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Returns the track at `index`.
    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    /// Returns the ring radius of the track at `index`.
    pub fn radius_of(&self, index: usize) -> Option<f64> {
        self.get(index).map(Track::radius)
    }

    /// Iterates tracks in index order.
    pub fn iter(&self) -> core::slice::Iter<'_, Track> {
        self.tracks.iter()
    }

    /// Quantizes, clamps and stores `value`, returning what was stored.
    ///
    /// Returns `None` for an unknown index.
    pub fn set_value(&mut self, index: usize, value: f64) -> Option<f64> {
        let track = self.tracks.get_mut(index)?;
        track.value = track.range.quantize(value);
        Some(track.value)
    }

    /// Index of the active track, if any.
    pub fn active_index(&self) -> Option<usize> {
        self.tracks.iter().position(|t| t.active)
    }

    /// Marks `index` as the only active track, or clears the flag everywhere for `None`.
    pub(crate) fn set_active(&mut self, index: Option<usize>) {
        for (i, track) in self.tracks.iter_mut().enumerate() {
            track.active = Some(i) == index;
        }
    }
}

impl<'a> IntoIterator for &'a TrackSet {
    type Item = &'a Track;
    type IntoIter = core::slice::Iter<'a, Track>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
