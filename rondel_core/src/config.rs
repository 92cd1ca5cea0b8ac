// Copyright 2025 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slider configuration and validation.
//!
//! Configuration is authored with builder-style specs and validated once, when a
//! [`crate::RadialSlider`] or [`crate::TrackSet`] is built from it.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Size};
use peniko::Color;
use peniko::color::palette::css;
use thiserror::Error;

/// Default surface width and height, in surface units.
pub const DEFAULT_SURFACE_SIZE: f64 = 500.0;
/// Default pointer tolerance around a ring for selection.
pub const DEFAULT_HIT_THRESHOLD: f64 = 20.0;
/// Default handle radius.
pub const DEFAULT_HANDLE_RADIUS: f64 = 14.0;
/// Display name used when a track has none.
pub const DEFAULT_TRACK_NAME: &str = "No name";

/// Errors returned when validating a [`SliderConfig`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A track radius is not a positive finite number.
    #[error("track {index}: radius {radius} must be positive and finite")]
    InvalidRadius {
        /// Offending track index.
        index: usize,
        /// The configured radius.
        radius: f64,
    },
    /// A track's range is empty or inverted (`max <= min`), or not finite.
    #[error("track {index}: max ({max}) must be greater than min ({min})")]
    InvalidRange {
        /// Offending track index.
        index: usize,
        /// The configured minimum.
        min: f64,
        /// The configured maximum.
        max: f64,
    },
    /// A track's step is not a positive finite number.
    #[error("track {index}: step {step} must be positive")]
    InvalidStep {
        /// Offending track index.
        index: usize,
        /// The configured step.
        step: f64,
    },
    /// A track's initial value lies outside `[min, max]`.
    #[error("track {index}: initial value {value} is outside [{min}, {max}]")]
    InitialValueOutOfRange {
        /// Offending track index.
        index: usize,
        /// The configured initial value.
        value: f64,
        /// The configured minimum.
        min: f64,
        /// The configured maximum.
        max: f64,
    },
    /// The hit threshold is negative or not finite.
    #[error("hit threshold {0} must be a non-negative finite number")]
    InvalidHitThreshold(f64),
    /// The handle radius is negative or not finite.
    #[error("handle radius {0} must be a non-negative finite number")]
    InvalidHandleRadius(f64),
    /// The render surface has a non-positive or non-finite dimension.
    #[error("surface size {width}x{height} must be positive and finite")]
    InvalidSurface {
        /// Configured width.
        width: f64,
        /// Configured height.
        height: f64,
    },
}

/// Configuration record for a single track.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackSpec {
    /// Ring radius, measured from the shared center.
    pub radius: f64,
    /// Lowest value.
    pub min: f64,
    /// Highest value.
    pub max: f64,
    /// Quantization granularity.
    pub step: f64,
    /// Value shown before any interaction.
    pub initial_value: f64,
    /// Handle and legend swatch color.
    pub color: Color,
    /// Legend label.
    pub name: String,
}

impl TrackSpec {
    /// Creates a track spec with step 1, initial value `min`, black color and the default name.
    pub fn new(radius: f64, min: f64, max: f64) -> Self {
        Self {
            radius,
            min,
            max,
            step: 1.0,
            initial_value: min,
            color: css::BLACK,
            name: String::from(DEFAULT_TRACK_NAME),
        }
    }

    /// Sets the quantization step.
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Sets the initial value.
    pub fn with_initial_value(mut self, initial_value: f64) -> Self {
        self.initial_value = initial_value;
        self
    }

    /// Sets the display color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub(crate) fn validate(&self, index: usize) -> Result<(), ConfigError> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(ConfigError::InvalidRadius {
                index,
                radius: self.radius,
            });
        }
        if !(self.min.is_finite() && self.max.is_finite() && self.max > self.min) {
            return Err(ConfigError::InvalidRange {
                index,
                min: self.min,
                max: self.max,
            });
        }
        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(ConfigError::InvalidStep {
                index,
                step: self.step,
            });
        }
        if !(self.min..=self.max).contains(&self.initial_value) {
            return Err(ConfigError::InitialValueOutOfRange {
                index,
                value: self.initial_value,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Layout constants derived from the render surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    /// Surface dimensions.
    pub size: Size,
    /// Shared center of every track.
    pub center: Point,
    /// Radius of a drawn handle.
    pub handle_radius: f64,
}

impl Layout {
    /// Derives the layout for a surface of `size`, centering the tracks.
    pub fn new(size: Size, handle_radius: f64) -> Self {
        Self {
            size,
            center: Point::new(size.width * 0.5, size.height * 0.5),
            handle_radius,
        }
    }

    /// Largest ring radius whose handles still fit on the surface.
    pub fn usable_radius(&self) -> f64 {
        (self.size.width.min(self.size.height) * 0.5 - self.handle_radius).max(0.0)
    }
}

/// Configuration for a whole slider.
#[derive(Clone, Debug, PartialEq)]
pub struct SliderConfig {
    /// Render surface dimensions.
    pub size: Size,
    /// Maximum ring distance for a pointer-down to select a track.
    pub hit_threshold: f64,
    /// Radius of drawn handles.
    pub handle_radius: f64,
    /// Optional prefix for legend values (e.g. a currency sign).
    pub symbol: Option<String>,
    /// Tracks in index order.
    pub tracks: Vec<TrackSpec>,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self::new(Size::new(DEFAULT_SURFACE_SIZE, DEFAULT_SURFACE_SIZE))
    }
}

impl SliderConfig {
    /// Creates an empty configuration for a surface of `size`.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            hit_threshold: DEFAULT_HIT_THRESHOLD,
            handle_radius: DEFAULT_HANDLE_RADIUS,
            symbol: None,
            tracks: Vec::new(),
        }
    }

    /// Appends a track.
    pub fn with_track(mut self, track: TrackSpec) -> Self {
        self.tracks.push(track);
        self
    }

    /// Appends several tracks, in order.
    pub fn with_tracks(mut self, tracks: impl IntoIterator<Item = TrackSpec>) -> Self {
        self.tracks.extend(tracks);
        self
    }

    /// Sets the selection tolerance.
    pub fn with_hit_threshold(mut self, hit_threshold: f64) -> Self {
        self.hit_threshold = hit_threshold;
        self
    }

    /// Sets the handle radius.
    pub fn with_handle_radius(mut self, handle_radius: f64) -> Self {
        self.handle_radius = handle_radius;
        self
    }

    /// Sets the legend value prefix.
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Returns the layout implied by this configuration.
    pub fn layout(&self) -> Layout {
        Layout::new(self.size, self.handle_radius)
    }

    /// Checks every invariant, reporting the first violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Size { width, height } = self.size;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigError::InvalidSurface { width, height });
        }
        if !(self.hit_threshold.is_finite() && self.hit_threshold >= 0.0) {
            return Err(ConfigError::InvalidHitThreshold(self.hit_threshold));
        }
        if !(self.handle_radius.is_finite() && self.handle_radius >= 0.0) {
            return Err(ConfigError::InvalidHandleRadius(self.handle_radius));
        }
        for (index, track) in self.tracks.iter().enumerate() {
            track.validate(index)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn valid() -> SliderConfig {
        SliderConfig::default()
            .with_track(TrackSpec::new(100.0, 0.0, 100.0).with_initial_value(50.0))
            .with_track(TrackSpec::new(150.0, 0.0, 10.0).with_step(0.5))
    }

    #[test]
    fn defaults_follow_the_classic_widget() {
        let config = SliderConfig::default();
        assert_eq!(config.size, Size::new(500.0, 500.0));
        assert_eq!(config.hit_threshold, 20.0);
        assert_eq!(config.layout().center, Point::new(250.0, 250.0));
        assert_eq!(config.layout().usable_radius(), 236.0);

        let track = TrackSpec::new(10.0, 5.0, 9.0);
        assert_eq!(track.initial_value, 5.0);
        assert_eq!(track.step, 1.0);
        assert_eq!(track.name, "No name");
    }

    #[test]
    fn valid_config_passes() {
        assert_eq!(valid().validate(), Ok(()));
    }

    #[test]
    fn errors_name_the_offending_track() {
        let mut config = valid();
        config.tracks[1].max = 0.0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidRange {
                index: 1,
                min: 0.0,
                max: 0.0
            })
        );

        let mut config = valid();
        config.tracks[1].step = 0.0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidStep {
                index: 1,
                step: 0.0
            })
        );

        let mut config = valid();
        config.tracks[0].initial_value = 101.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InitialValueOutOfRange { index: 0, .. })
        ));

        let mut config = valid();
        config.tracks[0].radius = -1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRadius { index: 0, .. })
        ));
    }

    #[test]
    fn surface_and_threshold_are_checked() {
        let config = valid().with_hit_threshold(-1.0);
        assert_eq!(config.validate(), Err(ConfigError::InvalidHitThreshold(-1.0)));

        let mut config = valid();
        config.size = Size::new(0.0, 10.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSurface { .. })
        ));
    }

    #[test]
    fn error_messages_are_readable() {
        let err = ConfigError::InvalidStep { index: 2, step: 0.0 };
        assert_eq!(std::format!("{err}"), "track 2: step 0 must be positive");
    }
}
