// Copyright 2025 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value ↔ angle mapping.
//!
//! A track's value range is laid linearly around the full circle, anchored at `min`:
//! `min` sits at 0° and `max` at 360°. Values read back from angles are quantized to the
//! track's `step` and clamped to the range afterwards, so rounding never overshoots.

#[cfg(not(any(feature = "std", test)))]
use crate::float::FloatExt;
use crate::geometry::normalize_degrees;

/// Degrees in one full turn.
pub const FULL_TURN_DEG: f64 = 360.0;

/// A bounded, stepped value range.
///
/// Callers must uphold `max > min` and `step > 0`; [`crate::SliderConfig`] validates this
/// before any range is built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueRange {
    /// Lowest reachable value.
    pub min: f64,
    /// Highest reachable value.
    pub max: f64,
    /// Quantization granularity.
    pub step: f64,
}

impl ValueRange {
    /// Creates a new range.
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Returns `max - min`.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Maps `value` to its value angle: 0° at `min`, 360° at `max`.
    pub fn angle_of(&self, value: f64) -> f64 {
        angle_from_value(self.min, self.max, value)
    }

    /// Maps a value angle back to a quantized, in-range value.
    pub fn value_at(&self, angle_deg: f64) -> f64 {
        value_from_angle(self.min, self.max, self.step, angle_deg)
    }

    /// Rounds `value` to the nearest `min + k*step` and clamps it into `[min, max]`.
    pub fn quantize(&self, value: f64) -> f64 {
        quantize(self.min, self.max, self.step, value)
    }

    /// Returns `true` if `value` lies inside `[min, max]`.
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Linear map of `value` onto `[0, 360]`, anchored at `min`.
pub fn angle_from_value(min: f64, max: f64, value: f64) -> f64 {
    FULL_TURN_DEG * (value - min) / (max - min)
}

/// Inverse of [`angle_from_value`], followed by [`quantize`].
///
/// Angles already inside `[0, 360]` are used as-is, so 360° still reaches `max`.
/// Anything outside is wrapped into `[0, 360)` first.
pub fn value_from_angle(min: f64, max: f64, step: f64, angle_deg: f64) -> f64 {
    let angle = if (0.0..=FULL_TURN_DEG).contains(&angle_deg) {
        angle_deg
    } else {
        normalize_degrees(angle_deg)
    };
    let raw = min + angle * (max - min) / FULL_TURN_DEG;
    quantize(min, max, step, raw)
}

/// Rounds `value` to the nearest `min + k*step`, then clamps into `[min, max]`.
///
/// Non-finite input collapses to `min`.
pub fn quantize(min: f64, max: f64, step: f64, value: f64) -> f64 {
    if !value.is_finite() {
        return min;
    }
    let k = ((value - min) / step).round();
    (min + k * step).clamp(min, max)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn cardinal_angles_map_to_quarters() {
        let r = ValueRange::new(0.0, 100.0, 1.0);
        assert_eq!(r.value_at(0.0), 0.0);
        assert_eq!(r.value_at(90.0), 25.0);
        assert_eq!(r.value_at(180.0), 50.0);
        assert_eq!(r.value_at(270.0), 75.0);
        assert_eq!(r.value_at(360.0), 100.0);
    }

    #[test]
    fn coarse_steps_round_half_away_from_min() {
        let r = ValueRange::new(0.0, 100.0, 10.0);
        assert_eq!(r.value_at(270.0), 80.0);
        assert_eq!(r.value_at(10.0), 0.0);
        assert_eq!(r.value_at(20.0), 10.0);
    }

    #[test]
    fn angle_is_anchored_at_min() {
        let r = ValueRange::new(-50.0, 50.0, 1.0);
        assert_eq!(r.angle_of(-50.0), 0.0);
        assert_eq!(r.angle_of(0.0), 180.0);
        assert_eq!(r.angle_of(50.0), 360.0);
        assert_eq!(r.value_at(180.0), 0.0);
    }

    #[test]
    fn round_trip_holds_for_on_step_values() {
        for (min, max, step) in [(0.0, 100.0, 1.0), (10.0, 30.0, 0.5), (-5.0, 5.0, 2.5)] {
            let r = ValueRange::new(min, max, step);
            let mut v = min;
            while v <= max {
                let back = r.value_at(r.angle_of(v));
                assert!((back - v).abs() < 1e-9, "{v} -> {back} in {r:?}");
                v += step;
            }
        }
    }

    #[test]
    fn out_of_turn_angles_wrap_before_mapping() {
        let r = ValueRange::new(0.0, 100.0, 1.0);
        let v = r.value_at(400.0);
        assert!(r.contains(v));
        assert_eq!(v, r.value_at(40.0));
        assert_eq!(r.value_at(-90.0), 75.0);
    }

    #[test]
    fn quantize_clamps_after_rounding() {
        // 0..=95 with step 10: 96 rounds to 100 and must come back to 95.
        let r = ValueRange::new(0.0, 95.0, 10.0);
        assert_eq!(r.quantize(96.0), 95.0);
        assert_eq!(r.quantize(94.0), 90.0);
        assert_eq!(r.quantize(-3.0), 0.0);
        assert_eq!(r.quantize(1e9), 95.0);
        assert_eq!(r.quantize(f64::NAN), 0.0);
    }
}
