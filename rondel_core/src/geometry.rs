// Copyright 2025 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polar geometry around the slider center.
//!
//! Two angle conventions meet here:
//! - **math angles** (`position_from_angle`): 0° on the +x axis, increasing towards +y.
//!   On a y-down surface that reads as clockwise.
//! - **value angles** (`angle_from_pointer`, `handle_position`): the same rotation, shifted
//!   by −90° so that 0° sits at the top of the control.
//!
//! Every caller goes through [`Geometry`], so the offset is applied in exactly one place
//! in each direction.

use kurbo::Point;

#[cfg(not(any(feature = "std", test)))]
use crate::float::FloatExt;

/// Rotation between math angles and value angles, in degrees.
pub const START_OFFSET_DEG: f64 = -90.0;

/// Wraps an angle in degrees into `[0, 360)`.
pub fn normalize_degrees(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    // `rem_euclid` can round up to exactly 360 for tiny negative inputs.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Pure polar helpers bound to a fixed center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    center: Point,
}

impl Geometry {
    /// Creates geometry helpers around `center`.
    pub fn new(center: Point) -> Self {
        Self { center }
    }

    /// Returns the shared center of all tracks.
    pub fn center(&self) -> Point {
        self.center
    }

    /// Point at `radius` from the center along the math angle `angle_deg`.
    pub fn position_from_angle(&self, radius: f64, angle_deg: f64) -> Point {
        let theta = angle_deg.to_radians();
        Point::new(
            self.center.x + radius * theta.cos(),
            self.center.y + radius * theta.sin(),
        )
    }

    /// Value angle of a pointer, in `[0, 360)`, with 0° at the top.
    pub fn angle_from_pointer(&self, pointer: Point) -> f64 {
        let raw = (self.center.y - pointer.y)
            .atan2(self.center.x - pointer.x)
            .to_degrees();
        normalize_degrees(raw + START_OFFSET_DEG)
    }

    /// Euclidean distance between `pointer` and the center.
    pub fn distance_from_center(&self, pointer: Point) -> f64 {
        (pointer.x - self.center.x).hypot(pointer.y - self.center.y)
    }

    /// Where a handle for the value angle `value_angle_deg` sits on a ring of `radius`.
    ///
    /// This is the inverse of [`Geometry::angle_from_pointer`]: a pointer at the returned
    /// point reports `value_angle_deg` back.
    pub fn handle_position(&self, radius: f64, value_angle_deg: f64) -> Point {
        self.position_from_angle(radius, value_angle_deg + START_OFFSET_DEG)
    }
}
