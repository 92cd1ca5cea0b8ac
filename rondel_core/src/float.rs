// Copyright 2025 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float helpers for `no_std` builds.
//!
//! Trigonometry, rounding and `rem_euclid` on `f64` live in `std`, not `core` (`abs` is in
//! `core` already).
//! This trait dispatches them to `libm` when the `std` feature is off.

/// Float math helpers for `f64` in `no_std` mode.
pub(crate) trait FloatExt {
    fn round(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn atan2(self, other: Self) -> Self;
    fn hypot(self, other: Self) -> Self;
    fn rem_euclid(self, rhs: Self) -> Self;
}

#[cfg(feature = "libm")]
impl FloatExt for f64 {
    fn round(self) -> Self {
        libm::round(self)
    }

    fn sin(self) -> Self {
        libm::sin(self)
    }

    fn cos(self) -> Self {
        libm::cos(self)
    }

    fn atan2(self, other: Self) -> Self {
        libm::atan2(self, other)
    }

    fn hypot(self, other: Self) -> Self {
        libm::hypot(self, other)
    }

    fn rem_euclid(self, rhs: Self) -> Self {
        let r = libm::fmod(self, rhs);
        if r < 0.0 { r + libm::fabs(rhs) } else { r }
    }
}
