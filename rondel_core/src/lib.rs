// Copyright 2025 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interaction core for multi-track radial sliders.
//!
//! A radial slider is a set of concentric rings ("tracks"), each mapping the angle of its
//! handle to a bounded, stepped value. This crate turns pointer input into per-track value
//! updates:
//! - **Geometry** converts local coordinates into center-relative angles and distances.
//! - **Value mapping** converts between angles and quantized values.
//! - **Hit-testing** picks the ring nearest to a pointer-down.
//! - **Drag state** tracks which ring follows the pointer until release or cancel.
//!
//! Drawing is out of scope: a [`RenderPort`] implementation receives notifications and
//! keeps its own scene. [`RecordingPort`] collects them as [`RenderCommand`] data.
//!
//! ```
//! use rondel_core::{PointerEvent, RadialSlider, RecordingPort, SliderConfig, TrackSpec};
//!
//! let config = SliderConfig::default()
//!     .with_track(TrackSpec::new(100.0, 0.0, 100.0).with_step(10.0));
//! let mut slider = RadialSlider::new(&config, RecordingPort::new()).unwrap();
//!
//! // The surface is 500x500, so the center is (250, 250).
//! slider.handle_pointer(PointerEvent::down((250.0, 350.0)));
//! slider.handle_pointer(PointerEvent::moved((150.0, 250.0)));
//! slider.handle_pointer(PointerEvent::up((150.0, 250.0)));
//! assert_eq!(slider.tracks().get(0).unwrap().value(), 80.0);
//! ```

#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

mod config;
mod drag;
// Test builds link `std`, whose inherent float methods shadow `FloatExt`.
#[cfg(not(any(feature = "std", test)))]
mod float;
mod geometry;
mod hit_test;
mod legend;
mod pointer;
mod render;
mod slider;
mod track;
mod value_map;

pub use config::{
    ConfigError, DEFAULT_HANDLE_RADIUS, DEFAULT_HIT_THRESHOLD, DEFAULT_SURFACE_SIZE,
    DEFAULT_TRACK_NAME, Layout, SliderConfig, TrackSpec,
};
pub use drag::{DragState, DragStateMachine};
pub use geometry::{Geometry, START_OFFSET_DEG, normalize_degrees};
pub use hit_test::{HitTester, nearest_ring};
pub use legend::{LegendRow, MAX_DECIMALS, format_value, legend_rows};
pub use pointer::{PointerEvent, PointerKind};
pub use render::{RecordingPort, RenderCommand, RenderCommands, RenderPort};
pub use slider::RadialSlider;
pub use track::{Track, TrackSet};
pub use value_map::{FULL_TURN_DEG, ValueRange, angle_from_value, quantize, value_from_angle};

/// Re-exported so callers can name points and sizes without depending on `kurbo` directly.
pub use kurbo::{Point, Size};

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("rondel_core requires either the `std` or `libm` feature");
