// Copyright 2025 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The slider widget: tracks, drag state and a render port, wired together.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::config::{ConfigError, Layout, SliderConfig};
use crate::drag::{DragState, DragStateMachine};
use crate::geometry::Geometry;
use crate::hit_test::HitTester;
use crate::legend::{LegendRow, legend_rows};
use crate::pointer::PointerEvent;
use crate::render::{RenderCommand, RenderCommands, RenderPort};
use crate::track::TrackSet;

/// A multi-track radial slider driving a [`RenderPort`].
///
/// The slider exclusively owns its tracks and interaction state. Events must be fed in
/// the order the host delivered them; each call completes before the next one starts.
#[derive(Debug)]
pub struct RadialSlider<P> {
    layout: Layout,
    geometry: Geometry,
    tracks: TrackSet,
    machine: DragStateMachine,
    symbol: Option<String>,
    port: P,
}

impl<P: RenderPort> RadialSlider<P> {
    /// Validates `config`, builds the tracks and performs the initial draw on `port`.
    ///
    /// For every track, in index order, the port receives `track_drawn`, `handle_moved`
    /// (at the initial value) and `value_changed`.
    pub fn new(config: &SliderConfig, port: P) -> Result<Self, ConfigError> {
        let tracks = TrackSet::from_config(config)?;
        let layout = config.layout();
        let mut slider = Self {
            layout,
            geometry: Geometry::new(layout.center),
            tracks,
            machine: DragStateMachine::new(HitTester::new(config.hit_threshold)),
            symbol: config.symbol.clone(),
            port,
        };
        slider.draw();
        Ok(slider)
    }

    /// Replays the full scene to the port (rings, handles and values).
    pub fn draw(&mut self) {
        let mut out: Vec<RenderCommand> = Vec::with_capacity(self.tracks.len() * 3);
        for (index, track) in self.tracks.iter().enumerate() {
            out.push(RenderCommand::DrawTrack {
                index,
                radius: track.radius(),
                color: track.color(),
            });
            out.push(RenderCommand::MoveHandle {
                index,
                position: self.geometry.handle_position(track.radius(), track.angle()),
            });
            out.push(RenderCommand::ValueChanged {
                index,
                value: track.value(),
            });
        }
        log::debug!("drawing {} tracks", self.tracks.len());
        for command in &out {
            command.dispatch(&mut self.port);
        }
    }

    /// Processes one pointer event.
    ///
    /// Returns `true` if the event changed the interaction state or a stored value. A move
    /// that stays within the current step changes neither and returns `false`.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        let out = self
            .machine
            .handle(event, &self.geometry, &mut self.tracks);
        self.dispatch(&out);
        !out.is_empty()
    }

    /// Sets a track's value programmatically (quantized and clamped) and redraws it.
    ///
    /// Returns the stored value, or `None` for an unknown index.
    pub fn set_value(&mut self, index: usize, value: f64) -> Option<f64> {
        let stored = self.tracks.set_value(index, value)?;
        let track = self.tracks.get(index)?;
        let position = self.geometry.handle_position(track.radius(), track.angle());
        let out: RenderCommands = [
            RenderCommand::MoveHandle { index, position },
            RenderCommand::ValueChanged {
                index,
                value: stored,
            },
        ]
        .into_iter()
        .collect();
        self.dispatch(&out);
        Some(stored)
    }

    fn dispatch(&mut self, commands: &[RenderCommand]) {
        for command in commands {
            command.dispatch(&mut self.port);
        }
    }
}

impl<P> RadialSlider<P> {
    /// The tracks, in index order.
    pub fn tracks(&self) -> &TrackSet {
        &self.tracks
    }

    /// Surface layout constants.
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Polar helpers around the slider center.
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Current interaction state.
    pub fn state(&self) -> DragState {
        self.machine.state()
    }

    /// Legend value prefix, if configured.
    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    /// Current legend rows.
    pub fn legend_rows(&self) -> Vec<LegendRow> {
        legend_rows(&self.tracks, self.symbol())
    }

    /// The render port.
    pub fn port(&self) -> &P {
        &self.port
    }

    /// The render port, mutably.
    pub fn port_mut(&mut self) -> &mut P {
        &mut self.port
    }

    /// Consumes the slider, returning its render port.
    pub fn into_port(self) -> P {
        self.port
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::Point;
    use peniko::color::palette::css;

    use super::*;
    use crate::config::TrackSpec;
    use crate::render::RecordingPort;

    fn config() -> SliderConfig {
        SliderConfig::default()
            .with_symbol("$")
            .with_track(
                TrackSpec::new(100.0, 0.0, 100.0)
                    .with_initial_value(50.0)
                    .with_color(css::ORANGE),
            )
            .with_track(TrackSpec::new(150.0, 0.0, 1000.0).with_step(50.0))
    }

    #[test]
    fn construction_draws_every_track() {
        let slider = RadialSlider::new(&config(), RecordingPort::new()).unwrap();
        let commands = slider.port().commands();
        assert_eq!(commands.len(), 6);
        assert_eq!(
            commands[0],
            RenderCommand::DrawTrack {
                index: 0,
                radius: 100.0,
                color: css::ORANGE
            }
        );
        let RenderCommand::MoveHandle { index, position } = commands[1] else {
            panic!("expected a handle move");
        };
        assert_eq!(index, 0);
        // Value 50 of 0..100 is half a turn: straight below the center.
        assert!((position.x - 250.0).abs() < 1e-9);
        assert!((position.y - 350.0).abs() < 1e-9);
        assert_eq!(
            commands[5],
            RenderCommand::ValueChanged {
                index: 1,
                value: 0.0
            }
        );
    }

    #[test]
    fn invalid_config_fails_fast() {
        let config = config().with_track(TrackSpec::new(200.0, 5.0, 5.0));
        let err = RadialSlider::new(&config, RecordingPort::new()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRange { index: 2, .. }));
    }

    #[test]
    fn set_value_redraws_the_track() {
        let mut slider = RadialSlider::new(&config(), RecordingPort::new()).unwrap();
        slider.port_mut().take();
        assert_eq!(slider.set_value(1, 333.0), Some(350.0));
        assert_eq!(slider.set_value(9, 1.0), None);
        let commands = slider.into_port().take();
        assert_eq!(commands.len(), 2);
        assert_eq!(
            commands[1],
            RenderCommand::ValueChanged {
                index: 1,
                value: 350.0
            }
        );
    }

    #[test]
    fn legend_uses_the_configured_symbol() {
        let mut slider = RadialSlider::new(&config(), RecordingPort::new()).unwrap();
        slider.handle_pointer(PointerEvent::down(Point::new(150.0, 250.0)));
        let rows = slider.legend_rows();
        assert_eq!(rows[0].label, "$75");
        assert_eq!(rows[1].label, "$0");
    }

    #[test]
    fn handle_pointer_reports_whether_anything_happened() {
        let mut slider = RadialSlider::new(&config(), RecordingPort::new()).unwrap();
        assert!(!slider.handle_pointer(PointerEvent::moved((10.0, 10.0))));
        assert!(!slider.handle_pointer(PointerEvent::down((250.0, 250.0))));
        assert!(slider.handle_pointer(PointerEvent::down((250.0, 100.0))));
        assert_eq!(slider.state(), DragState::Dragging(1));
    }
}
