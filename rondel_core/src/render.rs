// Copyright 2025 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The boundary between the interaction core and whatever draws it.
//!
//! The core never reads anything back from a renderer. It only pushes notifications:
//! a renderer keeps its own retained scene (SVG nodes, canvas state, widgets) and updates
//! it in response.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Point;
use peniko::Color;
use smallvec::SmallVec;

/// Receives draw and update notifications from a slider.
pub trait RenderPort {
    /// A track ring should be drawn at `radius`.
    fn track_drawn(&mut self, index: usize, radius: f64, color: Color);

    /// The handle of track `index` moved to `position`.
    fn handle_moved(&mut self, index: usize, position: Point);

    /// Track `index` now holds `value`; the value arc and legend row need a refresh.
    fn value_changed(&mut self, index: usize, value: f64);

    /// Track `index` gained or lost the active (dragged) state.
    fn active_changed(&mut self, index: usize, active: bool) {
        let _ = (index, active);
    }
}

impl<P: RenderPort + ?Sized> RenderPort for &mut P {
    fn track_drawn(&mut self, index: usize, radius: f64, color: Color) {
        (**self).track_drawn(index, radius, color);
    }

    fn handle_moved(&mut self, index: usize, position: Point) {
        (**self).handle_moved(index, position);
    }

    fn value_changed(&mut self, index: usize, value: f64) {
        (**self).value_changed(index, value);
    }

    fn active_changed(&mut self, index: usize, active: bool) {
        (**self).active_changed(index, active);
    }
}

/// A single notification, as data.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RenderCommand {
    /// See [`RenderPort::track_drawn`].
    DrawTrack {
        /// Track index.
        index: usize,
        /// Ring radius.
        radius: f64,
        /// Track color.
        color: Color,
    },
    /// See [`RenderPort::handle_moved`].
    MoveHandle {
        /// Track index.
        index: usize,
        /// New handle center.
        position: Point,
    },
    /// See [`RenderPort::value_changed`].
    ValueChanged {
        /// Track index.
        index: usize,
        /// New stored value.
        value: f64,
    },
    /// See [`RenderPort::active_changed`].
    ActiveChanged {
        /// Track index.
        index: usize,
        /// Whether the track is now being dragged.
        active: bool,
    },
}

/// Commands produced by one event; a drag step emits at most a handful.
pub type RenderCommands = SmallVec<[RenderCommand; 4]>;

impl RenderCommand {
    /// Track index this command refers to.
    pub fn index(&self) -> usize {
        match *self {
            Self::DrawTrack { index, .. }
            | Self::MoveHandle { index, .. }
            | Self::ValueChanged { index, .. }
            | Self::ActiveChanged { index, .. } => index,
        }
    }

    /// Forwards this command to `port`.
    pub fn dispatch(&self, port: &mut impl RenderPort) {
        match *self {
            Self::DrawTrack {
                index,
                radius,
                color,
            } => port.track_drawn(index, radius, color),
            Self::MoveHandle { index, position } => port.handle_moved(index, position),
            Self::ValueChanged { index, value } => port.value_changed(index, value),
            Self::ActiveChanged { index, active } => port.active_changed(index, active),
        }
    }
}

/// A port that records every notification, for headless hosts and tests.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordingPort {
    commands: Vec<RenderCommand>,
}

impl RecordingPort {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands recorded so far, oldest first.
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Returns and clears the recorded commands.
    pub fn take(&mut self) -> Vec<RenderCommand> {
        core::mem::take(&mut self.commands)
    }
}

impl RenderPort for RecordingPort {
    fn track_drawn(&mut self, index: usize, radius: f64, color: Color) {
        self.commands.push(RenderCommand::DrawTrack {
            index,
            radius,
            color,
        });
    }

    fn handle_moved(&mut self, index: usize, position: Point) {
        self.commands
            .push(RenderCommand::MoveHandle { index, position });
    }

    fn value_changed(&mut self, index: usize, value: f64) {
        self.commands
            .push(RenderCommand::ValueChanged { index, value });
    }

    fn active_changed(&mut self, index: usize, active: bool) {
        self.commands
            .push(RenderCommand::ActiveChanged { index, active });
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use peniko::color::palette::css;

    use super::*;

    #[derive(Default)]
    struct ValuesOnly {
        values: Vec<(usize, f64)>,
    }

    impl RenderPort for ValuesOnly {
        fn track_drawn(&mut self, _index: usize, _radius: f64, _color: Color) {}

        fn handle_moved(&mut self, _index: usize, _position: Point) {}

        fn value_changed(&mut self, index: usize, value: f64) {
            self.values.push((index, value));
        }
    }

    #[test]
    fn dispatch_round_trips_through_a_recorder() {
        let commands = [
            RenderCommand::DrawTrack {
                index: 0,
                radius: 10.0,
                color: css::RED,
            },
            RenderCommand::MoveHandle {
                index: 0,
                position: Point::new(1.0, 2.0),
            },
            RenderCommand::ValueChanged {
                index: 0,
                value: 3.0,
            },
            RenderCommand::ActiveChanged {
                index: 0,
                active: true,
            },
        ];
        let mut port = RecordingPort::new();
        for c in &commands {
            c.dispatch(&mut port);
        }
        assert_eq!(port.commands(), &commands);
        assert_eq!(port.take().len(), 4);
        assert!(port.commands().is_empty());
    }

    #[test]
    fn active_changes_are_optional_for_ports() {
        let mut port = ValuesOnly::default();
        RenderCommand::ActiveChanged {
            index: 1,
            active: true,
        }
        .dispatch(&mut port);
        RenderCommand::ValueChanged {
            index: 1,
            value: 4.0,
        }
        .dispatch(&mut &mut port);
        assert_eq!(port.values, [(1_usize, 4.0)]);
    }
}
