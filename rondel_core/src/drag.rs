// Copyright 2025 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer drag state machine.
//!
//! ```text
//! Idle        + Down (ring hit) -> Dragging(i), commit
//! Idle        + Down (miss)     -> Idle
//! Dragging(i) + Move            -> Dragging(i), commit
//! Dragging(i) + Up              -> Idle, commit, release
//! any         + Cancel          -> Idle, no commit
//! ```
//!
//! Selection happens once, on `Down`, and is sticky: while dragging, the pointer may
//! wander arbitrarily far from the ring without losing the track.

use kurbo::Point;

use crate::geometry::Geometry;
use crate::hit_test::HitTester;
use crate::pointer::{PointerEvent, PointerKind};
use crate::render::{RenderCommand, RenderCommands};
use crate::track::TrackSet;

/// Interaction state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    /// No track is selected.
    #[default]
    Idle,
    /// The track at this index follows the pointer.
    Dragging(usize),
}

impl DragState {
    /// Index of the dragged track, if any.
    pub fn active_index(&self) -> Option<usize> {
        match *self {
            Self::Idle => None,
            Self::Dragging(index) => Some(index),
        }
    }
}

/// Turns pointer events into track value updates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragStateMachine {
    state: DragState,
    hit_tester: HitTester,
}

impl DragStateMachine {
    /// Creates an idle machine selecting tracks with `hit_tester`.
    pub fn new(hit_tester: HitTester) -> Self {
        Self {
            state: DragState::Idle,
            hit_tester,
        }
    }

    /// Current state.
    pub fn state(&self) -> DragState {
        self.state
    }

    /// The hit tester used on `Down`.
    pub fn hit_tester(&self) -> HitTester {
        self.hit_tester
    }

    /// Feeds one event through the machine, mutating `tracks` and returning the
    /// notifications the renderer needs.
    ///
    /// The result is empty exactly when neither the state nor any value changed.
    pub fn handle(
        &mut self,
        event: PointerEvent,
        geometry: &Geometry,
        tracks: &mut TrackSet,
    ) -> RenderCommands {
        let mut out = RenderCommands::new();
        match (self.state, event.kind) {
            (DragState::Idle, PointerKind::Down) => {
                let Some(index) = self.hit_tester.find_nearest(geometry, event.position, tracks)
                else {
                    log::trace!("pointer down at {:?} missed every ring", event.position);
                    return out;
                };
                log::debug!("track {index} selected");
                self.state = DragState::Dragging(index);
                tracks.set_active(Some(index));
                out.push(RenderCommand::ActiveChanged {
                    index,
                    active: true,
                });
                commit(index, event.position, geometry, tracks, &mut out);
            }
            (DragState::Dragging(index), PointerKind::Move) => {
                commit(index, event.position, geometry, tracks, &mut out);
            }
            (DragState::Dragging(index), PointerKind::Up) => {
                commit(index, event.position, geometry, tracks, &mut out);
                log::debug!("track {index} released");
                self.release(index, tracks, &mut out);
            }
            (DragState::Dragging(index), PointerKind::Cancel) => {
                log::debug!("drag of track {index} cancelled");
                self.release(index, tracks, &mut out);
            }
            (DragState::Dragging(index), PointerKind::Down) => {
                // A second pointer while one drag is in flight.
                log::debug!("ignoring pointer down while dragging track {index}");
            }
            (DragState::Idle, PointerKind::Move | PointerKind::Up | PointerKind::Cancel) => {}
        }
        out
    }

    fn release(&mut self, index: usize, tracks: &mut TrackSet, out: &mut RenderCommands) {
        self.state = DragState::Idle;
        tracks.set_active(None);
        out.push(RenderCommand::ActiveChanged {
            index,
            active: false,
        });
    }
}

/// Maps `pointer` to a value on track `index`, stores it and queues the redraw.
///
/// Nothing is queued when the pointer stays within the current step.
fn commit(
    index: usize,
    pointer: Point,
    geometry: &Geometry,
    tracks: &mut TrackSet,
    out: &mut RenderCommands,
) {
    let Some(track) = tracks.get(index) else {
        return;
    };
    let (range, radius, previous) = (track.range(), track.radius(), track.value());
    let angle = geometry.angle_from_pointer(pointer);
    let Some(value) = tracks.set_value(index, range.value_at(angle)) else {
        return;
    };
    if value == previous {
        return;
    }
    log::trace!("track {index}: {angle:.2}° -> {value}");
    out.push(RenderCommand::MoveHandle {
        index,
        position: geometry.handle_position(radius, range.angle_of(value)),
    });
    out.push(RenderCommand::ValueChanged { index, value });
}
