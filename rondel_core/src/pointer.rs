// Copyright 2025 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Device-independent pointer input.
//!
//! Mouse, pen and touch handlers only differ in how they extract coordinates, so the host
//! converts each of them into a [`PointerEvent`] in the control's local space (origin at
//! the top-left, y down) before handing it to the slider.

use kurbo::Point;

/// Phase of a pointer interaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// Press (mouse down, touch start).
    Down,
    /// Motion while pressed or hovering.
    Move,
    /// Release (mouse up, touch end).
    Up,
    /// The platform interrupted the interaction (touch cancel, lost capture).
    Cancel,
}

/// A single pointer event in local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Event phase.
    pub kind: PointerKind,
    /// Pointer position. Ignored for [`PointerKind::Cancel`].
    pub position: Point,
}

impl PointerEvent {
    /// Creates an event of `kind` at `position`.
    pub fn new(kind: PointerKind, position: impl Into<Point>) -> Self {
        Self {
            kind,
            position: position.into(),
        }
    }

    /// A press at `position`.
    pub fn down(position: impl Into<Point>) -> Self {
        Self::new(PointerKind::Down, position)
    }

    /// A motion to `position`.
    pub fn moved(position: impl Into<Point>) -> Self {
        Self::new(PointerKind::Move, position)
    }

    /// A release at `position`.
    pub fn up(position: impl Into<Point>) -> Self {
        Self::new(PointerKind::Up, position)
    }

    /// A cancellation.
    pub fn cancel() -> Self {
        Self::new(PointerKind::Cancel, Point::ORIGIN)
    }
}
