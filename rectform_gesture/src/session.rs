// Copyright 2025 the Rectform Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-drag pointer bookkeeping.
//!
//! 1) [`DragSession::start`] captures the reference point on pointer down.
//! 2) Each [`DragSession::update`] returns a [`DragSample`]: the movement
//!    since the previous sample plus the offset from the reference point.
//! 3) [`DragSession::end`] clears everything on pointer up.

use kurbo::{Point, Vec2};

/// One interpreted pointer-move sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSample {
    /// Pointer position of this sample.
    pub position: Point,
    /// Movement since the previous sample (or since the drag started).
    pub delta: Vec2,
    /// Offset of `position` from the reference point.
    pub from_reference: Vec2,
}

/// Transient state of one drag, from pointer down to pointer up.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragSession {
    /// Where the drag started; pivot for rotation and scale.
    pub reference: Option<Point>,
    /// Position of the most recent sample.
    pub last_pos: Option<Point>,
}

impl DragSession {
    /// Begins a drag at `pos`, replacing any drag in progress.
    pub fn start(&mut self, pos: Point) {
        self.reference = Some(pos);
        self.last_pos = Some(pos);
    }

    /// Records a move to `pos`.
    ///
    /// Returns `None` when no drag is active; the position is then not
    /// recorded either.
    pub fn update(&mut self, pos: Point) -> Option<DragSample> {
        let reference = self.reference?;
        let last = self.last_pos.unwrap_or(reference);
        self.last_pos = Some(pos);
        Some(DragSample {
            position: pos,
            delta: pos - last,
            from_reference: pos - reference,
        })
    }

    /// Ends the drag and forgets all positions.
    pub fn end(&mut self) {
        self.reference = None;
        self.last_pos = None;
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.reference.is_some()
    }
}
