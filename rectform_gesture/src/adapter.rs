// Copyright 2025 the Rectform Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter from `ui-events` pointer events.

use rectform_affine::TransformState;
use ui_events::pointer::{PointerButton, PointerEvent};

use crate::interpreter::GestureInterpreter;

impl<S: TransformState> GestureInterpreter<S> {
    /// Routes a `ui-events` pointer event to the matching handler.
    ///
    /// Only the primary button starts or ends a drag. `Cancel` ends the drag
    /// like a release. Positions are taken in logical pixels. Returns `true`
    /// if a move applied any action.
    pub fn handle_pointer_event(&mut self, event: &PointerEvent) -> bool {
        match event {
            PointerEvent::Down(e) if e.button == Some(PointerButton::Primary) => {
                self.on_pointer_down(e.state.logical_point());
                false
            }
            PointerEvent::Move(e) => self.on_pointer_move(e.current.logical_point()),
            PointerEvent::Up(e) if e.button == Some(PointerButton::Primary) => {
                self.on_pointer_up();
                false
            }
            PointerEvent::Cancel(_) => {
                self.on_pointer_up();
                false
            }
            _ => false,
        }
    }
}
