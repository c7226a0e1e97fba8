// Copyright 2025 the Rectform Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectform Gesture: interpret pointer drags as transform updates.
//!
//! A UI layer delivers pointer down / move / up events and a discrete
//! [`Mode`]; [`GestureInterpreter`] turns each move sample into
//! translate, rotate and scale calls on a
//! [`TransformState`](rectform_affine::TransformState) and exposes the
//! resulting polygon for redraw.
//!
//! ## Per-sample formulas
//!
//! With `delta = current - last` and `offset = current - reference` (all in
//! screen pixels, Y down), the default [`GestureConfig`] resolves:
//!
//! | component | call |
//! |-----------|------|
//! | translate | `translate(delta.x / 10, -delta.y / 10)` |
//! | rotate    | `rotate(offset.x * 0.1)` degrees |
//! | scale     | `set_scale(s, s)` with `s = clamp(offset.hypot() / 100, 0.5, 1.5)` |
//!
//! Combined modes apply their components in translate, rotate, scale order.
//! Because components accumulate independently, three single-mode drags
//! and one combined drag over the same pointer path end in the same map.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use rectform_gesture::{GestureInterpreter, Mode};
//!
//! let mut gesture = GestureInterpreter::new();
//! gesture.set_mode(Mode::Rotate);
//! gesture.on_pointer_down(Point::new(100.0, 100.0));
//! gesture.on_pointer_move(Point::new(110.0, 100.0));
//! gesture.on_pointer_up();
//!
//! assert!((gesture.state().angle_degrees() - 1.0).abs() < 1e-9);
//! let polygon = gesture.current_polygon();
//! assert_eq!(polygon.len(), 4);
//! ```
//!
//! ## Features
//!
//! - `ui_events_adapter`: adds `GestureInterpreter::handle_pointer_event`
//!   for `ui_events::pointer::PointerEvent`.
//!
//! This crate is `no_std`.

#![no_std]

mod action;
mod config;
mod interpreter;
mod mode;
pub mod session;

#[cfg(feature = "ui_events_adapter")]
mod adapter;

pub use action::{TransformAction, resolve_preset, resolve_sample};
pub use config::{BandError, GestureConfig, PresetStep, ScaleBand};
pub use interpreter::GestureInterpreter;
pub use mode::{Mode, ParseModeError};
pub use session::{DragSample, DragSession};
