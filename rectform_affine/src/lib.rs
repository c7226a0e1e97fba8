// Copyright 2025 the Rectform Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectform Affine: accumulated 2D transform state and vertex projection.
//!
//! This crate holds the numeric core of an interactive transform demo: a
//! shape on a Y-up Cartesian canvas is moved, rotated and uniformly scaled,
//! and the displayed corners are recomputed from the accumulated state.
//!
//! - [`AffineState`] accumulates translation, an unbounded rotation angle in
//!   degrees and a uniform scale factor.
//! - [`MatrixState`] stores the same transform as three homogeneous 3×3
//!   matrices and caches their product.
//! - Both implement [`TransformState`] and produce an [`EffectiveMap`]:
//!   `linear = scale · rotate` plus a separately tracked translation.
//! - [`project`] maps a [`CanonicalShape`] through that map.
//!
//! ## Scale policy
//!
//! Scale updates are **reject-if-out-of-range**. `set_scale(sx, sy)` forms
//! the candidate `scale · (sx + sy) / 2` and applies it only if it lies
//! strictly inside the state's [`ScaleLimits`] (default `(0.3, 5.0)`).
//! Otherwise the call is ignored. The scale factor therefore never leaves
//! the open interval, no matter how many extreme updates arrive.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use rectform_affine::{project, AffineState, CanonicalShape, TransformState};
//!
//! let mut state = AffineState::new();
//! state.translate(Vec2::new(1.0, 1.0));
//! state.rotate(90.0);
//! state.set_scale(1.5, 1.5);
//!
//! let polygon = project(&CanonicalShape::DEFAULT, &state);
//! // Bottom-left corner (-25, -25) rotates to (25, -25), scales to
//! // (37.5, -37.5) and moves to (38.5, -36.5).
//! assert!((polygon[0] - Point::new(38.5, -36.5)).hypot() < 1e-9);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod matrix;

mod fused;
mod limits;
mod shape;
mod state;

pub use fused::MatrixState;
pub use limits::{ScaleLimits, ScaleLimitsError};
pub use shape::{CanonicalShape, project};
pub use state::{AffineState, EffectiveMap, TransformState};
