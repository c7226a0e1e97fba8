// Copyright 2025 the Rectform Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

use crate::limits::ScaleLimits;
use crate::matrix::Mat3;
use crate::state::{EffectiveMap, TransformState};

/// Transform state stored as three homogeneous matrices.
///
/// Translation, rotation and scale are each kept as a 3×3 matrix. Every
/// mutation rebuilds the matching factor and recomposes the cached product
/// `T · S · R`, so reading the map never does any trigonometry.
///
/// For the same sequence of calls this yields the same
/// [`EffectiveMap`] as [`AffineState`](crate::AffineState), up to rounding.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MatrixState {
    translation: Vec2,
    angle_degrees: f64,
    scale_factor: f64,
    limits: ScaleLimits,
    translate_m: Mat3,
    rotate_m: Mat3,
    scale_m: Mat3,
    combined: Mat3,
}

impl MatrixState {
    /// Creates an identity state with the default [`ScaleLimits`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_limits(ScaleLimits::DEFAULT)
    }

    /// Creates an identity state with the given scale limits.
    #[must_use]
    pub fn with_limits(limits: ScaleLimits) -> Self {
        Self {
            translation: Vec2::ZERO,
            angle_degrees: 0.0,
            scale_factor: 1.0,
            limits,
            translate_m: Mat3::IDENTITY,
            rotate_m: Mat3::IDENTITY,
            scale_m: Mat3::IDENTITY,
            combined: Mat3::IDENTITY,
        }
    }

    /// The cached `T · S · R` product.
    #[must_use]
    pub fn combined(&self) -> Mat3 {
        self.combined
    }

    fn recompose(&mut self) {
        self.combined = self.translate_m * self.scale_m * self.rotate_m;
    }
}

impl Default for MatrixState {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformState for MatrixState {
    fn translate(&mut self, delta: Vec2) {
        self.translation += delta;
        self.translate_m = Mat3::translation(self.translation);
        self.recompose();
    }

    fn rotate(&mut self, degrees: f64) {
        self.angle_degrees += degrees;
        self.rotate_m = Mat3::rotation_degrees(self.angle_degrees);
        self.recompose();
    }

    fn set_scale(&mut self, sx: f64, sy: f64) -> bool {
        let candidate = self.scale_factor * (sx + sy) / 2.0;
        if !self.limits.admits(candidate) {
            tracing::debug!(
                current = self.scale_factor,
                candidate,
                min = self.limits.min(),
                max = self.limits.max(),
                "scale candidate outside limits, ignored"
            );
            return false;
        }
        self.scale_factor = candidate;
        self.scale_m = Mat3::uniform_scale(candidate);
        self.recompose();
        true
    }

    fn reset(&mut self) {
        *self = Self::with_limits(self.limits);
    }

    fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    fn scale_limits(&self) -> ScaleLimits {
        self.limits
    }

    fn effective_map(&self) -> EffectiveMap {
        EffectiveMap {
            linear: self.combined.linear(),
            translation: self.combined.translation_part(),
        }
    }
}
