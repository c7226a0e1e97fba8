// Copyright 2025 the Rectform Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Affine, Point, Vec2};

use crate::limits::ScaleLimits;
use crate::matrix::{Mat2, Mat3};

/// The net affine map produced by a transform state.
///
/// `linear` is `scale · rotate`; `translation` is applied after it, so a
/// point `p` maps to `linear · p + translation`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EffectiveMap {
    /// Rotation and uniform scale.
    pub linear: Mat2,
    /// Offset added after the linear part.
    pub translation: Vec2,
}

impl EffectiveMap {
    /// The identity map.
    pub const IDENTITY: Self = Self {
        linear: Mat2::IDENTITY,
        translation: Vec2::ZERO,
    };

    /// Maps a point through the linear part, then the translation.
    #[must_use]
    pub fn apply(&self, p: Point) -> Point {
        (self.linear.mul_vec2(p.to_vec2()) + self.translation).to_point()
    }

    /// The same map as a homogeneous 3×3 matrix.
    #[must_use]
    pub fn to_mat3(&self) -> Mat3 {
        Mat3::translation(self.translation) * Mat3::from_linear(self.linear)
    }

    /// The same map as a [`kurbo::Affine`].
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        self.to_mat3().to_affine()
    }

    /// Entry-wise comparison within `eps`.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, eps: f64) -> bool {
        self.linear.approx_eq(other.linear, eps)
            && (self.translation.x - other.translation.x).abs() <= eps
            && (self.translation.y - other.translation.y).abs() <= eps
    }
}

impl Default for EffectiveMap {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Accumulating translate/rotate/scale state.
///
/// Implementations differ in how they store the transform, but for the same
/// sequence of calls they must produce the same [`EffectiveMap`].
///
/// All operations are total. Non-finite input is a caller contract violation
/// and is not reported.
pub trait TransformState {
    /// Adds `delta` to the accumulated translation.
    fn translate(&mut self, delta: Vec2);

    /// Adds `degrees` to the accumulated counter-clockwise rotation.
    ///
    /// The angle is never wrapped.
    fn rotate(&mut self, degrees: f64);

    /// Multiplies the scale factor by the mean of `sx` and `sy`.
    ///
    /// The product is applied only if the state's [`ScaleLimits`] admit it.
    /// Returns whether the candidate was applied; a rejected candidate leaves
    /// the state untouched.
    fn set_scale(&mut self, sx: f64, sy: f64) -> bool;

    /// Returns to identity: zero translation, zero angle, unit scale.
    fn reset(&mut self);

    /// The current uniform scale factor.
    fn scale_factor(&self) -> f64;

    /// The limits the scale factor is kept within.
    fn scale_limits(&self) -> ScaleLimits;

    /// The combined `scale · rotate` linear part and the translation.
    fn effective_map(&self) -> EffectiveMap;
}

/// Transform state stored as separate components.
///
/// The translation, the unbounded rotation angle in degrees and the uniform
/// scale factor are kept apart and only combined in
/// [`effective_map`](TransformState::effective_map).
///
/// ```
/// use kurbo::Vec2;
/// use rectform_affine::{AffineState, TransformState};
///
/// let mut state = AffineState::new();
/// state.translate(Vec2::new(1.0, 2.0));
/// state.rotate(90.0);
/// assert!(state.set_scale(2.0, 2.0));
///
/// // Out of the default (0.3, 5.0) range: ignored.
/// assert!(!state.set_scale(3.0, 3.0));
/// assert_eq!(state.scale_factor(), 2.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AffineState {
    translation: Vec2,
    angle_degrees: f64,
    scale_factor: f64,
    limits: ScaleLimits,
}

impl AffineState {
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
        }
    }

    /// The accumulated translation.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        self.translation
    }

    /// The accumulated rotation in degrees, unbounded.
    #[must_use]
    pub fn angle_degrees(&self) -> f64 {
        self.angle_degrees
    }

    /// The rotation folded into `[0, 360)`, for display.
    #[must_use]
    pub fn normalized_degrees(&self) -> f64 {
        let mut wrapped = self.angle_degrees % 360.0;
        if wrapped < 0.0 {
            wrapped += 360.0;
        }
        // Tiny negative angles round up to exactly 360.
        if wrapped >= 360.0 { 0.0 } else { wrapped }
    }
}

impl Default for AffineState {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformState for AffineState {
    fn translate(&mut self, delta: Vec2) {
        self.translation += delta;
    }

    fn rotate(&mut self, degrees: f64) {
        self.angle_degrees += degrees;
    }

    fn set_scale(&mut self, sx: f64, sy: f64) -> bool {
        let candidate = self.scale_factor * (sx + sy) / 2.0;
        if self.limits.admits(candidate) {
            self.scale_factor = candidate;
            true
        } else {
            tracing::debug!(
                current = self.scale_factor,
                candidate,
                min = self.limits.min(),
                max = self.limits.max(),
                "scale candidate outside limits, ignored"
            );
            false
        }
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
            linear: Mat2::uniform_scale(self.scale_factor)
                * Mat2::rotation_degrees(self.angle_degrees),
            translation: self.translation,
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::{AffineState, EffectiveMap, TransformState};
    use crate::limits::ScaleLimits;
    use crate::matrix::Mat2;

    const EPS: f64 = 1e-9;

    #[test]
    fn new_state_is_identity() {
        let state = AffineState::new();
        assert_eq!(state.translation(), Vec2::ZERO);
        assert_eq!(state.angle_degrees(), 0.0);
        assert_eq!(state.scale_factor(), 1.0);
        assert_eq!(state.effective_map(), EffectiveMap::IDENTITY);
    }

    #[test]
    fn translations_accumulate() {
        let mut a = AffineState::new();
        a.translate(Vec2::new(1.5, -2.0));
        a.translate(Vec2::new(3.0, 4.5));

        let mut b = AffineState::new();
        b.translate(Vec2::new(4.5, 2.5));

        assert_eq!(a.translation(), b.translation());
    }

    #[test]
    fn rotations_accumulate_without_wrapping() {
        let mut state = AffineState::new();
        state.rotate(30.0);
        state.rotate(60.0);
        assert!(
            state
                .effective_map()
                .linear
                .approx_eq(Mat2::rotation_degrees(90.0), EPS)
        );

        state.rotate(720.0);
        assert_eq!(state.angle_degrees(), 810.0);
        assert!((state.normalized_degrees() - 90.0).abs() < EPS);
        assert!(
            state
                .effective_map()
                .linear
                .approx_eq(Mat2::rotation_degrees(90.0), EPS)
        );
    }

    #[test]
    fn normalized_degrees_handles_negative_angles() {
        let mut state = AffineState::new();
        state.rotate(-30.0);
        assert!((state.normalized_degrees() - 330.0).abs() < EPS);

        state.reset();
        state.rotate(-1e-20);
        let n = state.normalized_degrees();
        assert!((0.0..360.0).contains(&n), "got {n}");
    }

    #[test]
    fn set_scale_uses_mean_of_axes() {
        let mut state = AffineState::new();
        assert!(state.set_scale(1.0, 2.0));
        assert_eq!(state.scale_factor(), 1.5);
    }

    #[test]
    fn set_scale_rejects_out_of_range_candidates() {
        let mut state = AffineState::new();
        assert!(state.set_scale(4.0, 4.0));
        // 4.0 * 1.5 = 6.0 > 5.0
        assert!(!state.set_scale(1.5, 1.5));
        assert_eq!(state.scale_factor(), 4.0);

        state.reset();
        // Exactly on the lower bound is rejected too.
        assert!(!state.set_scale(0.3, 0.3));
        assert_eq!(state.scale_factor(), 1.0);
    }

    #[test]
    fn scale_stays_within_limits_after_every_call() {
        let limits = ScaleLimits::default();
        let mut state = AffineState::new();
        let factors = [1.5, 1.5, 1.5, 1.5, 1.5, 0.5, 0.5, 0.5, 0.5, 0.1, 10.0, 0.9];
        for f in factors {
            state.set_scale(f, f);
            let s = state.scale_factor();
            assert!(limits.admits(s), "scale {s} escaped limits after factor {f}");
        }
    }

    #[test]
    fn custom_limits_are_kept_across_reset() {
        let limits = ScaleLimits::new(0.5, 1.5).unwrap();
        let mut state = AffineState::with_limits(limits);
        assert!(!state.set_scale(2.0, 2.0));
        assert!(state.set_scale(1.2, 1.2));
        state.reset();
        assert_eq!(state.scale_factor(), 1.0);
        assert_eq!(state.scale_limits(), limits);
    }

    #[test]
    fn effective_map_is_scale_after_rotate_then_translate() {
        let mut state = AffineState::new();
        state.rotate(90.0);
        state.set_scale(2.0, 2.0);
        state.translate(Vec2::new(10.0, 0.0));

        let p = state.effective_map().apply(Point::new(1.0, 0.0));
        assert!((p.x - 10.0).abs() < EPS, "x = {}", p.x);
        assert!((p.y - 2.0).abs() < EPS, "y = {}", p.y);
    }

    #[test]
    fn effective_map_agrees_with_kurbo_affine() {
        let mut state = AffineState::new();
        state.translate(Vec2::new(-3.0, 7.0));
        state.rotate(123.0);
        state.set_scale(1.25, 1.25);

        let map = state.effective_map();
        let affine = map.to_affine();
        for p in [Point::new(25.0, 25.0), Point::new(-25.0, 10.0)] {
            let a = map.apply(p);
            let b = affine * p;
            assert!((a - b).hypot() < EPS, "{a:?} vs {b:?}");
        }
    }
}
