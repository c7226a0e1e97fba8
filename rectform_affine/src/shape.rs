// Copyright 2025 the Rectform Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point};

use crate::state::{EffectiveMap, TransformState};

/// The untransformed reference square.
///
/// Corners are stored counter-clockwise (in Y-up space) starting at the
/// bottom-left: `(-h, -h)`, `(h, -h)`, `(h, h)`, `(-h, h)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanonicalShape {
    corners: [Point; 4],
}

impl CanonicalShape {
    /// Half extent of [`CanonicalShape::DEFAULT`].
    pub const DEFAULT_HALF_EXTENT: f64 = 25.0;

    /// A 50×50 square centered at the origin.
    pub const DEFAULT: Self = Self::square(Self::DEFAULT_HALF_EXTENT);

    /// An axis-aligned square centered at the origin.
    #[must_use]
    pub const fn square(half_extent: f64) -> Self {
        let h = half_extent;
        Self {
            corners: [
                Point::new(-h, -h),
                Point::new(h, -h),
                Point::new(h, h),
                Point::new(-h, h),
            ],
        }
    }

    /// The corners in winding order.
    #[must_use]
    pub fn corners(&self) -> &[Point; 4] {
        &self.corners
    }

    /// Maps every corner through `map`, keeping the winding order.
    #[must_use]
    pub fn project_with(&self, map: &EffectiveMap) -> [Point; 4] {
        self.corners.map(|p| map.apply(p))
    }

    /// Maps every corner through a [`kurbo::Affine`], keeping the winding order.
    #[must_use]
    pub fn transformed_by(&self, affine: Affine) -> [Point; 4] {
        self.corners.map(|p| affine * p)
    }
}

impl Default for CanonicalShape {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Projects `shape` through the current map of `state`.
///
/// Each corner `p` becomes `linear · p + translation`. The result is ordered
/// like [`CanonicalShape::corners`].
///
/// ```
/// use kurbo::{Point, Vec2};
/// use rectform_affine::{project, AffineState, CanonicalShape, TransformState};
///
/// let mut state = AffineState::new();
/// state.translate(Vec2::new(10.0, 0.0));
///
/// let polygon = project(&CanonicalShape::DEFAULT, &state);
/// assert_eq!(polygon[0], Point::new(-15.0, -25.0));
/// ```
#[must_use]
pub fn project<S: TransformState + ?Sized>(shape: &CanonicalShape, state: &S) -> [Point; 4] {
    shape.project_with(&state.effective_map())
}

#[cfg(test)]
mod tests {
    use kurbo::{Affine, Point, Vec2};

    use super::{CanonicalShape, project};
    use crate::state::{AffineState, TransformState};

    const EPS: f64 = 1e-9;

    #[test]
    fn default_square_corners() {
        let shape = CanonicalShape::default();
        assert_eq!(
            shape.corners(),
            &[
                Point::new(-25.0, -25.0),
                Point::new(25.0, -25.0),
                Point::new(25.0, 25.0),
                Point::new(-25.0, 25.0),
            ]
        );
    }

    #[test]
    fn identity_projection_is_unchanged() {
        let shape = CanonicalShape::DEFAULT;
        let state = AffineState::new();
        assert_eq!(&project(&shape, &state), shape.corners());
    }

    #[test]
    fn quarter_turn_rotates_corners_in_order() {
        let shape = CanonicalShape::DEFAULT;
        let mut state = AffineState::new();
        state.rotate(90.0);

        let polygon = project(&shape, &state);
        // A counter-clockwise quarter turn moves each corner onto the next one.
        for (i, p) in polygon.iter().enumerate() {
            let expected = shape.corners()[(i + 1) % 4];
            assert!((*p - expected).hypot() < EPS, "corner {i}: {p:?}");
        }
    }

    #[test]
    fn scale_and_translate() {
        let shape = CanonicalShape::square(10.0);
        let mut state = AffineState::new();
        state.set_scale(2.0, 2.0);
        state.translate(Vec2::new(5.0, -5.0));

        let polygon = project(&shape, &state);
        assert_eq!(polygon[0], Point::new(-15.0, -25.0));
        assert_eq!(polygon[2], Point::new(25.0, 15.0));
    }

    #[test]
    fn kurbo_affine_projection_matches() {
        let shape = CanonicalShape::DEFAULT;
        let mut state = AffineState::new();
        state.rotate(33.0);
        state.set_scale(1.4, 1.4);
        state.translate(Vec2::new(-12.0, 40.0));

        let map = state.effective_map();
        let ours = project(&shape, &state);
        let theirs = shape.transformed_by(map.to_affine());
        for (a, b) in ours.iter().zip(theirs.iter()) {
            assert!((*a - *b).hypot() < EPS, "{a:?} vs {b:?}");
        }

        let via_kurbo = shape.transformed_by(Affine::translate((1.0, 2.0)));
        assert_eq!(via_kurbo[0], Point::new(-24.0, -23.0));
    }
}
