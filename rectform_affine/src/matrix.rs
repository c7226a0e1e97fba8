// Copyright 2025 the Rectform Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-size 2×2 and 3×3 matrices.
//!
//! The transform engine never needs more than a 3×3 homogeneous matrix, so
//! these types cover exactly the products and conversions it uses. Both are
//! stored row-major and act on column vectors.

use core::ops::Mul;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Affine, Point, Vec2};

/// A row-major 2×2 matrix acting on column vectors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat2 {
    /// Rows of the matrix: `rows[r][c]`.
    pub rows: [[f64; 2]; 2],
}

impl Mat2 {
    /// The identity matrix.
    pub const IDENTITY: Self = Self {
        rows: [[1.0, 0.0], [0.0, 1.0]],
    };

    /// Creates a matrix from its rows.
    #[must_use]
    pub const fn new(rows: [[f64; 2]; 2]) -> Self {
        Self { rows }
    }

    /// Counter-clockwise rotation by `degrees`.
    ///
    /// The result is `[[cos θ, -sin θ], [sin θ, cos θ]]`.
    #[must_use]
    pub fn rotation_degrees(degrees: f64) -> Self {
        let (s, c) = degrees.to_radians().sin_cos();
        Self::new([[c, -s], [s, c]])
    }

    /// Uniform scale by `factor`.
    #[must_use]
    pub const fn uniform_scale(factor: f64) -> Self {
        Self::new([[factor, 0.0], [0.0, factor]])
    }

    /// Applies the matrix to a vector.
    #[must_use]
    pub fn mul_vec2(self, v: Vec2) -> Vec2 {
        let [[a, b], [c, d]] = self.rows;
        Vec2::new(a * v.x + b * v.y, c * v.x + d * v.y)
    }

    /// Returns `true` if every entry is within `eps` of the matching entry in `other`.
    #[must_use]
    pub fn approx_eq(self, other: Self, eps: f64) -> bool {
        self.rows
            .iter()
            .flatten()
            .zip(other.rows.iter().flatten())
            .all(|(a, b)| (a - b).abs() <= eps)
    }
}

impl Default for Mat2 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Mat2 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut rows = [[0.0; 2]; 2];
        for (r, row) in rows.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = self.rows[r][0] * rhs.rows[0][c] + self.rows[r][1] * rhs.rows[1][c];
            }
        }
        Self { rows }
    }
}

/// A row-major 3×3 homogeneous matrix acting on column vectors `(x, y, 1)`.
///
/// Only affine matrices (last row `[0, 0, 1]`) are produced by the
/// constructors here; products of affine matrices stay affine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat3 {
    /// Rows of the matrix: `rows[r][c]`.
    pub rows: [[f64; 3]; 3],
}

impl Mat3 {
    /// The identity matrix.
    pub const IDENTITY: Self = Self {
        rows: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    /// Creates a matrix from its rows.
    #[must_use]
    pub const fn new(rows: [[f64; 3]; 3]) -> Self {
        Self { rows }
    }

    /// Homogeneous translation by `offset`.
    #[must_use]
    pub const fn translation(offset: Vec2) -> Self {
        Self::new([[1.0, 0.0, offset.x], [0.0, 1.0, offset.y], [0.0, 0.0, 1.0]])
    }

    /// Embeds a 2×2 linear map with zero translation.
    #[must_use]
    pub const fn from_linear(m: Mat2) -> Self {
        let [[a, b], [c, d]] = m.rows;
        Self::new([[a, b, 0.0], [c, d, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Counter-clockwise rotation by `degrees` about the origin.
    #[must_use]
    pub fn rotation_degrees(degrees: f64) -> Self {
        Self::from_linear(Mat2::rotation_degrees(degrees))
    }

    /// Uniform scale by `factor` about the origin.
    #[must_use]
    pub const fn uniform_scale(factor: f64) -> Self {
        Self::from_linear(Mat2::uniform_scale(factor))
    }

    /// The upper-left 2×2 linear part.
    #[must_use]
    pub const fn linear(&self) -> Mat2 {
        let r = &self.rows;
        Mat2::new([[r[0][0], r[0][1]], [r[1][0], r[1][1]]])
    }

    /// The translation column.
    #[must_use]
    pub const fn translation_part(&self) -> Vec2 {
        Vec2::new(self.rows[0][2], self.rows[1][2])
    }

    /// Maps a point, treating it as `(x, y, 1)`.
    #[must_use]
    pub fn transform_point(&self, p: Point) -> Point {
        let r = &self.rows;
        Point::new(
            r[0][0] * p.x + r[0][1] * p.y + r[0][2],
            r[1][0] * p.x + r[1][1] * p.y + r[1][2],
        )
    }

    /// Converts the affine part into a [`kurbo::Affine`].
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        let r = &self.rows;
        Affine::new([r[0][0], r[1][0], r[0][1], r[1][1], r[0][2], r[1][2]])
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Mat3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut rows = [[0.0; 3]; 3];
        for (r, row) in rows.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = (0..3).map(|k| self.rows[r][k] * rhs.rows[k][c]).sum();
            }
        }
        Self { rows }
    }
}
