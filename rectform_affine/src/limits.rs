// Copyright 2025 the Rectform Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Open interval that every accumulated scale factor must stay inside.
///
/// Scale updates use a **reject-if-out-of-range** policy: a candidate scale
/// `t` is applied only when `min < t < max`. Anything else leaves the current
/// scale unchanged. Rejection is silent; it is not an error.
///
/// The interval always strictly contains `1.0`, so the identity state is
/// valid under every limit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLimits {
    min: f64,
    max: f64,
}

impl ScaleLimits {
    /// The default open interval `(0.3, 5.0)`.
    pub const DEFAULT: Self = Self { min: 0.3, max: 5.0 };

    /// Creates limits for the open interval `(min, max)`.
    ///
    /// Both bounds must be finite, `min` must be positive, and the interval
    /// must strictly contain `1.0`.
    pub fn new(min: f64, max: f64) -> Result<Self, ScaleLimitsError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ScaleLimitsError::NonFinite);
        }
        if min <= 0.0 {
            return Err(ScaleLimitsError::NonPositive { min });
        }
        if !(min < 1.0 && 1.0 < max) {
            return Err(ScaleLimitsError::ExcludesIdentity { min, max });
        }
        Ok(Self { min, max })
    }

    /// Exclusive lower bound.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Exclusive upper bound.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Returns `true` if `scale` lies strictly inside the interval.
    #[must_use]
    pub fn admits(&self, scale: f64) -> bool {
        self.min < scale && scale < self.max
    }
}

impl Default for ScaleLimits {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Reasons [`ScaleLimits::new`] can reject a pair of bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScaleLimitsError {
    /// One of the bounds is NaN or infinite.
    NonFinite,
    /// The lower bound is zero or negative.
    NonPositive {
        /// The rejected lower bound.
        min: f64,
    },
    /// The interval does not strictly contain `1.0`.
    ExcludesIdentity {
        /// The rejected lower bound.
        min: f64,
        /// The rejected upper bound.
        max: f64,
    },
}

impl fmt::Display for ScaleLimitsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite => f.write_str("scale limits must be finite"),
            Self::NonPositive { min } => {
                write!(f, "minimum scale must be positive, got {min}")
            }
            Self::ExcludesIdentity { min, max } => {
                write!(f, "scale limits ({min}, {max}) must strictly contain 1.0")
            }
        }
    }
}

impl core::error::Error for ScaleLimitsError {}
