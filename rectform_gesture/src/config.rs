// Copyright 2025 the Rectform Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::Vec2;

/// Closed band that per-sample scale factors are clamped into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleBand {
    low: f64,
    high: f64,
}

impl ScaleBand {
    /// The default band `[0.5, 1.5]`.
    pub const DEFAULT: Self = Self {
        low: 0.5,
        high: 1.5,
    };

    /// Creates the band `[low, high]`.
    ///
    /// Both ends must be finite and positive, with `low <= high`.
    pub fn new(low: f64, high: f64) -> Result<Self, BandError> {
        if !low.is_finite() || !high.is_finite() {
            return Err(BandError::NonFinite);
        }
        if low <= 0.0 {
            return Err(BandError::NonPositive { low });
        }
        if low > high {
            return Err(BandError::Inverted { low, high });
        }
        Ok(Self { low, high })
    }

    /// Lower end, inclusive.
    #[must_use]
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Upper end, inclusive.
    #[must_use]
    pub fn high(&self) -> f64 {
        self.high
    }

    /// Clamps `value` into the band.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.low, self.high)
    }
}

impl Default for ScaleBand {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Reasons [`ScaleBand::new`] can reject a band.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BandError {
    /// One of the ends is NaN or infinite.
    NonFinite,
    /// The lower end is zero or negative.
    NonPositive {
        /// The rejected lower end.
        low: f64,
    },
    /// The lower end is above the upper end.
    Inverted {
        /// The rejected lower end.
        low: f64,
        /// The rejected upper end.
        high: f64,
    },
}

impl fmt::Display for BandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite => f.write_str("scale band must be finite"),
            Self::NonPositive { low } => write!(f, "scale band must be positive, got low {low}"),
            Self::Inverted { low, high } => {
                write!(f, "scale band [{low}, {high}] is inverted")
            }
        }
    }
}

impl core::error::Error for BandError {}

/// A fixed step applied when a mode is triggered without dragging,
/// like clicking a toolbar button.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PresetStep {
    /// Offset for modes that translate.
    pub translation: Vec2,
    /// Rotation in degrees for modes that rotate.
    pub degrees: f64,
    /// Uniform scale factor for modes that scale.
    pub scale: f64,
}

impl Default for PresetStep {
    fn default() -> Self {
        Self {
            translation: Vec2::new(50.0, 50.0),
            degrees: 30.0,
            scale: 1.5,
        }
    }
}

/// Tuning for how pointer movement turns into transform updates.
///
/// All distances are in screen pixels.
///
/// ```
/// use rectform_gesture::{GestureConfig, ScaleBand};
///
/// let config = GestureConfig::default()
///     .with_rotate_gain(0.2)
///     .with_scale_band(ScaleBand::new(0.8, 1.2).unwrap());
/// assert_eq!(config.translate_divisor, 10.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    /// Pointer deltas are divided by this before translating.
    pub translate_divisor: f64,
    /// Degrees of rotation per pixel of horizontal offset from the reference point.
    pub rotate_gain: f64,
    /// Distance from the reference point that maps to a unit scale factor.
    pub scale_normalization: f64,
    /// Band the per-sample scale factor is clamped into.
    pub scale_band: ScaleBand,
    /// Step used by preset application.
    pub preset: PresetStep,
}

impl GestureConfig {
    /// Sets [`translate_divisor`](Self::translate_divisor).
    #[must_use]
    pub fn with_translate_divisor(mut self, divisor: f64) -> Self {
        self.translate_divisor = divisor;
        self
    }

    /// Sets [`rotate_gain`](Self::rotate_gain).
    #[must_use]
    pub fn with_rotate_gain(mut self, gain: f64) -> Self {
        self.rotate_gain = gain;
        self
    }

    /// Sets [`scale_normalization`](Self::scale_normalization).
    #[must_use]
    pub fn with_scale_normalization(mut self, normalization: f64) -> Self {
        self.scale_normalization = normalization;
        self
    }

    /// Sets [`scale_band`](Self::scale_band).
    #[must_use]
    pub fn with_scale_band(mut self, band: ScaleBand) -> Self {
        self.scale_band = band;
        self
    }

    /// Sets [`preset`](Self::preset).
    #[must_use]
    pub fn with_preset(mut self, preset: PresetStep) -> Self {
        self.preset = preset;
        self
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            translate_divisor: 10.0,
            rotate_gain: 0.1,
            scale_normalization: 100.0,
            scale_band: ScaleBand::DEFAULT,
            preset: PresetStep::default(),
        }
    }
}
