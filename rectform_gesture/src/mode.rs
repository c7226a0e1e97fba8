// Copyright 2025 the Rectform Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::str::FromStr;

use rectform_affine::TransformState;

use crate::action::resolve_preset;
use crate::config::PresetStep;

/// Which subset of translate, rotate and scale a drag drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Drags only move the shape.
    Translate,
    /// Drags only rotate the shape.
    Rotate,
    /// Drags only scale the shape.
    Scale,
    /// Move and rotate.
    TranslateRotate,
    /// Move and scale.
    TranslateScale,
    /// Rotate and scale.
    RotateScale,
    /// Move, rotate and scale.
    TranslateRotateScale,
    /// Drags are tracked but change nothing.
    #[default]
    None,
}

impl Mode {
    /// The seven active modes, in button order.
    pub const ALL: [Self; 7] = [
        Self::Translate,
        Self::Rotate,
        Self::Scale,
        Self::TranslateRotate,
        Self::TranslateScale,
        Self::RotateScale,
        Self::TranslateRotateScale,
    ];

    /// Returns `true` if this mode moves the shape.
    #[must_use]
    pub fn translates(self) -> bool {
        matches!(
            self,
            Self::Translate
                | Self::TranslateRotate
                | Self::TranslateScale
                | Self::TranslateRotateScale
        )
    }

    /// Returns `true` if this mode rotates the shape.
    #[must_use]
    pub fn rotates(self) -> bool {
        matches!(
            self,
            Self::Rotate | Self::TranslateRotate | Self::RotateScale | Self::TranslateRotateScale
        )
    }

    /// Returns `true` if this mode scales the shape.
    #[must_use]
    pub fn scales(self) -> bool {
        matches!(
            self,
            Self::Scale | Self::TranslateScale | Self::RotateScale | Self::TranslateRotateScale
        )
    }

    /// The `snake_case` name used by [`FromStr`] and [`Display`](fmt::Display).
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Translate => "translate",
            Self::Rotate => "rotate",
            Self::Scale => "scale",
            Self::TranslateRotate => "translate_rotate",
            Self::TranslateScale => "translate_scale",
            Self::RotateScale => "rotate_scale",
            Self::TranslateRotateScale => "translate_rotate_scale",
            Self::None => "none",
        }
    }

    /// Applies one preset `step` for this mode to `state`, like clicking the
    /// mode's button.
    ///
    /// Returns `true` if any part applied. A rejected scale does not stop
    /// the translate and rotate parts.
    pub fn apply_preset<S: TransformState + ?Sized>(
        self,
        state: &mut S,
        step: &PresetStep,
    ) -> bool {
        resolve_preset(step, self).fold(false, |changed, action| action.apply(state) | changed)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .chain([Self::None])
            .find(|mode| mode.name() == s)
            .ok_or(ParseModeError)
    }
}

/// Error returned when a string names no [`Mode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseModeError;

impl fmt::Display for ParseModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown transform mode")
    }
}

impl core::error::Error for ParseModeError {}
