// Copyright 2025 the Rectform Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;
use rectform_affine::TransformState;

use crate::config::{GestureConfig, PresetStep};
use crate::mode::Mode;
use crate::session::DragSample;

/// One update to a [`TransformState`], before it is applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransformAction {
    /// Add an offset in canvas units (Y-up).
    Translate(Vec2),
    /// Add a counter-clockwise rotation in degrees.
    Rotate(f64),
    /// Multiply by a uniform scale factor, subject to the state's limits.
    Scale(f64),
}

impl TransformAction {
    /// Applies this action to `state`.
    ///
    /// Returns `false` only for a scale the state rejected.
    pub fn apply<S: TransformState + ?Sized>(self, state: &mut S) -> bool {
        match self {
            Self::Translate(delta) => {
                state.translate(delta);
                true
            }
            Self::Rotate(degrees) => {
                state.rotate(degrees);
                true
            }
            Self::Scale(factor) => state.set_scale(factor, factor),
        }
    }
}

/// Resolves a drag sample into the actions `mode` calls for.
///
/// Actions come out in translate, rotate, scale order:
/// - translate by `(dx, -dy) / translate_divisor`, flipping screen Y-down
///   into canvas Y-up;
/// - rotate by `rotate_gain` degrees per pixel of horizontal offset from the
///   reference point;
/// - scale by the distance from the reference point over
///   `scale_normalization`, clamped into `scale_band`.
pub fn resolve_sample(
    config: &GestureConfig,
    mode: Mode,
    sample: &DragSample,
) -> impl Iterator<Item = TransformAction> + use<> {
    let translate = mode.translates().then(|| {
        TransformAction::Translate(
            Vec2::new(sample.delta.x, -sample.delta.y) / config.translate_divisor,
        )
    });
    let rotate = mode
        .rotates()
        .then(|| TransformAction::Rotate(sample.from_reference.x * config.rotate_gain));
    let scale = mode.scales().then(|| {
        let normalized = sample.from_reference.hypot() / config.scale_normalization;
        TransformAction::Scale(config.scale_band.clamp(normalized))
    });
    [translate, rotate, scale].into_iter().flatten()
}

/// Resolves a preset step into the actions `mode` calls for.
pub fn resolve_preset(
    preset: &PresetStep,
    mode: Mode,
) -> impl Iterator<Item = TransformAction> + use<> {
    let translate = mode
        .translates()
        .then_some(TransformAction::Translate(preset.translation));
    let rotate = mode
        .rotates()
        .then_some(TransformAction::Rotate(preset.degrees));
    let scale = mode.scales().then_some(TransformAction::Scale(preset.scale));
    [translate, rotate, scale].into_iter().flatten()
}
