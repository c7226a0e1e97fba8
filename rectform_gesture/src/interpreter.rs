// Copyright 2025 the Rectform Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point};
use rectform_affine::{AffineState, CanonicalShape, EffectiveMap, TransformState};

use crate::action::resolve_sample;
use crate::config::GestureConfig;
use crate::mode::Mode;
use crate::session::DragSession;

/// Turns pointer drags into updates on a [`TransformState`].
///
/// The interpreter is `Idle` until [`on_pointer_down`](Self::on_pointer_down)
/// and `Dragging` until [`on_pointer_up`](Self::on_pointer_up). While
/// dragging, every [`on_pointer_move`](Self::on_pointer_move) sample is
/// resolved against the current [`Mode`] and applied right away. Moves while
/// idle are ignored.
///
/// The mode can change at any time, including mid-drag; the next sample uses
/// the new mode. Rendering is pull-based: call
/// [`current_polygon`](Self::current_polygon) or
/// [`effective_map`](Self::effective_map) after feeding events.
///
/// ```
/// use kurbo::{Point, Vec2};
/// use rectform_gesture::{GestureInterpreter, Mode};
///
/// let mut gesture = GestureInterpreter::new();
/// gesture.on_pointer_down(Point::new(100.0, 100.0));
/// gesture.set_mode(Mode::Translate);
/// gesture.on_pointer_move(Point::new(110.0, 90.0));
/// gesture.on_pointer_up();
///
/// // Screen Y grows downward, canvas Y grows upward.
/// assert_eq!(gesture.state().translation(), Vec2::new(1.0, 1.0));
/// ```
#[derive(Clone, Debug)]
pub struct GestureInterpreter<S = AffineState> {
    state: S,
    mode: Mode,
    config: GestureConfig,
    session: DragSession,
    shape: CanonicalShape,
}

impl GestureInterpreter<AffineState> {
    /// Creates an idle interpreter over an identity [`AffineState`] with
    /// default configuration and [`Mode::None`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_state(AffineState::new(), GestureConfig::default())
    }
}

impl Default for GestureInterpreter<AffineState> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: TransformState> GestureInterpreter<S> {
    /// Creates an idle interpreter over `state`.
    #[must_use]
    pub fn with_state(state: S, config: GestureConfig) -> Self {
        Self {
            state,
            mode: Mode::None,
            config,
            session: DragSession::default(),
            shape: CanonicalShape::DEFAULT,
        }
    }

    /// Replaces the shape that [`current_polygon`](Self::current_polygon) projects.
    #[must_use]
    pub fn with_shape(mut self, shape: CanonicalShape) -> Self {
        self.shape = shape;
        self
    }

    /// The active mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Selects how subsequent move samples are interpreted.
    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            tracing::debug!(from = %self.mode, to = %mode, "mode changed");
            self.mode = mode;
        }
    }

    /// The gesture tuning in use.
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Replaces the gesture tuning. Takes effect on the next sample.
    pub fn set_config(&mut self, config: GestureConfig) {
        self.config = config;
    }

    /// The accumulated transform.
    #[must_use]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// The current drag session; empty while idle.
    #[must_use]
    pub fn session(&self) -> &DragSession {
        &self.session
    }

    /// The shape projected by [`current_polygon`](Self::current_polygon).
    #[must_use]
    pub fn shape(&self) -> &CanonicalShape {
        &self.shape
    }

    /// Returns `true` between pointer down and pointer up.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_dragging()
    }

    /// Starts a drag; `position` becomes the reference point.
    ///
    /// A pointer down during a drag restarts it from the new position.
    pub fn on_pointer_down(&mut self, position: Point) {
        tracing::debug!(x = position.x, y = position.y, mode = %self.mode, "drag started");
        self.session.start(position);
    }

    /// Feeds one pointer sample.
    ///
    /// Returns `true` if any action was applied, even one that left the map
    /// as it was (a zero-length translate). Samples while idle, samples in
    /// [`Mode::None`] and samples whose only action was a rejected scale
    /// return `false`.
    pub fn on_pointer_move(&mut self, position: Point) -> bool {
        let Some(sample) = self.session.update(position) else {
            return false;
        };
        let mut changed = false;
        for action in resolve_sample(&self.config, self.mode, &sample) {
            changed |= action.apply(&mut self.state);
        }
        tracing::trace!(
            mode = %self.mode,
            dx = sample.delta.x,
            dy = sample.delta.y,
            rx = sample.from_reference.x,
            ry = sample.from_reference.y,
            changed,
            "pointer sample"
        );
        changed
    }

    /// Ends the drag. Further moves are ignored until the next pointer down.
    pub fn on_pointer_up(&mut self) {
        if self.session.is_dragging() {
            tracing::debug!("drag ended");
        }
        self.session.end();
    }

    /// Applies the configured preset step for the active mode.
    ///
    /// Returns `true` if any part of the step applied.
    pub fn apply_preset(&mut self) -> bool {
        let changed = self.mode.apply_preset(&mut self.state, &self.config.preset);
        tracing::debug!(mode = %self.mode, changed, "preset applied");
        changed
    }

    /// Returns the transform to identity. Any drag in progress continues.
    pub fn reset(&mut self) {
        tracing::debug!("transform reset");
        self.state.reset();
    }

    /// The current affine map.
    #[must_use]
    pub fn effective_map(&self) -> EffectiveMap {
        self.state.effective_map()
    }

    /// The current affine map as a [`kurbo::Affine`].
    #[must_use]
    pub fn affine(&self) -> Affine {
        self.effective_map().to_affine()
    }

    /// The shape's corners under the current map, in winding order.
    #[must_use]
    pub fn current_polygon(&self) -> [Point; 4] {
        rectform_affine::project(&self.shape, &self.state)
    }
}
