// Copyright 2025 the Rectform Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end drags through `GestureInterpreter`, checking that modes
//! compose and that both transform backends agree.

use kurbo::Point;
use rectform_affine::{AffineState, MatrixState, TransformState};
use rectform_gesture::{GestureConfig, GestureInterpreter, Mode};

const EPS: f64 = 1e-9;

const PATH: [Point; 4] = [
    Point::new(110.0, 90.0),
    Point::new(125.0, 80.0),
    Point::new(160.0, 60.0),
    Point::new(150.0, 150.0),
];

fn drag<S: TransformState>(g: &mut GestureInterpreter<S>, mode: Mode) {
    g.set_mode(mode);
    g.on_pointer_down(Point::new(100.0, 100.0));
    for p in PATH {
        g.on_pointer_move(p);
    }
    g.on_pointer_up();
}

#[test]
fn separate_drags_match_one_combined_drag() {
    let mut separate = GestureInterpreter::new();
    drag(&mut separate, Mode::Translate);
    drag(&mut separate, Mode::Rotate);
    drag(&mut separate, Mode::Scale);

    let mut combined = GestureInterpreter::new();
    drag(&mut combined, Mode::TranslateRotateScale);

    assert!(
        separate
            .effective_map()
            .approx_eq(&combined.effective_map(), EPS),
        "{:?} vs {:?}",
        separate.effective_map(),
        combined.effective_map()
    );
}

#[test]
fn pairwise_modes_match_their_parts() {
    let pairs = [
        (Mode::TranslateRotate, [Mode::Translate, Mode::Rotate]),
        (Mode::TranslateScale, [Mode::Translate, Mode::Scale]),
        (Mode::RotateScale, [Mode::Rotate, Mode::Scale]),
    ];
    for (combined_mode, parts) in pairs {
        let mut separate = GestureInterpreter::new();
        for part in parts {
            drag(&mut separate, part);
        }
        let mut combined = GestureInterpreter::new();
        drag(&mut combined, combined_mode);

        assert!(
            separate
                .effective_map()
                .approx_eq(&combined.effective_map(), EPS),
            "{combined_mode} disagrees with its parts"
        );
    }
}

#[test]
fn matrix_backend_matches_component_backend() {
    for mode in Mode::ALL {
        let mut a = GestureInterpreter::new();
        let mut m = GestureInterpreter::with_state(MatrixState::new(), GestureConfig::default());
        drag(&mut a, mode);
        drag(&mut m, mode);
        a.apply_preset();
        m.apply_preset();

        for (p, q) in a.current_polygon().iter().zip(m.current_polygon().iter()) {
            assert!((*p - *q).hypot() < EPS, "{mode}: {p:?} vs {q:?}");
        }
    }
}

#[test]
fn scale_invariant_holds_across_long_drags() {
    let mut g = GestureInterpreter::new();
    g.set_mode(Mode::Scale);
    let limits = g.state().scale_limits();
    g.on_pointer_down(Point::new(0.0, 0.0));
    for i in 0..200 {
        // Alternate far and near samples to push against both limits.
        let r = if i % 7 < 4 { 400.0 } else { 5.0 };
        g.on_pointer_move(Point::new(r, 0.0));
        let s = g.state().scale_factor();
        assert!(limits.admits(s), "sample {i}: scale {s} escaped limits");
    }
}

#[test]
fn mode_switch_mid_drag_applies_immediately() {
    let mut g = GestureInterpreter::new();
    g.set_mode(Mode::Translate);
    g.on_pointer_down(Point::new(100.0, 100.0));
    g.on_pointer_move(Point::new(110.0, 100.0));
    g.set_mode(Mode::Rotate);
    g.on_pointer_move(Point::new(120.0, 100.0));

    let state: &AffineState = g.state();
    assert!((state.translation().x - 1.0).abs() < EPS);
    assert!((state.angle_degrees() - 2.0).abs() < EPS);
}
