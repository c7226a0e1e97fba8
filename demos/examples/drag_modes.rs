// Copyright 2025 the Rectform Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted drags through every mode.
//!
//! Feeds the same pointer path through each [`Mode`] and prints the square's
//! corners after every drag. Set `RUST_LOG=rectform_gesture=trace` to see
//! each sample.
//!
//! Run:
//! - `cargo run -p rectform_demos --example drag_modes`

use kurbo::Point;
use rectform_affine::TransformState;
use rectform_demos::{format_polygon, init_logging};
use rectform_gesture::{GestureInterpreter, Mode};

fn main() {
    init_logging();

    // Screen-space path: right and up, then back down.
    let path = [
        Point::new(110.0, 95.0),
        Point::new(130.0, 85.0),
        Point::new(160.0, 80.0),
        Point::new(170.0, 120.0),
    ];

    for mode in Mode::ALL {
        let mut gesture = GestureInterpreter::new();
        gesture.set_mode(mode);
        gesture.on_pointer_down(Point::new(100.0, 100.0));
        for p in path {
            gesture.on_pointer_move(p);
        }
        gesture.on_pointer_up();

        let state = gesture.state();
        println!(
            "{mode:<24} t=({:.2}, {:.2}) angle={:.2} scale={:.3}",
            state.translation().x,
            state.translation().y,
            state.normalized_degrees(),
            state.scale_factor(),
        );
        println!("{:<24} {}", "", format_polygon(&gesture.current_polygon()));
    }
}
