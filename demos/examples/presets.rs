// Copyright 2025 the Rectform Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Button-style preset steps.
//!
//! Each argument names a mode (`translate`, `rotate_scale`, ...). Every name
//! applies that mode's preset step once, like clicking its button, and the
//! resulting corners are printed. `reset` returns to identity.
//!
//! Run:
//! - `cargo run -p rectform_demos --example presets -- translate rotate scale scale`

use std::process::ExitCode;

use rectform_affine::{MatrixState, TransformState};
use rectform_demos::{format_polygon, init_logging};
use rectform_gesture::{GestureConfig, GestureInterpreter, Mode};

fn main() -> ExitCode {
    init_logging();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        args = Mode::ALL.iter().map(|m| m.to_string()).collect();
    }

    // The fused backend, to show it behaves like the default one.
    let mut gesture = GestureInterpreter::with_state(MatrixState::new(), GestureConfig::default());
    let mut status = ExitCode::SUCCESS;

    for arg in &args {
        if arg == "reset" {
            gesture.reset();
        } else {
            match arg.parse::<Mode>() {
                Ok(mode) => {
                    gesture.set_mode(mode);
                    if !gesture.apply_preset() {
                        tracing::warn!(%mode, "preset changed nothing");
                    }
                }
                Err(err) => {
                    eprintln!("{arg}: {err}");
                    status = ExitCode::FAILURE;
                    continue;
                }
            }
        }
        println!(
            "{arg:<24} scale={:.3}  {}",
            gesture.state().scale_factor(),
            format_polygon(&gesture.current_polygon())
        );
    }
    status
}
