// Copyright 2025 the Rectform Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the headless demos.

use kurbo::Point;
use tracing_subscriber::EnvFilter;

/// Installs a `tracing` subscriber.
///
/// Honors `RUST_LOG`; defaults to `debug` for the rectform crates so drag
/// lifecycle events are visible.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,rectform_affine=debug,rectform_gesture=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Formats a polygon as `(x, y)` pairs with two decimals.
#[must_use]
pub fn format_polygon(polygon: &[Point]) -> String {
    let mut out = String::new();
    for (i, p) in polygon.iter().enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        out.push_str(&format!("({:.2}, {:.2})", p.x, p.y));
    }
    out
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::format_polygon;

    #[test]
    fn polygon_formatting() {
        let s = format_polygon(&[Point::new(1.0, -2.5), Point::new(0.126, 3.0)]);
        assert_eq!(s, "(1.00, -2.50)  (0.13, 3.00)");
    }
}
