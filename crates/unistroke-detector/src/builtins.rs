//! Built-in template set.
//!
//! A handful of common single-stroke shapes generated procedurally, in
//! screen-style coordinates (y grows downwards). Useful for demos and as a
//! default when no template file is given.

use std::f64::consts::TAU;

use nalgebra::Point2;

use crate::Pattern;

/// Names of the built-in patterns, in the order `builtin_patterns` returns them.
pub const BUILTIN_NAMES: [&str; 7] = [
    "line",
    "circle",
    "triangle",
    "rectangle",
    "check",
    "caret",
    "zigzag",
];

fn polyline(coords: &[(f64, f64)]) -> Vec<Point2<f64>> {
    coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
}

fn circle_points(samples: usize) -> Vec<Point2<f64>> {
    (0..=samples)
        .map(|i| {
            let a = TAU * i as f64 / samples as f64;
            Point2::new(50.0 + 50.0 * a.cos(), 50.0 + 50.0 * a.sin())
        })
        .collect()
}

/// Build one built-in pattern by name.
pub fn builtin_pattern(name: &str) -> Option<Pattern> {
    let pattern = match name {
        "line" => Pattern::new("line", polyline(&[(0.0, 0.0), (100.0, 0.0)])),
        "circle" => Pattern::new("circle", circle_points(32)).with_rotation(true),
        "triangle" => Pattern::new(
            "triangle",
            polyline(&[(50.0, 0.0), (100.0, 86.6), (0.0, 86.6), (50.0, 0.0)]),
        )
        .with_rotation(true),
        "rectangle" => Pattern::new(
            "rectangle",
            polyline(&[
                (0.0, 0.0),
                (120.0, 0.0),
                (120.0, 80.0),
                (0.0, 80.0),
                (0.0, 0.0),
            ]),
        )
        .with_rotation(true),
        "check" => Pattern::new("check", polyline(&[(0.0, 50.0), (30.0, 80.0), (100.0, 0.0)]))
            .with_both_directions(false),
        "caret" => Pattern::new(
            "caret",
            polyline(&[(0.0, 100.0), (50.0, 0.0), (100.0, 100.0)]),
        ),
        "zigzag" => Pattern::new(
            "zigzag",
            polyline(&[
                (0.0, 0.0),
                (25.0, 50.0),
                (50.0, 0.0),
                (75.0, 50.0),
                (100.0, 0.0),
            ]),
        ),
        _ => return None,
    };
    Some(pattern)
}

/// All built-in patterns.
pub fn builtin_patterns() -> Vec<Pattern> {
    BUILTIN_NAMES
        .iter()
        .filter_map(|name| builtin_pattern(name))
        .collect()
}
