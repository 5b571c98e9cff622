//! Rotation search between two normalized, index-aligned point sequences.
//!
//! Golden-section search only finds the global minimum when the distance as
//! a function of angle is unimodal over the bracket. That holds for natural
//! strokes within a small window in practice, but nothing enforces it: a
//! template with several local minima inside the window may report a
//! distance larger than the true minimum.

use nalgebra::Point2;
use unistroke_core::{path_distance, rotate_about};

/// `(sqrt(5) - 1) / 2`
pub const GOLDEN_RATIO: f64 = 0.618_033_988_749_894_9;

/// Mean point distance after rotating `points` rigidly about the origin by `angle` radians.
pub fn distance_at_angle(points: &[Point2<f64>], template: &[Point2<f64>], angle: f64) -> f64 {
    let rotated = rotate_about(points, Point2::origin(), angle);
    path_distance(&rotated, template)
}

/// Smallest mean point distance over rotations in `[from, to]` (radians).
///
/// Returns `(angle, distance)` of the better of the two final samples.
pub fn distance_at_best_angle(
    points: &[Point2<f64>],
    template: &[Point2<f64>],
    from: f64,
    to: f64,
    precision: f64,
) -> (f64, f64) {
    golden_section_search(
        |angle| distance_at_angle(points, template, angle),
        from,
        to,
        precision,
    )
}

/// Minimize `f` over `[from, to]`, stopping once the bracket is no wider than `precision`.
///
/// Each iteration re-uses one of the two interior samples, so the bracket
/// shrinks by `GOLDEN_RATIO` per evaluation of `f`.
pub fn golden_section_search<F>(mut f: F, from: f64, to: f64, precision: f64) -> (f64, f64)
where
    F: FnMut(f64) -> f64,
{
    let (mut a, mut b) = (from, to);
    let mut x1 = GOLDEN_RATIO * a + (1.0 - GOLDEN_RATIO) * b;
    let mut f1 = f(x1);
    let mut x2 = (1.0 - GOLDEN_RATIO) * a + GOLDEN_RATIO * b;
    let mut f2 = f(x2);

    while (b - a).abs() > precision {
        if f1 < f2 {
            b = x2;
            x2 = x1;
            f2 = f1;
            x1 = GOLDEN_RATIO * a + (1.0 - GOLDEN_RATIO) * b;
            f1 = f(x1);
        } else {
            a = x1;
            x1 = x2;
            f1 = f2;
            x2 = (1.0 - GOLDEN_RATIO) * a + GOLDEN_RATIO * b;
            f2 = f(x2);
        }
    }

    if f1 < f2 {
        (x1, f1)
    } else {
        (x2, f2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn hook() -> Vec<Point2<f64>> {
        (0..32)
            .map(|i| {
                let t = i as f64 / 31.0;
                Point2::new(200.0 * t - 100.0, 80.0 * (3.0 * t).sin() - 40.0 * t)
            })
            .collect()
    }

    #[test]
    fn golden_ratio_matches_definition() {
        assert_abs_diff_eq!(GOLDEN_RATIO, (5f64.sqrt() - 1.0) / 2.0, epsilon = 1e-15);
    }

    #[test]
    fn finds_parabola_minimum() {
        let mut evals = 0;
        let (x, fx) = golden_section_search(
            |x| {
                evals += 1;
                (x - 0.3).powi(2) + 1.0
            },
            -1.0,
            1.0,
            1e-4,
        );
        assert_abs_diff_eq!(x, 0.3, epsilon = 1e-4);
        assert_abs_diff_eq!(fx, 1.0, epsilon = 1e-8);
        // log(2 / 1e-4) / log(1 / phi) ~ 20.6
        assert!(evals <= 24, "took {evals} evaluations");
    }

    #[test]
    fn zero_rotation_of_identical_paths_is_zero() {
        let pts = hook();
        assert_eq!(distance_at_angle(&pts, &pts, 0.0), 0.0);
        assert!(distance_at_angle(&pts, &pts, 0.3) > 1.0);
    }

    #[test]
    fn recovers_planted_rotation() {
        let template = hook();
        let planted = 20f64.to_radians();
        let rotated = rotate_about(&template, Point2::origin(), -planted);

        let unrotated = distance_at_angle(&rotated, &template, 0.0);
        let (angle, best) = distance_at_best_angle(
            &rotated,
            &template,
            -45f64.to_radians(),
            45f64.to_radians(),
            2f64.to_radians(),
        );
        assert!((angle - planted).abs() < 2f64.to_radians(), "angle {angle}");
        assert!(best < 0.1 * unrotated, "best {best} vs {unrotated}");
    }
}
