//! Canonicalization pipeline shared by templates and strokes.
//!
//! Order matters and is identical for both sides of a comparison:
//! resample, (optionally) rotate to zero indicative angle, scale into the
//! square, translate the centroid to the origin.

use log::trace;
use nalgebra::Point2;
use unistroke_core::{bounding_box, centroid, path_length, rotate_about};

use crate::{DetectorParams, ShapeDetectError};

/// Relative extent below which an axis counts as degenerate (straight strokes).
const DEGENERATE_EXTENT_RATIO: f64 = 1e-9;

/// Check that `points` can be normalized: at least two finite points and a
/// finite, non-zero path length. `name` identifies the pattern in errors.
pub fn validate_points(points: &[Point2<f64>], name: Option<&str>) -> Result<(), ShapeDetectError> {
    let owned_name = || name.map(str::to_owned);
    if points.len() < 2 {
        return Err(ShapeDetectError::TooFewPoints {
            name: owned_name(),
            got: points.len(),
        });
    }
    if points.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
        return Err(ShapeDetectError::NonFinite { name: owned_name() });
    }
    let length = path_length(points);
    if !length.is_finite() {
        return Err(ShapeDetectError::NonFinite { name: owned_name() });
    }
    if length <= 0.0 {
        return Err(ShapeDetectError::ZeroLength { name: owned_name() });
    }
    Ok(())
}

/// Run the full pipeline on already validated points.
pub fn normalize(
    points: &[Point2<f64>],
    params: &DetectorParams,
    allow_rotation: bool,
) -> Vec<Point2<f64>> {
    let mut pts = resample(points, params.num_sample_points);
    if allow_rotation {
        let angle = indicative_angle(&pts);
        pts = rotate_by(&pts, -angle);
    }
    let pts = scale_to_square(&pts, params.square_size);
    translate_to_origin(&pts)
}

/// Resample a polyline into `n` points evenly spaced by arc length.
///
/// The first point is kept as is. Each interpolated point becomes the start
/// of the remaining segment, so spacing is measured along the original path.
/// Floating-point drift can leave the walk one point short; the original last
/// point then fills the gap. The output never exceeds `n` points.
pub fn resample(points: &[Point2<f64>], n: usize) -> Vec<Point2<f64>> {
    let (Some(&first), Some(&last)) = (points.first(), points.last()) else {
        return Vec::new();
    };
    if n == 0 {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(n);
    out.push(first);

    let interval = path_length(points) / (n.saturating_sub(1)) as f64;
    if interval.is_finite() && interval > 0.0 {
        let mut running = 0.0;
        let mut prev = first;
        let mut i = 1;
        while i < points.len() && out.len() < n {
            let cur = points[i];
            let d = nalgebra::distance(&prev, &cur);
            if d > 0.0 && running + d >= interval {
                let t = (interval - running) / d;
                let q = prev + (cur - prev) * t;
                out.push(q);
                prev = q;
                running = 0.0;
            } else {
                running += d;
                prev = cur;
                i += 1;
            }
        }
    }

    if out.len() < n {
        trace!("resample came up {} short of {n}", n - out.len());
    }
    while out.len() < n {
        out.push(last);
    }
    out
}

/// Angle (radians) of the vector from the first point to the centroid.
pub fn indicative_angle(points: &[Point2<f64>]) -> f64 {
    let Some(first) = points.first() else {
        return 0.0;
    };
    let c = centroid(points);
    (c.y - first.y).atan2(c.x - first.x)
}

/// Rotate the points by `angle` radians about their centroid.
pub fn rotate_by(points: &[Point2<f64>], angle: f64) -> Vec<Point2<f64>> {
    rotate_about(points, centroid(points), angle)
}

/// Scale x by `side / width` and y by `side / height`.
///
/// The scale is non-uniform, so aspect ratio is normalized as well. An axis
/// with (near) zero extent takes the factor of the larger extent instead,
/// which keeps straight strokes finite and scale invariant.
pub fn scale_to_square(points: &[Point2<f64>], side: f64) -> Vec<Point2<f64>> {
    let Some(bbox) = bounding_box(points) else {
        return Vec::new();
    };
    let max_extent = bbox.max_extent();
    let sx = axis_scale(bbox.width(), max_extent, side);
    let sy = axis_scale(bbox.height(), max_extent, side);
    points
        .iter()
        .map(|p| Point2::new(p.x * sx, p.y * sy))
        .collect()
}

fn axis_scale(extent: f64, max_extent: f64, side: f64) -> f64 {
    if extent > DEGENERATE_EXTENT_RATIO * max_extent && extent > 0.0 {
        side / extent
    } else if max_extent > 0.0 {
        side / max_extent
    } else {
        1.0
    }
}

/// Translate so that the centroid lands on `(0, 0)`.
pub fn translate_to_origin(points: &[Point2<f64>]) -> Vec<Point2<f64>> {
    let c = centroid(points).coords;
    points.iter().map(|p| p - c).collect()
}
