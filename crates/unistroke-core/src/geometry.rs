//! Polyline primitives: length, centroid, extent, rigid rotation and the mean
//! index-aligned distance between two polylines.

use nalgebra::{Point2, Rotation2, Vector2};
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box of a point set.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Point2<f64>,
    pub max: Point2<f64>,
}

impl BoundingBox {
    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Largest of the two extents.
    #[inline]
    pub fn max_extent(&self) -> f64 {
        self.width().max(self.height())
    }
}

/// Sum of the Euclidean lengths of consecutive segments.
pub fn path_length(points: &[Point2<f64>]) -> f64 {
    points
        .windows(2)
        .map(|w| nalgebra::distance(&w[0], &w[1]))
        .sum()
}

/// Arithmetic mean of the points. An empty slice yields the origin.
pub fn centroid(points: &[Point2<f64>]) -> Point2<f64> {
    if points.is_empty() {
        return Point2::origin();
    }
    let sum = points
        .iter()
        .fold(Vector2::<f64>::zeros(), |acc, p| acc + p.coords);
    Point2::from(sum / points.len() as f64)
}

/// Axis-aligned bounding box, `None` for an empty slice.
pub fn bounding_box(points: &[Point2<f64>]) -> Option<BoundingBox> {
    let first = *points.first()?;
    let mut bbox = BoundingBox {
        min: first,
        max: first,
    };
    for p in &points[1..] {
        bbox.min.x = bbox.min.x.min(p.x);
        bbox.min.y = bbox.min.y.min(p.y);
        bbox.max.x = bbox.max.x.max(p.x);
        bbox.max.y = bbox.max.y.max(p.y);
    }
    Some(bbox)
}

/// Rotate every point rigidly by `angle` radians (counter-clockwise) about `center`.
pub fn rotate_about(points: &[Point2<f64>], center: Point2<f64>, angle: f64) -> Vec<Point2<f64>> {
    let rot = Rotation2::new(angle);
    points.iter().map(|p| center + rot * (p - center)).collect()
}

/// Mean Euclidean distance between index-aligned points.
///
/// Both slices must have the same, non-zero length.
pub fn path_distance(a: &[Point2<f64>], b: &[Point2<f64>]) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "path_distance requires equal lengths");
    let sum: f64 = a
        .iter()
        .zip(b)
        .map(|(p, q)| nalgebra::distance(p, q))
        .sum();
    sum / a.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    fn square() -> Vec<Point2<f64>> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
        ]
    }

    #[test]
    fn path_length_sums_segments() {
        assert_abs_diff_eq!(path_length(&square()), 30.0, epsilon = 1e-12);
        assert_eq!(path_length(&square()[..1]), 0.0);
    }

    #[test]
    fn centroid_is_mean() {
        let c = centroid(&square());
        assert_abs_diff_eq!(c.x, 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(c.y, 5.0, epsilon = 1e-12);
        assert_eq!(centroid(&[]), Point2::origin());
    }

    #[test]
    fn bounding_box_spans_points() {
        let pts = [Point2::new(-3.0, 4.0), Point2::new(7.0, -1.0)];
        let bbox = bounding_box(&pts).expect("non-empty");
        assert_abs_diff_eq!(bbox.width(), 10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(bbox.height(), 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(bbox.max_extent(), 10.0, epsilon = 1e-12);
        assert!(bounding_box(&[]).is_none());
    }

    #[test]
    fn rotation_about_center_quarter_turn() {
        let rotated = rotate_about(&[Point2::new(2.0, 1.0)], Point2::new(1.0, 1.0), FRAC_PI_2);
        assert_abs_diff_eq!(rotated[0].x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(rotated[0].y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn path_distance_is_mean_of_pairs() {
        let a = [Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)];
        let b = [Point2::new(0.0, 3.0), Point2::new(1.0, 1.0)];
        assert_abs_diff_eq!(path_distance(&a, &b), 2.0, epsilon = 1e-12);
        assert_eq!(path_distance(&a, &a), 0.0);
    }
}
