use serde::{Deserialize, Serialize};

use crate::ShapeDetectError;

/// Configuration for the shape detector.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorParams {
    /// A template only matches when its score is strictly above this value.
    pub threshold: f64,
    /// Number of points every template and stroke is resampled to.
    pub num_sample_points: usize,
    /// Side of the square that normalized shapes are scaled into.
    pub square_size: f64,
    /// Half-width of the rotation search window (degrees) for rotatable templates.
    pub angle_range_deg: f64,
    /// The golden-section search stops once the bracket is this narrow (degrees).
    pub angle_precision_deg: f64,
}

impl Default for DetectorParams {
    fn default() -> Self {
        Self {
            threshold: 0.0,
            num_sample_points: 64,
            square_size: 250.0,
            angle_range_deg: 45.0,
            angle_precision_deg: 2.0,
        }
    }
}

impl DetectorParams {
    /// Builder-style threshold override.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Distance that maps to a score of zero: half the diagonal of the square.
    #[inline]
    pub fn half_diagonal(&self) -> f64 {
        std::f64::consts::SQRT_2 * self.square_size / 2.0
    }

    /// Convert a mean point distance into a match score (1.0 is a perfect match).
    #[inline]
    pub fn score(&self, distance: f64) -> f64 {
        1.0 - distance / self.half_diagonal()
    }

    #[inline]
    pub fn angle_range_rad(&self) -> f64 {
        self.angle_range_deg.to_radians()
    }

    #[inline]
    pub fn angle_precision_rad(&self) -> f64 {
        self.angle_precision_deg.to_radians()
    }

    pub fn validate(&self) -> Result<(), ShapeDetectError> {
        let invalid = |msg: String| Err(ShapeDetectError::InvalidParams(msg));
        if self.num_sample_points < 2 {
            return invalid(format!(
                "num_sample_points must be >= 2 (got {})",
                self.num_sample_points
            ));
        }
        if !self.square_size.is_finite() || self.square_size <= 0.0 {
            return invalid(format!(
                "square_size must be > 0 (got {})",
                self.square_size
            ));
        }
        if !self.angle_range_deg.is_finite() || self.angle_range_deg < 0.0 {
            return invalid(format!(
                "angle_range_deg must be >= 0 (got {})",
                self.angle_range_deg
            ));
        }
        if !self.angle_precision_deg.is_finite() || self.angle_precision_deg <= 0.0 {
            return invalid(format!(
                "angle_precision_deg must be > 0 (got {})",
                self.angle_precision_deg
            ));
        }
        if !self.threshold.is_finite() {
            return invalid(format!("threshold must be finite (got {})", self.threshold));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn defaults_are_valid() {
        let params = DetectorParams::default();
        assert!(params.validate().is_ok());
        assert_abs_diff_eq!(params.half_diagonal(), 176.776_695, epsilon = 1e-5);
        assert_eq!(params.score(0.0), 1.0);
        assert_abs_diff_eq!(params.score(params.half_diagonal()), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn rejects_bad_values() {
        let bad = [
            DetectorParams {
                num_sample_points: 1,
                ..DetectorParams::default()
            },
            DetectorParams {
                square_size: 0.0,
                ..DetectorParams::default()
            },
            DetectorParams {
                angle_precision_deg: 0.0,
                ..DetectorParams::default()
            },
            DetectorParams {
                angle_range_deg: f64::NAN,
                ..DetectorParams::default()
            },
            DetectorParams::default().with_threshold(f64::INFINITY),
        ];
        for params in bad {
            assert!(
                matches!(params.validate(), Err(ShapeDetectError::InvalidParams(_))),
                "{params:?} should be rejected"
            );
        }
    }

    #[test]
    fn partial_json_fills_defaults() {
        let params: DetectorParams =
            serde_json::from_str(r#"{"threshold": 0.8}"#).expect("parse params");
        assert_eq!(params.threshold, 0.8);
        assert_eq!(params.num_sample_points, 64);
        assert_eq!(params.square_size, 250.0);
    }
}
