//! Raw patterns and their learned, canonical templates.

use log::debug;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::normalize::{normalize, validate_points};
use crate::{DetectorParams, ShapeDetectError};

fn default_both_directions() -> bool {
    true
}

/// A named reference stroke supplied by the caller.
///
/// Names need not be unique; templates sharing a name compete with each other.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pattern {
    pub name: String,
    /// Ordered reference points, at least two with non-zero path length.
    pub points: Vec<Point2<f64>>,
    /// Align strokes to the indicative angle and search a rotation window when matching.
    #[serde(default)]
    pub allow_rotation: bool,
    /// Also learn the reversed point order, so the shape matches when traced backwards.
    #[serde(default = "default_both_directions")]
    pub both_directions: bool,
}

impl Pattern {
    pub fn new(name: impl Into<String>, points: Vec<Point2<f64>>) -> Self {
        Self {
            name: name.into(),
            points,
            allow_rotation: false,
            both_directions: true,
        }
    }

    pub fn with_rotation(mut self, allow_rotation: bool) -> Self {
        self.allow_rotation = allow_rotation;
        self
    }

    pub fn with_both_directions(mut self, both_directions: bool) -> Self {
        self.both_directions = both_directions;
        self
    }
}

/// A learned template: resampled, optionally rotation-aligned, scaled and centered.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NormalizedTemplate {
    name: String,
    points: Vec<Point2<f64>>,
    allow_rotation: bool,
    reversed: bool,
}

impl NormalizedTemplate {
    /// Learn one template, or two when the pattern asks for both directions.
    pub fn learn(
        pattern: &Pattern,
        params: &DetectorParams,
    ) -> Result<Vec<NormalizedTemplate>, ShapeDetectError> {
        validate_points(&pattern.points, Some(&pattern.name))?;

        let mut learned = vec![Self::from_points(pattern, &pattern.points, params, false)];
        if pattern.both_directions {
            let reversed: Vec<Point2<f64>> = pattern.points.iter().rev().copied().collect();
            learned.push(Self::from_points(pattern, &reversed, params, true));
        }
        debug!(
            "learned '{}' ({} variant(s), rotation={})",
            pattern.name,
            learned.len(),
            pattern.allow_rotation
        );
        Ok(learned)
    }

    fn from_points(
        pattern: &Pattern,
        points: &[Point2<f64>],
        params: &DetectorParams,
        reversed: bool,
    ) -> Self {
        Self {
            name: pattern.name.clone(),
            points: normalize(points, params, pattern.allow_rotation),
            allow_rotation: pattern.allow_rotation,
            reversed,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn points(&self) -> &[Point2<f64>] {
        &self.points
    }

    #[inline]
    pub fn allow_rotation(&self) -> bool {
        self.allow_rotation
    }

    /// Whether this template was learned from the reversed point order.
    #[inline]
    pub fn reversed(&self) -> bool {
        self.reversed
    }
}
