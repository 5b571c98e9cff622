//! Template store and nearest-template matcher.

use log::{debug, trace};
use nalgebra::Point2;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::normalize::{normalize, validate_points};
use crate::search::distance_at_best_angle;
use crate::{
    DetectorParams, NormalizedTemplate, Pattern, ShapeCandidate, ShapeDetectError, ShapeMatch,
};

/// Unistroke shape detector.
///
/// Templates are learned once in [`ShapeDetector::new`] and never change
/// afterwards; detection only reads them, so a detector can be shared across
/// threads.
#[derive(Clone, Debug)]
pub struct ShapeDetector {
    params: DetectorParams,
    templates: Vec<NormalizedTemplate>,
}

/// A stroke normalized both with and without rotation alignment.
struct NormalizedStroke {
    aligned: Vec<Point2<f64>>,
    fixed: Vec<Point2<f64>>,
}

impl NormalizedStroke {
    fn new(points: &[Point2<f64>], params: &DetectorParams) -> Result<Self, ShapeDetectError> {
        validate_points(points, None)?;
        Ok(Self {
            aligned: normalize(points, params, true),
            fixed: normalize(points, params, false),
        })
    }
}

impl ShapeDetector {
    /// Learn all patterns with the given parameters.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "info", skip(patterns, params), fields(num_patterns = patterns.len()))
    )]
    pub fn new(patterns: &[Pattern], params: DetectorParams) -> Result<Self, ShapeDetectError> {
        params.validate()?;

        let mut templates = Vec::with_capacity(patterns.len() * 2);
        for pattern in patterns {
            templates.extend(NormalizedTemplate::learn(pattern, &params)?);
        }
        debug!(
            "learned {} templates from {} patterns",
            templates.len(),
            patterns.len()
        );

        Ok(Self { params, templates })
    }

    /// Learn all patterns with `DetectorParams::default()`.
    pub fn with_defaults(patterns: &[Pattern]) -> Result<Self, ShapeDetectError> {
        Self::new(patterns, DetectorParams::default())
    }

    pub fn params(&self) -> &DetectorParams {
        &self.params
    }

    /// All learned templates, reversed variants directly after their forward one.
    pub fn templates(&self) -> &[NormalizedTemplate] {
        &self.templates
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Distinct template names in registration order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for t in &self.templates {
            if !names.contains(&t.name()) {
                names.push(t.name());
            }
        }
        names
    }

    /// Find the best template for a finished stroke.
    ///
    /// Only templates whose name contains `pattern_name` are considered (the
    /// empty string matches all). Among templates scoring strictly above the
    /// threshold the one with the smallest distance wins; on equal distance
    /// the earlier template is kept. Returns [`ShapeMatch::none`] when nothing
    /// qualifies.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "debug", skip(self, points), fields(num_points = points.len()))
    )]
    pub fn detect(
        &self,
        points: &[Point2<f64>],
        pattern_name: &str,
    ) -> Result<ShapeMatch, ShapeDetectError> {
        let stroke = NormalizedStroke::new(points, &self.params)?;

        let mut best = ShapeMatch::none();
        let mut best_distance = f64::INFINITY;
        for template in self.filtered(pattern_name) {
            let (_, distance) = self.distance_to(&stroke, template);
            let score = self.params.score(distance);
            trace!(
                "{}{}: distance {distance:.3} score {score:.4}",
                template.name(),
                if template.reversed() { " (reversed)" } else { "" }
            );
            if score > self.params.threshold && distance < best_distance {
                best_distance = distance;
                best = ShapeMatch {
                    pattern: Some(template.name().to_owned()),
                    score,
                };
            }
        }

        debug!("detect: {:?} score {:.4}", best.pattern, best.score);
        Ok(best)
    }

    /// Score every template passing the name filter, best first.
    ///
    /// No threshold is applied. Equal distances keep registration order.
    pub fn rank(
        &self,
        points: &[Point2<f64>],
        pattern_name: &str,
    ) -> Result<Vec<ShapeCandidate>, ShapeDetectError> {
        let stroke = NormalizedStroke::new(points, &self.params)?;

        let mut candidates: Vec<ShapeCandidate> = self
            .filtered(pattern_name)
            .map(|template| {
                let (angle, distance) = self.distance_to(&stroke, template);
                ShapeCandidate {
                    name: template.name().to_owned(),
                    score: self.params.score(distance),
                    distance,
                    angle_deg: angle.to_degrees(),
                    reversed: template.reversed(),
                    allow_rotation: template.allow_rotation(),
                }
            })
            .collect();
        candidates.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        Ok(candidates)
    }

    fn filtered<'a>(
        &'a self,
        pattern_name: &'a str,
    ) -> impl Iterator<Item = &'a NormalizedTemplate> + 'a {
        self.templates
            .iter()
            .filter(move |t| t.name().contains(pattern_name))
    }

    /// `(angle, distance)` between the stroke and one template.
    fn distance_to(&self, stroke: &NormalizedStroke, template: &NormalizedTemplate) -> (f64, f64) {
        if template.allow_rotation() {
            let range = self.params.angle_range_rad();
            distance_at_best_angle(
                &stroke.aligned,
                template.points(),
                -range,
                range,
                self.params.angle_precision_rad(),
            )
        } else {
            (
                0.0,
                unistroke_core::path_distance(&stroke.fixed, template.points()),
            )
        }
    }
}
