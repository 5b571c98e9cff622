//! JSON template sets, stroke files and detection reports.

use std::{fs, path::Path};

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::{
    builtins, DetectorParams, Pattern, ShapeCandidate, ShapeDetectError, ShapeDetector,
    ShapeMatch,
};

#[derive(thiserror::Error, Debug)]
pub enum IoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// A set of patterns plus the parameters to learn them with.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TemplateSet {
    pub patterns: Vec<Pattern>,
    #[serde(default)]
    pub params: DetectorParams,
}

impl TemplateSet {
    /// The built-in patterns with default parameters.
    pub fn builtin() -> Self {
        Self {
            patterns: builtins::builtin_patterns(),
            params: DetectorParams::default(),
        }
    }

    /// Load a JSON template set from disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, IoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this template set to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), IoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Learn the patterns into a detector.
    pub fn build_detector(&self) -> Result<ShapeDetector, ShapeDetectError> {
        ShapeDetector::new(&self.patterns, self.params.clone())
    }
}

/// Points of one recorded stroke.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub points: Vec<Point2<f64>>,
}

impl Stroke {
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, IoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), IoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// Report of a single detection run over a stroke file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectReport {
    /// `None` when the built-in templates were used.
    #[serde(default)]
    pub templates_path: Option<String>,
    pub stroke_path: String,
    #[serde(default)]
    pub filter: String,
    pub num_points: usize,
    #[serde(default)]
    pub result: Option<ShapeMatch>,
    #[serde(default)]
    pub candidates: Vec<ShapeCandidate>,
    #[serde(default)]
    pub error: Option<String>,
}

impl DetectReport {
    pub fn new(
        templates_path: Option<&Path>,
        stroke_path: &Path,
        filter: &str,
        stroke: &Stroke,
    ) -> Self {
        Self {
            templates_path: templates_path.map(|p| p.to_string_lossy().into_owned()),
            stroke_path: stroke_path.to_string_lossy().into_owned(),
            filter: filter.to_owned(),
            num_points: stroke.points.len(),
            result: None,
            candidates: Vec::new(),
            error: None,
        }
    }

    /// Populate report fields from a finished detection.
    pub fn set_result(&mut self, result: ShapeMatch, candidates: Vec<ShapeCandidate>) {
        self.result = Some(result);
        self.candidates = candidates;
        self.error = None;
    }

    /// Record a detection error.
    pub fn set_error(&mut self, err: ShapeDetectError) {
        self.error = Some(err.to_string());
    }

    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, IoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), IoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_set_round_trips_through_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("templates.json");

        let mut set = TemplateSet::builtin();
        set.params.threshold = 0.7;
        set.write_json(&path).expect("write");
        let loaded = TemplateSet::load_json(&path).expect("load");
        assert_eq!(loaded, set);

        let detector = loaded.build_detector().expect("detector");
        assert_eq!(detector.params().threshold, 0.7);
        assert_eq!(detector.names(), builtins::BUILTIN_NAMES.to_vec());
    }

    #[test]
    fn minimal_template_file_parses() {
        let raw = r#"{
            "patterns": [
                {"name": "l", "points": [[0, 0], [10, 0]], "both_directions": false}
            ]
        }"#;
        let set: TemplateSet = serde_json::from_str(raw).expect("parse");
        assert_eq!(set.params, DetectorParams::default());
        assert!(!set.patterns[0].both_directions);
        assert_eq!(set.build_detector().expect("detector").len(), 1);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Stroke::load_json("/nonexistent/stroke.json").unwrap_err();
        assert!(matches!(err, IoError::Io(_)));
    }

    #[test]
    fn report_records_error() {
        let stroke = Stroke {
            points: vec![Point2::new(0.0, 0.0)],
        };
        let mut report = DetectReport::new(None, Path::new("s.json"), "", &stroke);
        report.set_error(ShapeDetectError::TooFewPoints { name: None, got: 1 });
        assert_eq!(report.num_points, 1);
        assert!(report.result.is_none());
        assert_eq!(
            report.error.as_deref(),
            Some("stroke has 1 points, at least 2 are required")
        );
    }
}
