use serde::{Deserialize, Serialize};

/// Outcome of a detection run.
///
/// `pattern` is `None` when no template scored above the threshold. That is
/// an ordinary outcome, not an error.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShapeMatch {
    pub pattern: Option<String>,
    /// 1.0 for a perfect match, decreasing with distance; may go negative.
    pub score: f64,
}

impl ShapeMatch {
    /// The "no match" result: no pattern, score 0.
    pub fn none() -> Self {
        Self {
            pattern: None,
            score: 0.0,
        }
    }

    #[inline]
    pub fn is_match(&self) -> bool {
        self.pattern.is_some()
    }
}

impl Default for ShapeMatch {
    fn default() -> Self {
        Self::none()
    }
}

/// One scored template, as returned by `ShapeDetector::rank`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShapeCandidate {
    pub name: String,
    pub score: f64,
    /// Mean point distance in normalized units.
    pub distance: f64,
    /// Best rotation found by the search (degrees), 0 for fixed-orientation templates.
    pub angle_deg: f64,
    /// The template was learned from the reversed point order.
    pub reversed: bool,
    pub allow_rotation: bool,
}
