//! Unistroke shape detection.
//!
//! This crate focuses on:
//! - learning named template strokes into a canonical form (resampled,
//!   optionally rotation-aligned, scaled into a fixed square, centered),
//! - matching a freshly drawn stroke against those templates, with a
//!   golden-section search over a bounded rotation window for templates that
//!   allow rotation,
//! - JSON template sets, stroke files and detection reports.
//!
//! It does **not** capture pointer events. Callers hand over the ordered
//! points of one finished stroke.
//!
//! ```
//! use nalgebra::Point2;
//! use unistroke_detector::{DetectorParams, Pattern, ShapeDetector};
//!
//! # fn main() -> Result<(), unistroke_detector::ShapeDetectError> {
//! let line = Pattern::new("line", vec![Point2::new(0.0, 0.0), Point2::new(100.0, 0.0)])
//!     .with_both_directions(false);
//! let detector = ShapeDetector::new(&[line], DetectorParams::default())?;
//!
//! let stroke = [
//!     Point2::new(0.0, 0.0),
//!     Point2::new(50.0, 0.0),
//!     Point2::new(100.0, 0.0),
//! ];
//! let found = detector.detect(&stroke, "")?;
//! assert_eq!(found.pattern.as_deref(), Some("line"));
//! # Ok(())
//! # }
//! ```

pub mod builtins;
mod detector;
mod error;
mod io;
pub mod normalize;
mod params;
mod result;
pub mod search;
mod template;

pub use detector::ShapeDetector;
pub use error::ShapeDetectError;
pub use io::{DetectReport, IoError, Stroke, TemplateSet};
pub use params::DetectorParams;
pub use result::{ShapeCandidate, ShapeMatch};
pub use template::{NormalizedTemplate, Pattern};
