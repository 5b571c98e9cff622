//! High-level facade crate for the `unistroke-*` workspace.
//!
//! This crate provides:
//! - stable, convenient re-exports of the core geometry and the detector
//! - the `unistroke` command-line tool (feature `cli`, on by default)
//!
//! ## Quickstart
//!
//! ```
//! use unistroke::detector::builtins::builtin_patterns;
//! use unistroke::{Point2, ShapeDetector};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let detector = ShapeDetector::with_defaults(&builtin_patterns())?;
//! let stroke: Vec<Point2<f64>> = (0..=40)
//!     .map(|i| {
//!         let a = std::f64::consts::TAU * i as f64 / 40.0;
//!         Point2::new(120.0 + 30.0 * a.cos(), 80.0 + 30.0 * a.sin())
//!     })
//!     .collect();
//!
//! let found = detector.detect(&stroke, "")?;
//! println!("{:?} ({:.3})", found.pattern, found.score);
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - `unistroke::core`: polyline geometry and logger setup.
//! - `unistroke::detector`: patterns, normalization, rotation search, the
//!   detector itself, built-in templates and JSON I/O.

pub use unistroke_core as core;
pub use unistroke_detector as detector;

pub use nalgebra::Point2;
pub use unistroke_detector::{
    DetectorParams, Pattern, ShapeCandidate, ShapeDetectError, ShapeDetector, ShapeMatch,
};
