//! Core geometry for unistroke recognition.
//!
//! This crate is intentionally small and purely geometric. Everything works
//! on ordered polylines of `nalgebra::Point2<f64>` and knows nothing about
//! templates, scores or pointer events.

mod geometry;
mod logger;

pub use geometry::{
    bounding_box, centroid, path_distance, path_length, rotate_about, BoundingBox,
};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
