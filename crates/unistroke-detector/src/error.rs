/// Errors returned when learning templates or detecting a stroke.
///
/// `name` is the pattern name when the offending input is a template, `None`
/// for the stroke passed to `detect`.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ShapeDetectError {
    #[error("{} has {} points, at least 2 are required", subject(.name), .got)]
    TooFewPoints { name: Option<String>, got: usize },
    #[error("{} has zero path length", subject(.name))]
    ZeroLength { name: Option<String> },
    #[error("{} has a non-finite coordinate or path length", subject(.name))]
    NonFinite { name: Option<String> },
    #[error("invalid detector parameters: {0}")]
    InvalidParams(String),
}

fn subject(name: &Option<String>) -> String {
    match name {
        Some(name) => format!("pattern '{name}'"),
        None => "stroke".to_string(),
    }
}
