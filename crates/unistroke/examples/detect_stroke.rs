use std::path::PathBuf;

use unistroke::detector::{Stroke, TemplateSet};

#[cfg(not(feature = "tracing"))]
use log::{info, LevelFilter};
#[cfg(feature = "tracing")]
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(not(feature = "tracing"))]
    unistroke::core::init_with_level(LevelFilter::Debug)?;
    #[cfg(feature = "tracing")]
    unistroke::core::init_tracing(false, true);

    let Some(stroke_path) = std::env::args().nth(1).map(PathBuf::from) else {
        eprintln!("Usage: detect_stroke <stroke.json> [templates.json]");
        return Ok(());
    };
    let set = match std::env::args().nth(2) {
        Some(path) => TemplateSet::load_json(path)?,
        None => TemplateSet::builtin(),
    };

    let stroke = Stroke::load_json(&stroke_path)?;
    let detector = set.build_detector()?;
    info!("learned {} templates", detector.len());

    for candidate in detector.rank(&stroke.points, "")?.iter().take(3) {
        println!(
            "{:<12} score {:.3} angle {:+.1}{}",
            candidate.name,
            candidate.score,
            candidate.angle_deg,
            if candidate.reversed { " (reversed)" } else { "" }
        );
    }
    match detector.detect(&stroke.points, "")?.pattern {
        Some(name) => println!("detected: {name}"),
        None => println!("no shape detected"),
    }
    Ok(())
}
