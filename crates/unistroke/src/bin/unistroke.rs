//! `unistroke` command-line tool: detect shapes in recorded stroke files.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

#[cfg(not(feature = "tracing"))]
use log::{info, warn, LevelFilter};
#[cfg(feature = "tracing")]
use tracing::{info, warn};

use unistroke::detector::{DetectReport, IoError, Stroke, TemplateSet};
use unistroke::ShapeDetectError;

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Io(#[from] IoError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Detect(#[from] ShapeDetectError),
    #[error("failed to install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

#[derive(Parser, Debug)]
#[command(name = "unistroke", version, about = "Template-based unistroke shape detection")]
struct Cli {
    /// Log debug output to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Detect the shape drawn in a stroke file and print a JSON report.
    Detect {
        /// JSON stroke file: `{"points": [[x, y], ...]}`.
        #[arg(long)]
        stroke: PathBuf,
        /// JSON template set; the built-in templates are used when omitted.
        #[arg(long)]
        templates: Option<PathBuf>,
        /// Only consider templates whose name contains this string.
        #[arg(long, default_value = "")]
        filter: String,
        /// Override the template set's score threshold.
        #[arg(long)]
        threshold: Option<f64>,
        /// Include every scored template in the report.
        #[arg(long)]
        rank: bool,
        /// Write the report here instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Write the built-in templates as a JSON template set.
    Builtins {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(err) = init_logging(cli.verbose) {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }

    match run(cli.command) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(not(feature = "tracing"))]
fn init_logging(verbose: bool) -> Result<(), CliError> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    unistroke::core::init_with_level(level)?;
    Ok(())
}

#[cfg(feature = "tracing")]
fn init_logging(verbose: bool) -> Result<(), CliError> {
    unistroke::core::init_tracing(false, verbose);
    let _ = tracing_log::LogTracer::init();
    Ok(())
}

fn run(command: Command) -> Result<ExitCode, CliError> {
    match command {
        Command::Detect {
            stroke,
            templates,
            filter,
            threshold,
            rank,
            output,
        } => run_detect(
            &stroke,
            templates.as_deref(),
            &filter,
            threshold,
            rank,
            output.as_deref(),
        ),
        Command::Builtins { output } => {
            let set = TemplateSet::builtin();
            match output {
                Some(path) => set.write_json(path)?,
                None => println!("{}", serde_json::to_string_pretty(&set)?),
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

#[cfg_attr(feature = "tracing", tracing::instrument(level = "info"))]
fn run_detect(
    stroke_path: &Path,
    templates_path: Option<&Path>,
    filter: &str,
    threshold: Option<f64>,
    rank: bool,
    output: Option<&Path>,
) -> Result<ExitCode, CliError> {
    let stroke = Stroke::load_json(stroke_path)?;
    let mut set = match templates_path {
        Some(path) => TemplateSet::load_json(path)?,
        None => TemplateSet::builtin(),
    };
    if let Some(threshold) = threshold {
        set.params.threshold = threshold;
    }
    let detector = set.build_detector()?;
    info!(
        "{} templates, stroke with {} points",
        detector.len(),
        stroke.points.len()
    );

    let mut report = DetectReport::new(templates_path, stroke_path, filter, &stroke);
    let outcome = detector.detect(&stroke.points, filter).and_then(|found| {
        let candidates = if rank {
            detector.rank(&stroke.points, filter)?
        } else {
            Vec::new()
        };
        Ok((found, candidates))
    });
    let code = match outcome {
        Ok((found, candidates)) => {
            if !found.is_match() {
                warn!("no template matched");
            }
            report.set_result(found, candidates);
            ExitCode::SUCCESS
        }
        Err(err) => {
            warn!("detection failed: {err}");
            report.set_error(err);
            ExitCode::from(2)
        }
    };

    match output {
        Some(path) => report.write_json(path)?,
        None => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(code)
}
