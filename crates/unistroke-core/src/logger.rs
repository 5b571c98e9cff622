//! Stderr logging for the unistroke tools.
//!
//! Records from the unistroke crates pass at the configured level, records
//! from dependencies are capped at `Warn`. Lines look like
//! `[   0.012s DEBUG detector] learned 9 templates`, with the crate name
//! dropped from unistroke targets.

use std::io::Write;
use std::sync::OnceLock;
use std::time::Instant;

use log::{LevelFilter, Log, Metadata, Record};

#[cfg(feature = "tracing")]
use tracing_subscriber::fmt::format::FmtSpan;
#[cfg(feature = "tracing")]
use tracing_subscriber::util::SubscriberInitExt;
#[cfg(feature = "tracing")]
use tracing_subscriber::{fmt, EnvFilter};

const CRATE_PREFIX: &str = "unistroke";

struct StderrLogger {
    level: LevelFilter,
    started: Instant,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= effective_level(metadata.target(), self.level)
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let elapsed = self.started.elapsed().as_secs_f64();
        let _ = writeln!(
            std::io::stderr().lock(),
            "[{elapsed:8.3}s {:>5} {}] {}",
            record.level(),
            short_target(record.target()),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn is_unistroke_target(target: &str) -> bool {
    let krate = target.split("::").next().unwrap_or(target);
    krate == CRATE_PREFIX || krate.starts_with("unistroke_")
}

fn effective_level(target: &str, level: LevelFilter) -> LevelFilter {
    if is_unistroke_target(target) {
        level
    } else {
        level.min(LevelFilter::Warn)
    }
}

/// `unistroke_detector::detector` becomes `detector`; foreign targets are kept.
fn short_target(target: &str) -> &str {
    match target.split_once("::") {
        Some((krate, rest)) if is_unistroke_target(krate) => rest,
        _ => target,
    }
}

static LOGGER: OnceLock<StderrLogger> = OnceLock::new();

/// Install the stderr logger. `level` applies to the unistroke crates.
///
/// Only the first call installs anything; later calls return `Ok(())` and
/// keep the original level.
pub fn init_with_level(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    let mut fresh = false;
    let logger = LOGGER.get_or_init(|| {
        fresh = true;
        StderrLogger {
            level,
            started: Instant::now(),
        }
    });
    if fresh {
        log::set_logger(logger)?;
        log::set_max_level(level);
    }
    Ok(())
}

#[cfg(feature = "tracing")]
fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "warn,unistroke=debug,unistroke_core=debug,unistroke_detector=debug"
    } else {
        "warn"
    }
}

/// Install a `tracing` subscriber. `RUST_LOG` wins when set; otherwise the
/// unistroke crates log at `debug` when `verbose` and everything at `warn`.
///
/// Span close events are reported, so instrumented detection calls show
/// their duration.
#[cfg(feature = "tracing")]
pub fn init_tracing(json: bool, verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));
    let builder = fmt()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr);
    let _ = if json {
        builder.json().flatten_event(true).finish().try_init()
    } else {
        builder
            .with_timer(fmt::time::Uptime::default())
            .finish()
            .try_init()
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dependency_records_are_capped_at_warn() {
        assert_eq!(
            effective_level("unistroke_detector::detector", LevelFilter::Trace),
            LevelFilter::Trace
        );
        assert_eq!(effective_level("unistroke", LevelFilter::Debug), LevelFilter::Debug);
        assert_eq!(effective_level("serde_json::de", LevelFilter::Trace), LevelFilter::Warn);
        assert_eq!(effective_level("unistrokes", LevelFilter::Debug), LevelFilter::Warn);
        assert_eq!(effective_level("serde_json", LevelFilter::Error), LevelFilter::Error);
    }

    #[test]
    fn crate_name_is_dropped_from_own_targets() {
        assert_eq!(short_target("unistroke_detector::detector"), "detector");
        assert_eq!(short_target("unistroke_core::geometry"), "geometry");
        assert_eq!(short_target("unistroke"), "unistroke");
        assert_eq!(short_target("tracing::span"), "tracing::span");
    }

    #[test]
    fn repeated_init_is_a_noop() {
        init_with_level(LevelFilter::Warn).expect("first init");
        init_with_level(LevelFilter::Trace).expect("second init");
        assert_eq!(LOGGER.get().map(|l| l.level), Some(LevelFilter::Warn));
        assert!(log::logger().enabled(
            &Metadata::builder()
                .level(log::Level::Warn)
                .target("unistroke_detector")
                .build()
        ));
        assert!(!log::logger().enabled(
            &Metadata::builder()
                .level(log::Level::Info)
                .target("unistroke_detector")
                .build()
        ));
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn verbose_tracing_enables_debug_for_own_crates() {
        assert_eq!(default_directives(false), "warn");
        let verbose = default_directives(true);
        assert!(verbose.starts_with("warn,"));
        assert!(verbose.contains("unistroke_detector=debug"));
    }
}
