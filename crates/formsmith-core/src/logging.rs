//! Logging integration for the formsmith toolkit.
//!
//! Provides helpers for configuring [`tracing`]-based logging from
//! [`Settings`](crate::settings::Settings) and for creating per-generation
//! spans.

use crate::settings::Settings;

/// Sets up the global tracing subscriber based on the given settings.
///
/// The log level is read from `settings.log_level` (e.g. "debug", "info",
/// "warn", "error"). In debug mode a pretty, human-readable format is used;
/// in production a structured JSON format is used.
pub fn setup_logging(settings: &Settings) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(&settings.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if settings.debug {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .pretty()
            .try_init()
            .ok();
    } else {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .try_init()
            .ok();
    }
}

/// Creates a tracing span for one code-generation run.
///
/// Attach this span around a call into the generation pipeline so that all
/// log entries emitted during the run carry the target library and the
/// number of fields being generated.
///
/// # Examples
///
/// ```
/// use formsmith_core::logging::generation_span;
///
/// let span = generation_span("react-hook-form", 3);
/// let _guard = span.enter();
/// tracing::info!("generating form code");
/// ```
pub fn generation_span(target: &str, field_count: usize) -> tracing::Span {
    tracing::info_span!("generate", target = target, fields = field_count)
}
