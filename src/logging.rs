//! Tracing subscriber set-up for the binary.

use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, EnvFilter};

/// Install a global subscriber writing to stderr.
///
/// `RUST_LOG` wins over `default_level`. With `json` every event is one JSON
/// object per line. A subscriber that is already installed is left in place.
pub fn init_logging(default_level: Level, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.as_str()));
    let builder = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::NONE)
        .with_writer(std::io::stderr);

    // Ignore the error if a global subscriber is already set (e.g. in tests)
    let _ = if json {
        tracing::subscriber::set_global_default(builder.json().with_current_span(false).finish())
    } else {
        tracing::subscriber::set_global_default(builder.with_target(false).finish())
    };
}
