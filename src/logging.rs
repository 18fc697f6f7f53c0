//! Tracing subscriber setup.
//!
//! Logs go to stderr so that command output on stdout stays clean.

use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` does not parse.
const FALLBACK_LEVEL: &str = "warn";

/// Installs the global subscriber.
///
/// `format` is `json` for structured output, anything else for text.
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(level: &str, format: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(FALLBACK_LEVEL));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let result = if format == "json" {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if let Err(e) = result {
        tracing::debug!("Tracing subscriber already installed: {}", e);
    }
}
