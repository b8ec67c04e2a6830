// Diagnostics go to stderr and are off unless RUST_LOG asks for them.
// Stdout carries only the JSON result.

use tracing_subscriber::EnvFilter;

/// Set to `json` for structured log lines.
pub const LOG_FORMAT_ENV: &str = "EXA_LOG_FORMAT";

const DEFAULT_FILTER: &str = "off";

/// Install the global subscriber and route panic reports through it.
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());
    let json = std::env::var(LOG_FORMAT_ENV).is_ok_and(|format| format == "json");

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    // Panics inside tool handlers are reported on stdout as a CLI error;
    // keep the default hook's trace off stderr.
    std::panic::set_hook(Box::new(|info| {
        tracing::error!("{}", info);
    }));
}
