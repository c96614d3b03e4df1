use std::env;

use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber based on environment variables.
///
/// `LOG_LEVEL` sets the default filter (overridden by `RUST_LOG`),
/// `LOG_FORMAT=json` switches to JSON output. Diagnostics go to stderr so
/// command output on stdout stays clean.
pub fn init_subscriber() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "human".to_string());

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);

    if log_format == "json" {
        builder.json().try_init()
    } else {
        builder.try_init()
    }
}
