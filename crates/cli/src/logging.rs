//! Logging setup (tracing-subscriber)
//!
//! Logs go to stderr so `--format json` output on stdout stays parseable.

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Used when RUST_LOG is unset; notifications are already printed to stdout
const DEFAULT_FILTER: &str = "clinic_queue_core=warn,clinic_queue=info";

/// Install the global subscriber
///
/// # Environment Variables
///
/// - `RUST_LOG`: filter directives (default: `clinic_queue_core=warn,clinic_queue=info`)
/// - `CLINIC_QUEUE_LOG_FORMAT`: `json` for structured logs, anything else for pretty output
pub fn init() -> Result<()> {
    let log_format =
        std::env::var("CLINIC_QUEUE_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))
        .context("Failed to create env filter")?;

    match log_format.as_str() {
        "json" => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        _ => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().pretty().with_writer(std::io::stderr))
            .try_init(),
    }
    .context("Failed to install tracing subscriber")
}
