// src/utils/logging.rs

use clap::ValueEnum;
use tracing::Subscriber;
use tracing_subscriber::{fmt, EnvFilter};

/// Output format of the log lines.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Builds the subscriber for one run. Nothing is installed globally: the
/// caller decides the scope, typically with `tracing::subscriber::set_default`.
pub fn build_subscriber(format: LogFormat) -> Box<dyn Subscriber + Send + Sync> {
    // Default to info if RUST_LOG is not set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_file(true)
        .with_line_number(true)
        .with_target(false);

    match format {
        LogFormat::Text => Box::new(builder.finish()),
        LogFormat::Json => Box::new(builder.json().finish()),
    }
}
