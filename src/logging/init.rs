use color_eyre::eyre::Result;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

use super::{LogConfig, LOG_FILENAME};

/// Initialize the logging system with the given configuration.
///
/// Records always go to a rolling file under `log_dir`. The terminal layer
/// writes to stderr and stays at WARN unless `RUST_LOG` overrides it, so
/// stdout carries nothing but prompts and results.
#[allow(clippy::too_many_lines)]
pub fn init_logging(config: LogConfig) -> Result<()> {
    std::fs::create_dir_all(&config.log_dir)?;
    let file_appender = RollingFileAppender::new(config.rotation, &config.log_dir, LOG_FILENAME);
    let terminal_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tagtriage=warn"));
    if config.json_format {
        let json_file_layer = fmt::layer()
            .json()
            .with_writer(file_appender)
            .with_span_events(FmtSpan::CLOSE)
            .with_current_span(true)
            .with_target(true)
            .with_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                EnvFilter::new(format!("tagtriage={}", config.log_level))
            }));
        let json_stderr_layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_span_events(FmtSpan::CLOSE)
            .with_current_span(true)
            .with_target(true)
            .with_filter(terminal_filter);
        tracing_subscriber::registry()
            .with(json_file_layer)
            .with(json_stderr_layer)
            .with(ErrorLayer::default())
            .init();
    } else {
        let file_layer = fmt::layer()
            .with_writer(file_appender)
            .with_span_events(FmtSpan::CLOSE)
            .with_target(true)
            .with_ansi(false)
            .with_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                EnvFilter::new(format!("tagtriage={}", config.log_level))
            }));
        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_filter(terminal_filter);
        tracing_subscriber::registry()
            .with(file_layer)
            .with(stderr_layer)
            .with(ErrorLayer::default())
            .init();
    }
    Ok(())
}

/// Parse rotation period from string.
#[must_use]
pub fn parse_rotation(s: &str) -> Rotation {
    match s.to_lowercase().as_str() {
        "hourly" => Rotation::HOURLY,
        "never" => Rotation::NEVER,
        _ => Rotation::DAILY,
    }
}
