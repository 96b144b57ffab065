//! Logging initialization using the `tracing` ecosystem.
//!
//! Provides:
//! - Console output (colored, human-readable, or JSON lines)
//! - File output (daily rotation via `tracing-appender`)
//! - Configurable log level via env var `RUST_LOG` or the config file

use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Initialize the global tracing subscriber.
///
/// Should be called once at program start. `RUST_LOG` takes precedence over
/// `config.level`. When `config.dir` is set, a second layer writes to
/// daily-rotating files named after `config.file_prefix`.
pub fn init_logging(config: &LoggingConfig) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let console_layer = if config.json {
        fmt::layer().json().with_target(true).boxed()
    } else {
        fmt::layer().with_target(true).with_ansi(true).boxed()
    };

    let file_layer = config.dir.as_deref().map(|dir| {
        let file_appender = tracing_appender::rolling::daily(dir, &config.file_prefix);
        let layer = fmt::layer().with_writer(file_appender).with_ansi(false).with_target(true);
        if config.json { layer.json().boxed() } else { layer.boxed() }
    });

    tracing_subscriber::registry().with(env_filter).with(console_layer).with(file_layer).init();
}
