// Logging module - tracing subscriber setup for the binary
//
// Output goes to stderr so formatted results on stdout stay pipeable. An
// optional JSON file layer (tracing-appender, non-blocking) is added when
// `[logging] file_enabled = true`.
//
// Precedence: RUST_LOG env var > config file level > "warn"

use crate::config::{LogRotation, LoggingConfig};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directive used when RUST_LOG is not set
pub fn default_directive(level: &str) -> String {
    format!("readable={}", level.trim().to_lowercase())
}

/// Rolling appender for the configured rotation
fn file_appender(config: &LoggingConfig) -> RollingFileAppender {
    match config.file_rotation {
        LogRotation::Hourly => {
            tracing_appender::rolling::hourly(&config.file_dir, &config.file_prefix)
        }
        LogRotation::Daily => {
            tracing_appender::rolling::daily(&config.file_dir, &config.file_prefix)
        }
        LogRotation::Never => {
            tracing_appender::rolling::never(&config.file_dir, &config.file_prefix)
        }
    }
}

/// Install the global subscriber
///
/// The returned guard flushes the file writer on drop and must be kept alive
/// for the duration of `main`. `None` when file logging is off or its
/// directory could not be created.
pub fn init(config: &LoggingConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(&config.level)));

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    if !config.file_enabled {
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .init();
        return None;
    }

    if let Err(e) = std::fs::create_dir_all(&config.file_dir) {
        eprintln!(
            "Warning: Could not create log directory {:?}: {}",
            config.file_dir, e
        );
        // Fall back to stderr only
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .init();
        return None;
    }

    // Writes happen on a background thread; file layer is JSON for parsing
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender(config));
    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(non_blocking)
                .with_ansi(false),
        )
        .init();

    tracing::debug!(
        dir = ?config.file_dir,
        rotation = config.file_rotation.as_str(),
        "file logging enabled"
    );
    Some(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive("warn"), "readable=warn");
        assert_eq!(default_directive(" DEBUG "), "readable=debug");
    }

    #[test]
    fn test_default_directive_parses() {
        for level in ["trace", "debug", "info", "warn", "error"] {
            assert!(
                EnvFilter::try_new(default_directive(level)).is_ok(),
                "level {}",
                level
            );
        }
    }
}
