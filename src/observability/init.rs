//! Tracing initialization and subscriber setup.
//!
//! This module configures a `tracing-subscriber` registry with an `EnvFilter`
//! and a `fmt` layer, writing either to stderr or to an append-only log file.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::domain::Result;
use crate::Config;

/// Level used when neither `RUST_LOG` nor `trace_level` is set.
const DEFAULT_LEVEL: &str = "info";

/// Builds the level filter.
///
/// `RUST_LOG` wins when it is set and parses; otherwise `config.trace_level`
/// (or `"info"`) is used. An unparseable `trace_level` falls back to `"info"`.
#[must_use]
pub fn resolve_filter(config: &Config) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}

/// Initializes the global tracing subscriber.
///
/// Sets up a subscriber pipeline that:
/// 1. Filters spans and events through [`resolve_filter`]
/// 2. Formats them as plain text lines
/// 3. Writes to `config.log_file` (created if missing, appended to) or stderr
///
/// # Initialization Behavior
///
/// Idempotent: safe to call multiple times; only the first call installs a
/// subscriber, later calls are silently ignored.
///
/// # Errors
///
/// Returns [`SelectError::Io`](crate::SelectError::Io) if the log file cannot
/// be opened. Nothing is installed in that case.
pub fn init_tracing(config: &Config) -> Result<()> {
    let filter = resolve_filter(config);
    let registry = tracing_subscriber::registry().with(filter);

    let installed = match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            registry
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .try_init()
        }
        None => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init(),
    };

    if installed.is_ok() {
        tracing::debug!(log_file = ?config.log_file, "tracing initialized");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unopenable_log_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            log_file: Some(dir.path().join("missing").join("selectkit.log")),
            ..Config::default()
        };
        assert!(init_tracing(&config).is_err());
    }

    #[test]
    fn repeated_init_is_harmless() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            log_file: Some(dir.path().join("selectkit.log")),
            trace_level: Some("debug".into()),
            ..Config::default()
        };
        assert!(init_tracing(&config).is_ok());
        assert!(init_tracing(&config).is_ok());
        assert!(dir.path().join("selectkit.log").exists());
    }
}
