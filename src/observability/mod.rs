//! Structured logging setup.
//!
//! The engine emits `tracing` spans and events (one span per handled event,
//! one per filter recomputation, a debug event per commit). This module
//! installs the subscriber that formats them.
//!
//! # Configuration
//!
//! Log level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! Output goes to stderr unless `log_file` is set, in which case lines are
//! appended to that file.
//!
//! # Usage
//!
//! ```rust
//! use selectkit::observability::init_tracing;
//! use selectkit::Config;
//!
//! init_tracing(&Config::default())?;
//!
//! tracing::debug!("control initialized");
//! # Ok::<(), selectkit::SelectError>(())
//! ```
//!
//! # Modules
//!
//! - [`init`]: Filter resolution and subscriber setup

mod init;

pub use init::{init_tracing, resolve_filter};
