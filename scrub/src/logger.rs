// scrub/src/logger.rs
//! Logger setup for the `scrub` binary.
//!
//! Logs always go to stderr: stdout is reserved for scrubbed text and JSON reports.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Installs `env_logger`.
///
/// `Some(level)` forces that level and ignores `RUST_LOG`. `None` honours `RUST_LOG` and
/// falls back to `warn`. Calling this twice is harmless; the second call is ignored.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = match level {
        Some(level) => {
            let mut builder = Builder::new();
            builder.filter_level(level);
            builder
        }
        None => Builder::from_env(Env::default().default_filter_or("warn")),
    };
    builder.target(Target::Stderr).format_timestamp(None);

    if builder.try_init().is_err() {
        log::debug!("Logger already initialized; keeping the existing one.");
    }
}
