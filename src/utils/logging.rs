//! Logging setup.
//!
//! Everything logs through the `log` facade; `env_logger` is the backend.
//! `RUST_LOG` always wins over the level from the config file.

use env_logger::{Builder, Env};

/// Level used when neither `RUST_LOG` nor the config file say otherwise.
pub const DEFAULT_LEVEL: &str = "warn";

/// Installs the global logger. Calling it twice is harmless.
pub fn init(default_level: &str) {
    let filter = if default_level.trim().is_empty() {
        DEFAULT_LEVEL
    } else {
        default_level
    };

    let result = Builder::from_env(Env::default().default_filter_or(filter))
        .format_timestamp_secs()
        .format_target(false)
        .try_init();

    if let Err(e) = result {
        eprintln!("Logger already initialized: {e}");
    }
}
