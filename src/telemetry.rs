//! Logging subscriber setup for the binary.
//!
//! The library only emits `tracing` events. Installing a subscriber is the
//! binary's job.

use tracing_subscriber::EnvFilter;

use crate::error::{EngineError, EngineResult};

/// Default filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Installs a compact fmt subscriber filtered by `RUST_LOG`, falling back to
/// `log_level`.
///
/// Fails if the fallback filter does not parse or a global subscriber is
/// already installed.
pub fn init(log_level: &str) -> EngineResult<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(log_level).map_err(|err| EngineError::Telemetry {
            message: format!("invalid log level/filter '{}': {}", log_level, err),
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(|err| EngineError::Telemetry {
            message: err.to_string(),
        })
}
