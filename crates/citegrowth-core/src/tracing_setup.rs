//! Tracing initialization.
//! `tracing` crate with `EnvFilter`, per-crate log levels.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{defaults, ObservabilityConfig};

static INIT: Once = Once::new();

/// Initialize the tracing subscriber.
///
/// Reads the `CITEGROWTH_LOG` environment variable for per-crate log levels.
/// Format: `CITEGROWTH_LOG=citegrowth_projection=debug,citegrowth_scholar=warn`
///
/// Falls back to `citegrowth=info` if `CITEGROWTH_LOG` is not set or is invalid.
/// Only the first initialization in a process takes effect.
///
/// Returns `true` when this call installed the subscriber. A subscriber
/// already owned by the host is reported on stderr and left in place.
pub fn init_tracing() -> bool {
    let filter = EnvFilter::try_from_env(defaults::LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(defaults::DEFAULT_LOG_FILTER));
    install(filter, false)
}

/// Initialize tracing from loaded configuration.
/// `CITEGROWTH_LOG` still wins when it is set.
pub fn init_tracing_from_config(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_from_env(defaults::LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(config.filter_directive()));
    install(filter, config.json_logs)
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) -> bool {
    install(EnvFilter::new(filter), false)
}

fn install(filter: EnvFilter, json: bool) -> bool {
    let mut installed = false;
    INIT.call_once(|| {
        let result = if json {
            tracing_subscriber::registry()
                .with(fmt::layer().json().with_target(true))
                .with(filter)
                .try_init()
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .with(filter)
                .try_init()
        };
        // The host may already own the global subscriber; our filter then has no effect.
        match result {
            Ok(()) => installed = true,
            Err(e) => {
                eprintln!("citegrowth: tracing subscriber not installed, filter ignored: {e}")
            }
        }
    });
    installed
}
