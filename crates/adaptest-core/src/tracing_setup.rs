//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;
use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize the adaptest tracing/logging system.
///
/// Reads the `ADAPTEST_LOG` environment variable for per-crate log levels.
/// Format: `ADAPTEST_LOG=adaptest_progression=debug,adaptest_irt=info`
///
/// Falls back to `adaptest=info` if `ADAPTEST_LOG` is not set or is invalid.
///
/// This function is idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    init_with_config(&ObservabilityConfig::default());
}

/// Initialize tracing from an `ObservabilityConfig`.
///
/// `ADAPTEST_LOG` still wins over `config.log_level` when it is set.
pub fn init_with_config(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

        let registry = tracing_subscriber::registry().with(filter);
        let result = if config.json_logs {
            registry
                .with(fmt::layer().json().with_target(true))
                .try_init()
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .try_init()
        };

        // Another global subscriber (e.g. the host application's) takes precedence.
        if let Err(e) = result {
            tracing::debug!("tracing subscriber already installed: {e}");
        }
    });
}
