/// adaptest version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of classes on the difficulty scale.
pub const CLASS_COUNT: usize = 5;

/// Environment variable read by `tracing_setup::init_tracing`.
pub const LOG_ENV_VAR: &str = "ADAPTEST_LOG";

/// Prefix for configuration overrides taken from the environment.
pub const CONFIG_ENV_PREFIX: &str = "ADAPTEST_";
