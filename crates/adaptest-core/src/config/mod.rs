//! Configuration system for adaptest.
//! TOML-based, resolution: environment > config file > compiled defaults.

pub mod adaptest_config;
pub mod defaults;
pub mod observability_config;
pub mod policy_config;
pub mod theta_config;
pub mod threshold_config;

pub use adaptest_config::AdaptestConfig;
pub use observability_config::ObservabilityConfig;
pub use policy_config::PolicyConfig;
pub use theta_config::ThetaConfig;
pub use threshold_config::ThresholdDefaults;
