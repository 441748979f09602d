//! Top-level adaptest configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ObservabilityConfig, PolicyConfig, ThetaConfig, ThresholdDefaults};
use crate::constants::CONFIG_ENV_PREFIX;
use crate::errors::ConfigError;
use crate::models::Strategy;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`ADAPTEST_*`)
/// 2. Config file passed to [`AdaptestConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AdaptestConfig {
    pub policy: PolicyConfig,
    pub thresholds: ThresholdDefaults,
    pub theta: ThetaConfig,
    pub observability: ObservabilityConfig,
}

impl AdaptestConfig {
    /// Load a TOML file, apply environment overrides, then validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let mut config: AdaptestConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: AdaptestConfig =
            toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
                path: "<string>".to_string(),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let probabilities = [
            (
                "policy.initial_probability_floor",
                self.policy.initial_probability_floor,
            ),
            (
                "policy.legacy_upgrade_ceiling",
                self.policy.legacy_upgrade_ceiling,
            ),
            (
                "policy.legacy_downgrade_floor",
                self.policy.legacy_downgrade_floor,
            ),
        ];
        for (field, value) in probabilities {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }

        let thresholds = [
            (
                "thresholds.correct_answers_to_upgrade",
                self.thresholds.correct_answers_to_upgrade,
            ),
            (
                "thresholds.incorrect_answers_to_downgrade",
                self.thresholds.incorrect_answers_to_downgrade,
            ),
            (
                "thresholds.skipped_questions_to_downgrade",
                self.thresholds.skipped_questions_to_downgrade,
            ),
        ];
        for (field, value) in thresholds {
            if value == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }

        let theta = [
            ("theta.default_initial_theta", self.theta.default_initial_theta),
            ("theta.skip_delta", self.theta.skip_delta),
            ("theta.correct_delta", self.theta.correct_delta),
            ("theta.incorrect_delta", self.theta.incorrect_delta),
        ];
        for (field, value) in theta {
            if !value.is_finite() {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must be a finite number".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Apply overrides from the process environment.
    /// Pattern: `ADAPTEST_POLICY_DEFAULT_STRATEGY`, `ADAPTEST_THETA_CORRECT_DELTA`, etc.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any `ADAPTEST_*` lookup. Unparseable values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |suffix: &str| lookup(&format!("{CONFIG_ENV_PREFIX}{suffix}"));

        if let Some(val) = get("POLICY_DEFAULT_STRATEGY") {
            match val.as_str() {
                "streak_jump" => self.policy.default_strategy = Strategy::StreakJump,
                "legacy_probability" => {
                    self.policy.default_strategy = Strategy::LegacyProbability
                }
                other => tracing::warn!(value = other, "ignoring unknown strategy override"),
            }
        }
        if let Some(v) = get("POLICY_INITIAL_PROBABILITY_FLOOR").and_then(|v| v.parse().ok()) {
            self.policy.initial_probability_floor = v;
        }
        if let Some(v) = get("POLICY_LEGACY_UPGRADE_CEILING").and_then(|v| v.parse().ok()) {
            self.policy.legacy_upgrade_ceiling = v;
        }
        if let Some(v) = get("POLICY_LEGACY_DOWNGRADE_FLOOR").and_then(|v| v.parse().ok()) {
            self.policy.legacy_downgrade_floor = v;
        }
        if let Some(v) = get("POLICY_LEGACY_MAX_JUMP").and_then(|v| v.parse().ok()) {
            self.policy.legacy_max_jump = v;
        }
        if let Some(v) = get("THRESHOLDS_CORRECT_ANSWERS_TO_UPGRADE").and_then(|v| v.parse().ok())
        {
            self.thresholds.correct_answers_to_upgrade = v;
        }
        if let Some(v) =
            get("THRESHOLDS_INCORRECT_ANSWERS_TO_DOWNGRADE").and_then(|v| v.parse().ok())
        {
            self.thresholds.incorrect_answers_to_downgrade = v;
        }
        if let Some(v) =
            get("THRESHOLDS_SKIPPED_QUESTIONS_TO_DOWNGRADE").and_then(|v| v.parse().ok())
        {
            self.thresholds.skipped_questions_to_downgrade = v;
        }
        if let Some(v) = get("THETA_DEFAULT_INITIAL_THETA").and_then(|v| v.parse().ok()) {
            self.theta.default_initial_theta = v;
        }
        if let Some(v) = get("THETA_SKIP_DELTA").and_then(|v| v.parse().ok()) {
            self.theta.skip_delta = v;
        }
        if let Some(v) = get("THETA_CORRECT_DELTA").and_then(|v| v.parse().ok()) {
            self.theta.correct_delta = v;
        }
        if let Some(v) = get("THETA_INCORRECT_DELTA").and_then(|v| v.parse().ok()) {
            self.theta.incorrect_delta = v;
        }
        if let Some(v) = get("OBSERVABILITY_LOG_LEVEL").filter(|v| !v.trim().is_empty()) {
            self.observability.log_level = v;
        }
        if let Some(v) = get("OBSERVABILITY_JSON_LOGS").and_then(|v| v.parse().ok()) {
            self.observability.json_logs = v;
        }
    }
}
