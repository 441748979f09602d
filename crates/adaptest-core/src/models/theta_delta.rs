use serde::{Deserialize, Serialize};

/// How a `ThetaDelta` value is applied to theta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeltaKind {
    /// `theta * (1 + value)`
    Percentage,
    /// `theta + value`
    Absolute,
}

/// Ability adjustment produced after each answer or skip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThetaDelta {
    pub kind: DeltaKind,
    pub value: f64,
}

impl ThetaDelta {
    pub fn percentage(value: f64) -> Self {
        Self {
            kind: DeltaKind::Percentage,
            value,
        }
    }

    pub fn absolute(value: f64) -> Self {
        Self {
            kind: DeltaKind::Absolute,
            value,
        }
    }

    /// Apply the delta to `theta`.
    pub fn apply(&self, theta: f64) -> f64 {
        match self.kind {
            DeltaKind::Percentage => theta * (1.0 + self.value),
            DeltaKind::Absolute => theta + self.value,
        }
    }
}
