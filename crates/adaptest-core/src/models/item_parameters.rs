use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

fn default_offset_constant() -> f64 {
    1.0
}

/// Per-question IRT parameters, computed upstream by a statistics pipeline.
///
/// Values are not clamped. `validate` rejects non-finite values; pool
/// filtering runs it on every candidate, the logistic model itself does not.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemParameters {
    /// Location of the item on the theta scale.
    pub difficulty: f64,
    /// Slope of the item characteristic curve ("level of item knowledge").
    pub discrimination: f64,
    /// Lower asymptote: chance of answering correctly by guessing.
    pub guess_probability: f64,
    /// Slip: chance of answering incorrectly despite mastery.
    pub mistake_probability: f64,
    /// Scaling constant applied to the slope.
    #[serde(default = "default_offset_constant")]
    pub offset_constant: f64,
}

impl ItemParameters {
    /// Parameters with `offset_constant = 1.0`.
    pub fn new(
        difficulty: f64,
        discrimination: f64,
        guess_probability: f64,
        mistake_probability: f64,
    ) -> Self {
        Self {
            difficulty,
            discrimination,
            guess_probability,
            mistake_probability,
            offset_constant: default_offset_constant(),
        }
    }

    pub fn with_offset_constant(mut self, offset_constant: f64) -> Self {
        self.offset_constant = offset_constant;
        self
    }

    /// Reject NaN or infinite parameters.
    pub fn validate(&self) -> Result<(), ModelError> {
        let fields = [
            ("difficulty", self.difficulty),
            ("discrimination", self.discrimination),
            ("guess_probability", self.guess_probability),
            ("mistake_probability", self.mistake_probability),
            ("offset_constant", self.offset_constant),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ModelError::MalformedParameters { field, value });
            }
        }
        Ok(())
    }
}
