use adaptest_core::models::ItemParameters;
use serde::{Deserialize, Serialize};

/// Four-parameter logistic item characteristic curve.
///
/// Built once per question, evaluated for as many theta values as needed.
/// Parameters are used as given: no clamping, no validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogisticModel {
    params: ItemParameters,
}

/// One sample of a probability curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub theta: f64,
    pub probability: f64,
}

impl LogisticModel {
    pub fn new(params: ItemParameters) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &ItemParameters {
        &self.params
    }

    /// Plain logistic term, 0.5 at `theta == difficulty`.
    pub fn core(&self, theta: f64) -> f64 {
        let p = &self.params;
        let exponent = -p.discrimination * p.offset_constant * (theta - p.difficulty);
        1.0 / (1.0 + exponent.exp())
    }

    /// P(correct | theta).
    pub fn probability(&self, theta: f64) -> f64 {
        let p = &self.params;
        p.guess_probability
            + ((1.0 - p.mistake_probability) - p.guess_probability) * self.core(theta)
    }

    /// Sample the curve at `steps` evenly spaced points over `[from, to]`.
    ///
    /// A single step samples `from` only.
    pub fn curve(&self, from: f64, to: f64, steps: usize) -> Vec<CurvePoint> {
        match steps {
            0 => Vec::new(),
            1 => vec![self.point(from)],
            n => {
                let width = (to - from) / (n - 1) as f64;
                (0..n)
                    .map(|i| {
                        // Pin the last sample so rounding never overshoots `to`.
                        let theta = if i == n - 1 { to } else { from + width * i as f64 };
                        self.point(theta)
                    })
                    .collect()
            }
        }
    }

    fn point(&self, theta: f64) -> CurvePoint {
        CurvePoint {
            theta,
            probability: self.probability(theta),
        }
    }
}

impl From<ItemParameters> for LogisticModel {
    fn from(params: ItemParameters) -> Self {
        Self::new(params)
    }
}

/// P(correct | theta) for a single evaluation.
pub fn probability(params: &ItemParameters, theta: f64) -> f64 {
    LogisticModel::new(*params).probability(theta)
}
