//! # adaptest-irt
//!
//! Item response theory pieces of adaptive testing.
//!
//! ```text
//! core(theta)        = 1 / (1 + e^(-a · D · (theta - b)))
//! P(correct | theta) = c + ((1 - d) - c) · core(theta)
//! ```
//!
//! with difficulty `b`, discrimination `a`, offset constant `D`,
//! guess probability `c` and mistake (slip) probability `d`.
//!
//! Theta itself is bootstrapped from completed exercises and nudged by a
//! fixed percentage after every answer.

pub mod logistic;
pub mod theta;

pub use logistic::{CurvePoint, LogisticModel};
pub use theta::{
    compute_theta_delta, estimate_initial_theta, InitialThetaEstimator, ThetaDeltaCalculator,
};
