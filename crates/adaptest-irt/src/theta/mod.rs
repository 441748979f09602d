//! Ability estimate bootstrapping and per-answer adjustment.
//!
//! Both policies are stateless: the caller owns theta and persists it.

pub mod delta;
pub mod initial;

pub use delta::{compute_theta_delta, ThetaDeltaCalculator};
pub use initial::{estimate_initial_theta, InitialThetaEstimator};
