//! Error handling for adaptest.
//! One error enum per subsystem, `thiserror` only, aggregated into `AdaptestError`.

pub mod adaptest_error;
pub mod config_error;
pub mod model_error;
pub mod scale_error;
pub mod selection_error;

pub use adaptest_error::{AdaptestError, AdaptestResult};
pub use config_error::ConfigError;
pub use model_error::ModelError;
pub use scale_error::ScaleError;
pub use selection_error::SelectionError;
