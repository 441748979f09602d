use super::{ConfigError, ModelError, ScaleError, SelectionError};

/// Top-level error for every adaptest operation.
#[derive(Debug, thiserror::Error)]
pub enum AdaptestError {
    #[error("scale error: {0}")]
    Scale(#[from] ScaleError),

    #[error("model error: {0}")]
    Model(#[from] ModelError),

    #[error("selection error: {0}")]
    Selection(#[from] SelectionError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Result alias used across the workspace.
pub type AdaptestResult<T> = Result<T, AdaptestError>;

impl AdaptestError {
    /// Malformed caller input. Fatal and never retried.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::Scale(_)
                | Self::Model(_)
                | Self::Selection(SelectionError::InvalidThreshold { .. })
        )
    }

    /// The policy legitimately left no eligible candidate.
    pub fn is_empty_pool(&self) -> bool {
        matches!(self, Self::Selection(SelectionError::EmptyPool { .. }))
    }
}
