/// Progression and selection errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    /// Filtering removed every candidate. This is an expected outcome the
    /// caller must handle (relax filtering, widen the pool, or end the exercise).
    #[error("no eligible candidate question left after filtering a pool of {pool_size}")]
    EmptyPool { pool_size: usize },

    #[error("progression threshold {field} must be at least 1, got {value}")]
    InvalidThreshold { field: &'static str, value: u32 },
}
