/// Item parameter and ability estimate errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    #[error("malformed item parameter {field}: {value}")]
    MalformedParameters { field: &'static str, value: f64 },

    #[error("ability estimate must be finite, got {value}")]
    NonFiniteTheta { value: f64 },
}
