/// Difficulty scale errors. All of them are invalid input and never retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScaleError {
    #[error("unrecognized difficulty class label: {label:?}")]
    UnknownLabel { label: String },

    #[error("cannot average an empty set of difficulty classes")]
    EmptyAverage,

    #[error("difficulty index {index} is outside the scale")]
    IndexOutOfRange { index: i64 },
}
