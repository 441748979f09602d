use serde::{Deserialize, Serialize};

use super::{DifficultyClass, ItemParameters};

/// A question from the pool, with parameters and class computed upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateQuestion {
    pub id: String,
    pub item_parameters: ItemParameters,
    /// Stored classification. Never recomputed here.
    pub classification: DifficultyClass,
}

impl CandidateQuestion {
    pub fn new(
        id: impl Into<String>,
        item_parameters: ItemParameters,
        classification: DifficultyClass,
    ) -> Self {
        Self {
            id: id.into(),
            item_parameters,
            classification,
        }
    }
}
