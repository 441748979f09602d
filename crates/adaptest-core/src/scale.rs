//! Classification arithmetic over the fixed difficulty order.
//!
//! ```text
//! very_easy < easy < normal < hard < very_hard
//!     0        1       2       3        4
//! ```
//!
//! A jump is the signed index difference `index(to) - index(from)`;
//! positive means harder.

use crate::constants::CLASS_COUNT;
use crate::errors::ScaleError;
use crate::models::DifficultyClass;

/// The scale, easiest first.
pub const ORDER: [DifficultyClass; CLASS_COUNT] = [
    DifficultyClass::VeryEasy,
    DifficultyClass::Easy,
    DifficultyClass::Normal,
    DifficultyClass::Hard,
    DifficultyClass::VeryHard,
];

/// `index(a) - index(b)`. Negative when `a` is easier than `b`.
pub fn compare(a: DifficultyClass, b: DifficultyClass) -> i32 {
    a.index() as i32 - b.index() as i32
}

/// `index(to) - index(from)`. Positive when moving to a harder class.
pub fn jump(from: DifficultyClass, to: DifficultyClass) -> i32 {
    to.index() as i32 - from.index() as i32
}

pub fn is_lowest(class: DifficultyClass) -> bool {
    class == ORDER[0]
}

pub fn is_highest(class: DifficultyClass) -> bool {
    class == ORDER[ORDER.len() - 1]
}

/// Class at `index`, if it lies on the scale.
pub fn from_index(index: i64) -> Result<DifficultyClass, ScaleError> {
    usize::try_from(index)
        .ok()
        .and_then(|i| ORDER.get(i).copied())
        .ok_or(ScaleError::IndexOutOfRange { index })
}

/// Neighbouring class `delta` steps away, or `None` past either end.
pub fn step(class: DifficultyClass, delta: i32) -> Option<DifficultyClass> {
    from_index(class.index() as i64 + i64::from(delta)).ok()
}

/// Floor of the mean index of `classes`, mapped back to a class.
pub fn average(classes: &[DifficultyClass]) -> Result<DifficultyClass, ScaleError> {
    if classes.is_empty() {
        return Err(ScaleError::EmptyAverage);
    }
    let sum: i64 = classes.iter().map(|c| c.index() as i64).sum();
    from_index(sum.div_euclid(classes.len() as i64))
}

/// Like [`average`], over stored labels. Any unrecognized label is fatal.
pub fn average_labels<S: AsRef<str>>(labels: &[S]) -> Result<DifficultyClass, ScaleError> {
    let classes = labels
        .iter()
        .map(|label| label.as_ref().parse::<DifficultyClass>())
        .collect::<Result<Vec<_>, _>>()?;
    average(&classes)
}
