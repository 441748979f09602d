//! Uniform draw from a filtered pool.

use adaptest_core::errors::SelectionError;
use rand::Rng;

/// Pick one element of `pool` uniformly at random using `rng`.
///
/// A single-element pool is returned without consulting `rng`. Fails with
/// `EmptyPool` instead of picking something arbitrary.
pub fn select<'a, T, R>(pool: &'a [T], rng: &mut R) -> Result<&'a T, SelectionError>
where
    R: Rng + ?Sized,
{
    match pool.len() {
        0 => return Err(SelectionError::EmptyPool { pool_size: 0 }),
        1 => return Ok(&pool[0]),
        _ => {}
    }
    let index = rng.gen_range(0..pool.len());
    Ok(&pool[index])
}
