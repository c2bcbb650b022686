//! Utility functions shared by the playouts and the engine

use rand::{seq::SliceRandom, Rng};

use crate::{PmctsError, Result};

/// Picks an element uniformly at random
///
/// Fails with [`PmctsError::EmptyChoice`] when `items` is empty; callers are
/// expected to have checked for that already.
pub fn random_element<T: Copy, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Result<T> {
    items.choose(rng).copied().ok_or(PmctsError::EmptyChoice)
}

/// Safely calculates a rate per second
///
/// Returns 0.0 if no time has elapsed.
pub fn per_second(count: u64, seconds: f64) -> f64 {
    if seconds <= 0.0 {
        return 0.0;
    }
    count as f64 / seconds
}
