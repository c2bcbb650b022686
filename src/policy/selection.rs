//! Selection of the final move
//!
//! After the budget is spent every candidate has a score; the engine keeps the
//! best one. How equal scores are resolved is configurable through
//! [`TieBreak`].

use rand::Rng;

use crate::{config::TieBreak, utils::random_element};

/// Returns the index of the best score, or `None` if `scores` is empty
///
/// # Example
///
/// ```
/// use pmcts_connect_four::{policy::select_best, TieBreak};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(1);
/// assert_eq!(select_best(&[3, -2, 9, 4], TieBreak::Streaming, &mut rng), Some(2));
/// ```
pub fn select_best<R: Rng + ?Sized>(scores: &[i64], tie_break: TieBreak, rng: &mut R) -> Option<usize> {
    match tie_break {
        TieBreak::Streaming => streaming_best(scores, rng),
        TieBreak::Uniform => uniform_best(scores, rng),
    }
}

fn streaming_best<R: Rng + ?Sized>(scores: &[i64], rng: &mut R) -> Option<usize> {
    let mut best: Option<(usize, i64)> = None;

    for (index, &score) in scores.iter().enumerate() {
        let replace = match best {
            None => true,
            Some((_, best_score)) => score > best_score || (score == best_score && rng.gen_bool(0.5)),
        };
        if replace {
            best = Some((index, score));
        }
    }

    best.map(|(index, _)| index)
}

fn uniform_best<R: Rng + ?Sized>(scores: &[i64], rng: &mut R) -> Option<usize> {
    let best_score = scores.iter().copied().max()?;
    let tied: Vec<usize> = scores
        .iter()
        .enumerate()
        .filter(|&(_, &score)| score == best_score)
        .map(|(index, _)| index)
        .collect();

    random_element(&tied, rng).ok()
}
