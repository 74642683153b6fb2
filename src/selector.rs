//! The computer player: pick a pool word that is not a near-duplicate of
//! anything already said, or concede when the vocabulary is exhausted.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::matching::{DUPLICATE_THRESHOLD, best_match};

/// What the computer does on its turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComputerMove {
    Word(String),
    /// No eligible candidate remains; the human wins.
    Exhausted,
}

/// Choose the computer's next word uniformly at random among pool words
/// whose best fuzzy score against the chain stays below the duplicate
/// threshold.
///
/// Dedup is always fuzzy, independent of the resolver's match policy, so
/// the computer never replays a trivial respelling of a word already in
/// the chain.
pub fn select_move<R: Rng + ?Sized>(
    chain: &[String],
    pool: &[String],
    rng: &mut R,
) -> ComputerMove {
    let eligible: Vec<&String> = pool
        .iter()
        .filter(|word| {
            best_match(word, chain).is_none_or(|(_, score)| score < DUPLICATE_THRESHOLD)
        })
        .collect();
    log::debug!("{} of {} pool words are eligible", eligible.len(), pool.len());

    match eligible.choose(rng) {
        Some(word) => ComputerMove::Word((*word).clone()),
        None => ComputerMove::Exhausted,
    }
}
