//! Reconstructing a concrete hand from per-slot beliefs.
//!
//! The search walks slots in order and, for each, tries the pool's cards in
//! (shuffled) order, backtracking when a later slot has no admissible card
//! left. This visits ordered selections in the same order as enumerating all
//! `k`-permutations of the pool, so the result is the first consistent one;
//! slots whose candidates run out are pruned early instead of enumerated.

use thiserror::Error;

use crate::core::{GameRng, KnownCard, UnknownCard};

/// No hand is consistent with the beliefs and the available cards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InferenceError {
    #[error("no arrangement of {pool} unseen cards satisfies {slots} belief slots")]
    Contradiction { slots: usize, pool: usize },
}

/// Pick and order `beliefs.len()` cards from `unseen` so that every slot's
/// card satisfies every atom of that slot's belief.
///
/// The pool is shuffled first, so among several consistent hands the one
/// returned is effectively uniform rather than biased by pool order.
pub fn guess_hand(
    beliefs: &[UnknownCard],
    unseen: &[KnownCard],
    rng: &mut GameRng,
) -> Result<Vec<KnownCard>, InferenceError> {
    let contradiction = InferenceError::Contradiction {
        slots: beliefs.len(),
        pool: unseen.len(),
    };
    if beliefs.len() > unseen.len() {
        return Err(contradiction);
    }

    let mut pool = unseen.to_vec();
    rng.shuffle(&mut pool);

    // Pool indices admissible for each slot, in shuffled order.
    let candidates: Vec<Vec<usize>> = beliefs
        .iter()
        .map(|belief| {
            pool.iter()
                .enumerate()
                .filter(|(_, card)| belief.admits(card))
                .map(|(i, _)| i)
                .collect()
        })
        .collect();
    if candidates.iter().any(Vec::is_empty) {
        return Err(contradiction);
    }

    let mut used = vec![false; pool.len()];
    let mut chosen = Vec::with_capacity(beliefs.len());
    if assign(&candidates, 0, &mut used, &mut chosen) {
        Ok(chosen.into_iter().map(|i| pool[i]).collect())
    } else {
        Err(contradiction)
    }
}

fn assign(
    candidates: &[Vec<usize>],
    slot: usize,
    used: &mut [bool],
    chosen: &mut Vec<usize>,
) -> bool {
    let Some(options) = candidates.get(slot) else {
        return true;
    };
    for &i in options {
        if used[i] {
            continue;
        }
        used[i] = true;
        chosen.push(i);
        if assign(candidates, slot + 1, used, chosen) {
            return true;
        }
        chosen.pop();
        used[i] = false;
    }
    false
}
