//! Merging new hint atoms into existing beliefs.
//!
//! A positive fact supersedes every negative fact of the same kind: once a
//! slot is known to be a 3, "not a 1" carries nothing, so it is dropped.

use crate::core::{Information, UnknownCard};

/// Fuse one atom into a belief, keeping it minimal.
#[must_use]
pub fn fuse(belief: &UnknownCard, atom: Information) -> UnknownCard {
    let mut atoms = belief.inner().clone();
    atoms.insert(atom);

    let has_number = atoms.iter().any(|a| matches!(a, Information::PositiveNumber(_)));
    let has_color = atoms.iter().any(|a| matches!(a, Information::PositiveColor(_)));

    if !(has_number || has_color) {
        return UnknownCard::from_set(atoms);
    }
    UnknownCard::from_set(
        atoms
            .into_iter()
            .filter(|a| match a {
                Information::NegativeNumber(_) => !has_number,
                Information::NegativeColor(_) => !has_color,
                _ => true,
            })
            .collect(),
    )
}

/// Fuse one atom per slot into the matching belief.
///
/// Slots are paired positionally; surplus entries on either side are ignored.
#[must_use]
pub fn combine(beliefs: &[UnknownCard], new_info: &[Information]) -> Vec<UnknownCard> {
    beliefs
        .iter()
        .zip(new_info)
        .map(|(belief, atom)| fuse(belief, *atom))
        .collect()
}
