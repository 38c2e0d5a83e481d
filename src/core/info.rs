//! Information atoms and per-slot belief sets.
//!
//! A hint reveals one fact about a hand ("these are your 3s"). For each slot
//! the recipient learns either the positive fact (this card *is* a 3) or its
//! negation (this card is *not* a 3). Those facts accumulate per slot in an
//! [`UnknownCard`].

use im::OrdSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::{Color, KnownCard};

/// One fact about a single unseen card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Information {
    PositiveNumber(u8),
    PositiveColor(Color),
    NegativeNumber(u8),
    NegativeColor(Color),
}

impl Information {
    /// Whether `card` is consistent with this fact.
    #[must_use]
    pub fn is_satisfied_by(&self, card: &KnownCard) -> bool {
        match *self {
            Information::PositiveNumber(n) => card.number == n,
            Information::PositiveColor(c) => card.color == c,
            Information::NegativeNumber(n) => card.number != n,
            Information::NegativeColor(c) => card.color != c,
        }
    }
}

impl std::fmt::Display for Information {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Information::PositiveNumber(n) => write!(f, "={n}"),
            Information::PositiveColor(c) => write!(f, "={c}"),
            Information::NegativeNumber(n) => write!(f, "!{n}"),
            Information::NegativeColor(c) => write!(f, "!{c}"),
        }
    }
}

/// The single fact a hint giver chooses to reveal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HintFact {
    Number(u8),
    Color(Color),
}

impl HintFact {
    /// Expand the fact into one atom per slot of the recipient's true hand.
    ///
    /// Matching slots receive the positive atom, all others its negation.
    #[must_use]
    pub fn expand(&self, hand: &[KnownCard]) -> SmallVec<[Information; 5]> {
        hand.iter()
            .map(|card| match *self {
                HintFact::Number(n) if card.number == n => Information::PositiveNumber(n),
                HintFact::Number(n) => Information::NegativeNumber(n),
                HintFact::Color(c) if card.color == c => Information::PositiveColor(c),
                HintFact::Color(c) => Information::NegativeColor(c),
            })
            .collect()
    }
}

/// Belief about one of the owner's own hand slots.
///
/// Backed by a persistent ordered set so game copies share structure.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnknownCard {
    atoms: OrdSet<Information>,
}

impl UnknownCard {
    /// A slot nothing is known about.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a belief directly from atoms, without fusion filtering.
    pub fn from_atoms(atoms: impl IntoIterator<Item = Information>) -> Self {
        Self {
            atoms: atoms.into_iter().collect(),
        }
    }

    /// Iterate over the atoms in a stable order.
    pub fn atoms(&self) -> impl Iterator<Item = &Information> {
        self.atoms.iter()
    }

    #[must_use]
    pub fn contains(&self, atom: &Information) -> bool {
        self.atoms.contains(atom)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// The number this slot is known to hold, if hinted.
    #[must_use]
    pub fn known_number(&self) -> Option<u8> {
        self.atoms.iter().find_map(|atom| match atom {
            Information::PositiveNumber(n) => Some(*n),
            _ => None,
        })
    }

    /// The colour this slot is known to hold, if hinted.
    #[must_use]
    pub fn known_color(&self) -> Option<Color> {
        self.atoms.iter().find_map(|atom| match atom {
            Information::PositiveColor(c) => Some(*c),
            _ => None,
        })
    }

    /// Whether `card` is consistent with every atom of this belief.
    #[must_use]
    pub fn admits(&self, card: &KnownCard) -> bool {
        self.atoms.iter().all(|atom| atom.is_satisfied_by(card))
    }

    pub(crate) fn inner(&self) -> &OrdSet<Information> {
        &self.atoms
    }

    pub(crate) fn from_set(atoms: OrdSet<Information>) -> Self {
        Self { atoms }
    }
}
