//! Concrete cards and colours.
//!
//! ## CardId
//!
//! Every physical card carries a unique `CardId` so it can be tracked as it
//! moves between deck, hand, firework and discard pile. Players never reason
//! about ids; they are bookkeeping only.
//!
//! ## Card
//!
//! A hand slot seen from some seat is either a [`KnownCard`] (someone else's
//! hand) or an [`UnknownCard`] (one's own hand, known only through hints).

use serde::{Deserialize, Serialize};

use super::info::UnknownCard;

/// Lowest card number.
pub const MIN_NUMBER: u8 = 1;

/// Highest card number; playing it completes a firework.
pub const MAX_NUMBER: u8 = 5;

/// Firework colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Yellow,
    Green,
    Blue,
    White,
}

impl Color {
    pub const ALL: [Color; 5] = [
        Color::Red,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::White,
    ];
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Red => "R",
            Color::Yellow => "Y",
            Color::Green => "G",
            Color::Blue => "B",
            Color::White => "W",
        };
        f.write_str(name)
    }
}

/// Unique identity of one physical card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

/// A concrete card: number, colour and identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct KnownCard {
    pub number: u8,
    pub color: Color,
    pub id: CardId,
}

impl KnownCard {
    /// Create a card.
    ///
    /// `number` must lie in `1..=5`.
    #[must_use]
    pub fn new(number: u8, color: Color, id: CardId) -> Self {
        debug_assert!((MIN_NUMBER..=MAX_NUMBER).contains(&number), "card number out of range");
        Self { number, color, id }
    }

    /// Number and colour, ignoring identity.
    #[must_use]
    pub fn face(&self) -> (u8, Color) {
        (self.number, self.color)
    }

    /// True when both cards show the same number and colour.
    #[must_use]
    pub fn same_face(&self, other: &KnownCard) -> bool {
        self.face() == other.face()
    }
}

impl std::fmt::Display for KnownCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.color, self.number)
    }
}

/// A hand slot as seen from a particular seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Card {
    Known(KnownCard),
    Unknown(UnknownCard),
}

impl Card {
    /// The concrete card, if visible.
    #[must_use]
    pub fn known(&self) -> Option<&KnownCard> {
        match self {
            Card::Known(card) => Some(card),
            Card::Unknown(_) => None,
        }
    }
}
