//! The draw pile.
//!
//! Cards are dealt and drawn from the front. The population order is a
//! shuffle of the standard composition; after that the deck is a FIFO queue.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::{CardId, Color, KnownCard, MAX_NUMBER};
use super::rng::GameRng;

/// Copies of each number per colour, indexed by `number - 1`.
///
/// Four 1s per colour, so that a fresh deck holds [`FULL_DECK_SIZE`] cards.
pub const COPIES_PER_NUMBER: [usize; MAX_NUMBER as usize] = [4, 2, 2, 2, 1];

/// Size of a fresh deck.
pub const FULL_DECK_SIZE: usize = 55;

/// How many copies of `number` exist per colour in a full deck.
#[must_use]
pub fn copies_of(number: u8) -> usize {
    COPIES_PER_NUMBER
        .get(usize::from(number).wrapping_sub(1))
        .copied()
        .unwrap_or(0)
}

/// Ordered draw queue of concrete cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<KnownCard>,
}

impl Deck {
    /// A full deck in a canonical (unshuffled) order with ids `0..55`.
    #[must_use]
    pub fn ordered() -> Self {
        let mut cards = Vector::new();
        let mut next_id = 0u32;
        for color in Color::ALL {
            for (index, &copies) in COPIES_PER_NUMBER.iter().enumerate() {
                for _ in 0..copies {
                    cards.push_back(KnownCard::new(index as u8 + 1, color, CardId::new(next_id)));
                    next_id += 1;
                }
            }
        }
        Self { cards }
    }

    /// A full deck in random order.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut cards: Vec<KnownCard> = Self::ordered().cards.into_iter().collect();
        rng.shuffle(&mut cards);
        Self::from_cards(cards)
    }

    /// A deck holding exactly `cards`, front first.
    pub fn from_cards(cards: impl IntoIterator<Item = KnownCard>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remove the front card, returning it with the remaining deck.
    #[must_use]
    pub fn draw(&self) -> (Option<KnownCard>, Deck) {
        let mut rest = self.cards.clone();
        let card = rest.pop_front();
        (card, Deck { cards: rest })
    }

    pub fn iter(&self) -> impl Iterator<Item = &KnownCard> {
        self.cards.iter()
    }
}
