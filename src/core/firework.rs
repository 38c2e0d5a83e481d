//! Per-colour stacks of played cards.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::{Color, KnownCard, MAX_NUMBER};
use super::error::GameError;

/// Played cards of one colour, oldest first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "FireworkParts")]
pub struct Firework {
    color: Color,
    cards: Vector<KnownCard>,
}

/// Unchecked wire form; the cards are replayed onto an empty firework.
#[derive(Deserialize)]
struct FireworkParts {
    color: Color,
    cards: Vec<KnownCard>,
}

impl TryFrom<FireworkParts> for Firework {
    type Error = GameError;

    fn try_from(parts: FireworkParts) -> Result<Self, Self::Error> {
        parts
            .cards
            .into_iter()
            .try_fold(Firework::new(parts.color), |fw, card| fw.add_card(card))
    }
}

impl Firework {
    /// An empty firework.
    #[must_use]
    pub fn new(color: Color) -> Self {
        Self {
            color,
            cards: Vector::new(),
        }
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Number on top of the stack, 0 when nothing has been played.
    #[must_use]
    pub fn top(&self) -> u8 {
        self.cards.back().map_or(0, |card| card.number)
    }

    /// Cards played so far; this colour's contribution to the score.
    #[must_use]
    pub fn size(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.top() == MAX_NUMBER
    }

    /// Whether `card` is the next card of this firework.
    #[must_use]
    pub fn accepts(&self, card: &KnownCard) -> bool {
        card.color == self.color && card.number == self.top() + 1
    }

    /// The firework with `card` placed on top.
    pub fn add_card(&self, card: KnownCard) -> Result<Firework, GameError> {
        if !self.accepts(&card) {
            return Err(GameError::IllegalFirework {
                card: card.to_string(),
                color: self.color.to_string(),
                top: self.top(),
            });
        }
        let mut cards = self.cards.clone();
        cards.push_back(card);
        Ok(Firework {
            color: self.color,
            cards,
        })
    }
}
