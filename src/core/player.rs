//! Player identification, per-player storage and seat state.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier.
//!
//! ## PlayerMap
//!
//! One value per seat, stored in seat order.
//!
//! ## Player
//!
//! One seat: the ground-truth hand (visible to everyone else) and the
//! index-aligned beliefs the seat holds about its own cards.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::card::{Card, KnownCard};
use super::error::GameError;
use super::info::UnknownCard;

/// Seat identifier. Indices are 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all seats of a game with `player_count` players.
    ///
    /// ```
    /// use hanabi_mc::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }

    /// The seat that moves after this one.
    #[must_use]
    pub fn next(self, player_count: usize) -> PlayerId {
        PlayerId(((self.index() + 1) % player_count) as u8)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// One value per seat, indexed by [`PlayerId`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Wrap already-built per-seat values, seat 0 first.
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!(
            (1..=usize::from(u8::MAX)).contains(&data.len()),
            "seat count {} does not fit a PlayerId",
            data.len()
        );
        Self { data }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a player's data, if the seat exists.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Seats in order, with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data.iter().enumerate().map(|(i, v)| (PlayerId(i as u8), v))
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

/// One seat at the table.
///
/// `hand` and `beliefs` always have the same length: slot `i` of `beliefs`
/// is what this player knows about `hand[i]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PlayerParts")]
pub struct Player {
    id: PlayerId,
    hand: Vector<KnownCard>,
    beliefs: Vector<UnknownCard>,
    last_turn: bool,
}

/// Unchecked wire form of a [`Player`].
#[derive(Deserialize)]
struct PlayerParts {
    id: PlayerId,
    hand: Vector<KnownCard>,
    beliefs: Vector<UnknownCard>,
    last_turn: bool,
}

impl TryFrom<PlayerParts> for Player {
    type Error = GameError;

    fn try_from(parts: PlayerParts) -> Result<Self, Self::Error> {
        Player::from_parts(parts.id, parts.hand, parts.beliefs, parts.last_turn)
    }
}

impl Player {
    /// A seat holding `hand` with no hints received yet.
    pub fn new(id: PlayerId, hand: impl IntoIterator<Item = KnownCard>) -> Self {
        let hand: Vector<KnownCard> = hand.into_iter().collect();
        let beliefs = hand.iter().map(|_| UnknownCard::new()).collect();
        Self {
            id,
            hand,
            beliefs,
            last_turn: false,
        }
    }

    /// Assemble a seat from explicit parts, checking slot alignment.
    pub fn from_parts(
        id: PlayerId,
        hand: Vector<KnownCard>,
        beliefs: Vector<UnknownCard>,
        last_turn: bool,
    ) -> Result<Self, GameError> {
        if hand.len() != beliefs.len() {
            return Err(GameError::HandMismatch {
                player: id,
                known: hand.len(),
                beliefs: beliefs.len(),
            });
        }
        Ok(Self {
            id,
            hand,
            beliefs,
            last_turn,
        })
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Ground-truth cards. Hidden from this player; visible to the others.
    #[must_use]
    pub fn hand(&self) -> &Vector<KnownCard> {
        &self.hand
    }

    #[must_use]
    pub fn beliefs(&self) -> &Vector<UnknownCard> {
        &self.beliefs
    }

    #[must_use]
    pub fn hand_len(&self) -> usize {
        self.hand.len()
    }

    /// Set once this player has taken a turn with the deck empty.
    #[must_use]
    pub fn last_turn(&self) -> bool {
        self.last_turn
    }

    /// Slot `slot` as seen from `viewer`'s seat.
    #[must_use]
    pub fn card_view(&self, slot: usize, viewer: PlayerId) -> Option<Card> {
        if viewer == self.id {
            self.beliefs.get(slot).cloned().map(Card::Unknown)
        } else {
            self.hand.get(slot).copied().map(Card::Known)
        }
    }

    /// This player holding `beliefs` instead, one per slot of the hand.
    pub fn with_beliefs(&self, beliefs: Vector<UnknownCard>) -> Result<Player, GameError> {
        Player::from_parts(self.id, self.hand.clone(), beliefs, self.last_turn)
    }

    /// This player with the card at `slot` taken out of the hand.
    pub fn without_slot(&self, slot: usize) -> Result<(KnownCard, Player), GameError> {
        if slot >= self.hand.len() {
            return Err(GameError::InvalidSlot {
                player: self.id,
                slot,
                len: self.hand.len(),
            });
        }
        let mut next = self.clone();
        let card = next.hand.remove(slot);
        next.beliefs.remove(slot);
        Ok((card, next))
    }

    /// This player with a freshly drawn card appended as a blank slot.
    #[must_use]
    pub fn with_drawn(&self, card: KnownCard) -> Player {
        let mut next = self.clone();
        next.hand.push_back(card);
        next.beliefs.push_back(UnknownCard::new());
        next
    }

    /// This player holding `hand` instead, beliefs unchanged.
    ///
    /// Used by simulation to substitute a guessed hand; the replacement must
    /// have the same number of slots.
    pub fn with_hand(&self, hand: Vector<KnownCard>) -> Result<Player, GameError> {
        Player::from_parts(self.id, hand, self.beliefs.clone(), self.last_turn)
    }

    #[must_use]
    pub fn with_last_turn(&self, last_turn: bool) -> Player {
        Player {
            last_turn,
            ..self.clone()
        }
    }
}
