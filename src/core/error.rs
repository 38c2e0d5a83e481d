//! Errors raised when a game state would become invalid.

use thiserror::Error;

use super::player::PlayerId;
use super::state::{MAX_FUSE_TOKENS, MAX_INFO_TOKENS};

/// A refused construction or transition.
///
/// Token counts are never clamped at the lower bound; an action that would
/// take a counter below zero is rejected with one of these instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("player count {0} is outside the supported range 2..=5")]
    InvalidPlayerCount(usize),

    #[error("hand size {0} is outside the supported range 1..=5")]
    InvalidHandSize(usize),

    #[error("deck of {deck} cards cannot deal {needed} cards")]
    DeckTooSmall { deck: usize, needed: usize },

    #[error("info token count {0} exceeds the maximum of {max}", max = MAX_INFO_TOKENS)]
    InfoTokenOverflow(u8),

    #[error("fuse token count {0} exceeds the maximum of {max}", max = MAX_FUSE_TOKENS)]
    FuseTokenOverflow(u8),

    #[error("no info tokens left to give a hint")]
    NoInfoTokens,

    #[error("no fuse tokens left to lose")]
    NoFuseTokens,

    #[error("turn index {turn} is out of range for {players} players")]
    InvalidTurn { turn: usize, players: usize },

    #[error("{0} has no seat in this game")]
    UnknownPlayer(PlayerId),

    #[error("{player} holds {known} cards but {beliefs} belief slots")]
    HandMismatch {
        player: PlayerId,
        known: usize,
        beliefs: usize,
    },

    #[error("{player} has no slot {slot} (hand size {len})")]
    InvalidSlot {
        player: PlayerId,
        slot: usize,
        len: usize,
    },

    #[error("hint for {player} covers {got} slots but the hand has {expected}")]
    HintLength {
        player: PlayerId,
        got: usize,
        expected: usize,
    },

    #[error("{0} cannot give a hint to themselves")]
    SelfHint(PlayerId),

    #[error("{actor} acted out of turn (it is {expected}'s turn)")]
    OutOfTurn { actor: PlayerId, expected: PlayerId },

    #[error("card {card} cannot be placed on the {color} firework at height {top}")]
    IllegalFirework {
        card: String,
        color: String,
        top: u8,
    },

    #[error("the game is already over")]
    GameOver,
}
