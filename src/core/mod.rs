//! Core model types: cards, information, deck, fireworks, players, game
//! state, actions, RNG, configuration and errors.
//!
//! Everything here is a plain value. Transitions between games live in
//! `rules`; reasoning about hidden cards lives in `belief`.

pub mod action;
pub mod card;
pub mod config;
pub mod deck;
pub mod error;
pub mod firework;
pub mod info;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionKind};
pub use card::{Card, CardId, Color, KnownCard, MAX_NUMBER, MIN_NUMBER};
pub use config::{GameConfig, MAX_PLAYERS, MIN_PLAYERS};
pub use deck::{copies_of, Deck, COPIES_PER_NUMBER, FULL_DECK_SIZE};
pub use error::GameError;
pub use firework::Firework;
pub use info::{HintFact, Information, UnknownCard};
pub use player::{Player, PlayerId, PlayerMap};
pub use rng::GameRng;
pub use state::{Game, GameParts, MAX_FUSE_TOKENS, MAX_INFO_TOKENS};
