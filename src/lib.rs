//! # hanabi-mc
//!
//! A Hanabi engine with a Monte Carlo rollout player.
//!
//! ## Design Principles
//!
//! 1. **Immutable States**: A [`Game`] is never changed in place. Every action
//!    produces a successor, and clones are cheap thanks to `im` collections.
//!
//! 2. **Explicit Randomness**: Everything that shuffles or samples takes a
//!    [`GameRng`]. Trials fork their own generator from a master seed.
//!
//! 3. **Hidden Hands Stay Hidden**: The player only ever reasons about their
//!    own hand through belief sets. Simulations substitute a guessed hand on
//!    a throwaway copy of the game.
//!
//! ## Modules
//!
//! - `core`: cards, information atoms, deck, fireworks, players, game state, actions
//! - `belief`: fusing hints into beliefs and guessing hands from them
//! - `policy`: heuristic scores, action-kind distribution, action builder
//! - `rules`: applying an action to a game
//! - `rollout`: parallel Monte Carlo trials and action selection
//! - `runner`: playing a real game to the end

pub mod belief;
pub mod core;
pub mod logging;
pub mod policy;
pub mod rollout;
pub mod rules;
pub mod runner;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionKind, Card, CardId, Color, Deck, Firework, Game, GameConfig, GameError,
    GameRng, HintFact, Information, KnownCard, Player, PlayerId, UnknownCard,
};

pub use crate::belief::{combine, fuse, guess_hand, InferenceError};

pub use crate::policy::{action_type_distribution, choose_action, ActionDistribution, Situation};

pub use crate::rules::apply_action;

pub use crate::rollout::{
    Decision, RolloutConfig, RolloutEngine, RolloutError, RolloutStats, TrialOutcome,
};

pub use crate::runner::{play_game, GameSummary};
