//! Monte Carlo rollouts for choosing a real move.
//!
//! ## Usage
//!
//! ```no_run
//! use hanabi_mc::core::{Game, GameConfig};
//! use hanabi_mc::rollout::{RolloutConfig, RolloutEngine};
//!
//! let game = Game::new(&GameConfig::default()).unwrap();
//! let mut engine = RolloutEngine::new(RolloutConfig::default().with_trials(100)).unwrap();
//!
//! let decision = engine.decide(&game).unwrap();
//! println!("{} (best simulated score {})", decision.action, decision.score);
//! ```

pub mod config;
pub mod engine;
pub mod stats;
pub mod trial;

pub use config::RolloutConfig;
pub use engine::{select_best, Decision, RolloutEngine, RolloutError};
pub use stats::RolloutStats;
pub use trial::{run_trial, TrialOutcome};
