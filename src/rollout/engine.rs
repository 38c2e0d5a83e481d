//! Parallel Monte Carlo decision making.
//!
//! For one real game snapshot the engine runs `trials` independent
//! [`run_trial`]s on its own rayon pool and picks the first action of the
//! best-scoring trial.
//!
//! ## Determinism
//!
//! Each trial gets a generator forked from the engine's master RNG before
//! anything is dispatched, and outcomes are aggregated by trial index, so a
//! decision depends only on the game and the master seed, never on thread
//! scheduling.
//!
//! ## Failure
//!
//! There is no partial result. A failed trial, a lost worker or the round
//! timeout each abort the whole decision.

use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::{Duration, Instant};

use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error};

use crate::belief::InferenceError;
use crate::core::{Action, Game, GameError, GameRng};

use super::config::RolloutConfig;
use super::stats::RolloutStats;
use super::trial::{run_trial, TrialOutcome};

/// Why a decision round produced no action.
#[derive(Debug, Error)]
pub enum RolloutError {
    #[error(transparent)]
    Game(#[from] GameError),

    #[error("hand inference failed: {0}")]
    Inference(#[from] InferenceError),

    #[error("decision timed out after {elapsed:?} with {completed}/{total} trials done")]
    Timeout {
        elapsed: Duration,
        completed: usize,
        total: usize,
    },

    #[error("workers stopped reporting after {completed}/{total} trials")]
    TrialsLost { completed: usize, total: usize },

    #[error("no trials configured")]
    NoTrials,

    #[error("no legal action for the player to move")]
    NoLegalAction,

    #[error("could not start rollout workers: {0}")]
    ThreadPool(#[from] ThreadPoolBuildError),
}

/// The action chosen for one real turn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub action: Action,
    /// Best simulated score, reached by a trial that opened with `action`.
    pub score: usize,
    pub stats: RolloutStats,
}

/// Runs decision rounds on a dedicated worker pool.
pub struct RolloutEngine {
    config: RolloutConfig,
    pool: ThreadPool,
    rng: GameRng,
}

impl RolloutEngine {
    /// Start the worker pool for `config`.
    pub fn new(config: RolloutConfig) -> Result<Self, RolloutError> {
        let mut builder = ThreadPoolBuilder::new()
            .thread_name(|i| format!("rollout-{i}"))
            .panic_handler(|_| error!("rollout worker panicked"));
        if let Some(threads) = config.threads {
            builder = builder.num_threads(threads);
        }
        let pool = builder.build()?;
        let rng = GameRng::new(config.seed).for_context("rollout");

        Ok(Self { config, pool, rng })
    }

    pub fn config(&self) -> &RolloutConfig {
        &self.config
    }

    /// Pick the action for the player to move in `game`.
    ///
    /// Blocks until every trial has reported or the configured timeout has
    /// passed.
    pub fn decide(&mut self, game: &Game) -> Result<Decision, RolloutError> {
        if game.is_over() {
            return Err(GameError::GameOver.into());
        }
        let total = self.config.trials;
        if total == 0 {
            return Err(RolloutError::NoTrials);
        }

        let start = Instant::now();
        let deadline = start + self.config.timeout;
        let (tx, rx) = mpsc::channel();

        for idx in 0..total {
            let tx = tx.clone();
            let game = game.clone();
            let mut rng = self.rng.fork();
            let max_depth = self.config.max_depth;
            self.pool.spawn(move || {
                let result = run_trial(&game, max_depth, &mut rng);
                // the receiver is gone once the round has failed
                let _ = tx.send((idx, result));
            });
        }
        drop(tx);

        let mut outcomes: Vec<Option<TrialOutcome>> = vec![None; total];
        let mut completed = 0;
        while completed < total {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match rx.recv_timeout(remaining) {
                Ok((idx, result)) => {
                    let outcome = result?;
                    debug!(
                        trial = idx,
                        score = outcome.score,
                        depth = outcome.depth,
                        first_action = %outcome.first_action,
                        "trial finished"
                    );
                    outcomes[idx] = Some(outcome);
                    completed += 1;
                }
                Err(RecvTimeoutError::Timeout) => {
                    return Err(RolloutError::Timeout {
                        elapsed: start.elapsed(),
                        completed,
                        total,
                    });
                }
                Err(RecvTimeoutError::Disconnected) => {
                    return Err(RolloutError::TrialsLost { completed, total });
                }
            }
        }

        let outcomes: Vec<TrialOutcome> = outcomes.into_iter().flatten().collect();
        let best = select_best(&outcomes).ok_or(RolloutError::NoTrials)?;
        let stats = summarize(&outcomes, start.elapsed());
        debug!(
            score = best.score,
            mean = stats.mean_score,
            distinct = stats.distinct_first_actions,
            "decision made"
        );

        Ok(Decision {
            action: best.first_action.clone(),
            score: best.score,
            stats,
        })
    }
}

/// The outcome with the highest score; on a tie, the earliest one.
#[must_use]
pub fn select_best(outcomes: &[TrialOutcome]) -> Option<&TrialOutcome> {
    let mut best: Option<&TrialOutcome> = None;
    for outcome in outcomes {
        if best.map_or(true, |b| outcome.score > b.score) {
            best = Some(outcome);
        }
    }
    best
}

fn summarize(outcomes: &[TrialOutcome], elapsed: Duration) -> RolloutStats {
    let trials = outcomes.len();
    let total_score: usize = outcomes.iter().map(|o| o.score).sum();
    let first_actions: FxHashSet<&Action> = outcomes.iter().map(|o| &o.first_action).collect();

    RolloutStats {
        trials,
        simulated_turns: outcomes.iter().map(|o| o.depth).sum(),
        max_depth: outcomes.iter().map(|o| o.depth).max().unwrap_or(0),
        best_score: outcomes.iter().map(|o| o.score).max().unwrap_or(0),
        mean_score: if trials == 0 {
            0.0
        } else {
            total_score as f64 / trials as f64
        },
        distinct_first_actions: first_actions.len(),
        time_us: u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX),
    }
}
