//! Rollout configuration parameters.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Rollout configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RolloutConfig {
    /// Independent trials per decision.
    pub trials: usize,

    /// Simulated turns per trial before it is cut off.
    /// A trial also stops as soon as its game is over.
    pub max_depth: usize,

    /// Wall-clock limit for one whole decision round.
    pub timeout: Duration,

    /// Seed of the master RNG the per-trial generators are forked from.
    pub seed: u64,

    /// Worker threads (`None` = one per core).
    pub threads: Option<usize>,
}

impl Default for RolloutConfig {
    fn default() -> Self {
        Self {
            trials: 500,
            max_depth: 15,
            timeout: Duration::from_secs(3600),
            seed: 42,
            threads: None,
        }
    }
}

impl RolloutConfig {
    /// Set the number of trials per decision.
    #[must_use]
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Set the depth bound.
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Set the decision timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the master seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Pin the worker pool size.
    #[must_use]
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }
}
