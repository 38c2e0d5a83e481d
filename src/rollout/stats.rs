//! Rollout statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected over one decision round.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RolloutStats {
    /// Trials that reported an outcome.
    pub trials: usize,

    /// Simulated turns summed over all trials.
    pub simulated_turns: usize,

    /// Deepest trial, in simulated turns.
    pub max_depth: usize,

    /// Best final score seen.
    pub best_score: usize,

    /// Mean final score.
    pub mean_score: f64,

    /// Distinct first actions across trials.
    pub distinct_first_actions: usize,

    /// Total time spent on the round (microseconds).
    pub time_us: u64,
}

impl RolloutStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate trials per second.
    #[must_use]
    pub fn trials_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.trials as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Calculate average simulated turns per trial.
    #[must_use]
    pub fn avg_depth(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.simulated_turns as f64 / self.trials as f64
        }
    }
}
