//! The probabilistic playing policy used inside simulations.
//!
//! - `scores`: per-card play and discard scores and belief certainty
//! - `distribution`: situation flags and the hint/discard/play weights
//! - `builder`: turning a sampled action kind into a concrete [`Action`](crate::core::Action)

pub mod builder;
pub mod distribution;
pub mod scores;

pub use builder::{build_action, build_discard, build_hint, build_play, choose_action};
pub use distribution::{
    action_type_distribution, best_discard_certainty, best_play_certainty, distribution_for,
    ActionDistribution, Situation, CONFIDENT,
};
pub use scores::{
    certainty, discard_scores, live_faces, play_scores, DISCARD_CRITICAL, DISCARD_REPLACEABLE,
    DISCARD_SAFE, NEGATIVE_WEIGHT, PLAY_COMPLETES, PLAY_ILLEGAL, PLAY_LEGAL, POSITIVE_WEIGHT,
};
