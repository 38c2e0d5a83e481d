//! What a player believes about their own hand.
//!
//! - `fusion`: merging hint atoms into per-slot belief sets
//! - `inference`: turning belief sets back into a concrete, consistent hand

pub mod fusion;
pub mod inference;

pub use fusion::{combine, fuse};
pub use inference::{guess_hand, InferenceError};
