//! Game rules: the only way one snapshot becomes the next.
//!
//! - `transition`: hint, discard and play transitions, draw, turn advance

pub mod transition;

pub use transition::apply_action;

use crate::core::{Action, Game, GameError};

impl Game {
    /// Shorthand for [`apply_action`].
    pub fn apply(&self, action: &Action) -> Result<Game, GameError> {
        apply_action(self, action)
    }
}
