//! One simulated play-through from a real game snapshot.

use tracing::trace;

use crate::belief::guess_hand;
use crate::core::{Action, Game, GameRng, UnknownCard};
use crate::policy::choose_action;

use super::engine::RolloutError;

/// What a single trial reports back.
#[derive(Clone, Debug, PartialEq)]
pub struct TrialOutcome {
    /// Score of the simulated game when the trial stopped.
    pub score: usize,
    /// The action taken on the trial's first step.
    pub first_action: Action,
    /// Simulated turns played.
    pub depth: usize,
}

/// Play `game` forward for at most `max_depth` turns (at least one).
///
/// Every step forgets the acting player's hand, guesses a new one that fits
/// their beliefs, and lets the policy act on that hypothetical game. Guesses
/// never carry over from one step to the next, and `game` itself is never
/// touched.
pub fn run_trial(
    game: &Game,
    max_depth: usize,
    rng: &mut GameRng,
) -> Result<TrialOutcome, RolloutError> {
    let mut state = game.clone();
    let mut first_action = None;
    let mut depth = 0;

    while depth < max_depth.max(1) && !state.is_over() {
        let turn = state.turn();
        let beliefs: Vec<UnknownCard> = state.current_player().beliefs().iter().cloned().collect();
        let guess = guess_hand(&beliefs, &state.unseen_by(turn), rng)?;
        let hypothetical = state.with_substituted_hand(turn, guess, rng)?;

        let action = choose_action(&hypothetical, rng).ok_or(RolloutError::NoLegalAction)?;
        trace!(depth, %action, "simulated step");
        state = hypothetical.apply(&action)?;
        first_action.get_or_insert(action);
        depth += 1;
    }

    Ok(TrialOutcome {
        score: state.score(),
        first_action: first_action.ok_or(RolloutError::NoLegalAction)?,
        depth,
    })
}
