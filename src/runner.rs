//! Playing one real game to the end.
//!
//! The runner owns the real [`Game`] and asks a [`RolloutEngine`] for every
//! move. Hypothetical games built during rollouts never reach it; only the
//! chosen action is applied.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::core::{Action, Color, Game, GameConfig};
use crate::rollout::{Decision, RolloutEngine, RolloutError};

/// What the per-turn callback sees after each real move.
#[derive(Debug)]
pub struct TurnReport<'a> {
    /// Real turns played so far, this one included.
    pub turn: usize,
    pub decision: &'a Decision,
    /// The game after the move.
    pub game: &'a Game,
}

/// Final state of a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub score: usize,
    pub turns: usize,
    pub info_tokens: u8,
    pub fuse_tokens: u8,
    pub discarded: usize,
    /// Top of each firework, in colour order.
    pub fireworks: Vec<(Color, u8)>,
}

impl GameSummary {
    #[must_use]
    pub fn of(game: &Game, turns: usize) -> Self {
        Self {
            score: game.score(),
            turns,
            info_tokens: game.info_tokens(),
            fuse_tokens: game.fuse_tokens(),
            discarded: game.discard_pile().len(),
            fireworks: game.fireworks().map(|fw| (fw.color(), fw.top())).collect(),
        }
    }
}

/// Deal a game for `config` and play it out, calling `on_turn` after every move.
pub fn play_game<F>(
    config: &GameConfig,
    engine: &mut RolloutEngine,
    on_turn: F,
) -> Result<GameSummary, RolloutError>
where
    F: FnMut(&TurnReport<'_>),
{
    let game = Game::new(config)?;
    info!(
        players = game.player_count(),
        hand_size = config.hand_size(),
        seed = config.seed,
        trials = engine.config().trials,
        depth = engine.config().max_depth,
        "starting game"
    );
    play_from(game, engine, on_turn)
}

/// Play `game` out from its current state.
pub fn play_from<F>(
    mut game: Game,
    engine: &mut RolloutEngine,
    mut on_turn: F,
) -> Result<GameSummary, RolloutError>
where
    F: FnMut(&TurnReport<'_>),
{
    let mut turns = 0;
    while !game.is_over() {
        let decision = engine.decide(&game).map_err(|err| {
            warn!(turn = turns + 1, player = %game.turn(), %err, "decision round failed");
            err
        })?;
        game = apply_logged(&game, &decision.action)?;
        turns += 1;

        info!(
            turn = turns,
            action = %decision.action,
            score = game.score(),
            info_tokens = game.info_tokens(),
            fuse_tokens = game.fuse_tokens(),
            deck = game.deck().len(),
            "turn played"
        );
        on_turn(&TurnReport {
            turn: turns,
            decision: &decision,
            game: &game,
        });
    }

    let summary = GameSummary::of(&game, turns);
    info!(score = summary.score, turns, fuse_tokens = summary.fuse_tokens, "game over");
    Ok(summary)
}

fn apply_logged(game: &Game, action: &Action) -> Result<Game, RolloutError> {
    game.apply(action).map_err(|err| {
        warn!(%action, %err, "chosen action refused by the real game");
        RolloutError::from(err)
    })
}
