//! Probability of hinting, discarding or playing, by situation.
//!
//! The situation is reduced to six flags and looked up in a fixed table of
//! hand-tuned weights. Hinting gets zero weight whenever info tokens are
//! exhausted or the deck is empty; a single remaining fuse shifts weight
//! towards discarding; a near-certain safe play shifts it towards playing.

use serde::{Deserialize, Serialize};

use crate::core::{ActionKind, Game, Player};

use super::scores::{certainty, discard_scores, play_scores, DISCARD_SAFE, PLAY_ILLEGAL};

/// Certainty at which a play or discard counts as "known".
pub const CONFIDENT: f64 = 0.9;

/// Situation flags for the current player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Situation {
    /// The deck is empty.
    pub final_round: bool,
    /// Some other seat still has a turn to come.
    pub others_remaining: bool,
    /// Exactly one fuse token left.
    pub last_fuse: bool,
    /// No info tokens left.
    pub no_info: bool,
    /// Best certainty among legal plays is at least [`CONFIDENT`].
    pub confident_play: bool,
    /// Best certainty among safe discards is at least [`CONFIDENT`].
    pub confident_discard: bool,
}

impl Situation {
    /// Read the flags off `game` for the player whose turn it is.
    #[must_use]
    pub fn of(game: &Game) -> Self {
        let player = game.current_player();
        let others_remaining = game
            .players()
            .any(|p| p.id() != player.id() && !p.last_turn());

        Self {
            final_round: game.is_final_round(),
            others_remaining,
            last_fuse: game.fuse_tokens() == 1,
            no_info: game.info_tokens() == 0,
            confident_play: best_play_certainty(game, player) >= CONFIDENT,
            confident_discard: best_discard_certainty(game, player) >= CONFIDENT,
        }
    }
}

/// Highest belief certainty among slots that are legal to play.
#[must_use]
pub fn best_play_certainty(game: &Game, player: &Player) -> f64 {
    let hand: Vec<_> = player.hand().iter().copied().collect();
    play_scores(&hand, game)
        .into_iter()
        .zip(player.beliefs().iter())
        .filter(|(score, _)| *score != PLAY_ILLEGAL)
        .map(|(_, belief)| certainty(belief))
        .fold(0.0, f64::max)
}

/// Highest belief certainty among slots that are safe to discard.
#[must_use]
pub fn best_discard_certainty(game: &Game, player: &Player) -> f64 {
    let hand: Vec<_> = player.hand().iter().copied().collect();
    discard_scores(&hand, game)
        .into_iter()
        .zip(player.beliefs().iter())
        .filter(|(score, _)| *score == DISCARD_SAFE)
        .map(|(_, belief)| certainty(belief))
        .fold(0.0, f64::max)
}

/// Probabilities of the three action kinds; they sum to 1.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionDistribution {
    pub hint: f64,
    pub discard: f64,
    pub play: f64,
}

impl ActionDistribution {
    #[must_use]
    pub const fn new(hint: f64, discard: f64, play: f64) -> Self {
        Self { hint, discard, play }
    }

    /// Pick a kind for a uniform draw `u` in `[0, 1)` against the
    /// cumulative thresholds hint, hint + discard.
    #[must_use]
    pub fn sample(&self, u: f64) -> ActionKind {
        if u < self.hint {
            ActionKind::Hint
        } else if u < self.hint + self.discard {
            ActionKind::Discard
        } else {
            ActionKind::Play
        }
    }
}

/// Look up the action-kind probabilities for a situation.
#[must_use]
pub fn distribution_for(s: &Situation) -> ActionDistribution {
    match (s.final_round, s.others_remaining) {
        // very last move of the game: nothing to hint for
        (true, false) => {
            if s.confident_play {
                ActionDistribution::new(0.0, 0.0, 1.0)
            } else if s.last_fuse {
                ActionDistribution::new(0.0, 0.8, 0.2)
            } else {
                ActionDistribution::new(0.0, 0.3, 0.7)
            }
        }
        (true, true) => {
            if s.confident_play {
                ActionDistribution::new(0.0, 0.1, 0.9)
            } else if s.last_fuse {
                ActionDistribution::new(0.0, 0.9, 0.1)
            } else if s.confident_discard {
                ActionDistribution::new(0.0, 0.7, 0.3)
            } else {
                ActionDistribution::new(0.0, 0.5, 0.5)
            }
        }
        (false, _) if s.no_info => {
            if s.confident_play {
                ActionDistribution::new(0.0, 0.2, 0.8)
            } else if s.last_fuse {
                ActionDistribution::new(0.0, 0.9, 0.1)
            } else if s.confident_discard {
                ActionDistribution::new(0.0, 0.8, 0.2)
            } else {
                ActionDistribution::new(0.0, 0.6, 0.4)
            }
        }
        (false, _) => {
            if s.last_fuse && s.confident_play {
                ActionDistribution::new(0.2, 0.1, 0.7)
            } else if s.last_fuse {
                ActionDistribution::new(0.5, 0.4, 0.1)
            } else if s.confident_play {
                ActionDistribution::new(0.1, 0.1, 0.8)
            } else if s.confident_discard {
                ActionDistribution::new(0.3, 0.5, 0.2)
            } else {
                ActionDistribution::new(0.5, 0.25, 0.25)
            }
        }
    }
}

/// Action-kind probabilities for the player whose turn it is in `game`.
#[must_use]
pub fn action_type_distribution(game: &Game) -> ActionDistribution {
    distribution_for(&Situation::of(game))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_situations() -> impl Iterator<Item = Situation> {
        (0u8..64).map(|bits| Situation {
            final_round: bits & 1 != 0,
            others_remaining: bits & 2 != 0,
            last_fuse: bits & 4 != 0,
            no_info: bits & 8 != 0,
            confident_play: bits & 16 != 0,
            confident_discard: bits & 32 != 0,
        })
    }

    #[test]
    fn test_every_row_sums_to_one() {
        for s in all_situations() {
            let d = distribution_for(&s);
            assert!((d.hint + d.discard + d.play - 1.0).abs() < 1e-9, "{s:?}");
            assert!(d.hint >= 0.0 && d.discard >= 0.0 && d.play >= 0.0);
        }
    }

    #[test]
    fn test_no_hints_without_tokens_or_in_final_round() {
        for s in all_situations().filter(|s| s.no_info || s.final_round) {
            assert_eq!(distribution_for(&s).hint, 0.0, "{s:?}");
        }
    }

    #[test]
    fn test_last_fuse_favors_discard() {
        let calm = Situation::default();
        let tense = Situation {
            last_fuse: true,
            ..calm
        };
        assert!(distribution_for(&tense).discard > distribution_for(&calm).discard);
        assert!(distribution_for(&tense).play < distribution_for(&calm).play);
    }

    #[test]
    fn test_confident_play_favors_play() {
        let s = Situation {
            confident_play: true,
            ..Situation::default()
        };
        assert_eq!(distribution_for(&s), ActionDistribution::new(0.1, 0.1, 0.8));
    }

    #[test]
    fn test_default_row() {
        assert_eq!(
            distribution_for(&Situation::default()),
            ActionDistribution::new(0.5, 0.25, 0.25)
        );
    }

    #[test]
    fn test_sample_thresholds() {
        let d = ActionDistribution::new(0.5, 0.25, 0.25);
        assert_eq!(d.sample(0.0), ActionKind::Hint);
        assert_eq!(d.sample(0.49), ActionKind::Hint);
        assert_eq!(d.sample(0.5), ActionKind::Discard);
        assert_eq!(d.sample(0.74), ActionKind::Discard);
        assert_eq!(d.sample(0.75), ActionKind::Play);
        assert_eq!(d.sample(0.999), ActionKind::Play);

        let only_play = ActionDistribution::new(0.0, 0.0, 1.0);
        assert_eq!(only_play.sample(0.0), ActionKind::Play);
    }

    #[test]
    fn test_situation_of_fresh_game() {
        let game = Game::new(&crate::core::GameConfig::default()).unwrap();
        let s = Situation::of(&game);
        assert!(!s.final_round);
        assert!(s.others_remaining);
        assert!(!s.last_fuse);
        assert!(!s.no_info);
        // nothing hinted yet
        assert!(!s.confident_play);
        assert!(!s.confident_discard);
        assert_eq!(action_type_distribution(&game), ActionDistribution::new(0.5, 0.25, 0.25));
    }
}
