//! Turning heuristic scores into concrete actions.
//!
//! The builder acts for the player whose turn it is and reads that player's
//! hand as if it were known, so it must only be called on a game in which the
//! hand has been replaced by a guess.

use crate::core::{
    Action, ActionKind, Game, GameRng, HintFact, KnownCard, Player, PlayerId, UnknownCard,
};

use super::distribution::action_type_distribution;
use super::scores::{certainty, discard_scores, live_faces, play_scores};

/// Sample an action kind from the situation's distribution and build it.
///
/// If the sampled kind is impossible (no recipient for a hint, no card to
/// play or discard) the next feasible kind is used, in the order play,
/// discard, hint. Returns `None` only if no action at all is possible.
pub fn choose_action(game: &Game, rng: &mut GameRng) -> Option<Action> {
    let kind = action_type_distribution(game).sample(rng.gen_unit());
    let order = match kind {
        ActionKind::Hint => [ActionKind::Hint, ActionKind::Play, ActionKind::Discard],
        ActionKind::Discard => [ActionKind::Discard, ActionKind::Play, ActionKind::Hint],
        ActionKind::Play => [ActionKind::Play, ActionKind::Discard, ActionKind::Hint],
    };
    order.into_iter().find_map(|kind| build_action(kind, game, rng))
}

/// Build the best action of `kind` for the current player, if one exists.
pub fn build_action(kind: ActionKind, game: &Game, rng: &mut GameRng) -> Option<Action> {
    match kind {
        ActionKind::Hint => build_hint(game, rng),
        ActionKind::Discard => build_discard(game),
        ActionKind::Play => build_play(game),
    }
}

/// Play the slot with the highest play score, preferring better-known slots.
pub fn build_play(game: &Game) -> Option<Action> {
    let player = game.current_player();
    let hand = hand_of(player);
    let scores = play_scores(&hand, game);
    best_slot(&scores, player.beliefs().iter()).map(|slot| Action::PlayCard {
        player: player.id(),
        slot,
    })
}

/// Discard the slot with the highest discard score, preferring better-known slots.
pub fn build_discard(game: &Game) -> Option<Action> {
    let player = game.current_player();
    let hand = hand_of(player);
    let scores = discard_scores(&hand, game);
    best_slot(&scores, player.beliefs().iter()).map(|slot| Action::DiscardCard {
        player: player.id(),
        slot,
    })
}

/// Give a hint to another player.
///
/// Looks at every card the giver can see that its owner does not yet fully
/// know. A playable card ranks first, then a card that is the last live copy
/// of its face; within a rank the card its owner is least certain about
/// wins. The hint reveals the number unless that is already known, else the
/// colour. With no such card, a random fact about a random visible card is
/// given. Requires an info token and another player holding cards.
pub fn build_hint(game: &Game, rng: &mut GameRng) -> Option<Action> {
    if game.info_tokens() == 0 {
        return None;
    }
    let giver = game.turn();
    let mut recipients: Vec<&Player> = game
        .players()
        .filter(|p| p.id() != giver && p.hand_len() > 0)
        .collect();
    if recipients.is_empty() {
        return None;
    }
    rng.shuffle(&mut recipients);

    let mut best: Option<(u8, f64, PlayerId, HintFact)> = None;
    for recipient in &recipients {
        let live = live_faces(game, recipient.id());
        for (card, belief) in recipient.hand().iter().zip(recipient.beliefs().iter()) {
            let Some(fact) = unrevealed_fact(card, belief) else {
                continue;
            };
            let rank = if game.is_playable(card) {
                2
            } else if !live.contains(&card.face())
                && card.number > game.firework(card.color).top()
            {
                1
            } else {
                0
            };
            let known = certainty(belief);
            let better = match best {
                None => true,
                Some((r, c, _, _)) => rank > r || (rank == r && known < c),
            };
            if better {
                best = Some((rank, known, recipient.id(), fact));
            }
        }
    }

    let (to, fact) = match best {
        Some((_, _, to, fact)) => (to, fact),
        None => {
            let recipient = recipients[0];
            let slot = rng.gen_range_usize(0..recipient.hand_len());
            let card = recipient.hand()[slot];
            let fact = if rng.gen_unit() < 0.5 {
                HintFact::Number(card.number)
            } else {
                HintFact::Color(card.color)
            };
            (recipient.id(), fact)
        }
    };

    let recipient = game.player(to).ok()?;
    Some(Action::GiveInformation {
        from: giver,
        to,
        info: fact.expand(&hand_of(recipient)),
    })
}

fn hand_of(player: &Player) -> Vec<KnownCard> {
    player.hand().iter().copied().collect()
}

/// The fact to reveal about `card`, or `None` if its owner knows it fully.
fn unrevealed_fact(card: &KnownCard, belief: &UnknownCard) -> Option<HintFact> {
    if belief.known_number().is_none() {
        Some(HintFact::Number(card.number))
    } else if belief.known_color().is_none() {
        Some(HintFact::Color(card.color))
    } else {
        None
    }
}

/// Index of the highest score, ties broken by higher certainty, then by
/// lower index.
fn best_slot<'a>(scores: &[u8], beliefs: impl Iterator<Item = &'a UnknownCard>) -> Option<usize> {
    let mut best: Option<(usize, u8, f64)> = None;
    for ((slot, &score), belief) in scores.iter().enumerate().zip(beliefs) {
        let known = certainty(belief);
        let better = match best {
            None => true,
            Some((_, s, c)) => score > s || (score == s && known > c),
        };
        if better {
            best = Some((slot, score, known));
        }
    }
    best.map(|(slot, _, _)| slot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CardId, Color, Deck, GameParts, Information};
    use im::Vector;

    fn card(number: u8, color: Color, id: u32) -> KnownCard {
        KnownCard::new(number, color, CardId::new(id))
    }

    fn two_player(hand0: Vec<KnownCard>, hand1: Vec<KnownCard>, info_tokens: u8) -> Game {
        Game::from_parts(GameParts {
            deck: Deck::from_cards([card(3, Color::White, 50), card(4, Color::White, 51)]),
            discard: Vector::new(),
            turn: PlayerId::new(0),
            players: vec![
                Player::new(PlayerId::new(0), hand0),
                Player::new(PlayerId::new(1), hand1),
            ],
            info_tokens,
            fuse_tokens: 3,
            fireworks: Vec::new(),
        })
        .unwrap()
    }

    #[test]
    fn test_build_play_picks_playable() {
        let game = two_player(
            vec![card(3, Color::Red, 0), card(1, Color::Blue, 1), card(2, Color::Red, 2)],
            vec![card(1, Color::Green, 3)],
            8,
        );
        assert_eq!(
            build_play(&game),
            Some(Action::PlayCard {
                player: PlayerId::new(0),
                slot: 1,
            })
        );
    }

    #[test]
    fn test_build_discard_prefers_replaceable_over_critical() {
        let game = two_player(
            vec![card(5, Color::Red, 0), card(4, Color::White, 1)],
            vec![card(1, Color::Green, 3)],
            8,
        );
        // white 4 has a copy in the deck, red 5 does not
        assert_eq!(
            build_discard(&game),
            Some(Action::DiscardCard {
                player: PlayerId::new(0),
                slot: 1,
            })
        );
    }

    #[test]
    fn test_build_hint_targets_playable_card() {
        let game = two_player(
            vec![card(3, Color::Red, 0)],
            vec![card(4, Color::Blue, 3), card(1, Color::Green, 4)],
            8,
        );
        let action = build_hint(&game, &mut GameRng::new(1)).unwrap();

        match action {
            Action::GiveInformation { from, to, info } => {
                assert_eq!(from, PlayerId::new(0));
                assert_eq!(to, PlayerId::new(1));
                assert_eq!(
                    info.as_slice(),
                    &[Information::NegativeNumber(1), Information::PositiveNumber(1)]
                );
            }
            other => panic!("expected a hint, got {other:?}"),
        }
    }

    #[test]
    fn test_build_hint_reveals_color_when_number_known() {
        let partner = Player::from_parts(
            PlayerId::new(1),
            vec![card(1, Color::Green, 4)].into_iter().collect(),
            vec![UnknownCard::from_atoms([Information::PositiveNumber(1)])]
                .into_iter()
                .collect(),
            false,
        )
        .unwrap();
        let game = Game::from_parts(GameParts {
            deck: Deck::from_cards([card(3, Color::White, 50)]),
            discard: Vector::new(),
            turn: PlayerId::new(0),
            players: vec![Player::new(PlayerId::new(0), [card(3, Color::Red, 0)]), partner],
            info_tokens: 7,
            fuse_tokens: 3,
            fireworks: Vec::new(),
        })
        .unwrap();

        match build_hint(&game, &mut GameRng::new(3)) {
            Some(Action::GiveInformation { info, .. }) => {
                assert_eq!(info.as_slice(), &[Information::PositiveColor(Color::Green)]);
            }
            other => panic!("expected a hint, got {other:?}"),
        }
    }

    #[test]
    fn test_no_hint_without_tokens() {
        let game = two_player(vec![card(3, Color::Red, 0)], vec![card(1, Color::Green, 4)], 0);
        assert!(build_hint(&game, &mut GameRng::new(1)).is_none());
    }

    #[test]
    fn test_choose_action_falls_back_without_tokens() {
        let game = two_player(vec![card(3, Color::Red, 0)], vec![card(1, Color::Green, 4)], 0);
        for seed in 0..50 {
            let action = choose_action(&game, &mut GameRng::new(seed)).unwrap();
            assert_ne!(action.kind(), ActionKind::Hint);
            assert_eq!(action.actor(), PlayerId::new(0));
        }
    }

    #[test]
    fn test_choose_action_is_applicable() {
        let game = Game::new(&crate::core::GameConfig::default()).unwrap();
        let mut rng = GameRng::new(11);
        for _ in 0..50 {
            let action = choose_action(&game, &mut rng).unwrap();
            assert!(game.apply(&action).is_ok(), "{action}");
        }
    }

    #[test]
    fn test_best_slot_tie_breaks() {
        let known = UnknownCard::from_atoms([Information::PositiveNumber(1)]);
        let blank = UnknownCard::new();
        let beliefs = [blank.clone(), known, blank];

        assert_eq!(best_slot(&[1, 1, 1], beliefs.iter()), Some(1));
        assert_eq!(best_slot(&[0, 0, 2], beliefs.iter()), Some(2));
        assert_eq!(best_slot(&[], beliefs.iter()), None);
    }
}
