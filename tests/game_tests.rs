//! Game state machine integration tests.

use im::Vector;
use proptest::prelude::*;

use hanabi_mc::core::{
    Action, CardId, Color, Deck, Firework, Game, GameConfig, GameError, GameParts, GameRng,
    KnownCard, Player, PlayerId, FULL_DECK_SIZE, MAX_FUSE_TOKENS, MAX_INFO_TOKENS,
};
use hanabi_mc::policy::choose_action;

fn card(number: u8, color: Color, id: u32) -> KnownCard {
    KnownCard::new(number, color, CardId::new(id))
}

fn red_up_to(top: u8) -> Firework {
    (1..=top).fold(Firework::new(Color::Red), |fw, n| {
        fw.add_card(card(n, Color::Red, 200 + u32::from(n))).unwrap()
    })
}

/// Opening player plays the card in `slot`.
fn play(slot: usize) -> Action {
    Action::PlayCard {
        player: PlayerId::new(0),
        slot,
    }
}

fn discard(slot: usize) -> Action {
    Action::DiscardCard {
        player: PlayerId::new(0),
        slot,
    }
}

fn table(hand0: Vec<KnownCard>, info_tokens: u8, fireworks: Vec<Firework>) -> Game {
    Game::from_parts(GameParts {
        deck: Deck::from_cards([card(2, Color::White, 100), card(3, Color::White, 101)]),
        discard: Vector::new(),
        turn: PlayerId::new(0),
        players: vec![
            Player::new(PlayerId::new(0), hand0),
            Player::new(PlayerId::new(1), [card(1, Color::Green, 50)]),
        ],
        info_tokens,
        fuse_tokens: 3,
        fireworks,
    })
    .unwrap()
}

// =============================================================================
// Fixed Scenarios
// =============================================================================

#[test]
fn test_fresh_four_player_game() {
    let game = Game::new(&GameConfig::default()).unwrap();

    assert_eq!(FULL_DECK_SIZE, 55);
    assert_eq!(game.deck().len(), 39);
    assert_eq!(game.score(), 0);
    assert_eq!(game.info_tokens(), 8);
    assert_eq!(game.fuse_tokens(), 3);
    assert!(game.players().all(|p| p.hand_len() == 4 && p.beliefs().iter().all(|b| b.is_empty())));
}

#[test]
fn test_hand_size_by_table() {
    for (players, hand) in [(2, 5), (3, 5), (4, 4), (5, 4)] {
        let game = Game::new(&GameConfig::default().with_player_count(players)).unwrap();
        assert!(game.players().all(|p| p.hand_len() == hand), "{players} players");
        assert_eq!(game.deck().len(), FULL_DECK_SIZE - players * hand);
    }
}

#[test]
fn test_player_count_validated() {
    assert_eq!(
        Game::new(&GameConfig::default().with_player_count(1)),
        Err(GameError::InvalidPlayerCount(1))
    );
    assert!(Game::new(&GameConfig::default().with_player_count(6)).is_err());
}

#[test]
fn test_legal_play_adds_one() {
    let game = table(vec![card(3, Color::Red, 0)], 8, vec![red_up_to(2)]);
    let next = game.apply(&play(0)).unwrap();

    assert_eq!(next.score(), game.score() + 1);
    assert_eq!(next.fuse_tokens(), game.fuse_tokens());
}

#[test]
fn test_illegal_play_costs_fuse() {
    let game = table(vec![card(4, Color::Red, 0)], 8, vec![red_up_to(2)]);
    let next = game.apply(&play(0)).unwrap();

    assert_eq!(next.score(), game.score());
    assert_eq!(next.fuse_tokens(), game.fuse_tokens() - 1);
    assert!(next.discard_pile().contains(&card(4, Color::Red, 0)));
}

#[test]
fn test_discard_at_full_tokens_stays_full() {
    let game = table(vec![card(4, Color::Red, 0)], 8, Vec::new());
    let next = game.apply(&discard(0)).unwrap();
    assert_eq!(next.info_tokens(), 8);
}

#[test]
fn test_playing_five_at_full_tokens_stays_full() {
    let game = table(vec![card(5, Color::Red, 0)], 8, vec![red_up_to(4)]);
    let next = game.apply(&play(0)).unwrap();
    assert_eq!(next.score(), 5);
    assert_eq!(next.info_tokens(), 8);
}

#[test]
fn test_from_parts_refusals() {
    let parts = |info_tokens, fuse_tokens| GameParts {
        deck: Deck::default(),
        discard: Vector::new(),
        turn: PlayerId::new(0),
        players: vec![Player::new(PlayerId::new(0), [card(1, Color::Red, 0)])],
        info_tokens,
        fuse_tokens,
        fireworks: Vec::new(),
    };
    assert_eq!(Game::from_parts(parts(9, 3)), Err(GameError::InfoTokenOverflow(9)));
    assert_eq!(Game::from_parts(parts(8, 4)), Err(GameError::FuseTokenOverflow(4)));
}

#[test]
fn test_own_cards_are_hidden() {
    let game = Game::new(&GameConfig::default()).unwrap();
    let seat = game.player(PlayerId::new(1)).unwrap();

    assert!(seat.card_view(0, PlayerId::new(1)).unwrap().known().is_none());
    assert_eq!(
        seat.card_view(0, PlayerId::new(0)).unwrap().known(),
        seat.hand().front()
    );
    assert!(seat.card_view(9, PlayerId::new(0)).is_none());
}

#[test]
fn test_game_serialization() {
    let game = Game::new(&GameConfig::default().with_seed(8)).unwrap();
    let json = serde_json::to_string(&game).unwrap();
    let back: Game = serde_json::from_str(&json).unwrap();
    assert_eq!(game, back);
}

// =============================================================================
// Self-play Properties
// =============================================================================

/// Play a whole game with the policy reading real hands, checking every step.
fn check_self_play(players: usize, seed: u64) -> Result<(), TestCaseError> {
    let config = GameConfig::default().with_player_count(players).with_seed(seed);
    let mut game = Game::new(&config).unwrap();
    let mut rng = GameRng::new(seed);
    let mut steps = 0;

    while !game.is_over() {
        let action = choose_action(&game, &mut rng).unwrap();
        let next = game.apply(&action).unwrap();

        prop_assert!(next.score() >= game.score());
        prop_assert_eq!(next.score(), next.fireworks().map(Firework::size).sum::<usize>());
        prop_assert!(next.info_tokens() <= MAX_INFO_TOKENS);
        prop_assert!(next.fuse_tokens() <= MAX_FUSE_TOKENS);
        prop_assert!(next.deck().len() <= game.deck().len());
        prop_assert_eq!(next.turn(), game.turn().next(players));

        let cards = next.deck().len()
            + next.discard_pile().len()
            + next.players().map(Player::hand_len).sum::<usize>()
            + next.score();
        prop_assert_eq!(cards, FULL_DECK_SIZE);

        game = next;
        steps += 1;
        prop_assert!(steps < 500);
    }

    prop_assert!(game.fuse_tokens() == 0 || game.players().all(Player::last_turn));
    prop_assert!(game.score() <= 25);
    let action = Action::DiscardCard {
        player: game.turn(),
        slot: 0,
    };
    prop_assert_eq!(game.apply(&action), Err(GameError::GameOver));
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_self_play_keeps_invariants(players in 2usize..=5, seed in any::<u64>()) {
        check_self_play(players, seed)?;
    }
}
