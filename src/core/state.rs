//! Complete game state.
//!
//! ## Game
//!
//! One immutable snapshot of a game:
//! - Draw pile and discard pile
//! - Seats (true hands and per-seat beliefs)
//! - Info and fuse token counters
//! - One firework per colour
//! - Whose turn it is
//!
//! Uses `im` persistent data structures so that a snapshot can be copied
//! once per rollout trial at O(1) cost. Transitions (see `rules`) never
//! modify a snapshot; they build the successor.

use im::{OrdMap, Vector};
use serde::{Deserialize, Serialize};

use super::card::{Color, KnownCard};
use super::config::GameConfig;
use super::deck::Deck;
use super::error::GameError;
use super::firework::Firework;
use super::player::{Player, PlayerId, PlayerMap};
use super::rng::GameRng;

/// Info tokens available at the start, and the cap.
pub const MAX_INFO_TOKENS: u8 = 8;

/// Fuse tokens at the start; the game ends when they run out.
pub const MAX_FUSE_TOKENS: u8 = 3;

/// Explicit parts for assembling a [`Game`] outside of a fresh deal.
///
/// Missing fireworks are filled in empty. This is also the serialized form
/// of a [`Game`], so a deserialized game goes through the same checks.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameParts {
    pub deck: Deck,
    pub discard: Vector<KnownCard>,
    pub turn: PlayerId,
    pub players: Vec<Player>,
    pub info_tokens: u8,
    pub fuse_tokens: u8,
    pub fireworks: Vec<Firework>,
}

/// Full game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameParts", into = "GameParts")]
pub struct Game {
    pub(crate) deck: Deck,
    pub(crate) discard: Vector<KnownCard>,
    pub(crate) turn: PlayerId,
    pub(crate) players: PlayerMap<Player>,
    pub(crate) info_tokens: u8,
    pub(crate) fuse_tokens: u8,
    pub(crate) fireworks: OrdMap<Color, Firework>,
}

impl Game {
    /// Shuffle a fresh deck from `config.seed` and deal a new game.
    pub fn new(config: &GameConfig) -> Result<Self, GameError> {
        let mut rng = GameRng::new(config.seed).for_context("deal");
        Self::deal(config, Deck::shuffled(&mut rng))
    }

    /// Deal a new game from `deck`, front cards first.
    ///
    /// Player 0 receives the first `hand_size` cards, player 1 the next, and
    /// so on. Player 0 moves first.
    pub fn deal(config: &GameConfig, deck: Deck) -> Result<Self, GameError> {
        config.validate()?;
        let hand_size = config.hand_size();
        let needed = hand_size * config.player_count;
        if deck.len() < needed {
            return Err(GameError::DeckTooSmall {
                deck: deck.len(),
                needed,
            });
        }

        let mut deck = deck;
        let mut players = Vec::with_capacity(config.player_count);
        for seat in PlayerId::all(config.player_count) {
            let mut hand = Vec::with_capacity(hand_size);
            for _ in 0..hand_size {
                let (card, rest) = deck.draw();
                hand.extend(card);
                deck = rest;
            }
            players.push(Player::new(seat, hand));
        }

        Self::from_parts(GameParts {
            deck,
            discard: Vector::new(),
            turn: PlayerId::new(0),
            players,
            info_tokens: MAX_INFO_TOKENS,
            fuse_tokens: MAX_FUSE_TOKENS,
            fireworks: Vec::new(),
        })
    }

    /// Assemble a game, refusing any invalid combination of parts.
    pub fn from_parts(parts: GameParts) -> Result<Self, GameError> {
        if parts.info_tokens > MAX_INFO_TOKENS {
            return Err(GameError::InfoTokenOverflow(parts.info_tokens));
        }
        if parts.fuse_tokens > MAX_FUSE_TOKENS {
            return Err(GameError::FuseTokenOverflow(parts.fuse_tokens));
        }
        if parts.players.is_empty() || parts.players.len() > 255 {
            return Err(GameError::InvalidPlayerCount(parts.players.len()));
        }
        if parts.turn.index() >= parts.players.len() {
            return Err(GameError::InvalidTurn {
                turn: parts.turn.index(),
                players: parts.players.len(),
            });
        }
        for (index, player) in parts.players.iter().enumerate() {
            if player.id().index() != index {
                return Err(GameError::UnknownPlayer(player.id()));
            }
        }

        let mut fireworks: OrdMap<Color, Firework> =
            Color::ALL.iter().map(|&c| (c, Firework::new(c))).collect();
        for firework in parts.fireworks {
            fireworks.insert(firework.color(), firework);
        }

        Ok(Self {
            deck: parts.deck,
            discard: parts.discard,
            turn: parts.turn,
            players: PlayerMap::from_vec(parts.players),
            info_tokens: parts.info_tokens,
            fuse_tokens: parts.fuse_tokens,
            fireworks,
        })
    }

    // === Accessors ===

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Discarded and misplayed cards, oldest first.
    #[must_use]
    pub fn discard_pile(&self) -> &Vector<KnownCard> {
        &self.discard
    }

    /// Seat whose turn it is.
    #[must_use]
    pub fn turn(&self) -> PlayerId {
        self.turn
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    pub fn player(&self, id: PlayerId) -> Result<&Player, GameError> {
        self.players.get(id).ok_or(GameError::UnknownPlayer(id))
    }

    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.turn]
    }

    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    #[must_use]
    pub fn info_tokens(&self) -> u8 {
        self.info_tokens
    }

    #[must_use]
    pub fn fuse_tokens(&self) -> u8 {
        self.fuse_tokens
    }

    #[must_use]
    pub fn firework(&self, color: Color) -> &Firework {
        &self.fireworks[&color]
    }

    pub fn fireworks(&self) -> impl Iterator<Item = &Firework> {
        self.fireworks.values()
    }

    /// Whether `card` would extend its colour's firework right now.
    #[must_use]
    pub fn is_playable(&self, card: &KnownCard) -> bool {
        self.firework(card.color).accepts(card)
    }

    /// Total cards across all fireworks.
    #[must_use]
    pub fn score(&self) -> usize {
        self.fireworks.values().map(Firework::size).sum()
    }

    /// The draw pile is exhausted; every seat has at most one turn left.
    #[must_use]
    pub fn is_final_round(&self) -> bool {
        self.deck.is_empty()
    }

    /// Fuses are gone, or every seat has had its last turn.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.fuse_tokens == 0 || self.players.values().all(Player::last_turn)
    }

    // === Hidden information ===

    /// Cards `player` cannot see: the draw pile plus their own hand.
    #[must_use]
    pub fn unseen_by(&self, player: PlayerId) -> Vec<KnownCard> {
        let mut pool: Vec<KnownCard> = self.deck.iter().copied().collect();
        if let Some(seat) = self.players.get(player) {
            pool.extend(seat.hand().iter().copied());
        }
        pool
    }

    /// A hypothetical copy of this game in which `player` holds `hand`.
    ///
    /// The player's real hand goes back into the pool of unseen cards, `hand`
    /// is taken out of it, and the remainder becomes a freshly shuffled deck.
    pub fn with_substituted_hand(
        &self,
        player: PlayerId,
        hand: Vec<KnownCard>,
        rng: &mut GameRng,
    ) -> Result<Game, GameError> {
        let seat = self.player(player)?;
        let mut rest: Vec<KnownCard> = self
            .unseen_by(player)
            .into_iter()
            .filter(|card| !hand.iter().any(|h| h.id == card.id))
            .collect();
        rng.shuffle(&mut rest);

        let seat = seat.with_hand(hand.into_iter().collect())?;
        let mut next = self.clone();
        next.players[player] = seat;
        next.deck = Deck::from_cards(rest);
        Ok(next)
    }
}

impl TryFrom<GameParts> for Game {
    type Error = GameError;

    fn try_from(parts: GameParts) -> Result<Self, Self::Error> {
        Game::from_parts(parts)
    }
}

impl From<Game> for GameParts {
    fn from(game: Game) -> Self {
        Self {
            players: game.players.values().cloned().collect(),
            fireworks: game.fireworks.values().cloned().collect(),
            deck: game.deck,
            discard: game.discard,
            turn: game.turn,
            info_tokens: game.info_tokens,
            fuse_tokens: game.fuse_tokens,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::CardId;
    use crate::core::deck::FULL_DECK_SIZE;
    use std::collections::HashSet;

    #[test]
    fn test_new_four_player_game() {
        let game = Game::new(&GameConfig::default()).unwrap();

        assert_eq!(game.player_count(), 4);
        assert_eq!(game.deck().len(), FULL_DECK_SIZE - 16);
        assert_eq!(game.deck().len(), 39);
        assert_eq!(game.score(), 0);
        assert_eq!(game.info_tokens(), 8);
        assert_eq!(game.fuse_tokens(), 3);
        assert_eq!(game.turn(), PlayerId::new(0));
        assert!(game.players().all(|p| p.hand_len() == 4));
        assert!(!game.is_over());
    }

    #[test]
    fn test_new_is_seeded() {
        let a = Game::new(&GameConfig::default().with_seed(5)).unwrap();
        let b = Game::new(&GameConfig::default().with_seed(5)).unwrap();
        let c = Game::new(&GameConfig::default().with_seed(6)).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_all_cards_accounted_for() {
        let game = Game::new(&GameConfig::default().with_player_count(3)).unwrap();
        let mut ids: HashSet<CardId> = game.deck().iter().map(|c| c.id).collect();
        for player in game.players() {
            ids.extend(player.hand().iter().map(|c| c.id));
        }
        assert_eq!(ids.len(), FULL_DECK_SIZE);
    }

    #[test]
    fn test_deal_rejects_small_deck() {
        let deck = Deck::from_cards(Deck::ordered().iter().copied().take(10));
        assert_eq!(
            Game::deal(&GameConfig::default(), deck),
            Err(GameError::DeckTooSmall {
                deck: 10,
                needed: 16,
            })
        );
    }

    fn parts(info_tokens: u8, fuse_tokens: u8, turn: u8) -> GameParts {
        GameParts {
            deck: Deck::default(),
            discard: Vector::new(),
            turn: PlayerId::new(turn),
            players: vec![
                Player::new(PlayerId::new(0), Vec::<KnownCard>::new()),
                Player::new(PlayerId::new(1), Vec::<KnownCard>::new()),
            ],
            info_tokens,
            fuse_tokens,
            fireworks: Vec::new(),
        }
    }

    #[test]
    fn test_from_parts_refuses_invalid_tokens() {
        assert_eq!(Game::from_parts(parts(9, 3, 0)), Err(GameError::InfoTokenOverflow(9)));
        assert_eq!(Game::from_parts(parts(8, 4, 0)), Err(GameError::FuseTokenOverflow(4)));
        assert!(Game::from_parts(parts(0, 0, 1)).is_ok());
    }

    #[test]
    fn test_from_parts_refuses_invalid_turn() {
        assert_eq!(
            Game::from_parts(parts(8, 3, 2)),
            Err(GameError::InvalidTurn {
                turn: 2,
                players: 2,
            })
        );
    }

    #[test]
    fn test_zero_fuses_is_over() {
        let game = Game::from_parts(parts(8, 0, 0)).unwrap();
        assert!(game.is_over());
    }

    #[test]
    fn test_unseen_by_includes_own_hand() {
        let game = Game::new(&GameConfig::default()).unwrap();
        let pool = game.unseen_by(PlayerId::new(2));
        assert_eq!(pool.len(), 39 + 4);
        for card in game.player(PlayerId::new(2)).unwrap().hand() {
            assert!(pool.contains(card));
        }
    }

    #[test]
    fn test_substituted_hand_conserves_cards() {
        let game = Game::new(&GameConfig::default()).unwrap();
        let player = PlayerId::new(0);
        let pool = game.unseen_by(player);
        let guess: Vec<KnownCard> = pool[..4].to_vec();

        let hypo = game
            .with_substituted_hand(player, guess.clone(), &mut GameRng::new(1))
            .unwrap();

        let held: Vec<KnownCard> = hypo.player(player).unwrap().hand().iter().copied().collect();
        assert_eq!(held, guess);
        assert_eq!(hypo.deck().len(), game.deck().len());

        let mut before: Vec<CardId> = pool.iter().map(|c| c.id).collect();
        let mut after: Vec<CardId> = hypo.unseen_by(player).iter().map(|c| c.id).collect();
        before.sort();
        after.sort();
        assert_eq!(before, after);

        // the real game is untouched
        assert_eq!(game, Game::new(&GameConfig::default()).unwrap());
    }

    #[test]
    fn test_serde_round_trip() {
        let game = Game::new(&GameConfig::default().with_seed(21)).unwrap();
        let json = serde_json::to_string(&game).unwrap();
        assert_eq!(serde_json::from_str::<Game>(&json).unwrap(), game);
    }

    #[test]
    fn test_deserialize_refuses_invalid_tokens() {
        let game = Game::new(&GameConfig::default()).unwrap();
        let mut json = serde_json::to_value(&game).unwrap();
        json["info_tokens"] = serde_json::json!(255);

        let err = serde_json::from_value::<Game>(json).unwrap_err();
        assert!(err.to_string().contains("info token count 255"), "{err}");
    }

    #[test]
    fn test_deserialize_refuses_misaligned_hand() {
        let game = Game::new(&GameConfig::default()).unwrap();
        let mut json = serde_json::to_value(&game).unwrap();
        json["players"][0]["beliefs"] = serde_json::json!([]);

        assert!(serde_json::from_value::<Game>(json).is_err());
    }
}
