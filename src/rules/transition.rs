//! Applying one action to a game snapshot.
//!
//! Every transition:
//! 1. checks that the game is still running and that the actor has the turn
//! 2. performs the hint, discard or play on a copy of the snapshot
//! 3. recomputes the actor's `last_turn` flag from the post-draw deck
//! 4. passes the turn to the next seat
//!
//! The input snapshot is never modified.

use crate::belief::combine;
use crate::core::{
    Action, Deck, Game, GameError, Information, Player, PlayerId, UnknownCard, MAX_INFO_TOKENS,
    MAX_NUMBER,
};

/// The game that results from `action`.
pub fn apply_action(game: &Game, action: &Action) -> Result<Game, GameError> {
    if game.is_over() {
        return Err(GameError::GameOver);
    }
    let actor = action.actor();
    if actor != game.turn {
        return Err(GameError::OutOfTurn {
            actor,
            expected: game.turn,
        });
    }

    let mut next = match action {
        Action::GiveInformation { from, to, info } => give_information(game, *from, *to, info)?,
        Action::DiscardCard { player, slot } => discard_card(game, *player, *slot)?,
        Action::PlayCard { player, slot } => play_card(game, *player, *slot)?,
    };

    let deck_empty = next.deck.is_empty();
    next.players[actor] = next.players[actor].with_last_turn(deck_empty);
    next.turn = actor.next(next.player_count());
    Ok(next)
}

fn give_information(
    game: &Game,
    from: PlayerId,
    to: PlayerId,
    info: &[Information],
) -> Result<Game, GameError> {
    if from == to {
        return Err(GameError::SelfHint(from));
    }
    let info_tokens = game.info_tokens.checked_sub(1).ok_or(GameError::NoInfoTokens)?;
    let recipient = game.player(to)?;
    if info.len() != recipient.hand_len() {
        return Err(GameError::HintLength {
            player: to,
            got: info.len(),
            expected: recipient.hand_len(),
        });
    }
    let beliefs: Vec<UnknownCard> = recipient.beliefs().iter().cloned().collect();
    let recipient = recipient.with_beliefs(combine(&beliefs, info).into_iter().collect())?;

    let mut next = game.clone();
    next.players[to] = recipient;
    next.info_tokens = info_tokens;
    Ok(next)
}

fn discard_card(game: &Game, player: PlayerId, slot: usize) -> Result<Game, GameError> {
    let (card, seat) = game.player(player)?.without_slot(slot)?;
    let (deck, seat) = draw(&game.deck, seat);

    let mut next = game.clone();
    next.players[player] = seat;
    next.deck = deck;
    next.discard.push_back(card);
    next.info_tokens = refund(game.info_tokens);
    Ok(next)
}

fn play_card(game: &Game, player: PlayerId, slot: usize) -> Result<Game, GameError> {
    let (card, seat) = game.player(player)?.without_slot(slot)?;
    let (deck, seat) = draw(&game.deck, seat);

    let mut next = game.clone();
    next.players[player] = seat;
    next.deck = deck;

    if game.is_playable(&card) {
        let firework = game.firework(card.color).add_card(card)?;
        next.fireworks.insert(card.color, firework);
        if card.number == MAX_NUMBER {
            next.info_tokens = refund(game.info_tokens);
        }
    } else {
        next.fuse_tokens = game.fuse_tokens.checked_sub(1).ok_or(GameError::NoFuseTokens)?;
        next.discard.push_back(card);
    }
    Ok(next)
}

/// Move the front card of `deck` into `seat`, if there is one.
fn draw(deck: &Deck, seat: Player) -> (Deck, Player) {
    match deck.draw() {
        (Some(card), rest) => (rest, seat.with_drawn(card)),
        (None, rest) => (rest, seat),
    }
}

fn refund(info_tokens: u8) -> u8 {
    info_tokens.saturating_add(1).min(MAX_INFO_TOKENS)
}
