//! Per-card heuristic scores.
//!
//! All scores look at a concrete hand. During simulation that hand is a
//! guess, so a "legal" play here is only legal in that hypothetical world.

use rustc_hash::FxHashSet;

use crate::core::{Color, Game, Information, KnownCard, PlayerId, UnknownCard, MAX_NUMBER};

/// Weight of a positive number or colour fact.
pub const POSITIVE_WEIGHT: f64 = 0.5;

/// Weight of a negative fact.
pub const NEGATIVE_WEIGHT: f64 = 0.1;

/// Playing this card would cost a fuse.
pub const PLAY_ILLEGAL: u8 = 0;
/// Playing this card extends a firework.
pub const PLAY_LEGAL: u8 = 1;
/// Playing this card completes a firework.
pub const PLAY_COMPLETES: u8 = 2;

/// Losing this card loses the last copy of a card still needed.
pub const DISCARD_CRITICAL: u8 = 0;
/// Another copy of this card is still around.
pub const DISCARD_REPLACEABLE: u8 = 1;
/// This card can never be played again.
pub const DISCARD_SAFE: u8 = 2;

/// How much the owner knows about a slot, in `[0, 1]`.
///
/// A fully hinted card (number and colour) reaches 1.0. This is a confidence
/// proxy, not a probability.
#[must_use]
pub fn certainty(belief: &UnknownCard) -> f64 {
    let total: f64 = belief
        .atoms()
        .map(|atom| match atom {
            Information::PositiveNumber(_) | Information::PositiveColor(_) => POSITIVE_WEIGHT,
            Information::NegativeNumber(_) | Information::NegativeColor(_) => NEGATIVE_WEIGHT,
        })
        .sum();
    total.min(1.0)
}

/// Play score per slot: illegal, legal, or legal and completing a colour.
#[must_use]
pub fn play_scores(hand: &[KnownCard], game: &Game) -> Vec<u8> {
    hand.iter()
        .map(|card| {
            if !game.is_playable(card) {
                PLAY_ILLEGAL
            } else if card.number == MAX_NUMBER {
                PLAY_COMPLETES
            } else {
                PLAY_LEGAL
            }
        })
        .collect()
}

/// Discard score per slot of the current player's `hand`.
///
/// A card is safe once its colour's firework has reached its number. It is
/// critical when it is not safe and no card of the same face remains in the
/// deck or in another player's hand. The holder's own other slots are not
/// counted as remaining copies.
#[must_use]
pub fn discard_scores(hand: &[KnownCard], game: &Game) -> Vec<u8> {
    let live = live_faces(game, game.turn());
    hand.iter()
        .map(|card| {
            if card.number <= game.firework(card.color).top() {
                DISCARD_SAFE
            } else if !live.contains(&card.face()) {
                DISCARD_CRITICAL
            } else {
                DISCARD_REPLACEABLE
            }
        })
        .collect()
}

/// Faces present in the deck and in every hand except `holder`'s.
#[must_use]
pub fn live_faces(game: &Game, holder: PlayerId) -> FxHashSet<(u8, Color)> {
    let others = game
        .players()
        .filter(|p| p.id() != holder)
        .flat_map(|p| p.hand().iter());
    game.deck().iter().chain(others).map(KnownCard::face).collect()
}
