//! Actions a player can take on their turn.
//!
//! Every action names the acting player. A hint carries the fully expanded
//! per-slot information vector, so applying it never needs to look at the
//! recipient's hand again.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::info::Information;
use super::player::PlayerId;

/// A complete game action.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// `from` tells `to` one fact, expanded to one atom per slot of `to`'s hand.
    GiveInformation {
        from: PlayerId,
        to: PlayerId,
        info: SmallVec<[Information; 5]>,
    },
    /// Throw away the card at `slot` to regain an info token.
    DiscardCard { player: PlayerId, slot: usize },
    /// Try to extend a firework with the card at `slot`.
    PlayCard { player: PlayerId, slot: usize },
}

/// The three kinds of turn, without payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Hint,
    Discard,
    Play,
}

impl Action {
    /// The player taking this action.
    #[must_use]
    pub fn actor(&self) -> PlayerId {
        match self {
            Action::GiveInformation { from, .. } => *from,
            Action::DiscardCard { player, .. } | Action::PlayCard { player, .. } => *player,
        }
    }

    #[must_use]
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::GiveInformation { .. } => ActionKind::Hint,
            Action::DiscardCard { .. } => ActionKind::Discard,
            Action::PlayCard { .. } => ActionKind::Play,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::GiveInformation { from, to, info } => {
                write!(f, "{from} hints {to} [")?;
                for (i, atom) in info.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{atom}")?;
                }
                f.write_str("]")
            }
            Action::DiscardCard { player, slot } => write!(f, "{player} discards slot {slot}"),
            Action::PlayCard { player, slot } => write!(f, "{player} plays slot {slot}"),
        }
    }
}
