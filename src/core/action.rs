//! Action representation.
//!
//! Every mutating request against a game is one of two verbs: turn cards
//! from the stock, or move a group of cards between piles. Actions are
//! plain values so they can be enumerated, compared, and stored in history.

use serde::{Deserialize, Serialize};

use crate::zones::PileId;

/// A mutating game action.
///
/// ## Example
///
/// ```
/// use klondike_engine::core::Action;
/// use klondike_engine::zones::PileId;
///
/// let draw = Action::Draw;
/// let play = Action::move_cards(PileId::WASTE, PileId::foundation(0), 1);
///
/// assert!(draw.is_draw());
/// assert_eq!(play.card_count(), 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Turn cards from stock to waste, or recycle the waste.
    Draw,
    /// Move the top `count` cards of `from` onto `to`.
    Move { from: PileId, to: PileId, count: usize },
}

impl Action {
    /// Create a move action.
    #[must_use]
    pub const fn move_cards(from: PileId, to: PileId, count: usize) -> Self {
        Action::Move { from, to, count }
    }

    /// Is this a draw?
    #[must_use]
    pub const fn is_draw(&self) -> bool {
        matches!(self, Action::Draw)
    }

    /// Number of cards carried by a move (0 for a draw).
    #[must_use]
    pub const fn card_count(&self) -> usize {
        match self {
            Action::Draw => 0,
            Action::Move { count, .. } => *count,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Draw => write!(f, "Draw"),
            Action::Move { from, to, count } => write!(f, "Move {count} {from} -> {to}"),
        }
    }
}
