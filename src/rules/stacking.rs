//! Stacking predicates shared by the validator and move enumeration.

use crate::core::card::{Card, Rank};

/// Can `card` go on a tableau pile whose top is `top`?
///
/// An empty pile takes only a King. Otherwise the top must be face-up,
/// one rank higher, and the opposite color.
#[must_use]
pub fn can_stack_tableau(top: Option<&Card>, card: Card) -> bool {
    match top {
        None => card.rank == Rank::KING,
        Some(top_card) => {
            top_card.face_up
                && top_card.color() != card.color()
                && top_card.rank.is_one_above(card.rank)
        }
    }
}

/// Can `card` go on a foundation whose top is `top`?
///
/// An empty foundation takes only an Ace; otherwise same suit, one rank up.
#[must_use]
pub fn can_stack_foundation(top: Option<&Card>, card: Card) -> bool {
    match top {
        None => card.rank == Rank::ACE,
        Some(top_card) => top_card.suit == card.suit && card.rank.is_one_above(top_card.rank),
    }
}

/// Are these cards (bottom to top) a face-up, descending, alternating-color run?
pub fn is_alternating_run<'a>(cards: impl IntoIterator<Item = &'a Card>) -> bool {
    let mut below: Option<&Card> = None;
    for card in cards {
        if !card.face_up {
            return false;
        }
        if let Some(lower) = below {
            if lower.color() == card.color() || !lower.rank.is_one_above(card.rank) {
                return false;
            }
        }
        below = Some(card);
    }
    true
}
