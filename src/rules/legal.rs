//! Enumeration of every action legal in a position.

use super::validator::MoveValidator;
use crate::core::action::Action;
use crate::zones::{Layout, PileId, Zone, FOUNDATION_PILES, TABLEAU_PILES};

/// List every action the validator accepts, draw first.
///
/// Tableau sources are tried with every face-up depth; destinations are
/// foundations first, then tableau piles left to right.
#[must_use]
pub fn legal_actions(validator: &MoveValidator, layout: &Layout, recycles_done: u32) -> Vec<Action> {
    let mut actions = Vec::new();

    if validator.plan_draw(layout, recycles_done).is_mutation() {
        actions.push(Action::Draw);
    }

    let destinations: Vec<PileId> = (0..FOUNDATION_PILES)
        .map(PileId::foundation)
        .chain((0..TABLEAU_PILES).map(PileId::tableau))
        .collect();

    for (from, pile) in layout.piles() {
        let max_count = match from.zone() {
            Zone::Tableau => pile.face_up_len(),
            Zone::Foundation | Zone::Waste => pile.len().min(1),
            Zone::Stock => 0,
        };
        for count in 1..=max_count {
            for &to in &destinations {
                if validator.check_move(layout, from, to, count).is_ok() {
                    actions.push(Action::move_cards(from, to, count));
                }
            }
        }
    }

    actions
}
