//! Move legality.
//!
//! `MoveValidator` answers two questions about a `Layout` without touching
//! it: is a proposed transfer legal, and what would a draw do right now.
//! The session applies whatever the validator approves.

use serde::{Deserialize, Serialize};

use super::stacking::{can_stack_foundation, can_stack_tableau, is_alternating_run};
use crate::core::config::KlondikeConfig;
use crate::core::error::IllegalMove;
use crate::zones::{Layout, PileId, Zone};

/// What a draw from the stock does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawOutcome {
    /// Turned `count` cards from stock to waste.
    Drew { count: usize },
    /// Stock was empty; the waste went back to the stock.
    Recycled,
    /// Stock is empty and the recycle limit is spent.
    Exhausted,
    /// Stock and waste are both empty.
    Empty,
}

impl DrawOutcome {
    /// Did the draw change the table?
    #[must_use]
    pub const fn is_mutation(self) -> bool {
        matches!(self, DrawOutcome::Drew { .. } | DrawOutcome::Recycled)
    }
}

/// Klondike move rules under a given configuration.
#[derive(Clone, Debug, Default)]
pub struct MoveValidator {
    config: KlondikeConfig,
}

impl MoveValidator {
    /// Draw counts outside 1-3 are clamped into range.
    #[must_use]
    pub fn new(mut config: KlondikeConfig) -> Self {
        config.draw_count = config.draw_count.clamp(1, 3);
        Self { config }
    }

    /// The rule configuration.
    #[must_use]
    pub fn config(&self) -> &KlondikeConfig {
        &self.config
    }

    /// Check moving the top `count` cards of `from` onto `to`.
    pub fn check_move(
        &self,
        layout: &Layout,
        from: PileId,
        to: PileId,
        count: usize,
    ) -> Result<(), IllegalMove> {
        if count == 0 {
            return Err(IllegalMove::ZeroCount);
        }
        if from == to {
            return Err(IllegalMove::SamePile);
        }

        match from.zone() {
            Zone::Stock => return Err(IllegalMove::SourceNotMovable(Zone::Stock)),
            Zone::Foundation if !self.config.allow_foundation_to_tableau => {
                return Err(IllegalMove::FoundationRetreatDisabled)
            }
            _ => {}
        }

        match (from.zone(), to.zone()) {
            (_, Zone::Waste | Zone::Stock) => {
                return Err(IllegalMove::DestinationNotAccepting(to.zone()))
            }
            (Zone::Foundation, Zone::Foundation) => {
                return Err(IllegalMove::DestinationNotAccepting(Zone::Foundation))
            }
            _ => {}
        }

        let single_card_only = matches!(from.zone(), Zone::Waste | Zone::Foundation)
            || to.zone() == Zone::Foundation;
        if single_card_only && count != 1 {
            return Err(IllegalMove::SingleCardOnly);
        }

        let source = layout.pile(from);
        if source.len() < count {
            return Err(IllegalMove::NotEnoughCards {
                requested: count,
                available: source.len(),
            });
        }

        let start = source.len() - count;
        let Some(&base) = source.get(start) else {
            return Err(IllegalMove::NotEnoughCards {
                requested: count,
                available: source.len(),
            });
        };
        if source.iter().skip(start).any(|card| !card.face_up) {
            return Err(IllegalMove::FaceDownCard);
        }
        if !is_alternating_run(source.iter().skip(start)) {
            return Err(IllegalMove::BrokenRun);
        }

        let destination = layout.pile(to);
        match to.zone() {
            Zone::Foundation => {
                if !can_stack_foundation(destination.top(), base) {
                    return Err(IllegalMove::DoesNotStack);
                }
            }
            _ => {
                if destination.is_empty() && !can_stack_tableau(None, base) {
                    return Err(IllegalMove::NeedsKing);
                }
                if !can_stack_tableau(destination.top(), base) {
                    return Err(IllegalMove::DoesNotStack);
                }
            }
        }

        Ok(())
    }

    /// What a draw would do, given how many recycles already happened.
    #[must_use]
    pub fn plan_draw(&self, layout: &Layout, recycles_done: u32) -> DrawOutcome {
        let stock = layout.pile(PileId::STOCK);
        if !stock.is_empty() {
            let count = usize::from(self.config.draw_count).min(stock.len());
            return DrawOutcome::Drew { count };
        }
        if layout.pile(PileId::WASTE).is_empty() {
            return DrawOutcome::Empty;
        }
        if !self.config.recycle_allowed(recycles_done) {
            return DrawOutcome::Exhausted;
        }
        DrawOutcome::Recycled
    }
}
