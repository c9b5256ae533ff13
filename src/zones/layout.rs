//! The full table: seven tableau piles, four foundations, waste, and stock.
//!
//! `Layout` is plain data. It never checks move legality; that lives in
//! `rules`. It does own the structural invariants that must hold after
//! every operation, checked by `validate`.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::pile::{Pile, PileId, Zone, FOUNDATION_PILES, TABLEAU_PILES};
use crate::core::card::{Card, Rank, DECK_SIZE, RANKS_PER_SUIT};
use crate::core::error::EngineError;

/// All thirteen piles of a Klondike table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    tableau: [Pile; TABLEAU_PILES],
    foundations: [Pile; FOUNDATION_PILES],
    waste: Pile,
    stock: Pile,
}

impl Layout {
    /// A table with no cards on it.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Get a pile.
    #[must_use]
    pub fn pile(&self, id: PileId) -> &Pile {
        match id.zone() {
            Zone::Tableau => &self.tableau[id.index()],
            Zone::Foundation => &self.foundations[id.index()],
            Zone::Waste => &self.waste,
            Zone::Stock => &self.stock,
        }
    }

    /// Get a mutable pile.
    pub fn pile_mut(&mut self, id: PileId) -> &mut Pile {
        match id.zone() {
            Zone::Tableau => &mut self.tableau[id.index()],
            Zone::Foundation => &mut self.foundations[id.index()],
            Zone::Waste => &mut self.waste,
            Zone::Stock => &mut self.stock,
        }
    }

    /// Iterate every pile with its address.
    pub fn piles(&self) -> impl Iterator<Item = (PileId, &Pile)> + '_ {
        PileId::all().map(move |id| (id, self.pile(id)))
    }

    /// Total number of cards on the table.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.piles().map(|(_, pile)| pile.len()).sum()
    }

    /// Number of cards on the foundations.
    #[must_use]
    pub fn foundation_count(&self) -> usize {
        self.foundations.iter().map(Pile::len).sum()
    }

    /// Every foundation holds a complete suit.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.foundations.iter().all(|pile| pile.len() == RANKS_PER_SUIT)
    }

    /// Move the top `count` cards of `from` onto `to`, keeping their order.
    ///
    /// A tableau source has its new top card turned face-up. Returns true
    /// if that reveal happened. Legality is the caller's concern.
    pub fn transfer(&mut self, from: PileId, to: PileId, count: usize) -> bool {
        let moved = self.pile_mut(from).take_top(count);
        self.pile_mut(to).push_all(moved);

        match from.zone() {
            Zone::Tableau => self.pile_mut(from).reveal_top(),
            _ => false,
        }
    }

    /// Turn up to `count` cards from the stock onto the waste, one at a time.
    ///
    /// Returns the number of cards turned.
    pub fn turn_from_stock(&mut self, count: usize) -> usize {
        let mut turned = 0;
        while turned < count {
            let Some(card) = self.stock.pop() else {
                break;
            };
            self.waste.push(card.up());
            turned += 1;
        }
        turned
    }

    /// Move the whole waste back to the stock, reversed and face-down.
    ///
    /// The first card turned from the old stock becomes the new top.
    pub fn recycle_waste(&mut self) {
        self.stock.fill_reversed(&self.waste, false);
        self.waste.clear();
    }

    /// Put every card missing from the table onto the stock, face-down.
    ///
    /// Used to complete a hand-built arrangement into a full deck.
    pub fn fill_stock_with_remaining(&mut self) {
        let present: FxHashSet<u8> = self
            .piles()
            .flat_map(|(_, pile)| pile.iter().map(|card| card.id()))
            .collect();

        for id in 0..DECK_SIZE as u8 {
            if present.contains(&id) {
                continue;
            }
            if let Some(card) = Card::from_id(id) {
                self.stock.push(card);
            }
        }
    }

    /// Check the structural invariants:
    ///
    /// 1. The table holds exactly the 52 distinct cards.
    /// 2. Tableau piles are a face-down prefix followed by a face-up suffix.
    /// 3. Foundations ascend from Ace by one, in one suit, face-up.
    /// 4. Stock cards are face-down, waste cards face-up.
    pub fn validate(&self) -> Result<(), EngineError> {
        let mut seen = FxHashSet::default();
        for (id, pile) in self.piles() {
            for card in pile.iter() {
                if !seen.insert(card.id()) {
                    return Err(corrupt(format!("duplicate card {card} in {id}")));
                }
            }
        }
        if seen.len() != DECK_SIZE {
            return Err(corrupt(format!(
                "table holds {} distinct cards, expected {DECK_SIZE}",
                seen.len()
            )));
        }

        for (index, pile) in self.tableau.iter().enumerate() {
            let face_down = pile.len() - pile.face_up_len();
            if pile.iter().take(face_down).any(|card| card.face_up) {
                return Err(corrupt(format!(
                    "face-up card buried under face-down cards in {}",
                    PileId::tableau(index)
                )));
            }
        }

        for (index, pile) in self.foundations.iter().enumerate() {
            check_foundation(PileId::foundation(index), pile)?;
        }

        if self.stock.iter().any(|card| card.face_up) {
            return Err(corrupt("face-up card in stock".to_string()));
        }
        if self.waste.iter().any(|card| !card.face_up) {
            return Err(corrupt("face-down card in waste".to_string()));
        }

        Ok(())
    }
}

fn check_foundation(id: PileId, pile: &Pile) -> Result<(), EngineError> {
    let Some(first) = pile.get(0) else {
        return Ok(());
    };
    let mut expected = Some(Rank::ACE);
    for card in pile.iter() {
        if !card.face_up {
            return Err(corrupt(format!("face-down card {card} in {id}")));
        }
        if card.suit != first.suit {
            return Err(corrupt(format!("mixed suits in {id}")));
        }
        if Some(card.rank) != expected {
            return Err(corrupt(format!("{card} out of sequence in {id}")));
        }
        expected = card.rank.next();
    }
    Ok(())
}

fn corrupt(msg: String) -> EngineError {
    EngineError::CorruptState(msg)
}
