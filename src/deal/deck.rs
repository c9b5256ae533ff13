//! Deck construction, shuffling, and the initial Klondike deal.

use crate::core::card::{Card, Rank, Suit};
use crate::core::rng::GameRng;
use crate::zones::{Layout, PileId, TABLEAU_PILES};

/// A deck of cards; the top of the deck is the end of the vec.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The standard 52-card deck, face-down, ordered by suit then rank.
    #[must_use]
    pub fn standard() -> Self {
        let cards = Suit::ALL
            .into_iter()
            .flat_map(|suit| Rank::all().map(move |rank| Card::new(suit, rank)))
            .collect();
        Self { cards }
    }

    /// A standard deck shuffled with the given deal seed.
    #[must_use]
    pub fn shuffled(seed: u64) -> Self {
        let mut deck = Self::standard();
        deck.shuffle(&mut GameRng::new(seed));
        deck
    }

    /// Shuffle in place (unbiased Fisher-Yates).
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Deal into the opening Klondike layout.
    ///
    /// Tableau pile `i` receives `i + 1` cards with only the last turned
    /// up; the remaining 24 cards form the face-down stock. Cards come off
    /// the top of the deck in order.
    #[must_use]
    pub fn deal(mut self) -> Layout {
        let mut layout = Layout::empty();

        for pile_index in 0..TABLEAU_PILES {
            let pile = layout.pile_mut(PileId::tableau(pile_index));
            for depth in 0..=pile_index {
                let Some(card) = self.cards.pop() else {
                    return layout;
                };
                if depth == pile_index {
                    pile.push(card.up());
                } else {
                    pile.push(card.down());
                }
            }
        }

        let stock = layout.pile_mut(PileId::STOCK);
        while let Some(card) = self.cards.pop() {
            stock.push(card.down());
        }

        layout
    }
}

/// Deal a fresh layout for the given seed.
#[must_use]
pub fn deal_layout(seed: u64) -> Layout {
    Deck::shuffled(seed).deal()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::DECK_SIZE;

    #[test]
    fn test_standard_deck() {
        let deck = Deck::standard();
        assert_eq!(deck.len(), DECK_SIZE);
        assert!(deck.cards().iter().all(|card| !card.face_up));

        let mut ids: Vec<_> = deck.cards().iter().map(|card| card.id()).collect();
        ids.dedup();
        assert_eq!(ids.len(), DECK_SIZE);
    }

    #[test]
    fn test_shuffle_is_seeded() {
        assert_eq!(Deck::shuffled(9), Deck::shuffled(9));
        assert_ne!(Deck::shuffled(9), Deck::shuffled(10));
        assert_ne!(Deck::shuffled(9), Deck::standard());
    }

    #[test]
    fn test_deal_shape() {
        let layout = deal_layout(42);

        for index in 0..TABLEAU_PILES {
            let pile = layout.pile(PileId::tableau(index));
            assert_eq!(pile.len(), index + 1);
            assert_eq!(pile.face_up_len(), 1);
            assert!(pile.top().unwrap().face_up);
        }

        assert_eq!(layout.pile(PileId::STOCK).len(), 24);
        assert!(layout.pile(PileId::WASTE).is_empty());
        for index in 0..4 {
            assert!(layout.pile(PileId::foundation(index)).is_empty());
        }
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn test_deal_takes_from_top() {
        let deck = Deck::shuffled(3);
        let top = *deck.cards().last().unwrap();
        let bottom = deck.cards()[0];

        let layout = deck.deal();

        // First card off the deck lands alone on tableau 0
        assert_eq!(*layout.pile(PileId::tableau(0)).top().unwrap(), top.up());
        // Last card off the deck is the stock's top card
        assert_eq!(*layout.pile(PileId::STOCK).top().unwrap(), bottom);
    }
}
