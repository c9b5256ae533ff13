//! Pile addressing and storage.
//!
//! A pile is named by a `PileId`: a `Zone` plus an index inside that zone.
//! Piles store cards bottom-to-top in an `im::Vector`, so copying a pile
//! for undo history is O(1) and shares structure with the live pile.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::card::Card;
use crate::core::error::EngineError;

/// Number of tableau piles.
pub const TABLEAU_PILES: usize = 7;

/// Number of foundation piles.
pub const FOUNDATION_PILES: usize = 4;

/// Total number of piles on the table.
pub const PILE_COUNT: usize = TABLEAU_PILES + FOUNDATION_PILES + 2;

/// Pile category.
///
/// The raw codes are shared with the presentation layer:
/// Tableau = 0, Foundation = 1, Waste = 2, Stock = 3.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Zone {
    Tableau = 0,
    Foundation = 1,
    Waste = 2,
    Stock = 3,
}

impl Zone {
    /// Decode a raw zone code.
    #[must_use]
    pub const fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(Zone::Tableau),
            1 => Some(Zone::Foundation),
            2 => Some(Zone::Waste),
            3 => Some(Zone::Stock),
            _ => None,
        }
    }

    /// Get the raw zone code.
    #[must_use]
    pub const fn raw(self) -> i32 {
        self as i32
    }

    /// Number of piles in this zone.
    #[must_use]
    pub const fn pile_count(self) -> usize {
        match self {
            Zone::Tableau => TABLEAU_PILES,
            Zone::Foundation => FOUNDATION_PILES,
            Zone::Waste | Zone::Stock => 1,
        }
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Zone::Tableau => "Tableau",
            Zone::Foundation => "Foundation",
            Zone::Waste => "Waste",
            Zone::Stock => "Stock",
        };
        f.write_str(name)
    }
}

/// Validated pile address.
///
/// The index is always within the zone's range, so lookups through a
/// `PileId` cannot fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPileId")]
pub struct PileId {
    zone: Zone,
    index: u8,
}

#[derive(Deserialize)]
struct RawPileId {
    zone: Zone,
    index: u8,
}

impl TryFrom<RawPileId> for PileId {
    type Error = EngineError;

    fn try_from(raw: RawPileId) -> Result<Self, Self::Error> {
        PileId::new(raw.zone, usize::from(raw.index))
    }
}

impl PileId {
    /// The waste pile.
    pub const WASTE: PileId = PileId {
        zone: Zone::Waste,
        index: 0,
    };

    /// The stock pile.
    pub const STOCK: PileId = PileId {
        zone: Zone::Stock,
        index: 0,
    };

    /// Address a pile, checking the index against the zone's range.
    pub fn new(zone: Zone, index: usize) -> Result<Self, EngineError> {
        if index >= zone.pile_count() {
            return Err(EngineError::InvalidIndex {
                zone,
                index: index as i64,
            });
        }
        Ok(Self {
            zone,
            index: index as u8,
        })
    }

    /// Address a pile from raw codes as received over the C ABI.
    pub fn from_raw(zone: i32, index: i32) -> Result<Self, EngineError> {
        let zone = Zone::from_raw(zone).ok_or(EngineError::InvalidZone { zone })?;
        let index = usize::try_from(index).map_err(|_| EngineError::InvalidIndex {
            zone,
            index: i64::from(index),
        })?;
        Self::new(zone, index)
    }

    /// Tableau pile `index`.
    ///
    /// Panics if `index >= 7`.
    #[must_use]
    pub const fn tableau(index: usize) -> Self {
        assert!(index < TABLEAU_PILES, "Tableau index out of range");
        Self {
            zone: Zone::Tableau,
            index: index as u8,
        }
    }

    /// Foundation pile `index`.
    ///
    /// Panics if `index >= 4`.
    #[must_use]
    pub const fn foundation(index: usize) -> Self {
        assert!(index < FOUNDATION_PILES, "Foundation index out of range");
        Self {
            zone: Zone::Foundation,
            index: index as u8,
        }
    }

    #[must_use]
    pub const fn zone(self) -> Zone {
        self.zone
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.index as usize
    }

    /// Every pile on the table: tableau, foundations, waste, stock.
    pub fn all() -> impl Iterator<Item = PileId> {
        (0..TABLEAU_PILES)
            .map(PileId::tableau)
            .chain((0..FOUNDATION_PILES).map(PileId::foundation))
            .chain([PileId::WASTE, PileId::STOCK])
    }
}

impl std::fmt::Display for PileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.zone {
            Zone::Waste | Zone::Stock => write!(f, "{}", self.zone),
            Zone::Tableau | Zone::Foundation => write!(f, "{}[{}]", self.zone, self.index),
        }
    }
}

/// An ordered pile of cards, index 0 at the bottom.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    cards: Vector<Card>,
}

impl Pile {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The top card, if any.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.back()
    }

    /// The card at `position` (0 = bottom).
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Card> {
        self.cards.get(position)
    }

    /// Iterate bottom to top.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Card> + '_ {
        self.cards.iter()
    }

    /// Put a card on top.
    pub fn push(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Put a group of cards on top, keeping their order.
    pub fn push_all(&mut self, cards: Vector<Card>) {
        self.cards.append(cards);
    }

    /// Remove the top card.
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop_back()
    }

    /// Remove the top `count` cards, bottom-most first.
    ///
    /// Callers check `count <= len()` first; a larger count takes the whole pile.
    pub fn take_top(&mut self, count: usize) -> Vector<Card> {
        let at = self.cards.len().saturating_sub(count);
        self.cards.split_off(at)
    }

    /// Turn the top card face-up if it is face-down.
    ///
    /// Returns true if a card was turned.
    pub fn reveal_top(&mut self) -> bool {
        match self.cards.back_mut() {
            Some(card) if !card.face_up => {
                card.face_up = true;
                true
            }
            _ => false,
        }
    }

    /// Number of face-up cards counted down from the top.
    #[must_use]
    pub fn face_up_len(&self) -> usize {
        self.cards.iter().rev().take_while(|card| card.face_up).count()
    }

    /// Replace the contents with the reverse of `source`, every card turned
    /// to `face_up`.
    pub fn fill_reversed(&mut self, source: &Pile, face_up: bool) {
        self.cards = source
            .cards
            .iter()
            .rev()
            .map(|card| Card { face_up, ..*card })
            .collect();
    }

    /// Empty the pile.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl FromIterator<Card> for Pile {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
