//! Playing cards.
//!
//! A `Card` is a (suit, rank) pair plus a `face_up` flag. The flag is pile
//! state, not identity: two cards are the *same card* when `id()` matches,
//! regardless of orientation.
//!
//! ## Encodings
//!
//! The numeric codes are shared with the presentation layer and must not
//! change:
//! - Suit: 0 = Hearts, 1 = Diamonds, 2 = Clubs, 3 = Spades
//! - Rank: 1 = Ace .. 13 = King

use serde::{Deserialize, Serialize};

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// Number of ranks per suit.
pub const RANKS_PER_SUIT: usize = 13;

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Suit {
    Hearts = 0,
    Diamonds = 1,
    Clubs = 2,
    Spades = 3,
}

impl Suit {
    /// All suits in encoding order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Decode a raw suit code.
    #[must_use]
    pub const fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(Suit::Hearts),
            1 => Some(Suit::Diamonds),
            2 => Some(Suit::Clubs),
            3 => Some(Suit::Spades),
            _ => None,
        }
    }

    /// Get the raw suit code.
    #[must_use]
    pub const fn raw(self) -> i32 {
        self as i32
    }

    /// Hearts and Diamonds are red, Clubs and Spades are black.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }

    /// Single-letter label.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
        }
    }
}

/// Card color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

/// Card rank, 1 (Ace) through 13 (King).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(u8);

impl TryFrom<u8> for Rank {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::new(value).ok_or_else(|| format!("rank {value} outside 1..=13"))
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> u8 {
        rank.0
    }
}

impl Rank {
    pub const ACE: Rank = Rank(1);
    pub const JACK: Rank = Rank(11);
    pub const QUEEN: Rank = Rank(12);
    pub const KING: Rank = Rank(13);

    /// Create a rank, returning `None` outside 1..=13.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= 1 && value <= 13 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Decode a raw rank code.
    #[must_use]
    pub fn from_raw(raw: i32) -> Option<Self> {
        u8::try_from(raw).ok().and_then(Self::new)
    }

    /// Get the numeric value (1..=13).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Iterate Ace through King.
    pub fn all() -> impl Iterator<Item = Rank> {
        (1..=13).map(Rank)
    }

    /// The next rank up, or `None` for King.
    #[must_use]
    pub const fn next(self) -> Option<Rank> {
        Rank::new(self.0 + 1)
    }

    /// Is `self` exactly one rank above `other`?
    #[must_use]
    pub const fn is_one_above(self, other: Rank) -> bool {
        self.0 == other.0 + 1
    }

    /// Short label ("A", "2", .., "10", "J", "Q", "K").
    #[must_use]
    pub fn label(self) -> &'static str {
        const LABELS: [&str; 13] = ["A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K"];
        LABELS[usize::from(self.0 - 1)]
    }
}

/// A playing card with its orientation in the pile that holds it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    pub face_up: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            face_up: false,
        }
    }

    /// Copy of this card turned face-up.
    #[must_use]
    pub const fn up(mut self) -> Self {
        self.face_up = true;
        self
    }

    /// Copy of this card turned face-down.
    #[must_use]
    pub const fn down(mut self) -> Self {
        self.face_up = false;
        self
    }

    #[must_use]
    pub const fn color(self) -> Color {
        self.suit.color()
    }

    /// Identity in 0..52, independent of orientation.
    #[must_use]
    pub const fn id(self) -> u8 {
        (self.suit as u8) * RANKS_PER_SUIT as u8 + (self.rank.0 - 1)
    }

    /// Rebuild a face-down card from its identity.
    #[must_use]
    pub fn from_id(id: u8) -> Option<Self> {
        if usize::from(id) >= DECK_SIZE {
            return None;
        }
        let suit = Suit::ALL[usize::from(id) / RANKS_PER_SUIT];
        let rank = Rank(id % RANKS_PER_SUIT as u8 + 1);
        Some(Self::new(suit, rank))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let side = if self.face_up { "(O)" } else { "(X)" };
        write!(f, "{}{}{}", self.rank.label(), self.suit.letter(), side)
    }
}
