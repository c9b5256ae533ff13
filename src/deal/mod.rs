//! Deck and deal: one reproducible random arrangement of the 52 cards.

pub mod deck;

pub use deck::{deal_layout, Deck};
