//! Core engine types: cards, RNG, configuration, actions, errors.
//!
//! These are the value types every other module builds on. None of them
//! know about pile layout or move rules.

pub mod action;
pub mod card;
pub mod config;
pub mod error;
pub mod rng;

pub use action::Action;
pub use card::{Card, Color, Rank, Suit, DECK_SIZE, RANKS_PER_SUIT};
pub use config::KlondikeConfig;
pub use error::{EngineError, IllegalMove};
pub use rng::{GameRng, GameRngState};
