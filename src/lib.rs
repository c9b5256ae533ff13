//! # klondike-engine
//!
//! A Klondike solitaire engine: cards, piles, move legality, stock cycling,
//! undo and restart, and win detection. Presentation layers drive it through
//! a `Game` value in Rust, an opaque handle over the C ABI, or the optional
//! Python module.
//!
//! ## Design Principles
//!
//! 1. **One owner**: A `Game` owns its table, history and RNG. Instances
//!    share nothing.
//!
//! 2. **Reject, don't mutate**: Every rule violation comes back as an error
//!    value and leaves the game exactly as it was.
//!
//! 3. **Reproducible**: Each deal is fixed by a 64-bit seed, and a session
//!    seed fixes the whole sequence of deals.
//!
//! ## Architecture
//!
//! - **Persistent piles**: Piles are `im` vectors, so undo snapshots and
//!   restart copies share structure with the live table.
//!
//! - **Raw encodings**: Zone, suit and rank codes are fixed integers that
//!   the C ABI and Python bindings pass through unchanged.
//!
//! ## Modules
//!
//! - `core`: Cards, actions, RNG, configuration, errors
//! - `zones`: Piles, pile addressing, the table layout
//! - `deal`: Deck construction, shuffling, the initial deal
//! - `rules`: Stacking rules, move validation, legal action enumeration
//! - `history`: Undo entries
//! - `game`: The `Game` session and snapshot export/import
//! - `ffi`: `extern "C"` entry points

pub mod core;
pub mod zones;
pub mod deal;
pub mod rules;
pub mod history;
pub mod game;
pub mod ffi;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Action, Card, Color, Rank, Suit, DECK_SIZE, RANKS_PER_SUIT,
    KlondikeConfig, EngineError, IllegalMove,
    GameRng, GameRngState,
};

pub use crate::zones::{Layout, Pile, PileId, Zone, FOUNDATION_PILES, PILE_COUNT, TABLEAU_PILES};

pub use crate::deal::{deal_layout, Deck};

pub use crate::rules::{legal_actions, DrawOutcome, MoveValidator};

pub use crate::history::{History, HistoryEntry};

pub use crate::game::{Game, GameSnapshot, SNAPSHOT_VERSION};
