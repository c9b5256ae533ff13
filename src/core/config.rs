//! Rule-variant configuration.
//!
//! `KlondikeConfig` holds the handful of house rules that Klondike players
//! disagree on. The defaults are the classic game: turn one card, recycle
//! the waste without limit, and allow cards back down from a foundation.

use serde::{Deserialize, Serialize};

/// Klondike rule configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KlondikeConfig {
    /// Cards turned from stock to waste per draw (1-3).
    pub draw_count: u8,

    /// Maximum number of waste-to-stock recycles. `None` for unlimited.
    pub max_recycles: Option<u32>,

    /// May the top card of a foundation move back onto the tableau?
    pub allow_foundation_to_tableau: bool,
}

impl Default for KlondikeConfig {
    fn default() -> Self {
        Self {
            draw_count: 1,
            max_recycles: None,
            allow_foundation_to_tableau: true,
        }
    }
}

impl KlondikeConfig {
    /// Create the classic configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of cards turned per draw.
    #[must_use]
    pub fn with_draw_count(mut self, count: u8) -> Self {
        assert!((1..=3).contains(&count), "Draw count must be 1-3");
        self.draw_count = count;
        self
    }

    /// Cap the number of times the waste may be recycled.
    #[must_use]
    pub fn with_max_recycles(mut self, max: u32) -> Self {
        self.max_recycles = Some(max);
        self
    }

    /// Forbid moving cards off a foundation.
    #[must_use]
    pub fn without_foundation_to_tableau(mut self) -> Self {
        self.allow_foundation_to_tableau = false;
        self
    }

    /// Can another recycle happen after `recycles_done`?
    #[must_use]
    pub fn recycle_allowed(&self, recycles_done: u32) -> bool {
        self.max_recycles.map_or(true, |max| recycles_done < max)
    }
}
