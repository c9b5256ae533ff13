//! The engine instance.
//!
//! A `Game` owns one table, its undo history, the post-deal snapshot used
//! by restart, and the session RNG that seeds each new deal. All operations
//! are synchronous and run to completion; a rejected request leaves every
//! field untouched.

use tracing::{debug, instrument};

use crate::core::action::Action;
use crate::core::card::Card;
use crate::core::config::KlondikeConfig;
use crate::core::error::{EngineError, IllegalMove};
use crate::core::rng::GameRng;
use crate::deal::deal_layout;
use crate::history::{History, HistoryEntry};
use crate::rules::{legal_actions, DrawOutcome, MoveValidator};
use crate::zones::{Layout, PileId, Zone};

/// One Klondike session.
///
/// ## Usage
///
/// ```
/// use klondike_engine::{Game, KlondikeConfig, PileId, Zone};
///
/// let mut game = Game::with_seed(KlondikeConfig::default(), 7);
/// game.start();
///
/// assert_eq!(game.pile_size(Zone::Stock, 0), Ok(24));
/// assert_eq!(game.moves_count(), 0);
///
/// game.draw_from_stock();
/// assert_eq!(game.moves_count(), 1);
///
/// game.undo().unwrap();
/// assert_eq!(game.moves_count(), 0);
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    pub(crate) rules: MoveValidator,
    pub(crate) layout: Layout,
    pub(crate) initial: Layout,
    pub(crate) history: History,
    pub(crate) moves: u32,
    pub(crate) recycles: u32,
    pub(crate) rng: GameRng,
    pub(crate) deal_seed: Option<u64>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(KlondikeConfig::default())
    }
}

impl Game {
    /// Create an empty game whose deals are seeded from OS entropy.
    #[must_use]
    pub fn new(config: KlondikeConfig) -> Self {
        Self::with_rng(config, GameRng::from_entropy())
    }

    /// Create an empty game whose sequence of deals is fixed by `seed`.
    #[must_use]
    pub fn with_seed(config: KlondikeConfig, seed: u64) -> Self {
        Self::with_rng(config, GameRng::new(seed))
    }

    fn with_rng(config: KlondikeConfig, rng: GameRng) -> Self {
        Self {
            rules: MoveValidator::new(config),
            layout: Layout::empty(),
            initial: Layout::empty(),
            history: History::new(),
            moves: 0,
            recycles: 0,
            rng,
            deal_seed: None,
        }
    }

    /// Install a hand-built arrangement as the current deal.
    ///
    /// The layout must satisfy every table invariant. Restart returns here.
    pub fn from_layout(config: KlondikeConfig, layout: Layout) -> Result<Self, EngineError> {
        layout.validate()?;
        let mut game = Self::new(config);
        game.install(layout, None);
        Ok(game)
    }

    // === Deal ===

    /// Shuffle and deal a new game.
    ///
    /// The deal seed comes from the session RNG and is reported by `deal_seed`.
    #[instrument(level = "debug", skip(self))]
    pub fn start(&mut self) {
        let seed = self.rng.next_seed();
        self.start_with_seed(seed);
    }

    /// Deal the game identified by `seed`.
    #[instrument(level = "debug", skip(self))]
    pub fn start_with_seed(&mut self, seed: u64) {
        self.install(deal_layout(seed), Some(seed));
        debug!(seed, "dealt new game");
    }

    fn install(&mut self, layout: Layout, seed: Option<u64>) {
        self.initial = layout.clone();
        self.layout = layout;
        self.history.clear();
        self.moves = 0;
        self.recycles = 0;
        self.deal_seed = seed;
    }

    /// Return to the position right after the current deal.
    ///
    /// Unlike `start`, the card arrangement is the same one.
    #[instrument(level = "debug", skip(self))]
    pub fn restart_current(&mut self) {
        self.layout = self.initial.clone();
        self.history.clear();
        self.moves = 0;
        self.recycles = 0;
    }

    // === Mutations ===

    /// Turn cards from the stock, or recycle the waste when the stock is empty.
    #[instrument(level = "debug", skip(self))]
    pub fn draw_from_stock(&mut self) -> DrawOutcome {
        let outcome = self.rules.plan_draw(&self.layout, self.recycles);
        if !outcome.is_mutation() {
            debug!(?outcome, "draw did nothing");
            return outcome;
        }

        let mut entry = HistoryEntry::capture(
            Action::Draw,
            &self.layout,
            [PileId::STOCK, PileId::WASTE],
        );
        match outcome {
            DrawOutcome::Drew { count } => {
                self.layout.turn_from_stock(count);
            }
            DrawOutcome::Recycled => {
                self.layout.recycle_waste();
                self.recycles += 1;
                entry.recycled = true;
            }
            DrawOutcome::Exhausted | DrawOutcome::Empty => {}
        }

        self.history.push(entry);
        self.moves += 1;
        outcome
    }

    /// Move the top `count` cards of `from` onto `to`.
    ///
    /// On success the move counter goes up by one, a history entry is
    /// pushed, and a newly exposed tableau card is turned face-up. On
    /// failure nothing changes.
    #[instrument(level = "debug", skip(self))]
    pub fn move_cards(&mut self, from: PileId, to: PileId, count: usize) -> Result<(), EngineError> {
        if let Err(reason) = self.rules.check_move(&self.layout, from, to, count) {
            debug!(%reason, "move rejected");
            return Err(reason.into());
        }

        let mut entry = HistoryEntry::capture(
            Action::move_cards(from, to, count),
            &self.layout,
            [from, to],
        );
        entry.revealed = self.layout.transfer(from, to, count);

        self.history.push(entry);
        self.moves += 1;
        Ok(())
    }

    /// Move using raw zone/index codes as the presentation layer sends them.
    ///
    /// Returns false for any invalid address or illegal move.
    pub fn move_raw(
        &mut self,
        from_zone: i32,
        from_index: i32,
        to_zone: i32,
        to_index: i32,
        count: i32,
    ) -> bool {
        let (Ok(from), Ok(to), Ok(count)) = (
            PileId::from_raw(from_zone, from_index),
            PileId::from_raw(to_zone, to_index),
            usize::try_from(count),
        ) else {
            debug!(from_zone, from_index, to_zone, to_index, count, "move request out of range");
            return false;
        };
        self.move_cards(from, to, count).is_ok()
    }

    /// Apply an action from `legal_actions` (or any hand-built one).
    pub fn apply(&mut self, action: Action) -> Result<(), EngineError> {
        match action {
            Action::Draw if self.draw_from_stock().is_mutation() => Ok(()),
            Action::Draw => Err(IllegalMove::NothingToDraw.into()),
            Action::Move { from, to, count } => self.move_cards(from, to, count),
        }
    }

    /// Reverse the most recent draw or move.
    #[instrument(level = "debug", skip(self))]
    pub fn undo(&mut self) -> Result<(), EngineError> {
        let Some(entry) = self.history.pop() else {
            debug!("nothing to undo");
            return Err(EngineError::EmptyHistory);
        };

        if entry.recycled {
            self.recycles = self.recycles.saturating_sub(1);
        }
        debug!(action = %entry.action, "undoing");
        entry.restore(&mut self.layout);
        self.moves = self.moves.saturating_sub(1);
        Ok(())
    }

    // === Queries ===

    /// Number of cards in a pile.
    pub fn pile_size(&self, zone: Zone, index: usize) -> Result<usize, EngineError> {
        let id = PileId::new(zone, index)?;
        Ok(self.layout.pile(id).len())
    }

    /// The card at `position` (0 = bottom) of a pile.
    pub fn card_at(&self, zone: Zone, index: usize, position: usize) -> Result<Card, EngineError> {
        let id = PileId::new(zone, index)?;
        let pile = self.layout.pile(id);
        pile.get(position)
            .copied()
            .ok_or(EngineError::PositionOutOfRange {
                pile: id,
                position,
                size: pile.len(),
            })
    }

    /// Completed draws and moves since the last start or restart.
    #[must_use]
    pub fn moves_count(&self) -> u32 {
        self.moves
    }

    /// All four foundations are complete.
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.layout.is_won()
    }

    /// Every action legal right now.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        legal_actions(&self.rules, &self.layout, self.recycles)
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Applied actions since the deal, oldest first.
    pub fn history(&self) -> impl Iterator<Item = Action> + '_ {
        self.history.actions()
    }

    /// How many times the waste has been recycled this deal.
    #[must_use]
    pub fn recycle_count(&self) -> u32 {
        self.recycles
    }

    /// Seed of the current deal; `None` before the first start or for a
    /// hand-built layout.
    #[must_use]
    pub fn deal_seed(&self) -> Option<u64> {
        self.deal_seed
    }

    #[must_use]
    pub fn config(&self) -> &KlondikeConfig {
        self.rules.config()
    }

    /// The current table.
    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// The table as it was right after the deal.
    #[must_use]
    pub fn initial_layout(&self) -> &Layout {
        &self.initial
    }
}
