//! Engine bindings for Python.

use pyo3::prelude::*;

use crate::core::{Card, KlondikeConfig};
use crate::game::Game;
use crate::zones::{PileId, Zone};

/// One card as Python sees it.
#[pyclass(name = "CardInfo")]
#[derive(Clone, Debug)]
pub struct PyCardInfo(pub Card);

#[pymethods]
impl PyCardInfo {
    /// Suit code: 0 Hearts, 1 Diamonds, 2 Clubs, 3 Spades.
    #[getter]
    fn suit(&self) -> i32 {
        self.0.suit.raw()
    }

    /// Rank 1 (Ace) through 13 (King).
    #[getter]
    fn rank(&self) -> u8 {
        self.0.rank.value()
    }

    #[getter]
    fn face_up(&self) -> bool {
        self.0.face_up
    }

    fn __repr__(&self) -> String {
        format!("CardInfo({})", self.0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// A Klondike game handle.
#[pyclass(name = "SolitaireEngine")]
#[derive(Clone, Debug)]
pub struct PySolitaireEngine {
    game: Game,
}

#[pymethods]
impl PySolitaireEngine {
    /// Create an engine with no cards dealt.
    ///
    /// # Arguments
    /// - draw_count: Cards turned per draw (1-3)
    /// - max_recycles: Waste recycle limit, None for unlimited
    /// - allow_foundation_to_tableau: May foundation cards come back down
    /// - seed: Session seed for reproducible deals, None for OS entropy
    #[new]
    #[pyo3(signature = (
        draw_count = 1,
        max_recycles = None,
        allow_foundation_to_tableau = true,
        seed = None
    ))]
    fn new(
        draw_count: u8,
        max_recycles: Option<u32>,
        allow_foundation_to_tableau: bool,
        seed: Option<u64>,
    ) -> PyResult<Self> {
        if !(1..=3).contains(&draw_count) {
            return Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
                "draw_count must be 1-3, got {draw_count}"
            )));
        }
        let config = KlondikeConfig {
            draw_count,
            max_recycles,
            allow_foundation_to_tableau,
        };
        let game = match seed {
            Some(seed) => Game::with_seed(config, seed),
            None => Game::new(config),
        };
        Ok(Self { game })
    }

    /// Shuffle and deal a new game.
    fn start_game(&mut self) {
        self.game.start();
    }

    /// Deal the game identified by `seed`.
    fn start_seeded(&mut self, seed: u64) {
        self.game.start_with_seed(seed);
    }

    /// Turn from the stock, or recycle the waste. Returns whether anything changed.
    fn draw_stock(&mut self) -> bool {
        self.game.draw_from_stock().is_mutation()
    }

    /// Move `count` cards between piles. Returns whether the move happened.
    #[pyo3(name = "move")]
    fn move_cards(
        &mut self,
        from_zone: i32,
        from_index: i32,
        to_zone: i32,
        to_index: i32,
        count: i32,
    ) -> bool {
        self.game
            .move_raw(from_zone, from_index, to_zone, to_index, count)
    }

    /// Cards in a pile, or -1 for a bad address.
    fn get_pile_size(&self, zone: i32, index: i32) -> i64 {
        PileId::from_raw(zone, index)
            .map_or(-1, |id| self.game.layout().pile(id).len() as i64)
    }

    /// The card at `position` (0 = bottom), or None.
    fn get_card_info(&self, zone: i32, index: i32, position: usize) -> Option<PyCardInfo> {
        let zone = Zone::from_raw(zone)?;
        let index = usize::try_from(index).ok()?;
        self.game.card_at(zone, index, position).ok().map(PyCardInfo)
    }

    fn get_moves_count(&self) -> u32 {
        self.game.moves_count()
    }

    fn is_win(&self) -> bool {
        self.game.is_win()
    }

    /// Undo the last draw or move. Returns false when there is nothing to undo.
    fn undo(&mut self) -> bool {
        self.game.undo().is_ok()
    }

    /// Reset to the current deal.
    fn restart_current(&mut self) {
        self.game.restart_current();
    }

    /// Number of legal actions in the current position.
    fn legal_move_count(&self) -> usize {
        self.game.legal_actions().len()
    }

    /// Seed of the current deal, if it came from a seed.
    #[getter]
    fn deal_seed(&self) -> Option<u64> {
        self.game.deal_seed()
    }

    fn __repr__(&self) -> String {
        format!(
            "SolitaireEngine(moves={}, win={})",
            self.game.moves_count(),
            self.game.is_win()
        )
    }
}
