//! Python bindings for the Klondike engine.
//!
//! # Quick Start
//!
//! ```python
//! import klondike_engine as ke
//!
//! engine = ke.SolitaireEngine(draw_count=1)
//! engine.start_seeded(42)
//!
//! print(engine.get_pile_size(3, 0))   # 24 cards in the stock
//! card = engine.get_card_info(0, 0, 0)
//! print(card.suit, card.rank, card.face_up)
//!
//! engine.draw_stock()
//! engine.undo()
//! ```

use pyo3::prelude::*;

mod py_engine;

pub use py_engine::*;

/// klondike_engine: Klondike solitaire rules and state.
#[pymodule]
fn klondike_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PySolitaireEngine>()?;
    m.add_class::<PyCardInfo>()?;
    Ok(())
}
