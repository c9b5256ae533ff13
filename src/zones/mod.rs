//! Pile addressing and the table layout.
//!
//! ## Key Types
//!
//! - `Zone`: Tableau, Foundation, Waste, or Stock
//! - `PileId`: A validated zone + index address
//! - `Pile`: An ordered, cheaply clonable run of cards
//! - `Layout`: All thirteen piles, with invariant validation

pub mod layout;
pub mod pile;

pub use layout::Layout;
pub use pile::{Pile, PileId, Zone, FOUNDATION_PILES, PILE_COUNT, TABLEAU_PILES};
