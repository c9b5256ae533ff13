//! Klondike rules.
//!
//! - `stacking`: What may sit on what (tableau, foundation, runs)
//! - `validator`: Legality of a whole move, and what a draw would do
//! - `legal`: Enumeration of every legal action in a position
//!
//! Rules only read a `Layout`; the game session applies approved actions.

pub mod legal;
pub mod stacking;
pub mod validator;

pub use legal::legal_actions;
pub use stacking::{can_stack_foundation, can_stack_tableau, is_alternating_run};
pub use validator::{DrawOutcome, MoveValidator};
