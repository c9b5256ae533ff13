//! Game sessions.
//!
//! - `session`: The `Game` handle and every operation on it
//! - `snapshot`: Whole-session export and import

pub mod session;
pub mod snapshot;

pub use session::Game;
pub use snapshot::{GameSnapshot, SNAPSHOT_MAGIC, SNAPSHOT_VERSION};
