//! Undo history.
//!
//! Each successful draw or move pushes one `HistoryEntry` holding the
//! pre-action contents of every pile it touched. Piles are persistent
//! vectors, so an entry shares structure with the live table and costs
//! O(1) to record.

pub mod entry;

pub use entry::{History, HistoryEntry};
