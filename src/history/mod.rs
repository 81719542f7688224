//! Undo history.
//!
//! ## Key Types
//!
//! - `HistoryManager`: Stack of state snapshots, newest on top
//!
//! Snapshots are full `GameState` values. Piles are persistent vectors, so
//! saving is cheap and later mutation of the live state is never visible
//! through a stored snapshot.

pub mod manager;

pub use manager::HistoryManager;
