//! Snapshot stack for undo.

use tracing::trace;

use crate::core::GameState;

/// Stack of prior states, bounded only by memory.
///
/// The engine saves the state immediately before every mutating command,
/// so `undo` always returns the state preceding the last applied command.
///
/// ```
/// use klondike_engine::cards::standard_deck;
/// use klondike_engine::core::GameState;
/// use klondike_engine::history::HistoryManager;
///
/// let state = GameState::deal(standard_deck()).unwrap();
/// let mut history = HistoryManager::new();
///
/// history.save(&state);
/// assert_eq!(history.undo(), Some(state));
/// assert_eq!(history.undo(), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct HistoryManager {
    snapshots: Vec<GameState>,
}

impl HistoryManager {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push an independent copy of `state`.
    pub fn save(&mut self, state: &GameState) {
        self.snapshots.push(state.clone());
        trace!(depth = self.snapshots.len(), "history snapshot saved");
    }

    /// Pop the most recent snapshot.
    ///
    /// Returns `None` when there is nothing to undo. The snapshot is moved
    /// out, so the history keeps no handle on it.
    pub fn undo(&mut self) -> Option<GameState> {
        let snapshot = self.snapshots.pop();
        trace!(depth = self.snapshots.len(), restored = snapshot.is_some(), "history popped");
        snapshot
    }

    /// The snapshot `undo` would return, without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&GameState> {
        self.snapshots.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Drop every snapshot.
    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}
