//! Change notification.
//!
//! The view layer registers a `GameObserver` with the engine and receives
//! a fresh `RenderSnapshot` after every command that changed the game.
//! Closures taking `&RenderSnapshot` are observers too.

use super::view::RenderSnapshot;

/// Receives a snapshot after each state change.
pub trait GameObserver {
    fn on_change(&mut self, snapshot: &RenderSnapshot);
}

impl<F> GameObserver for F
where
    F: FnMut(&RenderSnapshot),
{
    fn on_change(&mut self, snapshot: &RenderSnapshot) {
        self(snapshot);
    }
}
