//! Read-only projection handed to the view layer.
//!
//! A `RenderSnapshot` is self-contained: the view re-renders from it alone
//! and never touches `GameState`. Stock contents stay hidden (only the
//! count is exposed) and only the top few waste cards are included.
//!
//! `just_revealed` exists only here. The engine marks the cards turned
//! face-up by the command that produced the snapshot; the flag is gone by
//! the next command.

use serde::{Deserialize, Serialize};

use crate::core::{Card, CardId, Color, GameState, Rank, Suit, FOUNDATIONS};
use crate::scoring::ScoreDisplay;

use super::game::GamePhase;

/// One card as the view sees it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub id: CardId,
    pub rank: Rank,
    pub suit: Suit,
    pub color: Color,
    pub face_up: bool,
    pub just_revealed: bool,
}

impl CardView {
    #[must_use]
    pub fn new(card: &Card, just_revealed: bool) -> Self {
        Self {
            id: card.id(),
            rank: card.rank,
            suit: card.suit,
            color: card.color(),
            face_up: card.face_up,
            just_revealed,
        }
    }
}

/// Everything the view needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    /// Seven columns, bottom card first.
    pub tableau: Vec<Vec<CardView>>,
    pub stock_len: usize,
    /// The last few waste cards, top card last.
    pub waste: Vec<CardView>,
    pub waste_len: usize,
    /// Top card of each foundation in `Suit::ALL` order.
    pub foundations: [Option<CardView>; FOUNDATIONS],
    pub display: ScoreDisplay,
    pub phase: GamePhase,
    pub can_undo: bool,
    pub busy: bool,
}

/// Engine status that is not part of `GameState`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct EngineStatus<'a> {
    pub revealed: &'a [CardId],
    pub phase: GamePhase,
    pub can_undo: bool,
    pub busy: bool,
    pub waste_display_count: usize,
}

impl RenderSnapshot {
    pub(crate) fn build(state: &GameState, display: ScoreDisplay, status: EngineStatus<'_>) -> Self {
        let view = |card: &Card| CardView::new(card, status.revealed.contains(&card.id()));

        let tableau: Vec<Vec<CardView>> = state
            .tableau_columns()
            .iter()
            .map(|column| column.iter().map(view).collect())
            .collect();

        let waste = state.waste();
        let shown = status.waste_display_count.min(waste.len());
        let waste_view: Vec<CardView> = waste.iter().skip(waste.len() - shown).map(view).collect();

        let foundations = Suit::ALL.map(|suit| state.foundation_top(suit).map(view));

        Self {
            tableau,
            stock_len: state.stock().len(),
            waste: waste_view,
            waste_len: waste.len(),
            foundations,
            display,
            phase: status.phase,
            can_undo: status.can_undo,
            busy: status.busy,
        }
    }

    /// Cards flagged as just revealed, in pile order.
    pub fn revealed_cards(&self) -> impl Iterator<Item = &CardView> {
        self.tableau
            .iter()
            .flatten()
            .chain(self.waste.iter())
            .filter(|card| card.just_revealed)
    }
}
