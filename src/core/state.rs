//! Canonical game state.
//!
//! ## GameState
//!
//! The single owned aggregate the engine mutates:
//! - Stock (face-down, top = end)
//! - Waste (face-up, top = end)
//! - Four foundations, one per suit in `Suit::ALL` order
//! - Seven tableau columns
//! - Raw score, recycle count, elapsed seconds
//!
//! Piles use `im` persistent vectors, so cloning a state for the undo
//! history is O(1) and later mutation of either copy never shows through
//! the other.
//!
//! ## Invariant
//!
//! The union of all piles holds each of the 52 cards exactly once, and
//! each foundation is a face-up build of its own suit from the Ace up.
//! `check_integrity` verifies both; constructors refuse states that break
//! them.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::card::{Card, CardId, Suit, DECK_SIZE};
use super::error::EngineError;
use super::location::{FOUNDATIONS, TABLEAU_COLUMNS};

/// Number of cards left in the stock after the deal.
pub const STOCK_AFTER_DEAL: usize = DECK_SIZE - 28;

/// Where a card currently sits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardLocation {
    Stock { index: usize },
    Waste { index: usize },
    Foundation { suit: Suit, index: usize },
    Tableau { column: usize, index: usize },
}

/// Full Klondike game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    stock: Vector<Card>,
    waste: Vector<Card>,
    foundations: [Vector<Card>; FOUNDATIONS],
    tableau: [Vector<Card>; TABLEAU_COLUMNS],

    pub(crate) score: u32,
    pub(crate) recycle_count: u32,
    pub(crate) elapsed_seconds: u32,
}

impl GameState {
    /// Deal a 52-card deck.
    ///
    /// Column *i* receives *i + 1* cards, only the last face-up. The
    /// remaining 24 cards become the face-down stock, with the last card of
    /// `deck` on top. Counters start at zero.
    pub fn deal(deck: Vec<Card>) -> Result<Self, EngineError> {
        if deck.len() != DECK_SIZE {
            return Err(EngineError::WrongCardCount { found: deck.len() });
        }

        let mut tableau: [Vector<Card>; TABLEAU_COLUMNS] = Default::default();
        let mut cards = deck.into_iter();

        for (col, column) in tableau.iter_mut().enumerate() {
            for row in 0..=col {
                let Some(card) = cards.next() else {
                    return Err(EngineError::WrongCardCount { found: row });
                };
                column.push_back(Card {
                    face_up: row == col,
                    ..card
                });
            }
        }

        let stock: Vector<Card> = cards.map(Card::turned_down).collect();

        let state = Self {
            stock,
            waste: Vector::new(),
            foundations: Default::default(),
            tableau,
            score: 0,
            recycle_count: 0,
            elapsed_seconds: 0,
        };
        state.check_integrity()?;
        Ok(state)
    }

    /// Build a state from explicit piles.
    ///
    /// Foundations are given in `Suit::ALL` order. Card orientation is
    /// taken as given. Fails if the piles do not hold exactly one of each
    /// card.
    pub fn from_piles(
        stock: Vec<Card>,
        waste: Vec<Card>,
        foundations: [Vec<Card>; FOUNDATIONS],
        tableau: [Vec<Card>; TABLEAU_COLUMNS],
    ) -> Result<Self, EngineError> {
        let state = Self {
            stock: stock.into_iter().collect(),
            waste: waste.into_iter().collect(),
            foundations: foundations.map(|pile| pile.into_iter().collect()),
            tableau: tableau.map(|pile| pile.into_iter().collect()),
            score: 0,
            recycle_count: 0,
            elapsed_seconds: 0,
        };
        state.check_integrity()?;
        Ok(state)
    }

    // === Counters ===

    /// Raw accumulated points, before penalties.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Times the waste was turned back into the stock.
    #[must_use]
    pub fn recycle_count(&self) -> u32 {
        self.recycle_count
    }

    /// Seconds of play counted by `tick`.
    #[must_use]
    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    // === Piles ===

    #[must_use]
    pub fn stock(&self) -> &Vector<Card> {
        &self.stock
    }

    #[must_use]
    pub fn waste(&self) -> &Vector<Card> {
        &self.waste
    }

    #[must_use]
    pub fn foundation(&self, suit: Suit) -> &Vector<Card> {
        &self.foundations[suit.index()]
    }

    /// All foundations in `Suit::ALL` order.
    #[must_use]
    pub fn foundations(&self) -> &[Vector<Card>; FOUNDATIONS] {
        &self.foundations
    }

    /// A tableau column, or `None` if `column` is out of range.
    #[must_use]
    pub fn tableau(&self, column: usize) -> Option<&Vector<Card>> {
        self.tableau.get(column)
    }

    #[must_use]
    pub fn tableau_columns(&self) -> &[Vector<Card>; TABLEAU_COLUMNS] {
        &self.tableau
    }

    #[must_use]
    pub fn waste_top(&self) -> Option<&Card> {
        self.waste.back()
    }

    #[must_use]
    pub fn foundation_top(&self, suit: Suit) -> Option<&Card> {
        self.foundations[suit.index()].back()
    }

    #[must_use]
    pub fn tableau_top(&self, column: usize) -> Option<&Card> {
        self.tableau.get(column).and_then(Vector::back)
    }

    pub(crate) fn stock_mut(&mut self) -> &mut Vector<Card> {
        &mut self.stock
    }

    pub(crate) fn waste_mut(&mut self) -> &mut Vector<Card> {
        &mut self.waste
    }

    pub(crate) fn foundation_mut(&mut self, suit: Suit) -> &mut Vector<Card> {
        &mut self.foundations[suit.index()]
    }

    pub(crate) fn tableau_mut(&mut self, column: usize) -> Option<&mut Vector<Card>> {
        self.tableau.get_mut(column)
    }

    // === Queries ===

    /// Iterate over every card in every pile.
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> {
        self.stock
            .iter()
            .chain(self.waste.iter())
            .chain(self.foundations.iter().flat_map(Vector::iter))
            .chain(self.tableau.iter().flat_map(Vector::iter))
    }

    /// Total cards across all piles.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.stock.len()
            + self.waste.len()
            + self.foundations.iter().map(Vector::len).sum::<usize>()
            + self.tableau.iter().map(Vector::len).sum::<usize>()
    }

    /// Cards already built onto foundations.
    #[must_use]
    pub fn foundation_card_count(&self) -> usize {
        self.foundations.iter().map(Vector::len).sum()
    }

    /// Find where a card is.
    #[must_use]
    pub fn locate(&self, id: CardId) -> Option<CardLocation> {
        let find = |pile: &Vector<Card>| pile.iter().position(|c| c.id() == id);

        if let Some(index) = find(&self.waste) {
            return Some(CardLocation::Waste { index });
        }
        for (column, pile) in self.tableau.iter().enumerate() {
            if let Some(index) = find(pile) {
                return Some(CardLocation::Tableau { column, index });
            }
        }
        for suit in Suit::ALL {
            if let Some(index) = find(&self.foundations[suit.index()]) {
                return Some(CardLocation::Foundation { suit, index });
            }
        }
        find(&self.stock).map(|index| CardLocation::Stock { index })
    }

    /// Verify that every card appears exactly once and that every
    /// foundation is well formed.
    ///
    /// Reports the first duplicated card, then a wrong total, then the
    /// first missing card, then the first misplaced foundation card.
    pub fn check_integrity(&self) -> Result<(), EngineError> {
        let mut counts: FxHashMap<CardId, usize> = FxHashMap::default();
        let mut total = 0usize;
        for card in self.all_cards() {
            *counts.entry(card.id()).or_insert(0) += 1;
            total += 1;
        }

        for id in CardId::all() {
            let count = counts.get(&id).copied().unwrap_or(0);
            if count > 1 {
                return Err(EngineError::DuplicateCard { card: id, count });
            }
        }
        if total != DECK_SIZE {
            return Err(EngineError::WrongCardCount { found: total });
        }
        if let Some(card) = CardId::all().find(|id| !counts.contains_key(id)) {
            return Err(EngineError::MissingCard { card });
        }
        self.check_foundations()
    }

    /// Foundation `i` must hold `Suit::ALL[i]` from the Ace up, face-up.
    fn check_foundations(&self) -> Result<(), EngineError> {
        for suit in Suit::ALL {
            let pile = &self.foundations[suit.index()];
            for (index, card) in pile.iter().enumerate() {
                if card.suit != suit || card.rank.index() != index || !card.face_up {
                    return Err(EngineError::MalformedFoundation { suit, index });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rank;

    fn ordered_deck() -> Vec<Card> {
        Suit::ALL
            .iter()
            .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(suit, rank)))
            .collect()
    }

    #[test]
    fn test_deal_shape() {
        let state = GameState::deal(ordered_deck()).unwrap();

        for col in 0..TABLEAU_COLUMNS {
            let column = state.tableau(col).unwrap();
            assert_eq!(column.len(), col + 1);
            for (row, card) in column.iter().enumerate() {
                assert_eq!(card.face_up, row == col, "column {col} row {row}");
            }
        }
        assert_eq!(state.stock().len(), STOCK_AFTER_DEAL);
        assert!(state.stock().iter().all(|c| !c.face_up));
        assert!(state.waste().is_empty());
        assert_eq!(state.foundation_card_count(), 0);
        assert_eq!(state.card_count(), DECK_SIZE);
    }

    #[test]
    fn test_deal_order() {
        let deck = ordered_deck();
        let state = GameState::deal(deck.clone()).unwrap();

        // First card lands in column 0, the last card of the deck tops the stock.
        assert_eq!(state.tableau_top(0).map(Card::id), Some(deck[0].id()));
        assert_eq!(state.stock().back().map(Card::id), Some(deck[51].id()));
    }

    #[test]
    fn test_deal_rejects_short_deck() {
        let mut deck = ordered_deck();
        deck.pop();
        assert_eq!(
            GameState::deal(deck),
            Err(EngineError::WrongCardCount { found: 51 })
        );
    }

    #[test]
    fn test_integrity_detects_duplicate() {
        let mut deck = ordered_deck();
        deck[51] = deck[0];
        let err = GameState::deal(deck).unwrap_err();
        assert_eq!(
            err,
            EngineError::DuplicateCard {
                card: CardId(0),
                count: 2
            }
        );
    }

    #[test]
    fn test_from_piles_detects_missing() {
        let mut deck = ordered_deck();
        let last = deck.pop().unwrap();
        let err = GameState::from_piles(deck, vec![], Default::default(), Default::default())
            .unwrap_err();
        assert_eq!(err, EngineError::WrongCardCount { found: 51 });
        assert!(err.is_invariant_violation());
        assert_eq!(last.id(), CardId(51));
    }

    fn split_by_suit(cards: Vec<Card>) -> [Vec<Card>; FOUNDATIONS] {
        Suit::ALL.map(|suit| {
            cards
                .iter()
                .filter(|c| c.suit == suit)
                .map(|c| c.turned_up())
                .collect()
        })
    }

    #[test]
    fn test_from_piles_accepts_complete_foundations() {
        let foundations = split_by_suit(ordered_deck());
        let state =
            GameState::from_piles(vec![], vec![], foundations, Default::default()).unwrap();
        assert_eq!(state.foundation_card_count(), DECK_SIZE);
    }

    #[test]
    fn test_from_piles_rejects_foundation_of_wrong_suit() {
        let mut foundations = split_by_suit(ordered_deck());
        // Hearts pile holds the diamonds, diamonds the clubs, and so on.
        foundations.rotate_left(1);

        let err = GameState::from_piles(vec![], vec![], foundations, Default::default())
            .unwrap_err();
        assert_eq!(
            err,
            EngineError::MalformedFoundation {
                suit: Suit::Hearts,
                index: 0
            }
        );
        assert!(err.is_invariant_violation());
    }

    #[test]
    fn test_from_piles_rejects_foundation_out_of_order() {
        let mut foundations = split_by_suit(ordered_deck());
        foundations[2].swap(4, 5);

        let err = GameState::from_piles(vec![], vec![], foundations, Default::default())
            .unwrap_err();
        assert_eq!(
            err,
            EngineError::MalformedFoundation {
                suit: Suit::Clubs,
                index: 4
            }
        );
    }

    #[test]
    fn test_from_piles_rejects_face_down_foundation_card() {
        let mut foundations = split_by_suit(ordered_deck());
        let mut rest = foundations[3].split_off(1);
        foundations[3][0] = foundations[3][0].turned_down();
        let mut tableau: [Vec<Card>; TABLEAU_COLUMNS] = Default::default();
        tableau[0].append(&mut rest);

        let err = GameState::from_piles(vec![], vec![], foundations, tableau).unwrap_err();
        assert_eq!(
            err,
            EngineError::MalformedFoundation {
                suit: Suit::Spades,
                index: 0
            }
        );
    }

    #[test]
    fn test_locate() {
        let state = GameState::deal(ordered_deck()).unwrap();
        let top_of_col_3 = *state.tableau_top(3).unwrap();

        assert_eq!(
            state.locate(top_of_col_3.id()),
            Some(CardLocation::Tableau { column: 3, index: 3 })
        );

        let stock_top = *state.stock().back().unwrap();
        assert_eq!(
            state.locate(stock_top.id()),
            Some(CardLocation::Stock { index: STOCK_AFTER_DEAL - 1 })
        );
        assert_eq!(state.locate(CardId(60)), None);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = GameState::deal(ordered_deck()).unwrap();
        let mut live = original.clone();

        let card = live.stock_mut().pop_back().unwrap();
        live.waste_mut().push_back(card.turned_up());
        live.score += 5;

        assert_eq!(original.stock().len(), STOCK_AFTER_DEAL);
        assert!(original.waste().is_empty());
        assert_eq!(original.score, 0);
        assert_ne!(original, live);
    }

    #[test]
    fn test_serialization() {
        let state = GameState::deal(ordered_deck()).unwrap();
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
