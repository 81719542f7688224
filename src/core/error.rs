//! Engine errors.
//!
//! Only contract violations are errors. Rejected moves, an empty undo
//! history and draws during the busy window are ordinary outcomes and are
//! reported through the command return types instead.

use thiserror::Error;

use super::card::{CardId, Suit};

/// A broken engine invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("invariant violation: card {card} appears {count} times")]
    DuplicateCard { card: CardId, count: usize },

    #[error("invariant violation: card {card} is missing from every pile")]
    MissingCard { card: CardId },

    #[error("invariant violation: expected 52 cards, found {found}")]
    WrongCardCount { found: usize },

    #[error("invariant violation: {suit:?} foundation is malformed at position {index}")]
    MalformedFoundation { suit: Suit, index: usize },

    #[error("unknown card id {0:?}")]
    UnknownCard(CardId),
}

impl EngineError {
    /// Whether this error means the 52-card invariant no longer holds.
    #[must_use]
    pub fn is_invariant_violation(&self) -> bool {
        !matches!(self, EngineError::UnknownCard(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rank;

    #[test]
    fn test_messages() {
        let card = CardId::from_parts(Suit::Hearts, Rank::King);
        let err = EngineError::DuplicateCard { card, count: 2 };
        assert_eq!(err.to_string(), "invariant violation: card K♥ appears 2 times");

        let err = EngineError::WrongCardCount { found: 51 };
        assert_eq!(err.to_string(), "invariant violation: expected 52 cards, found 51");

        let err = EngineError::MalformedFoundation { suit: Suit::Clubs, index: 3 };
        assert_eq!(
            err.to_string(),
            "invariant violation: Clubs foundation is malformed at position 3"
        );
    }

    #[test]
    fn test_classification() {
        assert!(EngineError::MissingCard { card: CardId(0) }.is_invariant_violation());
        assert!(!EngineError::UnknownCard(CardId(99)).is_invariant_violation());
    }
}
