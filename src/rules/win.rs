//! Win detection.

use crate::core::{GameState, Rank, Suit, RANKS_PER_SUIT};

/// Every foundation holds all 13 ranks of its own suit.
#[must_use]
pub fn is_won(state: &GameState) -> bool {
    Suit::ALL.iter().zip(state.foundations()).all(|(&suit, pile)| {
        pile.len() == RANKS_PER_SUIT
            && pile
                .iter()
                .zip(Rank::ALL)
                .all(|(card, rank)| card.suit == suit && card.rank == rank)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::standard_deck;
    use crate::core::Card;

    fn finished() -> GameState {
        let foundations = Suit::ALL.map(|suit| {
            standard_deck()
                .into_iter()
                .filter(|c| c.suit == suit)
                .map(Card::turned_up)
                .collect::<Vec<_>>()
        });
        GameState::from_piles(vec![], vec![], foundations, Default::default()).unwrap()
    }

    #[test]
    fn test_finished_is_won() {
        assert!(is_won(&finished()));
    }

    #[test]
    fn test_full_piles_of_wrong_suit_are_not_won() {
        let mut state = finished();
        let hearts = state.foundation(Suit::Hearts).clone();
        let diamonds = state.foundation(Suit::Diamonds).clone();
        *state.foundation_mut(Suit::Hearts) = diamonds;
        *state.foundation_mut(Suit::Diamonds) = hearts;

        assert!(state.check_integrity().is_err());
        assert!(!is_won(&state));
    }

    #[test]
    fn test_fresh_deal_is_not_won() {
        let state = GameState::deal(standard_deck()).unwrap();
        assert!(!is_won(&state));
    }

    #[test]
    fn test_one_card_short_is_not_won() {
        let state = finished();
        let mut foundations = state.foundations().clone().map(|p| p.into_iter().collect::<Vec<_>>());
        let king = foundations[3].pop().unwrap();
        let mut tableau: [Vec<Card>; 7] = Default::default();
        tableau[0].push(king);

        let state = GameState::from_piles(vec![], vec![], foundations, tableau).unwrap();
        assert!(!is_won(&state));
    }
}
