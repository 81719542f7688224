//! Legal move enumeration.
//!
//! Candidate requests are generated per source and kept only if
//! `validate` accepts them, so every returned request is applicable as-is.

use crate::core::{GameState, MoveRequest, TABLEAU_COLUMNS};

use super::validator::validate;

/// Every move currently legal in `state`.
///
/// Order: waste moves first (foundation, then columns left to right), then
/// each column's face-up depths, shallowest lift last.
#[must_use]
pub fn legal_moves(state: &GameState) -> Vec<MoveRequest> {
    let mut candidates = Vec::new();

    if let Some(top) = state.waste_top() {
        candidates.push(MoveRequest::waste_to_foundation(top.suit));
        candidates.extend((0..TABLEAU_COLUMNS).map(MoveRequest::waste_to_tableau));
    }

    for (column, pile) in state.tableau_columns().iter().enumerate() {
        let Some(top) = pile.back() else {
            continue;
        };
        let top_depth = pile.len() - 1;
        candidates.push(MoveRequest::tableau_to_foundation(column, top_depth, top.suit));

        for (depth, card) in pile.iter().enumerate() {
            if !card.face_up {
                continue;
            }
            for to in (0..TABLEAU_COLUMNS).filter(|&to| to != column) {
                candidates.push(MoveRequest::tableau_to_tableau(column, depth, to));
            }
        }
    }

    candidates
        .into_iter()
        .filter(|request| validate(state, request).is_ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::standard_deck;

    #[test]
    fn test_every_listed_move_validates() {
        let state = GameState::deal(crate::cards::DeckFactory::new(11).create_deck()).unwrap();
        for request in legal_moves(&state) {
            assert!(validate(&state, &request).is_ok(), "{request}");
        }
    }

    #[test]
    fn test_ordered_deal_has_no_waste_moves() {
        let state = GameState::deal(standard_deck()).unwrap();
        assert!(legal_moves(&state).iter().all(|m| !m.is_from_waste()));
    }
}
