//! Move legality.
//!
//! Two pure predicates decide single placements:
//! - `can_stack_on_tableau`: alternating colors, one rank lower, Kings on empty
//! - `can_place_on_foundation`: same suit, one rank higher, Aces on empty
//!
//! `validate` resolves a `MoveRequest` against a state and applies both,
//! plus the lifting rules: only the waste top or a face-up, validly
//! ordered tableau suffix can move, and only a single card may go to a
//! foundation.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Card, Destination, GameState, MoveRequest, Rank, Source, Suit};

/// Cards lifted by one move. A legal run never exceeds 13 cards.
pub type LiftedCards = SmallVec<[Card; 13]>;

/// Why a move was refused.
///
/// Rejections are ordinary outcomes of a drag-and-drop UI, not errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectReason {
    /// The game is over; only a new deal is accepted.
    GameOver,
    /// Column index outside `0..7`.
    NoSuchColumn,
    /// The source pile has no cards.
    EmptySource,
    /// The requested depth is past the top of the column.
    DepthOutOfRange,
    /// The first lifted card is face-down.
    FaceDownCard,
    /// The lifted cards are not a face-up, alternating, descending run.
    BrokenRun,
    /// Source and destination are the same column.
    SameColumn,
    /// More than one card was sent to a foundation.
    StackToFoundation,
    /// The destination's top card does not accept the lifted card.
    IllegalPlacement,
    /// The card is not in the waste or the tableau.
    NotPlayable,
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            RejectReason::GameOver => "game is over",
            RejectReason::NoSuchColumn => "no such column",
            RejectReason::EmptySource => "source pile is empty",
            RejectReason::DepthOutOfRange => "depth is past the top of the column",
            RejectReason::FaceDownCard => "card is face-down",
            RejectReason::BrokenRun => "cards do not form a movable run",
            RejectReason::SameColumn => "source and destination are the same column",
            RejectReason::StackToFoundation => "only one card may go to a foundation",
            RejectReason::IllegalPlacement => "destination does not accept the card",
            RejectReason::NotPlayable => "card is not in play",
        };
        f.write_str(text)
    }
}

/// A validated move: the request and the cards it lifts, bottom first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lift {
    pub request: MoveRequest,
    pub cards: LiftedCards,
}

impl Lift {
    /// The card that will rest on the destination's current top.
    #[must_use]
    pub fn lead(&self) -> &Card {
        &self.cards[0]
    }
}

/// Can `card` be placed on a tableau column whose top is `top`?
///
/// ```
/// use klondike_engine::core::{Card, Rank, Suit};
/// use klondike_engine::rules::can_stack_on_tableau;
///
/// let five_spades = Card::face_up(Suit::Spades, Rank::Five);
/// let six_hearts = Card::face_up(Suit::Hearts, Rank::Six);
/// assert!(can_stack_on_tableau(&five_spades, Some(&six_hearts)));
/// assert!(!can_stack_on_tableau(&five_spades, None));
/// ```
#[must_use]
pub fn can_stack_on_tableau(card: &Card, top: Option<&Card>) -> bool {
    match top {
        None => card.rank == Rank::King,
        Some(top) => card.color() != top.color() && card.rank.index() + 1 == top.rank.index(),
    }
}

/// Can `card` be placed on the `suit` foundation whose top is `top`?
#[must_use]
pub fn can_place_on_foundation(card: &Card, top: Option<&Card>, suit: Suit) -> bool {
    if card.suit != suit {
        return false;
    }
    match top {
        None => card.rank == Rank::Ace,
        Some(top) => card.rank.index() == top.rank.index() + 1,
    }
}

/// Are these cards (bottom first) a run that may move as a unit?
///
/// Every card must be face-up and each must stack on the one before it.
#[must_use]
pub fn is_movable_run<'a, I>(cards: I) -> bool
where
    I: IntoIterator<Item = &'a Card>,
{
    let mut previous: Option<&Card> = None;
    for card in cards {
        if !card.face_up {
            return false;
        }
        if let Some(prev) = previous {
            if !can_stack_on_tableau(card, Some(prev)) {
                return false;
            }
        }
        previous = Some(card);
    }
    true
}

/// Resolve and check a move request against `state`.
pub fn validate(state: &GameState, request: &MoveRequest) -> Result<Lift, RejectReason> {
    let cards = lift_source(state, &request.source)?;
    let lead = &cards[0];

    match request.destination {
        Destination::Tableau(column) => {
            let target = state.tableau(column).ok_or(RejectReason::NoSuchColumn)?;
            if matches!(request.source, Source::Tableau { column: from, .. } if from == column) {
                return Err(RejectReason::SameColumn);
            }
            if !can_stack_on_tableau(lead, target.back()) {
                return Err(RejectReason::IllegalPlacement);
            }
        }
        Destination::Foundation(suit) => {
            if cards.len() > 1 {
                return Err(RejectReason::StackToFoundation);
            }
            if !can_place_on_foundation(lead, state.foundation_top(suit), suit) {
                return Err(RejectReason::IllegalPlacement);
            }
        }
    }

    Ok(Lift {
        request: *request,
        cards,
    })
}

fn lift_source(state: &GameState, source: &Source) -> Result<LiftedCards, RejectReason> {
    match *source {
        Source::Waste => {
            let top = state.waste_top().ok_or(RejectReason::EmptySource)?;
            if !top.face_up {
                return Err(RejectReason::FaceDownCard);
            }
            Ok(SmallVec::from_slice(&[*top]))
        }
        Source::Tableau { column, depth } => {
            let pile = state.tableau(column).ok_or(RejectReason::NoSuchColumn)?;
            if pile.is_empty() {
                return Err(RejectReason::EmptySource);
            }
            let first = pile.get(depth).ok_or(RejectReason::DepthOutOfRange)?;
            if !first.face_up {
                return Err(RejectReason::FaceDownCard);
            }
            if !is_movable_run(pile.iter().skip(depth)) {
                return Err(RejectReason::BrokenRun);
            }
            Ok(pile.iter().skip(depth).copied().collect())
        }
    }
}
