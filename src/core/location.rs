//! Pile addressing: where a move takes cards from and where it puts them.
//!
//! A move is a source (the waste top, or a tableau column at a depth)
//! plus a destination (a tableau column or a foundation). For example:
//! - "Waste to foundation" = `Source::Waste` + `Destination::Foundation(suit)`
//! - "Drag the run starting at card 3 of column 5 onto column 1" =
//!   `Source::Tableau { column: 5, depth: 3 }` + `Destination::Tableau(1)`
//!
//! Requests are transient. The engine validates them against the current
//! state and never trusts the caller's idea of what is legal.

use serde::{Deserialize, Serialize};

use super::card::Suit;

/// Number of tableau columns.
pub const TABLEAU_COLUMNS: usize = 7;

/// Number of foundation piles.
pub const FOUNDATIONS: usize = 4;

/// Where the cards of a move come from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    /// The top card of the waste pile.
    Waste,
    /// A tableau column, lifting every card from `depth` to the top.
    ///
    /// `depth` is the index of the first lifted card, 0 = bottom of column.
    Tableau { column: usize, depth: usize },
}

/// Where the cards of a move go.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Destination {
    Tableau(usize),
    Foundation(Suit),
}

/// A proposed transfer of one or more cards.
///
/// ```
/// use klondike_engine::core::{Destination, MoveRequest, Source, Suit};
///
/// let to_foundation = MoveRequest::new(Source::Waste, Destination::Foundation(Suit::Hearts));
/// let run = MoveRequest::tableau_to_tableau(5, 3, 1);
///
/// assert!(to_foundation.is_from_waste());
/// assert_eq!(run.source, Source::Tableau { column: 5, depth: 3 });
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRequest {
    pub source: Source,
    pub destination: Destination,
}

impl MoveRequest {
    #[must_use]
    pub const fn new(source: Source, destination: Destination) -> Self {
        Self {
            source,
            destination,
        }
    }

    #[must_use]
    pub const fn waste_to_tableau(column: usize) -> Self {
        Self::new(Source::Waste, Destination::Tableau(column))
    }

    #[must_use]
    pub const fn waste_to_foundation(suit: Suit) -> Self {
        Self::new(Source::Waste, Destination::Foundation(suit))
    }

    #[must_use]
    pub const fn tableau_to_tableau(from: usize, depth: usize, to: usize) -> Self {
        Self::new(Source::Tableau { column: from, depth }, Destination::Tableau(to))
    }

    #[must_use]
    pub const fn tableau_to_foundation(from: usize, depth: usize, suit: Suit) -> Self {
        Self::new(Source::Tableau { column: from, depth }, Destination::Foundation(suit))
    }

    #[must_use]
    pub const fn is_from_waste(&self) -> bool {
        matches!(self.source, Source::Waste)
    }

    #[must_use]
    pub const fn is_to_foundation(&self) -> bool {
        matches!(self.destination, Destination::Foundation(_))
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Waste => write!(f, "waste"),
            Source::Tableau { column, depth } => write!(f, "tableau:{column}@{depth}"),
        }
    }
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Destination::Tableau(column) => write!(f, "tableau:{column}"),
            Destination::Foundation(suit) => write!(f, "foundation:{suit:?}"),
        }
    }
}

impl std::fmt::Display for MoveRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.source, self.destination)
    }
}
