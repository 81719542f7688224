//! Card identity: suits, ranks, colors.
//!
//! Every card in a standard deck has a unique `CardId` derived from its
//! suit and rank, so ids never need to be allocated.
//!
//! ## ID Layout
//!
//! `suit.index() * 13 + rank.index()`:
//! - `0..13`: hearts, Ace to King
//! - `13..26`: diamonds
//! - `26..39`: clubs
//! - `39..52`: spades
//!
//! ```
//! use klondike_engine::core::{Card, CardId, Rank, Suit};
//!
//! let card = Card::new(Suit::Spades, Rank::Queen);
//! assert_eq!(card.id(), CardId::from_parts(Suit::Spades, Rank::Queen));
//! assert_eq!(card.id().suit(), Suit::Spades);
//! ```

use serde::{Deserialize, Serialize};

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// Number of ranks per suit.
pub const RANKS_PER_SUIT: usize = 13;

/// Card color. Tableau runs must alternate colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

/// Card suit.
///
/// `Suit::ALL` is also the foundation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Position of this suit in `Suit::ALL` (and in the foundation row).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Suit::Hearts => 0,
            Suit::Diamonds => 1,
            Suit::Clubs => 2,
            Suit::Spades => 3,
        }
    }

    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Suit::Hearts),
            1 => Some(Suit::Diamonds),
            2 => Some(Suit::Clubs),
            3 => Some(Suit::Spades),
            _ => None,
        }
    }

    /// Red for hearts and diamonds, black for clubs and spades.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        }
    }
}

/// Card rank, ordered Ace (low) to King (high).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; RANKS_PER_SUIT] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Position in the build order A,2,..,10,J,Q,K (0..13).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Display label: "A", "2".."10", "J", "Q", "K".
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// Unique identifier of one of the 52 cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u8);

impl CardId {
    /// Build the id for a suit and rank.
    #[must_use]
    pub const fn from_parts(suit: Suit, rank: Rank) -> Self {
        Self((suit.index() * RANKS_PER_SUIT + rank.index()) as u8)
    }

    /// Check that the id names one of the 52 cards.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        (self.0 as usize) < DECK_SIZE
    }

    /// Suit of the card this id names.
    ///
    /// Only meaningful for valid ids; out-of-range ids map to spades.
    #[must_use]
    pub fn suit(self) -> Suit {
        Suit::from_index(self.0 as usize / RANKS_PER_SUIT).unwrap_or(Suit::Spades)
    }

    /// Rank of the card this id names.
    #[must_use]
    pub fn rank(self) -> Rank {
        Rank::ALL[self.0 as usize % RANKS_PER_SUIT]
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Iterate over all 52 ids in suit-major order.
    pub fn all() -> impl Iterator<Item = CardId> {
        (0..DECK_SIZE as u8).map(CardId)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank().label(), self.suit().symbol())
    }
}

/// A playing card together with its orientation.
///
/// Identity (`suit`, `rank`) never changes; `face_up` is owned by the
/// engine and flips as cards are dealt, drawn, exposed, and recycled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    pub face_up: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            face_up: false,
        }
    }

    /// Create a face-up card.
    #[must_use]
    pub const fn face_up(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            face_up: true,
        }
    }

    #[must_use]
    pub const fn id(&self) -> CardId {
        CardId::from_parts(self.suit, self.rank)
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.suit.color()
    }

    /// Return this card turned face-up.
    #[must_use]
    pub const fn turned_up(mut self) -> Self {
        self.face_up = true;
        self
    }

    /// Return this card turned face-down.
    #[must_use]
    pub const fn turned_down(mut self) -> Self {
        self.face_up = false;
        self
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}
