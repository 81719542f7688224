//! Deck construction and shuffling.
//!
//! `DeckFactory` owns a `GameRng`, so successive decks from one seed form a
//! reproducible sequence of deals.
//!
//! ```
//! use klondike_engine::cards::DeckFactory;
//!
//! let mut factory = DeckFactory::new(42);
//! let deck = factory.create_deck();
//! assert_eq!(deck.len(), 52);
//!
//! // Same seed, same deal
//! assert_eq!(DeckFactory::new(42).create_deck(), deck);
//! ```

use crate::core::{Card, GameRng, GameRngState, Rank, Suit, DECK_SIZE};

/// The 52 cards in suit-major, rank-ascending order, all face-down.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card::new(suit, rank));
        }
    }
    deck
}

/// A uniformly shuffled standard deck.
#[must_use]
pub fn create_deck(rng: &mut GameRng) -> Vec<Card> {
    let mut deck = standard_deck();
    rng.shuffle(&mut deck);
    deck
}

/// Builds shuffled decks from a seeded RNG.
#[derive(Clone, Debug)]
pub struct DeckFactory {
    rng: GameRng,
}

impl DeckFactory {
    /// Create a factory with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Create a factory seeded from entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: GameRng::from_entropy(),
        }
    }

    /// Replace the RNG with a freshly seeded one.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = GameRng::new(seed);
    }

    /// The seed the current RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Shuffle and return the next deck.
    #[must_use]
    pub fn create_deck(&mut self) -> Vec<Card> {
        create_deck(&mut self.rng)
    }

    /// RNG position, to resume the deal sequence later.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Resume a deal sequence from a saved RNG position.
    #[must_use]
    pub fn from_rng_state(state: &GameRngState) -> Self {
        Self {
            rng: GameRng::from_state(state),
        }
    }
}
