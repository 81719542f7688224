//! Deck construction.
//!
//! ## Key Types
//!
//! - `DeckFactory`: Seeded source of shuffled 52-card decks
//! - `standard_deck` / `create_deck`: Ordered and shuffled decks
//!
//! Card identity types (`Card`, `Suit`, `Rank`) live in `core::card`.

pub mod deck;

pub use deck::{create_deck, standard_deck, DeckFactory};
