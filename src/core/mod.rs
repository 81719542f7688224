//! Core engine types: cards, pile addressing, state, RNG, configuration, errors.
//!
//! Everything else in the crate is built from these.

pub mod card;
pub mod location;
pub mod rng;
pub mod config;
pub mod error;
pub mod state;

pub use card::{Card, CardId, Color, Rank, Suit, DECK_SIZE, RANKS_PER_SUIT};
pub use location::{Destination, MoveRequest, Source, FOUNDATIONS, TABLEAU_COLUMNS};
pub use rng::{GameRng, GameRngState};
pub use config::{EngineConfig, ScoringRules};
pub use error::EngineError;
pub use state::{CardLocation, GameState, STOCK_AFTER_DEAL};
