//! # klondike-engine
//!
//! The authoritative state machine for single-player Klondike solitaire.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Free**: The engine takes abstract commands (`init`,
//!    `draw`, `move`, `undo`, `tick`) and emits `RenderSnapshot`s. It never
//!    renders, captures input, or keeps time itself.
//!
//! 2. **Synchronous**: Every command runs to completion or is rejected
//!    immediately. No internal timers, threads, or I/O.
//!
//! 3. **Card Conservation**: All 52 cards are present exactly once at all
//!    times. Debug builds re-check this after every applied command.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Piles are `im` vectors, so undo
//!   snapshots clone in O(1) and never alias the live state.
//!
//! - **Outcomes, Not Errors**: Illegal moves, empty history, and draws
//!   inside the debounce window are ordinary results. `EngineError` is
//!   reserved for broken invariants.
//!
//! ## Modules
//!
//! - `core`: Cards, pile addressing, state, RNG, configuration, errors
//! - `cards`: Deck construction and shuffling
//! - `rules`: Move validation, win detection, legal move enumeration
//! - `scoring`: Display score and clock projection
//! - `history`: Undo snapshot stack
//! - `engine`: `GameEngine`, observers, render snapshots

pub mod core;
pub mod cards;
pub mod rules;
pub mod scoring;
pub mod history;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    Card, CardId, CardLocation, Color, Rank, Suit,
    Destination, MoveRequest, Source,
    EngineConfig, ScoringRules, EngineError,
    GameRng, GameRngState, GameState,
};

pub use crate::cards::DeckFactory;

pub use crate::rules::{can_place_on_foundation, can_stack_on_tableau, RejectReason};

pub use crate::scoring::{ScoreDisplay, ScoringService};

pub use crate::history::HistoryManager;

pub use crate::engine::{
    CardView, DrawOutcome, GameEngine, GameObserver, GamePhase, MoveOutcome, RenderSnapshot,
    UndoOutcome,
};
