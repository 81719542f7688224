//! Game orchestration and the view boundary.
//!
//! ## Key Types
//!
//! - `GameEngine`: Owns the state and exposes the command surface
//! - `GamePhase`: `Dealing` → `Playing` → `Won`
//! - `DrawOutcome`, `MoveOutcome`, `UndoOutcome`: Command results
//! - `RenderSnapshot`, `CardView`: Read-only projection for the view
//! - `GameObserver`: Receives a snapshot after each change

pub mod game;
pub mod observer;
pub mod view;

pub use game::{DrawOutcome, GameEngine, GamePhase, MoveOutcome, UndoOutcome};
pub use observer::GameObserver;
pub use view::{CardView, RenderSnapshot};
