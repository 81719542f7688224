//! Klondike rules.
//!
//! - `validator`: pure legality predicates and request resolution
//! - `win`: the win condition
//! - `moves`: enumeration of every legal move
//!
//! Nothing here mutates state. The engine asks these functions and then
//! applies the result itself.

pub mod validator;
pub mod win;
pub mod moves;

pub use validator::{
    can_place_on_foundation, can_stack_on_tableau, is_movable_run, validate, Lift, LiftedCards,
    RejectReason,
};
pub use win::is_won;
pub use moves::legal_moves;
