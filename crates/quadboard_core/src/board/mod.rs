//! Board state and its transition rules.
//!
//! # Responsibility
//! - Own the four per-quadrant task lists and the board view toggle.
//! - Route every create/complete/delete through the persistence gateway.
//!
//! # Invariants
//! - The four quadrant stores share nothing but the gateway handle.
//! - All transitions run to completion on the caller's thread; there is no
//!   internal locking of board state.
//!
//! # See also
//! - docs/architecture/data-model.md

pub mod dashboard;
pub mod form;
pub mod quadrant;

pub use dashboard::{Board, BoardView};
pub use form::TaskForm;
pub use quadrant::QuadrantStore;
