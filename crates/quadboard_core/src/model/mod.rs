//! Domain model for the quadrant board.
//!
//! # Responsibility
//! - Define the canonical task record and quadrant tagging scheme.
//!
//! # Invariants
//! - A task's identity and content never change after creation; only its
//!   list position does.
//!
//! # See also
//! - docs/architecture/data-model.md

pub mod task;
