//! Persistence gateway contracts and the SQLite journal implementation.
//!
//! # Responsibility
//! - Define the durable-recording capability the board depends on.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Gateway calls are best-effort: callers never branch on the result, and
//!   the in-memory board state updates regardless of the outcome.
//!
//! # See also
//! - docs/architecture/persistence.md

pub mod todo_gateway;

pub use todo_gateway::{GatewayError, GatewayResult, SqliteTodoGateway, TodoGateway};
