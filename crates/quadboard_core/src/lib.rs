//! Core state model for the QuadBoard Eisenhower-matrix to-do board.
//! This crate is the single source of truth for board transition rules.

pub mod board;
pub mod calendar;
pub mod db;
pub mod gateway;
pub mod logging;
pub mod model;

pub use board::{Board, BoardView, QuadrantStore, TaskForm};
pub use calendar::calendar_url;
pub use gateway::{GatewayError, GatewayResult, SqliteTodoGateway, TodoGateway};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Priority, Task, TaskId, UserId};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
