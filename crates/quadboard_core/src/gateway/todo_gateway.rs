//! Todo gateway contract and SQLite journal implementation.
//!
//! # Responsibility
//! - Record create/complete/delete events for a user's tasks.
//! - Isolate journal SQL from board-state logic.
//!
//! # Invariants
//! - The journal is append-only; the board never reads it back.
//! - Every row carries the full task snapshot at event time.
//!
//! # See also
//! - docs/architecture/persistence.md

use crate::db::DbError;
use crate::model::task::{Task, UserId};
use rusqlite::{params, Connection};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Mutex;
use uuid::Uuid;

pub type GatewayResult<T> = Result<T, GatewayError>;

/// Error produced while recording a board event.
///
/// Callers treat gateway failures as fire-and-forget: the error is logged by
/// the store and never surfaced further.
#[derive(Debug)]
pub enum GatewayError {
    Db(DbError),
}

impl Display for GatewayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for GatewayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
        }
    }
}

impl From<DbError> for GatewayError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for GatewayError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Durable-recording capability consumed, never owned, by the board.
///
/// Implementations must tolerate being called with a task the caller has
/// already removed locally; ordering between local state and journal rows is
/// not guaranteed across failures.
pub trait TodoGateway {
    /// Records creation of `todo` for `user`.
    fn add_todo(&self, user: &UserId, todo: &Task) -> GatewayResult<()>;

    /// Records completion of `todo` for `user`; only `todo.id` is significant.
    fn mark_todo(&self, user: &UserId, todo: &Task) -> GatewayResult<()>;

    /// Records deletion of `todo` for `user`; only `todo.id` is significant.
    fn delete_todo(&self, user: &UserId, todo: &Task) -> GatewayResult<()>;
}

/// SQLite-backed journal gateway.
///
/// Wraps the connection in a `Mutex` so one gateway handle can be shared by
/// all four quadrant stores.
pub struct SqliteTodoGateway {
    conn: Mutex<Connection>,
}

impl SqliteTodoGateway {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    fn record_event(&self, kind: &'static str, user: &UserId, todo: &Task) -> GatewayResult<()> {
        let conn = self
            .conn
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        conn.execute(
            "INSERT INTO todo_events (
                event_uuid,
                user_id,
                event_kind,
                task_id,
                content,
                priority,
                duration_minutes,
                schedule,
                is_schedule
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9);",
            params![
                Uuid::new_v4().to_string(),
                user.as_str(),
                kind,
                todo.id.as_str(),
                todo.content.as_str(),
                i64::from(todo.priority.code()),
                i64::from(todo.duration_minutes),
                todo.schedule.as_str(),
                i64::from(todo.is_schedule),
            ],
        )?;
        Ok(())
    }
}

impl TodoGateway for SqliteTodoGateway {
    fn add_todo(&self, user: &UserId, todo: &Task) -> GatewayResult<()> {
        self.record_event("added", user, todo)
    }

    fn mark_todo(&self, user: &UserId, todo: &Task) -> GatewayResult<()> {
        self.record_event("completed", user, todo)
    }

    fn delete_todo(&self, user: &UserId, todo: &Task) -> GatewayResult<()> {
        self.record_event("deleted", user, todo)
    }
}
