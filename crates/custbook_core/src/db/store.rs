//! Process-lifetime storage handle.
//!
//! # Responsibility
//! - Own the single long-lived SQLite connection opened at startup.
//! - Serialize access to it for concurrent request handlers.
//!
//! # Invariants
//! - The wrapped connection has been bootstrapped by `open_db*`.
//! - Callers never hold the connection across statements of different requests.

use super::{open_db, open_db_in_memory, DbOptions, DbResult};
use rusqlite::Connection;
use std::path::Path;
use std::sync::{Mutex, PoisonError};

/// Owned storage handle shared by request handlers.
pub struct Store {
    conn: Mutex<Connection>,
}

impl Store {
    /// Wraps an already bootstrapped connection.
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    /// Opens the database file at `path` and wraps it.
    pub fn open(path: impl AsRef<Path>, options: &DbOptions) -> DbResult<Self> {
        Ok(Self::new(open_db(path, options)?))
    }

    /// Opens a fresh in-memory database and wraps it.
    pub fn open_in_memory(options: &DbOptions) -> DbResult<Self> {
        Ok(Self::new(open_db_in_memory(options)?))
    }

    /// Runs `f` with exclusive access to the connection.
    ///
    /// A poisoned lock is taken over as-is.
    pub fn with_conn<T>(&self, f: impl FnOnce(&Connection) -> T) -> T {
        let guard = self.conn.lock().unwrap_or_else(PoisonError::into_inner);
        f(&*guard)
    }
}
