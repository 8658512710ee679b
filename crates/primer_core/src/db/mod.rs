//! SQLite store bootstrap.
//!
//! # Responsibility
//! - Open file or in-memory connections for the record store.
//! - Create the `posts` table before any caller touches data.
//! - Carry the fixed store configuration.
//!
//! # Invariants
//! - A connection handed out by this module always has the `posts` table.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod open;
pub mod schema;
pub mod seed;

pub use open::{connect, open_db, open_db_in_memory};

/// Default store file, resolved against the working directory.
pub const DEFAULT_DB_FILE_NAME: &str = "primer.sqlite3";

pub type DbResult<T> = Result<T, DbError>;

/// Fixed connection parameters for the record store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub path: PathBuf,
}

impl StoreConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DB_FILE_NAME)
    }
}

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
