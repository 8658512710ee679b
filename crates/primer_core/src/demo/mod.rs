//! Standalone walkthroughs printed to any `std::io::Write` sink.
//!
//! # Responsibility
//! - `slices`: growable sequence operations.
//! - `control`: conditional and multi-way branching.
//! - `records`: one-shot CRUD against the post store.
//!
//! # Invariants
//! - Demos share no state; each can run alone in any order.

use crate::repo::post_repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;

pub mod control;
pub mod records;
pub mod slices;

pub type DemoResult<T> = Result<T, DemoError>;

/// Failure while running a demo: the store or the output sink.
#[derive(Debug)]
pub enum DemoError {
    Repo(RepoError),
    Io(io::Error),
}

impl Display for DemoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "output failed: {err}"),
        }
    }
}

impl Error for DemoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<RepoError> for DemoError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<crate::db::DbError> for DemoError {
    fn from(value: crate::db::DbError) -> Self {
        Self::Repo(RepoError::Db(value))
    }
}

impl From<io::Error> for DemoError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}
