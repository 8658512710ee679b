//! Repository layer over the `posts` table.
//!
//! # Invariants
//! - SQL text stays inside this module.
//! - Update and delete hand back affected-row counts instead of failing.

pub mod post_repo;
