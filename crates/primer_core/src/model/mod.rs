//! Domain model for the record store.

pub mod post;
