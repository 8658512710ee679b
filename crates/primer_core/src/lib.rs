//! Core library for the Primer demos.
//! Holds the record store access layer and the language-basics walkthroughs.

pub mod db;
pub mod demo;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::{connect, StoreConfig};
pub use demo::records::RecordsDemo;
pub use logging::{default_log_level, init_logging, logging_status, LogTarget};
pub use model::post::{NewPost, Post, PostId};
pub use repo::post_repo::{PostRepository, RepoError, RepoResult, SqlitePostRepository};
pub use service::post_service::PostService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
