//! Record walkthrough: one-shot CRUD against the post store.
//!
//! # Responsibility
//! - Run each operation on its own freshly opened connection.
//! - Print tutorial-style result lines for every operation.
//!
//! # Invariants
//! - A connection lives only for the scope of one operation and is released
//!   before anything is printed, on success and on error alike.
//! - No post state is cached between operations.
//! - Update and delete confirm even when no row matched; the affected-row
//!   count only reaches the log.

use super::DemoResult;
use crate::db::seed::seed_sample_posts;
use crate::db::{connect, StoreConfig};
use crate::model::post::{Post, PostId};
use crate::repo::post_repo::{RepoResult, SqlitePostRepository};
use crate::service::post_service::PostService;
use log::{info, warn};
use std::io::Write;
use std::time::Instant;

/// Walkthrough steps: `add` payload, `update` target and payload, `delete`
/// and `get_one` targets.
const WALKTHROUGH_ADD: (&str, &str) = (
    "learn TerraTest",
    "very good tool for testing cloud infrastructure",
);
const WALKTHROUGH_UPDATE: (PostId, &str, &str) = (
    1,
    "learn go at exercism",
    "recommended by go tracker mentor John",
);
const WALKTHROUGH_DELETE_ID: PostId = 2;
const WALKTHROUGH_GET_ID: PostId = 3;

/// Record-access demo bound to one store configuration.
#[derive(Debug, Clone)]
pub struct RecordsDemo {
    config: StoreConfig,
}

impl RecordsDemo {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// Prints every title, highest id first, and returns the listed posts.
    pub fn get_all(&self, out: &mut impl Write) -> DemoResult<Vec<Post>> {
        let posts = self.with_service("get_all", |service| service.list_posts())?;
        for post in &posts {
            writeln!(out, "{}", post.title)?;
        }
        Ok(posts)
    }

    /// Prints title and body of one post; both are empty when it is missing.
    pub fn get_one(&self, id: PostId, out: &mut impl Write) -> DemoResult<Option<Post>> {
        let post = self.with_service("get_one", |service| service.get_post(id))?;
        let (title, body) = post
            .as_ref()
            .map_or(("", ""), |post| (post.title.as_str(), post.body.as_str()));
        writeln!(out, "Post Title\t: {title}")?;
        writeln!(out, "Post Body\t: {body}")?;
        Ok(post)
    }

    pub fn add(&self, title: &str, body: &str, out: &mut impl Write) -> DemoResult<Post> {
        let post = self.with_service("add", |service| service.add_post(title, body))?;
        writeln!(out, "ADDED: Title: {} | Body: {}", post.title, post.body)?;
        Ok(post)
    }

    pub fn update(
        &self,
        id: PostId,
        title: &str,
        body: &str,
        out: &mut impl Write,
    ) -> DemoResult<Post> {
        let (post, changed) =
            self.with_service("update", |service| service.update_post(id, title, body))?;
        log_unmatched("update", id, changed);
        writeln!(out, "UPDATED: Title: {} | Body: {}", post.title, post.body)?;
        Ok(post)
    }

    pub fn delete(&self, id: PostId, out: &mut impl Write) -> DemoResult<()> {
        let changed = self.with_service("delete", |service| service.delete_post(id))?;
        log_unmatched("delete", id, changed);
        writeln!(out, "DELETED")?;
        Ok(())
    }

    /// Inserts the tutorial rows when the table is empty.
    pub fn seed_if_empty(&self) -> DemoResult<usize> {
        let mut conn = connect(&self.config)?;
        Ok(seed_sample_posts(&mut conn)?)
    }

    /// Runs the scripted add / update / delete / get sequence.
    pub fn run_walkthrough(&self, out: &mut impl Write) -> DemoResult<()> {
        self.seed_if_empty()?;

        writeln!(out, "getAll ...")?;
        self.get_all(out)?;

        writeln!(out, "add ...")?;
        let (title, body) = WALKTHROUGH_ADD;
        self.add(title, body, out)?;
        self.get_all(out)?;

        let (update_id, title, body) = WALKTHROUGH_UPDATE;
        writeln!(out, "update({update_id}) ...")?;
        self.update(update_id, title, body, out)?;
        self.get_all(out)?;

        writeln!(out, "delete({WALKTHROUGH_DELETE_ID}) ...")?;
        self.delete(WALKTHROUGH_DELETE_ID, out)?;
        self.get_all(out)?;

        writeln!(out, "getOne({WALKTHROUGH_GET_ID}) ...")?;
        self.get_one(WALKTHROUGH_GET_ID, out)?;

        Ok(())
    }

    fn with_service<T, F>(&self, op: &str, body: F) -> RepoResult<T>
    where
        F: for<'c> FnOnce(&PostService<SqlitePostRepository<'c>>) -> RepoResult<T>,
    {
        let started_at = Instant::now();
        let result = (|| -> RepoResult<T> {
            let conn = connect(&self.config)?;
            let service = PostService::new(SqlitePostRepository::try_new(&conn)?);
            body(&service)
        })();

        match &result {
            Ok(_) => info!(
                "event=record_op module=demo status=ok op={op} duration_ms={}",
                started_at.elapsed().as_millis()
            ),
            Err(err) => warn!(
                "event=record_op module=demo status=error op={op} duration_ms={} error={err}",
                started_at.elapsed().as_millis()
            ),
        }
        result
    }
}

fn log_unmatched(op: &str, id: PostId, changed: usize) {
    if changed == 0 {
        warn!("event=record_op module=demo status=unmatched op={op} id={id}");
    }
}
