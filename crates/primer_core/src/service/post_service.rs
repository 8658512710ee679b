//! Post use-case service.
//!
//! Keeps callers independent of the storage backend; every method forwards
//! to the repository contract unchanged.

use crate::model::post::{NewPost, Post, PostId};
use crate::repo::post_repo::{PostRepository, RepoResult};

/// Use-case wrapper for post CRUD operations.
pub struct PostService<R: PostRepository> {
    repo: R,
}

impl<R: PostRepository> PostService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists all posts, highest id first.
    pub fn list_posts(&self) -> RepoResult<Vec<Post>> {
        self.repo.list_posts()
    }

    pub fn get_post(&self, id: PostId) -> RepoResult<Option<Post>> {
        self.repo.get_post(id)
    }

    /// Inserts a post from loose title/body input and returns the stored row.
    pub fn add_post(&self, title: impl Into<String>, body: impl Into<String>) -> RepoResult<Post> {
        let post = NewPost::new(title, body);
        let id = self.repo.create_post(&post)?;
        Ok(post.into_post(id))
    }

    /// Replaces title and body; returns the requested values and the
    /// affected-row count (`0` when `id` is absent).
    pub fn update_post(
        &self,
        id: PostId,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> RepoResult<(Post, usize)> {
        let post = NewPost::new(title, body);
        let changed = self.repo.update_post(id, &post)?;
        Ok((post.into_post(id), changed))
    }

    /// Deletes by id; returns the affected-row count.
    pub fn delete_post(&self, id: PostId) -> RepoResult<usize> {
        self.repo.delete_post(id)
    }

    pub fn count_posts(&self) -> RepoResult<u64> {
        self.repo.count_posts()
    }
}
