//! Post record model.
//!
//! # Invariants
//! - `id` is assigned by the store on insert, never by callers.
//! - A `Post` only exists after it was read back from the store.

use serde::{Deserialize, Serialize};

/// Store-assigned row identifier.
pub type PostId = i64;

/// A persisted row of the `posts` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    /// Short heading text.
    pub title: String,
    /// Unbounded content text.
    pub body: String,
}

/// Title and body payload for insert and update statements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub body: String,
}

impl NewPost {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Attaches a store-assigned id, producing the persisted shape.
    pub fn into_post(self, id: PostId) -> Post {
        Post {
            id,
            title: self.title,
            body: self.body,
        }
    }
}
