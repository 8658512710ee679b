//! Post repository contract and SQLite implementation.
//!
//! # Responsibility
//! - One-shot CRUD statements over the `posts` table.
//! - Reject connections that lack the `posts` table or its columns.
//!
//! # Invariants
//! - Listing order is `id DESC`.
//! - Update and delete report the affected-row count; zero rows is not an
//!   error.
//! - Every statement is parameterized; titles and bodies are never spliced
//!   into SQL text.

use crate::db::DbError;
use crate::model::post::{NewPost, Post, PostId};
use log::debug;
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const POSTS_TABLE: &str = "posts";
const POSTS_REQUIRED_COLUMNS: &[&str] = &["id", "title", "body"];

const POST_SELECT_SQL: &str = "SELECT
    id,
    title,
    body
FROM posts";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for post persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted post data: {message}"),
            Self::MissingRequiredTable(table) => write!(f, "required table `{table}` is missing"),
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for post CRUD operations.
pub trait PostRepository {
    /// Returns every post, newest id first.
    fn list_posts(&self) -> RepoResult<Vec<Post>>;
    /// Returns the post with `id`, or `None` when absent.
    fn get_post(&self, id: PostId) -> RepoResult<Option<Post>>;
    /// Inserts a post and returns the store-assigned id.
    fn create_post(&self, post: &NewPost) -> RepoResult<PostId>;
    /// Replaces title and body of the post with `id`; returns affected rows.
    fn update_post(&self, id: PostId, post: &NewPost) -> RepoResult<usize>;
    /// Removes the post with `id` permanently; returns affected rows.
    fn delete_post(&self, id: PostId) -> RepoResult<usize>;
    /// Counts stored posts.
    fn count_posts(&self) -> RepoResult<u64>;
}

/// SQLite-backed post repository borrowing a bootstrapped connection.
pub struct SqlitePostRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePostRepository<'conn> {
    /// Wraps a connection after verifying the `posts` table and columns exist.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl PostRepository for SqlitePostRepository<'_> {
    fn list_posts(&self) -> RepoResult<Vec<Post>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{POST_SELECT_SQL} ORDER BY id DESC;"))?;
        let mut rows = stmt.query([])?;
        let mut posts = Vec::new();

        while let Some(row) = rows.next()? {
            posts.push(parse_post_row(row)?);
        }

        debug!(
            "event=post_list module=repo status=ok count={}",
            posts.len()
        );
        Ok(posts)
    }

    fn get_post(&self, id: PostId) -> RepoResult<Option<Post>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{POST_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;

        let mut found = None;
        while let Some(row) = rows.next()? {
            found = Some(parse_post_row(row)?);
        }

        Ok(found)
    }

    fn create_post(&self, post: &NewPost) -> RepoResult<PostId> {
        self.conn.execute(
            "INSERT INTO posts (title, body) VALUES (?1, ?2);",
            params![post.title.as_str(), post.body.as_str()],
        )?;

        let id = self.conn.last_insert_rowid();
        debug!("event=post_create module=repo status=ok id={id}");
        Ok(id)
    }

    fn update_post(&self, id: PostId, post: &NewPost) -> RepoResult<usize> {
        let changed = self.conn.execute(
            "UPDATE posts
             SET
                title = ?1,
                body = ?2
             WHERE id = ?3;",
            params![post.title.as_str(), post.body.as_str(), id],
        )?;

        debug!("event=post_update module=repo status=ok id={id} changed={changed}");
        Ok(changed)
    }

    fn delete_post(&self, id: PostId) -> RepoResult<usize> {
        let changed = self
            .conn
            .execute("DELETE FROM posts WHERE id = ?1;", [id])?;

        debug!("event=post_delete module=repo status=ok id={id} changed={changed}");
        Ok(changed)
    }

    fn count_posts(&self) -> RepoResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM posts;", [], |row| row.get(0))?;
        u64::try_from(count)
            .map_err(|_| RepoError::InvalidData(format!("negative row count `{count}`")))
    }
}

fn parse_post_row(row: &Row<'_>) -> RepoResult<Post> {
    Ok(Post {
        id: row.get("id")?,
        title: row.get("title")?,
        body: row.get("body")?,
    })
}

fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let table_exists: bool = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [POSTS_TABLE],
        |row| row.get(0),
    )?;
    if !table_exists {
        return Err(RepoError::MissingRequiredTable(POSTS_TABLE));
    }

    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info(?1);")?;
    let columns = stmt
        .query_map([POSTS_TABLE], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;
    for column in POSTS_REQUIRED_COLUMNS {
        if !columns.iter().any(|name| name == column) {
            return Err(RepoError::MissingRequiredColumn {
                table: POSTS_TABLE,
                column: *column,
            });
        }
    }

    Ok(())
}
