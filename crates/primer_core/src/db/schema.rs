//! `posts` table bootstrap.

use crate::db::DbResult;
use log::debug;
use rusqlite::Connection;

const POSTS_SCHEMA_SQL: &str = include_str!("schema.sql");

/// Creates the `posts` table when it does not exist yet.
pub fn ensure_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(POSTS_SCHEMA_SQL)?;
    debug!("event=db_schema module=db status=ok table=posts");
    Ok(())
}
