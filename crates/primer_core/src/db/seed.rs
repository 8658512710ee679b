//! Sample rows for the record walkthrough.

use super::DbResult;
use log::info;
use rusqlite::{params, Connection};

/// Tutorial rows as `(title, body)`, inserted in this order.
pub const SAMPLE_POSTS: &[(&str, &str)] = &[
    ("Hello World", "The content of the hello world"),
    ("Hello Second World", "The content of the hello second world"),
    (
        "Welcome to Golang world",
        "Golang is an interesting programming lang",
    ),
];

/// Inserts [`SAMPLE_POSTS`] when `posts` is empty.
///
/// Returns the number of inserted rows; an already populated table is left
/// untouched and yields `0`.
pub fn seed_sample_posts(conn: &mut Connection) -> DbResult<usize> {
    let tx = conn.transaction()?;
    let existing: i64 = tx.query_row("SELECT COUNT(*) FROM posts;", [], |row| row.get(0))?;
    if existing > 0 {
        return Ok(0);
    }

    for (title, body) in SAMPLE_POSTS {
        tx.execute(
            "INSERT INTO posts (title, body) VALUES (?1, ?2);",
            params![title, body],
        )?;
    }
    tx.commit()?;

    info!(
        "event=db_seed module=db status=ok inserted={}",
        SAMPLE_POSTS.len()
    );
    Ok(SAMPLE_POSTS.len())
}

#[cfg(test)]
mod tests {
    use super::{seed_sample_posts, SAMPLE_POSTS};
    use crate::db::open_db_in_memory;

    #[test]
    fn seeding_fills_empty_table_once() {
        let mut conn = open_db_in_memory().unwrap();

        assert_eq!(seed_sample_posts(&mut conn).unwrap(), SAMPLE_POSTS.len());
        assert_eq!(seed_sample_posts(&mut conn).unwrap(), 0);

        let ids: Vec<i64> = conn
            .prepare("SELECT id FROM posts ORDER BY id;")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
