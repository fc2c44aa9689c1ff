use crate::Database;
use crate::models::{NewsRow, UserRow, VersionRow};
use anyhow::Result;
use rusqlite::Connection;

impl Database {
    // -- Users --

    /// Insert a user and return the uid the store assigned, or `None` when
    /// the username is already taken. The uid column is AUTOINCREMENT, so
    /// assignment is unique, monotonic, and never reused, with no
    /// read-then-insert race; the UNIQUE constraint on username owns the
    /// duplicate check for the same reason.
    pub fn create_user(&self, username: &str, password_hash: &str) -> Result<Option<i64>> {
        self.with_conn_mut(|conn| {
            match conn.execute(
                "INSERT INTO users (username, password_hash) VALUES (?1, ?2)",
                (username, password_hash),
            ) {
                Ok(_) => Ok(Some(conn.last_insert_rowid())),
                Err(rusqlite::Error::SqliteFailure(e, _))
                    if e.code == rusqlite::ErrorCode::ConstraintViolation =>
                {
                    Ok(None)
                }
                Err(e) => Err(e.into()),
            }
        })
    }

    /// Exact match on both username and stored hash. A miss never reveals
    /// whether the username exists at all.
    pub fn find_user_by_credentials(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<Option<(i64, String)>> {
        self.with_conn(|conn| {
            let row = conn
                .query_row(
                    "SELECT uid, username FROM users WHERE username = ?1 AND password_hash = ?2",
                    [username, password_hash],
                    |row| Ok((row.get(0)?, row.get(1)?)),
                )
                .optional()?;
            Ok(row)
        })
    }

    pub fn touch_last_login(&self, uid: i64) -> Result<()> {
        self.with_conn_mut(|conn| {
            conn.execute(
                "UPDATE users SET last_login = CURRENT_TIMESTAMP WHERE uid = ?1",
                [uid],
            )?;
            Ok(())
        })
    }

    pub fn get_user_by_uid(&self, uid: i64) -> Result<Option<UserRow>> {
        self.with_conn(|conn| query_user_by_uid(conn, uid))
    }

    // -- News --

    pub fn list_news(&self) -> Result<Vec<NewsRow>> {
        self.with_conn(query_news)
    }

    // -- Versions --

    pub fn list_versions(&self) -> Result<Vec<VersionRow>> {
        self.with_conn(query_versions)
    }
}

fn query_user_by_uid(conn: &Connection, uid: i64) -> Result<Option<UserRow>> {
    let mut stmt = conn.prepare(
        "SELECT uid, username, created_at, last_login, downloads_count, favorite_version
         FROM users WHERE uid = ?1",
    )?;

    let row = stmt
        .query_row([uid], |row| {
            Ok(UserRow {
                uid: row.get(0)?,
                username: row.get(1)?,
                created_at: row.get(2)?,
                last_login: row.get(3)?,
                downloads_count: row.get(4)?,
                favorite_version: row.get(5)?,
            })
        })
        .optional()?;

    Ok(row)
}

fn query_news(conn: &Connection) -> Result<Vec<NewsRow>> {
    let mut stmt = conn.prepare(
        "SELECT id, title, content, created_at, author, version_tag
         FROM news
         ORDER BY created_at DESC",
    )?;

    let rows = stmt
        .query_map([], |row| {
            Ok(NewsRow {
                id: row.get(0)?,
                title: row.get(1)?,
                content: row.get(2)?,
                created_at: row.get(3)?,
                author: row.get(4)?,
                version_tag: row.get(5)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(rows)
}

fn query_versions(conn: &Connection) -> Result<Vec<VersionRow>> {
    let mut stmt = conn.prepare(
        "SELECT version_name, release_date, description, download_url, features, is_latest
         FROM versions
         ORDER BY is_latest DESC, release_date DESC",
    )?;

    let rows = stmt
        .query_map([], |row| {
            Ok(VersionRow {
                version_name: row.get(0)?,
                release_date: row.get(1)?,
                description: row.get(2)?,
                download_url: row.get(3)?,
                features: row.get(4)?,
                is_latest: row.get(5)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(rows)
}

/// Extension trait for optional query results
trait OptionalExt<T> {
    fn optional(self) -> Result<Option<T>>;
}

impl<T> OptionalExt<T> for std::result::Result<T, rusqlite::Error> {
    fn optional(self) -> Result<Option<T>> {
        match self {
            Ok(val) => Ok(Some(val)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
