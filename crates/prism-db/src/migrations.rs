use anyhow::Result;
use rusqlite::Connection;
use tracing::info;

pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS users (
            uid                 INTEGER PRIMARY KEY AUTOINCREMENT,
            username            TEXT NOT NULL UNIQUE,
            password_hash       TEXT NOT NULL,
            created_at          TEXT NOT NULL DEFAULT (datetime('now')),
            last_login          TEXT,
            downloads_count     INTEGER NOT NULL DEFAULT 0,
            favorite_version    TEXT
        );

        CREATE TABLE IF NOT EXISTS news (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            title       TEXT NOT NULL,
            content     TEXT NOT NULL,
            created_at  TEXT NOT NULL DEFAULT (datetime('now')),
            author      TEXT,
            version_tag TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_news_created
            ON news(created_at);

        CREATE TABLE IF NOT EXISTS versions (
            version_name    TEXT PRIMARY KEY,
            release_date    TEXT,
            description     TEXT,
            download_url    TEXT,
            features        TEXT, -- JSON array of strings
            is_latest       INTEGER NOT NULL DEFAULT 0
        );
        ",
    )?;

    info!("Database migrations complete");
    Ok(())
}
