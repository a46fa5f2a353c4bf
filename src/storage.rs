//! Preference persistence: a single key-value table holding the theme flag.
//! Read once at startup, written synchronously on every toggle.

use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};

use crate::recipe::Theme;

pub struct PrefStore {
    conn: Connection,
}

impl PrefStore {
    pub fn new(path: &str) -> Result<Self> {
        Ok(Self {
            conn: Connection::open(path)?,
        })
    }

    pub fn init(&mut self) -> Result<()> {
        self.conn.execute_batch(
            "BEGIN;
            CREATE TABLE IF NOT EXISTS prefs (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
            COMMIT;",
        )?;
        Ok(())
    }

    pub fn load_theme(&self, default: Theme) -> Result<Theme> {
        let value: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM prefs WHERE key = 'theme'",
                [],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value.as_deref().and_then(Theme::parse).unwrap_or(default))
    }

    pub fn save_theme(&mut self, theme: Theme) -> Result<()> {
        self.conn.execute(
            "INSERT INTO prefs (key, value) VALUES ('theme', ?1)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![theme.as_str()],
        )?;
        Ok(())
    }
}
