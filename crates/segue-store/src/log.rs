//! Append-only SQLite log of raw transition entries.

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, warn};

use segue_core::{Song, TransitionRecord};

use crate::error::StoreResult;

/// Columns every usable `transitions` table must carry. A pre-existing
/// table missing any of them is dropped and recreated.
const REQUIRED_COLUMNS: [&str; 5] = ["from_artist", "from_title", "to_artist", "to_title", "note"];

/// Durable, ordered store of raw transition entries.
///
/// Append-only: records are never mutated or deleted, and every append is
/// kept even when it duplicates an existing (from, to) pair. Ids are
/// assigned by SQLite at append time and ascend strictly.
pub struct TransitionLog {
    conn: Connection,
}

impl TransitionLog {
    /// Open (or create) the log at the given path.
    ///
    /// Missing parent directories are created.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        let log = Self { conn };
        log.migrate()?;
        debug!(path = %path.display(), "Opened transition log");
        Ok(log)
    }

    /// Open an in-memory log (for testing).
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        let log = Self { conn };
        log.migrate()?;
        Ok(log)
    }

    /// Append one transition and return its assigned id.
    ///
    /// Durability of this single insert is the commit point for the caller;
    /// nothing is cached or batched.
    pub fn append(&self, from: &Song, to: &Song, note: Option<&str>) -> StoreResult<i64> {
        self.conn.execute(
            "INSERT INTO transitions
               (from_artist, from_title, to_artist, to_title, note)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![from.artist, from.title, to.artist, to.title, note],
        )?;
        let id = self.conn.last_insert_rowid();
        debug!(id, from = %from, to = %to, "Appended transition");
        Ok(id)
    }

    /// All records in strictly ascending id order.
    pub fn list_all(&self) -> StoreResult<Vec<TransitionRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, from_artist, from_title, to_artist, to_title, note
               FROM transitions
              ORDER BY id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(TransitionRecord {
                id: row.get(0)?,
                from: Song::new(row.get::<_, String>(1)?, row.get::<_, String>(2)?),
                to: Song::new(row.get::<_, String>(3)?, row.get::<_, String>(4)?),
                note: row.get(5)?,
            })
        })?;
        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }

    /// Ensure the `transitions` table exists with the expected schema.
    ///
    /// A leftover table from an older layout that lacks any required column
    /// is dropped wholesale before recreation.
    fn migrate(&self) -> StoreResult<()> {
        let existing: Option<String> = self
            .conn
            .query_row(
                "SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'transitions'",
                [],
                |row| row.get(0),
            )
            .optional()?;

        if existing.is_some() && !self.schema_is_current()? {
            warn!("Dropping incompatible transitions table");
            self.conn.execute("DROP TABLE transitions", [])?;
        }

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS transitions (
                 id          INTEGER PRIMARY KEY AUTOINCREMENT,
                 from_artist TEXT NOT NULL,
                 from_title  TEXT NOT NULL,
                 to_artist   TEXT NOT NULL,
                 to_title    TEXT NOT NULL,
                 note        TEXT
             )",
            [],
        )?;
        Ok(())
    }

    fn schema_is_current(&self) -> StoreResult<bool> {
        let mut stmt = self.conn.prepare("PRAGMA table_info(transitions)")?;
        let columns = stmt
            .query_map([], |row| row.get::<_, String>(1))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(REQUIRED_COLUMNS
            .iter()
            .all(|required| columns.iter().any(|c| c == required)))
    }
}
