//! SQLite record store
//!
//! Single self-referencing `categories` table. The joined fetch performs a
//! LEFT JOIN of the table onto itself so every row arrives with its child ids.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::{params, Connection, Row};
use tracing::{debug, instrument};

use crate::domain::{JoinedRecord, NewRecord, Record};
use crate::infrastructure::error::SqliteResultExt;
use crate::infrastructure::traits::RecordStore;
use crate::infrastructure::{InfraError, InfraResult};

const SCHEMA: &str = "
    PRAGMA foreign_keys = ON;

    CREATE TABLE IF NOT EXISTS categories (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        description TEXT NOT NULL,
        parent_category_id INTEGER REFERENCES categories(id)
    );

    CREATE INDEX IF NOT EXISTS idx_categories_parent ON categories(parent_category_id);
    CREATE INDEX IF NOT EXISTS idx_categories_name ON categories(name);
";

/// SQLite-backed [`RecordStore`].
pub struct SqliteRecordStore {
    conn: Mutex<Connection>,
}

impl SqliteRecordStore {
    /// Open (or create) the database file and ensure the schema exists.
    pub fn open(db_path: impl AsRef<Path>) -> InfraResult<Self> {
        let path = db_path.as_ref();
        debug!(path = %path.display(), "opening record store");
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| InfraError::io(format!("create {}", parent.display()), e))?;
        }
        let conn = Connection::open(path).context(&format!("open {}", path.display()))?;
        Self::with_connection(conn)
    }

    /// In-memory database (for testing).
    pub fn in_memory() -> InfraResult<Self> {
        let conn = Connection::open_in_memory().context("open in-memory database")?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> InfraResult<Self> {
        conn.execute_batch(SCHEMA).context("initialize schema")?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> InfraResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| InfraError::Poisoned)
    }
}

fn record_from_row(row: &Row<'_>) -> rusqlite::Result<Record> {
    Ok(Record {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        parent_id: row.get(3)?,
    })
}

impl RecordStore for SqliteRecordStore {
    #[instrument(level = "debug", skip(self))]
    fn fetch_all_joined(&self) -> InfraResult<Vec<JoinedRecord>> {
        let conn = self.lock()?;
        let mut stmt = conn
            .prepare_cached(
                "SELECT c.id, c.name, c.description, c.parent_category_id, ch.id
                 FROM categories c
                 LEFT JOIN categories ch ON ch.parent_category_id = c.id
                 ORDER BY c.id, ch.id",
            )
            .context("prepare joined fetch")?;
        let rows = stmt
            .query_map([], |row| {
                let child: Option<i64> = row.get(4)?;
                Ok((record_from_row(row)?, child))
            })
            .context("query joined fetch")?;

        let mut joined: Vec<JoinedRecord> = Vec::new();
        for row in rows {
            let (record, child) = row.context("read joined row")?;
            match joined.last_mut() {
                Some(last) if last.record.id == record.id => last.child_ids.extend(child),
                _ => joined.push(JoinedRecord::new(record, child.into_iter().collect())),
            }
        }
        debug!(records = joined.len(), "joined fetch complete");
        Ok(joined)
    }

    #[instrument(level = "debug", skip(self))]
    fn fetch_all_projected(&self) -> InfraResult<Vec<Record>> {
        let conn = self.lock()?;
        let mut stmt = conn
            .prepare_cached(
                "SELECT id, name, description, parent_category_id FROM categories ORDER BY id",
            )
            .context("prepare projected fetch")?;
        let records = stmt
            .query_map([], record_from_row)
            .context("query projected fetch")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .context("read projected row")?;
        debug!(records = records.len(), "projected fetch complete");
        Ok(records)
    }

    fn count(&self) -> InfraResult<usize> {
        let conn = self.lock()?;
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM categories", [], |row| row.get(0))
            .context("count categories")?;
        Ok(count as usize)
    }

    #[instrument(level = "debug", skip_all, fields(records = records.len()))]
    fn insert_batch(&self, records: &[NewRecord]) -> InfraResult<Vec<i64>> {
        let mut conn = self.lock()?;
        let tx = conn.transaction().context("begin insert")?;
        let mut ids = Vec::with_capacity(records.len());
        {
            let mut stmt = tx
                .prepare_cached(
                    "INSERT INTO categories (name, description, parent_category_id)
                     VALUES (?1, ?2, ?3)",
                )
                .context("prepare insert")?;
            for record in records {
                stmt.execute(params![record.name, record.description, record.parent_id])
                    .context(&format!("insert {}", record.name))?;
                ids.push(tx.last_insert_rowid());
            }
        }
        tx.commit().context("commit insert")?;
        Ok(ids)
    }

    fn clear(&self) -> InfraResult<()> {
        let conn = self.lock()?;
        conn.execute("DELETE FROM categories", [])
            .context("clear categories")?;
        Ok(())
    }
}
