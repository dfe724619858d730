//! Career Store Module
//!
//! SQLite persistence for the career catalog and the submission history.
//! Every call site receives the store explicitly; there is no global handle.
//! All access goes through a single connection behind a mutex, so seeding a
//! fresh catalog can never interleave with a concurrent read.

use chrono::{DateTime, NaiveDateTime, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection, Row};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use super::error::{GuidanceError, GuidanceResult};
use super::types::{AcademicScore, CareerRecord, HistoryEntry, NewHistoryEntry};

/// Format SQLite uses for `CURRENT_TIMESTAMP`
const SQLITE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ============================================================
// STORAGE CAPABILITY
// ============================================================

/// What the guidance pipeline needs from persistence
pub trait CareerStore {
    fn insert_career(&self, record: &CareerRecord) -> GuidanceResult<()>;

    /// All catalog records, in insertion order
    fn all_careers(&self) -> GuidanceResult<Vec<CareerRecord>>;

    fn career_count(&self) -> GuidanceResult<usize>;

    /// Append a history row; storage assigns id and timestamp
    fn append_history(&self, entry: &NewHistoryEntry) -> GuidanceResult<HistoryEntry>;

    /// Most recent history rows first
    fn history(&self, limit: usize) -> GuidanceResult<Vec<HistoryEntry>>;
}

// ============================================================
// SQLITE STORE
// ============================================================

/// SQLite-backed store
#[derive(Clone)]
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Open (or create) the database file at `path`
    pub fn open<P: AsRef<Path>>(path: P) -> GuidanceResult<Self> {
        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    /// Create an in-memory store for testing
    pub fn in_memory() -> GuidanceResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> GuidanceResult<Self> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS careers (
                career TEXT,
                interest TEXT,
                skill TEXT,
                min_score INTEGER,
                colleges TEXT,
                admission TEXT,
                jobs TEXT
            );
            CREATE TABLE IF NOT EXISTS user_history (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT,
                interest TEXT,
                skill TEXT,
                score INTEGER,
                recommended_career TEXT,
                match_score INTEGER,
                timestamp DATETIME DEFAULT CURRENT_TIMESTAMP
            );",
        )?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn lock(&self) -> GuidanceResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| GuidanceError::StoreUnavailable)
    }
}

impl CareerStore for SqliteStore {
    fn insert_career(&self, record: &CareerRecord) -> GuidanceResult<()> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO careers (career, interest, skill, min_score, colleges, admission, jobs)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                record.career,
                record.interest,
                record.skill,
                record.min_score,
                record.colleges,
                record.admission,
                record.jobs,
            ],
        )?;
        Ok(())
    }

    fn all_careers(&self) -> GuidanceResult<Vec<CareerRecord>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            "SELECT career, interest, skill, min_score, colleges, admission, jobs
             FROM careers
             ORDER BY rowid ASC",
        )?;

        let records = stmt.query_map([], |row| {
            Ok(CareerRecord {
                career: row.get(0)?,
                interest: row.get(1)?,
                skill: row.get(2)?,
                min_score: row.get(3)?,
                colleges: row.get(4)?,
                admission: row.get(5)?,
                jobs: row.get(6)?,
            })
        })?;

        let records = records.collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }

    fn career_count(&self) -> GuidanceResult<usize> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM careers", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    fn append_history(&self, entry: &NewHistoryEntry) -> GuidanceResult<HistoryEntry> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO user_history
             (name, interest, skill, score, recommended_career, match_score)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                entry.name,
                entry.interest,
                entry.skill,
                entry.score.value(),
                entry.recommended_career,
                entry.match_score,
            ],
        )?;
        let id = conn.last_insert_rowid();

        let stored = conn.query_row(
            "SELECT id, name, interest, skill, score, recommended_career, match_score, timestamp
             FROM user_history
             WHERE id = ?1",
            [id],
            history_from_row,
        )?;
        Ok(stored)
    }

    fn history(&self, limit: usize) -> GuidanceResult<Vec<HistoryEntry>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            "SELECT id, name, interest, skill, score, recommended_career, match_score, timestamp
             FROM user_history
             ORDER BY id DESC
             LIMIT ?1",
        )?;

        let entries = stmt.query_map([limit as i64], history_from_row)?;
        let entries = entries.collect::<Result<Vec<_>, _>>()?;
        Ok(entries)
    }
}

fn history_from_row(row: &Row<'_>) -> rusqlite::Result<HistoryEntry> {
    let score: i64 = row.get(4)?;
    let timestamp: String = row.get(7)?;

    Ok(HistoryEntry {
        id: row.get(0)?,
        name: row.get(1)?,
        interest: row.get(2)?,
        skill: row.get(3)?,
        score: AcademicScore::new(score)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(4, Type::Integer, Box::new(e)))?,
        recommended_career: row.get(5)?,
        match_score: row.get(6)?,
        timestamp: parse_sqlite_timestamp(&timestamp)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(7, Type::Text, Box::new(e)))?,
    })
}

fn parse_sqlite_timestamp(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    NaiveDateTime::parse_from_str(value, SQLITE_TIMESTAMP_FORMAT).map(|naive| naive.and_utc())
}
