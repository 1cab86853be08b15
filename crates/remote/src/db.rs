// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SQLite storage for notes, todos and goals.
//!
//! Tags are stored comma-joined; timestamps are RFC 3339 text. `updated_at`
//! stays NULL until the first update.

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use sj_core::{Goal, GoalDraft, Kind, Note, NoteDraft, Progress, Record, Task, TaskDraft};
use std::path::Path;

use crate::error::{Error, Result};

/// Database file name inside the data directory.
pub const DB_FILE: &str = "sj_notes.db";

pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS notes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    content TEXT,
    tags TEXT NOT NULL DEFAULT '',
    color TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT
);

CREATE TABLE IF NOT EXISTS todos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT,
    date TEXT NOT NULL,
    tags TEXT NOT NULL DEFAULT '',
    color TEXT,
    done INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL,
    updated_at TEXT
);

CREATE TABLE IF NOT EXISTS goals (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    comment TEXT,
    progress INTEGER NOT NULL DEFAULT 0,
    color TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT
);
"#;

fn corrupted(message: String) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        0,
        rusqlite::types::Type::Text,
        Box::new(Error::CorruptedData(message)),
    )
}

fn parse_timestamp(value: &str, column: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| corrupted(format!("invalid timestamp '{value}' in column '{column}'")))
}

fn parse_timestamp_opt(value: Option<String>, column: &str) -> rusqlite::Result<Option<DateTime<Utc>>> {
    value.map(|v| parse_timestamp(&v, column)).transpose()
}

fn parse_date(value: &str) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| corrupted(format!("invalid date '{value}' in column 'date'")))
}

fn join_tags(tags: &[String]) -> String {
    tags.join(",")
}

fn split_tags(value: &str) -> Vec<String> {
    sj_core::parse_tags(value)
}

/// A record kind that has a table.
pub trait Stored: Record {
    const TABLE: &'static str;
    const COLUMNS: &'static str;

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;
    fn insert(conn: &Connection, draft: &Self::Draft, now: DateTime<Utc>) -> rusqlite::Result<i64>;
    /// Returns the number of rows changed.
    fn update(conn: &Connection, id: i64, draft: &Self::Draft, now: DateTime<Utc>) -> rusqlite::Result<usize>;
}

impl Stored for Note {
    const TABLE: &'static str = "notes";
    const COLUMNS: &'static str = "id, title, content, tags, color, created_at, updated_at";

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        let tags: String = row.get(3)?;
        let created: String = row.get(5)?;
        Ok(Note {
            id: row.get(0)?,
            title: row.get(1)?,
            content: row.get(2)?,
            tags: split_tags(&tags),
            color: row.get(4)?,
            created_at: Some(parse_timestamp(&created, "created_at")?),
            updated_at: parse_timestamp_opt(row.get(6)?, "updated_at")?,
        })
    }

    fn insert(conn: &Connection, draft: &NoteDraft, now: DateTime<Utc>) -> rusqlite::Result<i64> {
        conn.execute(
            "INSERT INTO notes (title, content, tags, color, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                draft.title,
                draft.content,
                join_tags(&draft.tags),
                draft.color,
                now.to_rfc3339(),
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    fn update(conn: &Connection, id: i64, draft: &NoteDraft, now: DateTime<Utc>) -> rusqlite::Result<usize> {
        conn.execute(
            "UPDATE notes SET title = ?1, content = ?2, tags = ?3, color = ?4, updated_at = ?5
             WHERE id = ?6",
            params![
                draft.title,
                draft.content,
                join_tags(&draft.tags),
                draft.color,
                now.to_rfc3339(),
                id,
            ],
        )
    }
}

impl Stored for Task {
    const TABLE: &'static str = "todos";
    const COLUMNS: &'static str =
        "id, title, description, date, tags, color, done, created_at, updated_at";

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        let date: String = row.get(3)?;
        let tags: String = row.get(4)?;
        let created: String = row.get(7)?;
        Ok(Task {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            due_date: parse_date(&date)?,
            tags: split_tags(&tags),
            color: row.get(5)?,
            done: row.get(6)?,
            created_at: Some(parse_timestamp(&created, "created_at")?),
            updated_at: parse_timestamp_opt(row.get(8)?, "updated_at")?,
        })
    }

    fn insert(conn: &Connection, draft: &TaskDraft, now: DateTime<Utc>) -> rusqlite::Result<i64> {
        conn.execute(
            "INSERT INTO todos (title, description, date, tags, color, done, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                draft.title,
                draft.description,
                draft.due_date.format("%Y-%m-%d").to_string(),
                join_tags(&draft.tags),
                draft.color,
                draft.done,
                now.to_rfc3339(),
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    fn update(conn: &Connection, id: i64, draft: &TaskDraft, now: DateTime<Utc>) -> rusqlite::Result<usize> {
        conn.execute(
            "UPDATE todos SET title = ?1, description = ?2, date = ?3, tags = ?4, color = ?5,
             done = ?6, updated_at = ?7
             WHERE id = ?8",
            params![
                draft.title,
                draft.description,
                draft.due_date.format("%Y-%m-%d").to_string(),
                join_tags(&draft.tags),
                draft.color,
                draft.done,
                now.to_rfc3339(),
                id,
            ],
        )
    }
}

impl Stored for Goal {
    const TABLE: &'static str = "goals";
    const COLUMNS: &'static str = "id, title, comment, progress, color, created_at, updated_at";

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        let progress: i64 = row.get(3)?;
        let created: String = row.get(5)?;
        Ok(Goal {
            id: row.get(0)?,
            title: row.get(1)?,
            comment: row.get(2)?,
            progress: Progress::new(progress),
            color: row.get(4)?,
            created_at: Some(parse_timestamp(&created, "created_at")?),
            updated_at: parse_timestamp_opt(row.get(6)?, "updated_at")?,
        })
    }

    fn insert(conn: &Connection, draft: &GoalDraft, now: DateTime<Utc>) -> rusqlite::Result<i64> {
        conn.execute(
            "INSERT INTO goals (title, comment, progress, color, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                draft.title,
                draft.comment,
                i64::from(draft.progress),
                draft.color,
                now.to_rfc3339(),
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    fn update(conn: &Connection, id: i64, draft: &GoalDraft, now: DateTime<Utc>) -> rusqlite::Result<usize> {
        conn.execute(
            "UPDATE goals SET title = ?1, comment = ?2, progress = ?3, color = ?4, updated_at = ?5
             WHERE id = ?6",
            params![
                draft.title,
                draft.comment,
                i64::from(draft.progress),
                draft.color,
                now.to_rfc3339(),
                id,
            ],
        )
    }
}

/// SQLite database connection with record operations.
pub struct Database {
    pub conn: Connection,
}

impl Database {
    /// Opens the database at `path`, creating it and its parent directory if needed.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA busy_timeout = 5000;",
        )?;
        conn.execute_batch(SCHEMA)?;
        Ok(Database { conn })
    }

    /// Opens an in-memory database (for testing).
    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA)?;
        Ok(Database { conn })
    }

    /// All records of kind `R`, in id order.
    pub fn list<R: Stored>(&self) -> Result<Vec<R>> {
        let sql = format!("SELECT {} FROM {} ORDER BY id", R::COLUMNS, R::TABLE);
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], R::from_row)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    pub fn get<R: Stored>(&self, id: i64) -> Result<R> {
        let sql = format!("SELECT {} FROM {} WHERE id = ?1", R::COLUMNS, R::TABLE);
        self.conn
            .query_row(&sql, params![id], R::from_row)
            .optional()?
            .ok_or_else(|| Error::not_found(R::KIND))
    }

    /// Inserts a record built from `draft` and returns it as stored.
    pub fn create<R: Stored>(&self, draft: &R::Draft, now: DateTime<Utc>) -> Result<R> {
        let id = R::insert(&self.conn, draft, now)?;
        self.get(id)
    }

    /// Replaces the editable fields of record `id`.
    pub fn update<R: Stored>(&self, id: i64, draft: &R::Draft, now: DateTime<Utc>) -> Result<R> {
        if R::update(&self.conn, id, draft, now)? == 0 {
            return Err(Error::not_found(R::KIND));
        }
        self.get(id)
    }

    pub fn delete<R: Stored>(&self, id: i64) -> Result<()> {
        let sql = format!("DELETE FROM {} WHERE id = ?1", R::TABLE);
        if self.conn.execute(&sql, params![id])? == 0 {
            return Err(Error::not_found(R::KIND));
        }
        Ok(())
    }

    /// Number of records in `kind`'s table.
    pub fn count(&self, kind: Kind) -> Result<i64> {
        let table = match kind {
            Kind::Notes => Note::TABLE,
            Kind::Todos => Task::TABLE,
            Kind::Goals => Goal::TABLE,
        };
        let sql = format!("SELECT COUNT(*) FROM {table}");
        Ok(self.conn.query_row(&sql, [], |row| row.get(0))?)
    }
}

#[cfg(test)]
#[path = "db_tests.rs"]
mod tests;
