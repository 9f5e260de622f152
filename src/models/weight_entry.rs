//! Weight entry model
//!
//! A single body-weight measurement in kilograms.

use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};

use crate::db::{date_column, DbResult, DATE_FORMAT};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    pub date: NaiveDate,
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl WeightEntry {
    pub fn new(date: NaiveDate, weight: f64) -> Self {
        Self {
            date,
            weight,
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            date: date_column(row, "date")?,
            weight: row.get("weight")?,
            note: row.get("note")?,
        })
    }

    /// Insert a weight entry, returning its row id
    pub fn create(conn: &Connection, entry: &WeightEntry) -> DbResult<i64> {
        conn.execute(
            "INSERT INTO weight_entries (date, weight, note) VALUES (?1, ?2, ?3)",
            params![
                entry.date.format(DATE_FORMAT).to_string(),
                entry.weight,
                entry.note,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// All weight entries, oldest first
    pub fn list(conn: &Connection) -> DbResult<Vec<Self>> {
        let mut stmt = conn.prepare("SELECT * FROM weight_entries ORDER BY date, id")?;
        let entries = stmt
            .query_map([], Self::from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(entries)
    }

    /// Remove every weight entry
    pub fn clear(conn: &Connection) -> DbResult<usize> {
        Ok(conn.execute("DELETE FROM weight_entries", [])?)
    }
}
