//! Meal entry model
//!
//! One logged meal with its macronutrients and total calories.

use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};

use crate::db::{date_column, DbResult, DATE_FORMAT};
use crate::nutrition::MacroGrams;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealEntry {
    pub date: NaiveDate,
    #[serde(default)]
    pub meal_name: String,
    pub carbs: f64,         // grams
    pub protein: f64,       // grams
    pub fat: f64,           // grams
    pub total_calories: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl MealEntry {
    pub fn new(
        date: NaiveDate,
        meal_name: impl Into<String>,
        macros: MacroGrams,
        total_calories: u32,
    ) -> Self {
        Self {
            date,
            meal_name: meal_name.into(),
            carbs: macros.carbs,
            protein: macros.protein,
            fat: macros.fat,
            total_calories,
            note: None,
        }
    }

    pub fn macros(&self) -> MacroGrams {
        MacroGrams::new(self.carbs, self.protein, self.fat)
    }

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            date: date_column(row, "date")?,
            meal_name: row.get("meal_name")?,
            carbs: row.get("carbs")?,
            protein: row.get("protein")?,
            fat: row.get("fat")?,
            total_calories: row.get("total_calories")?,
            note: row.get("note")?,
        })
    }

    /// Insert a meal entry, returning its row id
    pub fn create(conn: &Connection, entry: &MealEntry) -> DbResult<i64> {
        conn.execute(
            r#"
            INSERT INTO meal_entries (date, meal_name, carbs, protein, fat, total_calories, note)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                entry.date.format(DATE_FORMAT).to_string(),
                entry.meal_name,
                entry.carbs,
                entry.protein,
                entry.fat,
                entry.total_calories,
                entry.note,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// All meal entries in logging order within each date
    pub fn list(conn: &Connection) -> DbResult<Vec<Self>> {
        let mut stmt = conn.prepare("SELECT * FROM meal_entries ORDER BY date, id")?;
        let entries = stmt
            .query_map([], Self::from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(entries)
    }

    /// Remove every meal entry
    pub fn clear(conn: &Connection) -> DbResult<usize> {
        Ok(conn.execute("DELETE FROM meal_entries", [])?)
    }
}
