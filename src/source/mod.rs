//! Data sources
//!
//! The analyzer never loads data itself; entry points hand it whatever a
//! `DataSource` yields.

mod json;
mod sample;
mod sqlite;

use std::path::PathBuf;

use thiserror::Error;

use crate::db::DbError;
use crate::models::{MealEntry, PersonalProfile, WeightEntry};

pub use json::{HealthDataFile, JsonFileSource};
pub use sample::SampleData;
pub use sqlite::SqliteSource;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Database error: {0}")]
    Database(#[from] DbError),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid health data JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SourceResult<T> = Result<T, SourceError>;

/// Supplies log entries and the personal profile
pub trait DataSource {
    /// Weight entries, in measurement order
    fn weight_entries(&self) -> SourceResult<Vec<WeightEntry>>;

    /// Meal entries, in logging order
    fn meal_entries(&self) -> SourceResult<Vec<MealEntry>>;

    fn profile(&self) -> SourceResult<Option<PersonalProfile>>;
}

impl<T: DataSource + ?Sized> DataSource for Box<T> {
    fn weight_entries(&self) -> SourceResult<Vec<WeightEntry>> {
        (**self).weight_entries()
    }

    fn meal_entries(&self) -> SourceResult<Vec<MealEntry>> {
        (**self).meal_entries()
    }

    fn profile(&self) -> SourceResult<Option<PersonalProfile>> {
        (**self).profile()
    }
}
