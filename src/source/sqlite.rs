//! SQLite data source

use std::path::Path;

use super::{DataSource, SourceResult};
use crate::db::Database;
use crate::models::{MealEntry, PersonalProfile, WeightEntry};

#[derive(Clone)]
pub struct SqliteSource {
    database: Database,
}

impl SqliteSource {
    /// Open the database at `path`, creating and migrating it if needed
    pub fn open<P: AsRef<Path>>(path: P) -> SourceResult<Self> {
        let database = Database::open(path.as_ref())?;
        tracing::info!(path = %path.as_ref().display(), "opened health database");
        Ok(Self { database })
    }

    pub fn database(&self) -> &Database {
        &self.database
    }
}

impl DataSource for SqliteSource {
    fn weight_entries(&self) -> SourceResult<Vec<WeightEntry>> {
        Ok(self.database.with_conn(WeightEntry::list)?)
    }

    fn meal_entries(&self) -> SourceResult<Vec<MealEntry>> {
        Ok(self.database.with_conn(MealEntry::list)?)
    }

    fn profile(&self) -> SourceResult<Option<PersonalProfile>> {
        Ok(self.database.with_conn(PersonalProfile::get)?)
    }
}
