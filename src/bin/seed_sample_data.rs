//! Utility to write the built-in sample data into the database
//!
//! Replaces any existing weight and meal entries and the profile.

use tracing_subscriber::EnvFilter;

use health_trends::config::{Config, DEFAULT_LOG_DIRECTIVE};
use health_trends::models::{MealEntry, PersonalProfile, WeightEntry};
use health_trends::source::{DataSource, SampleData, SqliteSource};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(DEFAULT_LOG_DIRECTIVE.parse()?))
        .with_writer(std::io::stderr)
        .init();

    let db_path = Config::from_env().database_path();
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    println!("Database path: {}", db_path.display());

    let weights = SampleData::weight_tracking().weight_entries()?;
    let meals = SampleData::meal_log().meal_entries()?;
    let profile = SampleData::health_overview().profile()?;

    let source = SqliteSource::open(&db_path)?;
    source.database().with_transaction(|tx| {
        WeightEntry::clear(tx)?;
        MealEntry::clear(tx)?;
        for entry in &weights {
            WeightEntry::create(tx, entry)?;
        }
        for entry in &meals {
            MealEntry::create(tx, entry)?;
        }
        if let Some(profile) = &profile {
            PersonalProfile::set(tx, profile)?;
        }
        Ok(())
    })?;

    println!("Sample data written:");
    println!("  Weight entries: {}", weights.len());
    println!("  Meal entries: {}", meals.len());
    println!("  Profile: {}", if profile.is_some() { "set" } else { "none" });

    Ok(())
}
