//! Data models
//!
//! Log entries and the personal profile, with their SQLite mappings.

mod meal_entry;
mod profile;
mod weight_entry;

pub use meal_entry::MealEntry;
pub use profile::{ActivityLevel, Gender, PersonalProfile};
pub use weight_entry::WeightEntry;
