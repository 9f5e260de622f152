//! Personal profile model
//!
//! Static body and activity information used for energy targets. Stored as a
//! single-row table.

use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};

use crate::db::DbResult;
use crate::nutrition::{EnergyEstimate, WeightGoal};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Some(Gender::Male),
            "female" | "f" => Some(Gender::Female),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    #[serde(alias = "very-active")]
    VeryActive,
}

impl ActivityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "sedentary" => Some(ActivityLevel::Sedentary),
            "light" => Some(ActivityLevel::Light),
            "moderate" => Some(ActivityLevel::Moderate),
            "active" => Some(ActivityLevel::Active),
            "very_active" => Some(ActivityLevel::VeryActive),
            _ => None,
        }
    }

    /// BMR multiplier giving total daily energy expenditure
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::Light => "Lightly active",
            ActivityLevel::Moderate => "Moderately active",
            ActivityLevel::Active => "Active",
            ActivityLevel::VeryActive => "Very active",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalProfile {
    pub age: u32,
    pub gender: Gender,
    #[serde(alias = "height")]
    pub height_cm: f64,
    pub activity_level: ActivityLevel,
    #[serde(default)]
    pub bmr: Option<f64>,
    #[serde(default)]
    pub tdee: Option<f64>,
    /// Not persisted in the database
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<WeightGoal>,
}

impl PersonalProfile {
    /// Fill a missing BMR or TDEE from the given body weight
    pub fn with_estimated_energy(mut self, weight_kg: f64) -> Self {
        if self.bmr.is_some() && self.tdee.is_some() {
            return self;
        }
        let estimate = EnergyEstimate::for_profile(&self, weight_kg);
        self.bmr.get_or_insert(estimate.bmr);
        self.tdee.get_or_insert(estimate.tdee);
        self
    }

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        let gender: String = row.get("gender")?;
        let activity: String = row.get("activity_level")?;

        Ok(Self {
            age: row.get("age")?,
            gender: Gender::from_str(&gender).unwrap_or(Gender::Male),
            height_cm: row.get("height_cm")?,
            activity_level: ActivityLevel::from_str(&activity).unwrap_or(ActivityLevel::Sedentary),
            bmr: row.get("bmr")?,
            tdee: row.get("tdee")?,
            goal: None,
        })
    }

    /// Get the profile (single row table)
    pub fn get(conn: &Connection) -> DbResult<Option<Self>> {
        let mut stmt = conn.prepare("SELECT * FROM personal_profile WHERE id = 1")?;

        let result = stmt.query_row([], Self::from_row);
        match result {
            Ok(profile) => Ok(Some(profile)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Set or replace the profile (upsert)
    pub fn set(conn: &Connection, profile: &PersonalProfile) -> DbResult<Self> {
        conn.execute(
            r#"
            INSERT INTO personal_profile (id, age, gender, height_cm, activity_level, bmr, tdee)
            VALUES (1, ?1, ?2, ?3, ?4, ?5, ?6)
            ON CONFLICT(id) DO UPDATE SET
                age = excluded.age,
                gender = excluded.gender,
                height_cm = excluded.height_cm,
                activity_level = excluded.activity_level,
                bmr = excluded.bmr,
                tdee = excluded.tdee,
                updated_at = datetime('now')
            "#,
            params![
                profile.age,
                profile.gender.as_str(),
                profile.height_cm,
                profile.activity_level.as_str(),
                profile.bmr,
                profile.tdee,
            ],
        )?;

        Self::get(conn)?.ok_or_else(|| {
            crate::db::DbError::Sqlite(rusqlite::Error::QueryReturnedNoRows)
        })
    }
}
