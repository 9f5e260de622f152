//! Built-in sample datasets

use chrono::NaiveDate;

use super::{DataSource, SourceResult};
use crate::models::{ActivityLevel, Gender, MealEntry, PersonalProfile, WeightEntry};
use crate::nutrition::MacroGrams;

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, day).unwrap_or_default()
}

fn meal(day: u32, name: &str, carbs: f64, protein: f64, fat: f64, calories: u32) -> MealEntry {
    MealEntry::new(date(1, day), name, MacroGrams::new(carbs, protein, fat), calories)
}

/// In-memory fixture data
#[derive(Debug, Clone, Default)]
pub struct SampleData {
    weights: Vec<WeightEntry>,
    meals: Vec<MealEntry>,
    profile: Option<PersonalProfile>,
}

impl SampleData {
    pub fn new(
        weights: Vec<WeightEntry>,
        meals: Vec<MealEntry>,
        profile: Option<PersonalProfile>,
    ) -> Self {
        Self {
            weights,
            meals,
            profile,
        }
    }

    /// Six weekly weigh-ins, 70.5 kg down to 69.0 kg
    pub fn weight_tracking() -> Self {
        let weights = vec![
            WeightEntry::new(date(1, 1), 70.5).with_note("Started tracking"),
            WeightEntry::new(date(1, 8), 70.2).with_note("First week"),
            WeightEntry::new(date(1, 15), 69.8).with_note("Slight drop"),
            WeightEntry::new(date(1, 22), 69.5).with_note("Still dropping"),
            WeightEntry::new(date(1, 29), 69.3).with_note("Steady"),
            WeightEntry::new(date(2, 5), 69.0).with_note("Goal reached"),
        ];
        Self::new(weights, Vec::new(), None)
    }

    /// Eight meals over three days; the last day has no dinner
    pub fn meal_log() -> Self {
        let meals = vec![
            meal(1, "Breakfast", 45.0, 20.0, 15.0, 380),
            meal(1, "Lunch", 60.0, 35.0, 20.0, 540),
            meal(1, "Dinner", 50.0, 30.0, 18.0, 482),
            meal(2, "Breakfast", 40.0, 25.0, 12.0, 368),
            meal(2, "Lunch", 55.0, 40.0, 22.0, 558),
            meal(2, "Dinner", 48.0, 28.0, 16.0, 456),
            meal(3, "Breakfast", 42.0, 22.0, 14.0, 374),
            meal(3, "Lunch", 58.0, 32.0, 18.0, 518),
        ];
        Self::new(Vec::new(), meals, None)
    }

    /// Five weigh-ins, five daily intake totals and a profile with BMR/TDEE
    pub fn health_overview() -> Self {
        let weights = vec![
            WeightEntry::new(date(1, 1), 70.5),
            WeightEntry::new(date(1, 8), 70.2),
            WeightEntry::new(date(1, 15), 69.8),
            WeightEntry::new(date(1, 22), 69.5),
            WeightEntry::new(date(1, 29), 69.3),
        ];
        let meals = vec![
            meal(1, "Daily total", 155.0, 75.0, 53.0, 1402),
            meal(2, "Daily total", 143.0, 93.0, 50.0, 1382),
            meal(3, "Daily total", 158.0, 82.0, 48.0, 1410),
            meal(4, "Daily total", 150.0, 88.0, 52.0, 1395),
            meal(5, "Daily total", 162.0, 78.0, 55.0, 1420),
        ];
        let profile = PersonalProfile {
            age: 28,
            gender: Gender::Male,
            height_cm: 175.0,
            activity_level: ActivityLevel::Moderate,
            bmr: Some(1680.0),
            tdee: Some(2604.0),
            goal: None,
        };
        Self::new(weights, meals, Some(profile))
    }
}

impl DataSource for SampleData {
    fn weight_entries(&self) -> SourceResult<Vec<WeightEntry>> {
        Ok(self.weights.clone())
    }

    fn meal_entries(&self) -> SourceResult<Vec<MealEntry>> {
        Ok(self.meals.clone())
    }

    fn profile(&self) -> SourceResult<Option<PersonalProfile>> {
        Ok(self.profile.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_sizes() {
        let weights = SampleData::weight_tracking();
        assert_eq!(weights.weight_entries().unwrap().len(), 6);
        assert!(weights.meal_entries().unwrap().is_empty());

        assert_eq!(SampleData::meal_log().meal_entries().unwrap().len(), 8);

        let health = SampleData::health_overview();
        assert_eq!(health.weight_entries().unwrap().len(), 5);
        assert_eq!(health.meal_entries().unwrap().len(), 5);
        assert_eq!(health.profile().unwrap().and_then(|p| p.tdee), Some(2604.0));
    }

    #[test]
    fn test_fixture_dates_are_real() {
        let weights = SampleData::weight_tracking().weight_entries().unwrap();
        assert_eq!(weights[5].date, NaiveDate::from_ymd_opt(2024, 2, 5).unwrap());
    }
}
