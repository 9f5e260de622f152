//! Daily calorie and macronutrient analysis

use serde::Serialize;

use super::aggregate::{aggregate_daily_totals, DailyTotals};
use crate::error::AnalysisResult;
use crate::models::MealEntry;
use crate::nutrition::{MacroGrams, MacroPercentages};
use crate::stats::{linear_trend, mean, round_to, Summary, Trend};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalorieAnalysis {
    pub total_days: usize,
    /// Mean, spread and range of daily calorie totals
    pub calories: Summary,
    /// Average grams eaten per day
    pub avg_macros: MacroGrams,
    pub avg_meals_per_day: f64,
    /// `None` when the average day has no macro calories
    pub macro_percentages: Option<MacroPercentages>,
    /// Daily calories against day index
    pub trend: Trend,
    pub daily: Vec<DailyTotals>,
}

impl CalorieAnalysis {
    /// The figures as reported, to one decimal
    pub fn rounded(&self) -> Self {
        Self {
            calories: Summary {
                mean: round_to(self.calories.mean, 1),
                std_dev: round_to(self.calories.std_dev, 1),
                ..self.calories
            },
            avg_macros: self.avg_macros.round_to(1),
            avg_meals_per_day: round_to(self.avg_meals_per_day, 1),
            macro_percentages: self.macro_percentages.map(|p| p.round_to(1)),
            ..self.clone()
        }
    }
}

/// Analyze meal logs per day. Needs at least one meal.
pub fn analyze_daily_calories(meals: &[MealEntry]) -> AnalysisResult<CalorieAnalysis> {
    let daily = aggregate_daily_totals(meals)?;

    let calories: Vec<f64> = daily.iter().map(|d| d.calories as f64).collect();
    let meals_per_day: Vec<f64> = daily.iter().map(|d| d.meals as f64).collect();
    let day_index: Vec<f64> = (0..daily.len()).map(|i| i as f64).collect();

    let avg_macros = MacroGrams::new(
        mean(&daily.iter().map(|d| d.macros.carbs).collect::<Vec<_>>())?,
        mean(&daily.iter().map(|d| d.macros.protein).collect::<Vec<_>>())?,
        mean(&daily.iter().map(|d| d.macros.fat).collect::<Vec<_>>())?,
    );

    Ok(CalorieAnalysis {
        total_days: daily.len(),
        calories: Summary::compute(&calories)?,
        avg_macros,
        avg_meals_per_day: mean(&meals_per_day)?,
        macro_percentages: avg_macros.percentages(),
        trend: linear_trend(&calories, &day_index),
        daily,
    })
}
