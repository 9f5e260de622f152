//! Health tracking score
//!
//! Four criteria worth up to 25 points each, evaluated against ordered rule
//! tables where the first matching row wins.

use serde::Serialize;

use crate::models::{MealEntry, PersonalProfile, WeightEntry};
use crate::nutrition::{MacroGrams, MacroPercentages};

pub const MAX_SCORE: u32 = 100;

/// (minimum weight entries, points)
pub const WEIGHT_LOG_RULES: &[(usize, u32)] = &[(5, 25), (3, 15), (1, 5)];

/// (minimum meal entries, points)
pub const CALORIE_LOG_RULES: &[(usize, u32)] = &[(7, 25), (5, 15), (3, 10), (1, 5)];

/// (maximum |average daily calories - TDEE|, points)
pub const CALORIE_BALANCE_RULES: &[(f64, u32)] =
    &[(100.0, 25), (200.0, 20), (300.0, 15), (500.0, 10)];

/// Points when calories are tracked but further from TDEE than every rule
pub const CALORIE_BALANCE_FLOOR: u32 = 5;

/// Target band for one macronutrient's share of calories, bounds inclusive
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroBand {
    pub ideal: (f64, f64),
    pub ideal_points: u32,
    pub acceptable: (f64, f64),
    pub acceptable_points: u32,
}

impl MacroBand {
    pub fn points(&self, percent: f64) -> u32 {
        let within = |(lo, hi): (f64, f64)| lo <= percent && percent <= hi;
        if within(self.ideal) {
            self.ideal_points
        } else if within(self.acceptable) {
            self.acceptable_points
        } else {
            0
        }
    }
}

pub const CARB_BAND: MacroBand = MacroBand {
    ideal: (45.0, 65.0),
    ideal_points: 10,
    acceptable: (35.0, 75.0),
    acceptable_points: 5,
};

pub const PROTEIN_BAND: MacroBand = MacroBand {
    ideal: (15.0, 25.0),
    ideal_points: 10,
    acceptable: (10.0, 30.0),
    acceptable_points: 5,
};

pub const FAT_BAND: MacroBand = MacroBand {
    ideal: (20.0, 35.0),
    ideal_points: 5,
    acceptable: (15.0, 40.0),
    acceptable_points: 2,
};

/// Points of the first rule whose minimum count is met
pub fn points_for_count(rules: &[(usize, u32)], count: usize) -> u32 {
    rules
        .iter()
        .find(|(min_count, _)| count >= *min_count)
        .map(|(_, points)| *points)
        .unwrap_or(0)
}

/// Points of the first rule whose maximum difference is not exceeded
pub fn points_for_difference(rules: &[(f64, u32)], difference: f64, floor: u32) -> u32 {
    rules
        .iter()
        .find(|(max_diff, _)| difference <= *max_diff)
        .map(|(_, points)| *points)
        .unwrap_or(floor)
}

/// Everything the score is computed from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreInputs {
    pub weight_logs: usize,
    pub calorie_logs: usize,
    /// Mean of per-day calorie totals
    pub avg_daily_calories: Option<f64>,
    pub tdee: Option<f64>,
    /// Shares of all logged macro calories
    pub macro_percentages: Option<MacroPercentages>,
}

impl ScoreInputs {
    pub fn from_logs(
        weights: &[WeightEntry],
        meals: &[MealEntry],
        profile: Option<&PersonalProfile>,
    ) -> Self {
        let avg_daily_calories = super::calories::analyze_daily_calories(meals)
            .ok()
            .map(|a| a.calories.mean);
        let total_macros: MacroGrams = meals.iter().map(|m| m.macros()).sum();

        Self {
            weight_logs: weights.len(),
            calorie_logs: meals.len(),
            avg_daily_calories,
            tdee: profile.and_then(|p| p.tdee).filter(|t| *t > 0.0),
            macro_percentages: total_macros.percentages(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub weight_tracking: u32,
    pub calorie_tracking: u32,
    pub calorie_balance: u32,
    pub macro_balance: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.weight_tracking + self.calorie_tracking + self.calorie_balance + self.macro_balance
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    NeedsImprovement,
}

impl ScoreBand {
    pub fn from_score(score: u32) -> Self {
        if score >= 80 {
            ScoreBand::Excellent
        } else if score >= 60 {
            ScoreBand::Good
        } else if score >= 40 {
            ScoreBand::Fair
        } else {
            ScoreBand::NeedsImprovement
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "excellent",
            ScoreBand::Good => "good",
            ScoreBand::Fair => "fair",
            ScoreBand::NeedsImprovement => "needs improvement",
        }
    }

    pub fn commentary(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent! You are tracking your health very well.",
            ScoreBand::Good => "Good! Keep up your tracking habits.",
            ScoreBand::Fair => "Fairly good, but there is room to improve.",
            ScoreBand::NeedsImprovement => "Your health tracking needs improvement.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthScore {
    pub value: u32,
    pub band: ScoreBand,
    pub breakdown: ScoreBreakdown,
}

pub fn calculate_health_score(inputs: &ScoreInputs) -> HealthScore {
    let calorie_balance = match (inputs.calorie_logs, inputs.avg_daily_calories, inputs.tdee) {
        (n, Some(avg), Some(tdee)) if n > 0 => {
            points_for_difference(CALORIE_BALANCE_RULES, (avg - tdee).abs(), CALORIE_BALANCE_FLOOR)
        }
        _ => 0,
    };

    let macro_balance = match (inputs.calorie_logs, inputs.macro_percentages) {
        (n, Some(pct)) if n > 0 => {
            CARB_BAND.points(pct.carbs) + PROTEIN_BAND.points(pct.protein) + FAT_BAND.points(pct.fat)
        }
        _ => 0,
    };

    let breakdown = ScoreBreakdown {
        weight_tracking: points_for_count(WEIGHT_LOG_RULES, inputs.weight_logs),
        calorie_tracking: points_for_count(CALORIE_LOG_RULES, inputs.calorie_logs),
        calorie_balance,
        macro_balance,
    };

    let value = breakdown.total().min(MAX_SCORE);

    HealthScore {
        value,
        band: ScoreBand::from_score(value),
        breakdown,
    }
}
