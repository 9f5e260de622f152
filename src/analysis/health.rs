//! Combined health overview
//!
//! Weight change, nutrition averages, energy targets and the tracking score
//! for the combined report. Each section is present only when its data is.

use serde::Serialize;

use super::calories::analyze_daily_calories;
use super::score::{calculate_health_score, HealthScore, ScoreInputs};
use crate::models::{ActivityLevel, MealEntry, PersonalProfile, WeightEntry};
use crate::nutrition::{MacroGrams, Roadmap};
use crate::stats::TrendDirection;

/// Weight entries and meal entries needed for the "consistent" verdict
pub const CONSISTENT_WEIGHT_LOGS: usize = 5;
pub const CONSISTENT_CALORIE_LOGS: usize = 7;

/// Recommend moving intake toward TDEE beyond this gap
pub const CALORIE_GAP_ADVICE_KCAL: f64 = 300.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightChange {
    pub current_weight: f64,
    pub change: f64,
    pub direction: TrendDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NutritionAverages {
    pub calories: f64,
    pub macros: MacroGrams,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnergyProfile {
    pub bmr: f64,
    pub tdee: f64,
    pub activity_level: ActivityLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthOverview {
    pub score: HealthScore,
    pub weight_logs: usize,
    pub calorie_logs: usize,
    pub weight: Option<WeightChange>,
    pub nutrition: Option<NutritionAverages>,
    pub energy: Option<EnergyProfile>,
    /// Average daily calories minus TDEE
    pub calorie_gap: Option<f64>,
    pub roadmap: Option<Roadmap>,
}

impl HealthOverview {
    pub fn is_consistent(&self) -> bool {
        self.weight_logs >= CONSISTENT_WEIGHT_LOGS && self.calorie_logs >= CONSISTENT_CALORIE_LOGS
    }
}

pub fn build_health_overview(
    weights: &[WeightEntry],
    meals: &[MealEntry],
    profile: Option<&PersonalProfile>,
) -> HealthOverview {
    let inputs = ScoreInputs::from_logs(weights, meals, profile);
    let score = calculate_health_score(&inputs);

    let weight = match (weights.first(), weights.last()) {
        (Some(first), Some(last)) if weights.len() >= 2 => {
            let change = last.weight - first.weight;
            Some(WeightChange {
                current_weight: last.weight,
                change,
                direction: TrendDirection::from_slope(change),
            })
        }
        _ => None,
    };

    let nutrition = analyze_daily_calories(meals).ok().map(|a| NutritionAverages {
        calories: a.calories.mean,
        macros: a.avg_macros,
    });

    let energy = profile.and_then(|p| match (p.bmr, p.tdee) {
        (Some(bmr), Some(tdee)) => Some(EnergyProfile {
            bmr,
            tdee,
            activity_level: p.activity_level,
        }),
        _ => None,
    });

    let calorie_gap = match (inputs.avg_daily_calories, inputs.tdee) {
        (Some(avg), Some(tdee)) => Some(avg - tdee),
        _ => None,
    };

    let roadmap = profile.and_then(|p| match (&p.goal, p.tdee) {
        (Some(goal), Some(tdee)) => Some(goal.roadmap(tdee)),
        _ => None,
    });

    HealthOverview {
        score,
        weight_logs: inputs.weight_logs,
        calorie_logs: inputs.calorie_logs,
        weight,
        nutrition,
        energy,
        calorie_gap,
        roadmap,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nutrition::{GoalKind, WeightGoal};
    use crate::source::{DataSource, SampleData};

    fn sample() -> (Vec<WeightEntry>, Vec<MealEntry>, Option<PersonalProfile>) {
        let source = SampleData::health_overview();
        (
            source.weight_entries().unwrap(),
            source.meal_entries().unwrap(),
            source.profile().unwrap(),
        )
    }

    #[test]
    fn test_sample_overview() {
        let (weights, meals, profile) = sample();
        let overview = build_health_overview(&weights, &meals, profile.as_ref());

        assert_eq!(overview.score.value, 65);
        let weight = overview.weight.unwrap();
        assert!((weight.change + 1.2).abs() < 1e-9);
        assert_eq!(weight.direction, TrendDirection::Decreasing);

        let nutrition = overview.nutrition.unwrap();
        assert!((nutrition.calories - 1401.8).abs() < 1e-9);
        assert!((nutrition.macros.carbs - 153.6).abs() < 1e-9);

        assert_eq!(overview.energy.unwrap().tdee, 2604.0);
        assert!((overview.calorie_gap.unwrap() + 1202.2).abs() < 1e-9);
        assert!(!overview.is_consistent());
        assert_eq!(overview.roadmap, None);
    }

    #[test]
    fn test_sections_absent_without_data() {
        let overview = build_health_overview(&[], &[], None);
        assert_eq!(overview.score.value, 0);
        assert_eq!(overview.weight, None);
        assert_eq!(overview.nutrition, None);
        assert_eq!(overview.energy, None);
        assert_eq!(overview.calorie_gap, None);
    }

    #[test]
    fn test_roadmap_when_goal_set() {
        let (weights, meals, profile) = sample();
        let mut profile = profile.unwrap();
        profile.goal = Some(WeightGoal {
            current_weight: 69.3,
            target_weight: 67.3,
            kind: GoalKind::Lose,
            weeks: 4,
        });

        let overview = build_health_overview(&weights, &meals, Some(&profile));
        let roadmap = overview.roadmap.unwrap();
        assert_eq!(roadmap.milestones.len(), 4);
        assert!(roadmap.target_calories < 2604.0);
    }
}
