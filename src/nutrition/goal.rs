//! Weight goals and the calorie roadmap toward them

use serde::{Deserialize, Serialize};

use super::macros::{MacroGrams, KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};

/// Energy stored in one kilogram of body weight
pub const KCAL_PER_KG: f64 = 7700.0;

/// Milestones are listed for at most this many weeks
pub const MAX_MILESTONE_WEEKS: u32 = 12;

/// Suggested calorie split for a roadmap
const CARB_SHARE: f64 = 0.45;
const PROTEIN_SHARE: f64 = 0.25;
const FAT_SHARE: f64 = 0.30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalKind {
    Lose,
    Gain,
    Maintain,
}

impl GoalKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalKind::Lose => "lose",
            GoalKind::Gain => "gain",
            GoalKind::Maintain => "maintain",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightGoal {
    pub current_weight: f64,
    pub target_weight: f64,
    #[serde(rename = "goalType", alias = "kind")]
    pub kind: GoalKind,
    #[serde(alias = "timeframe")]
    pub weeks: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Milestone {
    pub week: u32,
    pub target_weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Roadmap {
    pub target_calories: f64,
    pub macros: MacroGrams,
    pub milestones: Vec<Milestone>,
}

impl WeightGoal {
    /// Kilograms to move per week; zero for a zero-week timeframe
    pub fn weekly_target(&self) -> f64 {
        if self.weeks == 0 {
            return 0.0;
        }
        (self.target_weight - self.current_weight).abs() / self.weeks as f64
    }

    /// Daily calories, macro grams and weekly milestones against a TDEE
    pub fn roadmap(&self, tdee: f64) -> Roadmap {
        let daily_adjustment = (self.weekly_target() * KCAL_PER_KG / 7.0).round();
        let target_calories = match self.kind {
            GoalKind::Lose => tdee - daily_adjustment,
            GoalKind::Gain => tdee + daily_adjustment,
            GoalKind::Maintain => tdee,
        };

        let macros = MacroGrams::new(
            (target_calories * CARB_SHARE / KCAL_PER_G_CARBS).round(),
            (target_calories * PROTEIN_SHARE / KCAL_PER_G_PROTEIN).round(),
            (target_calories * FAT_SHARE / KCAL_PER_G_FAT).round(),
        );

        let delta = self.target_weight - self.current_weight;
        let milestones = (1..=self.weeks.min(MAX_MILESTONE_WEEKS))
            .map(|week| Milestone {
                week,
                target_weight: self.current_weight + delta * (week as f64 / self.weeks as f64),
            })
            .collect();

        Roadmap {
            target_calories,
            macros,
            milestones,
        }
    }
}
