//! Energy expenditure estimates
//!
//! BMR via the Mifflin-St Jeor equation, scaled to TDEE by activity level.

use serde::Serialize;

use crate::models::{Gender, PersonalProfile};

/// Daily deficit or surplus applied for weight loss or gain targets
pub const GOAL_ADJUSTMENT_KCAL: f64 = 500.0;

/// Basal metabolic rate in kcal/day
pub fn estimate_bmr(weight_kg: f64, height_cm: f64, age: u32, gender: Gender) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age as f64;
    match gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

/// BMR, TDEE and calorie targets, rounded to whole kcal
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnergyEstimate {
    pub bmr: f64,
    pub tdee: f64,
    pub weight_loss: f64,
    pub weight_gain: f64,
}

impl EnergyEstimate {
    pub fn for_profile(profile: &PersonalProfile, weight_kg: f64) -> Self {
        let bmr = estimate_bmr(weight_kg, profile.height_cm, profile.age, profile.gender);
        let tdee = bmr * profile.activity_level.multiplier();
        Self {
            bmr: bmr.round(),
            tdee: tdee.round(),
            weight_loss: (tdee - GOAL_ADJUSTMENT_KCAL).round(),
            weight_gain: (tdee + GOAL_ADJUSTMENT_KCAL).round(),
        }
    }
}
