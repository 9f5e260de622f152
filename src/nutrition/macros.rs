//! Macronutrient grams and their calorie split
//!
//! Energy densities: carbohydrate 4 kcal/g, protein 4 kcal/g, fat 9 kcal/g.

use serde::{Deserialize, Serialize};

use crate::stats::round_to;

pub const KCAL_PER_G_CARBS: f64 = 4.0;
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Grams of each macronutrient
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroGrams {
    pub carbs: f64,
    pub protein: f64,
    pub fat: f64,
}

/// Calories contributed by each macronutrient
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MacroCalories {
    pub carbs: f64,
    pub protein: f64,
    pub fat: f64,
}

impl MacroCalories {
    pub fn total(&self) -> f64 {
        self.carbs + self.protein + self.fat
    }
}

/// Share of macro calories, each in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacroPercentages {
    pub carbs: f64,
    pub protein: f64,
    pub fat: f64,
}

impl MacroPercentages {
    pub fn round_to(&self, decimals: i32) -> Self {
        Self {
            carbs: round_to(self.carbs, decimals),
            protein: round_to(self.protein, decimals),
            fat: round_to(self.fat, decimals),
        }
    }
}

impl MacroGrams {
    pub const fn new(carbs: f64, protein: f64, fat: f64) -> Self {
        Self { carbs, protein, fat }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn scale(&self, multiplier: f64) -> Self {
        Self {
            carbs: self.carbs * multiplier,
            protein: self.protein * multiplier,
            fat: self.fat * multiplier,
        }
    }

    pub fn round_to(&self, decimals: i32) -> Self {
        Self {
            carbs: round_to(self.carbs, decimals),
            protein: round_to(self.protein, decimals),
            fat: round_to(self.fat, decimals),
        }
    }

    pub fn calories(&self) -> MacroCalories {
        MacroCalories {
            carbs: self.carbs * KCAL_PER_G_CARBS,
            protein: self.protein * KCAL_PER_G_PROTEIN,
            fat: self.fat * KCAL_PER_G_FAT,
        }
    }

    /// Percent of macro calories per nutrient; `None` when there are no macro calories
    pub fn percentages(&self) -> Option<MacroPercentages> {
        let calories = self.calories();
        let total = calories.total();
        if total <= 0.0 {
            return None;
        }
        Some(MacroPercentages {
            carbs: calories.carbs / total * 100.0,
            protein: calories.protein / total * 100.0,
            fat: calories.fat / total * 100.0,
        })
    }
}

impl std::ops::Add for MacroGrams {
    type Output = MacroGrams;

    fn add(self, other: MacroGrams) -> MacroGrams {
        MacroGrams {
            carbs: self.carbs + other.carbs,
            protein: self.protein + other.protein,
            fat: self.fat + other.fat,
        }
    }
}

impl std::iter::Sum for MacroGrams {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(MacroGrams::zero(), |acc, m| acc + m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calories_use_energy_densities() {
        let calories = MacroGrams::new(150.0, 85.0, 52.0).calories();
        assert_eq!(calories.carbs, 600.0);
        assert_eq!(calories.protein, 340.0);
        assert_eq!(calories.fat, 468.0);
        assert_eq!(calories.total(), 1408.0);
    }

    #[test]
    fn test_round_to_each_nutrient() {
        let rounded = MacroGrams::new(132.6667, 61.04, 40.25).round_to(1);
        assert!((rounded.carbs - 132.7).abs() < 1e-9);
        assert!((rounded.protein - 61.0).abs() < 1e-9);
        assert!((rounded.fat - 40.3).abs() < 1e-9);
    }

    #[test]
    fn test_percentages_sum_to_100() {
        let pct = MacroGrams::new(150.0, 85.0, 52.0).percentages().unwrap();
        assert!((pct.carbs + pct.protein + pct.fat - 100.0).abs() < 0.1);
        assert!((pct.carbs - 42.6).abs() < 0.1);
        assert!((pct.protein - 24.1).abs() < 0.1);
        assert!((pct.fat - 33.2).abs() < 0.1);
    }

    #[test]
    fn test_percentages_absent_without_calories() {
        assert_eq!(MacroGrams::zero().percentages(), None);
    }

    #[test]
    fn test_sum_and_scale() {
        let total: MacroGrams = vec![
            MacroGrams::new(45.0, 20.0, 15.0),
            MacroGrams::new(60.0, 35.0, 20.0),
        ]
        .into_iter()
        .sum();
        assert_eq!(total, MacroGrams::new(105.0, 55.0, 35.0));
        assert_eq!(total.scale(0.5), MacroGrams::new(52.5, 27.5, 17.5));
    }
}
