//! Built-in food table
//!
//! Calories and macros per 100 g for common foods, with lookup, search and
//! conversion of a weighed portion into a meal entry.

use chrono::NaiveDate;
use serde::Serialize;

use super::macros::MacroGrams;
use crate::models::MealEntry;
use crate::stats::round_to;

/// Search returns at most this many names
pub const MAX_SEARCH_RESULTS: usize = 5;

/// Nutrients in 100 g of a food
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FoodNutrients {
    pub name: &'static str,
    pub calories: f64,
    pub macros: MacroGrams,
}

const fn food(name: &'static str, calories: f64, carbs: f64, protein: f64, fat: f64) -> FoodNutrients {
    FoodNutrients {
        name,
        calories,
        macros: MacroGrams::new(carbs, protein, fat),
    }
}

pub const FOODS: &[FoodNutrients] = &[
    // Grains
    food("white rice", 130.0, 28.0, 2.7, 0.3),
    food("brown rice", 111.0, 23.0, 2.6, 0.9),
    food("bread", 265.0, 49.0, 9.0, 3.2),
    food("pho", 85.0, 17.0, 3.0, 0.5),
    food("rice vermicelli", 109.0, 25.0, 2.2, 0.1),
    food("noodles", 138.0, 25.0, 4.5, 0.9),
    // Proteins
    food("beef", 250.0, 0.0, 26.0, 15.0),
    food("pork", 242.0, 0.0, 27.0, 14.0),
    food("chicken", 165.0, 0.0, 31.0, 3.6),
    food("fish", 206.0, 0.0, 22.0, 12.0),
    food("shrimp", 99.0, 0.2, 24.0, 0.3),
    food("egg", 155.0, 1.1, 13.0, 11.0),
    food("tofu", 76.0, 1.9, 8.0, 4.8),
    // Vegetables
    food("leafy greens", 13.0, 2.2, 1.5, 0.2),
    food("tomato", 18.0, 3.9, 0.9, 0.2),
    food("cucumber", 16.0, 4.0, 0.7, 0.1),
    food("carrot", 41.0, 10.0, 0.9, 0.2),
    food("potato", 77.0, 17.0, 2.0, 0.1),
    food("sweet potato", 86.0, 20.0, 1.6, 0.1),
    // Fruits
    food("banana", 89.0, 23.0, 1.1, 0.3),
    food("apple", 52.0, 14.0, 0.3, 0.2),
    food("orange", 47.0, 12.0, 0.9, 0.1),
    food("mango", 60.0, 15.0, 0.8, 0.4),
    food("grapes", 62.0, 16.0, 0.6, 0.2),
    food("watermelon", 30.0, 8.0, 0.6, 0.2),
    // Dairy
    food("milk", 42.0, 5.0, 3.4, 1.0),
    food("yogurt", 59.0, 3.6, 10.0, 0.4),
    food("cheese", 113.0, 4.0, 11.0, 6.0),
    // Nuts
    food("peanuts", 567.0, 16.0, 26.0, 49.0),
    food("almonds", 579.0, 22.0, 21.0, 50.0),
    food("walnuts", 654.0, 14.0, 15.0, 65.0),
];

/// A weighed amount of one food
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodPortion {
    pub name: &'static str,
    pub grams: f64,
    pub calories: f64,
    pub macros: MacroGrams,
}

impl FoodPortion {
    /// Meal entry named "<food> (<grams>g)" with macros to one decimal
    ///
    /// Total calories come from the rounded macros at 4/4/9 kcal per gram.
    pub fn to_meal_entry(&self, date: NaiveDate) -> MealEntry {
        let macros = self.macros.round_to(1);
        let total_calories = macros.calories().total().round().max(0.0) as u32;
        MealEntry::new(date, format!("{} ({}g)", self.name, self.grams), macros, total_calories)
    }
}

/// Exact name match, ignoring case and surrounding whitespace
pub fn lookup(name: &str) -> Option<&'static FoodNutrients> {
    let name = name.trim().to_lowercase();
    FOODS.iter().find(|f| f.name == name)
}

/// Names containing `query`, in table order
pub fn search(query: &str) -> Vec<&'static str> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }
    FOODS
        .iter()
        .filter(|f| f.name.contains(&query))
        .map(|f| f.name)
        .take(MAX_SEARCH_RESULTS)
        .collect()
}

/// Scale the per-100 g values to `grams`
///
/// `None` for an unknown food or a weight that is not a positive number.
pub fn analyze(name: &str, grams: f64) -> Option<FoodPortion> {
    if !grams.is_finite() || grams <= 0.0 {
        return None;
    }
    let food = lookup(name)?;
    let multiplier = grams / 100.0;
    Some(FoodPortion {
        name: food.name,
        grams,
        calories: round_to(food.calories * multiplier, 1),
        macros: food.macros.scale(multiplier),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_ignores_case() {
        let food = lookup("  Chicken ").unwrap();
        assert_eq!(food.calories, 165.0);
        assert_eq!(food.macros.protein, 31.0);
        assert!(lookup("dragon fruit").is_none());
    }

    #[test]
    fn test_search_substring() {
        assert_eq!(search("rice"), vec!["white rice", "brown rice", "rice vermicelli"]);
        assert_eq!(search("POTATO"), vec!["potato", "sweet potato"]);
        assert!(search("pizza").is_empty());
        assert!(search("  ").is_empty());
    }

    #[test]
    fn test_search_is_capped() {
        // "e" appears in most names
        assert_eq!(search("e").len(), MAX_SEARCH_RESULTS);
    }

    #[test]
    fn test_analyze_scales_per_100g() {
        let portion = analyze("white rice", 150.0).unwrap();
        assert_eq!(portion.name, "white rice");
        assert!((portion.calories - 195.0).abs() < 1e-9);
        assert!((portion.macros.carbs - 42.0).abs() < 1e-9);
        assert!((portion.macros.protein - 4.05).abs() < 1e-9);
        assert!((portion.macros.fat - 0.45).abs() < 1e-9);
    }

    #[test]
    fn test_analyze_rejects_bad_input() {
        assert!(analyze("pizza", 100.0).is_none());
        assert!(analyze("egg", 0.0).is_none());
        assert!(analyze("egg", -50.0).is_none());
        assert!(analyze("egg", f64::NAN).is_none());
    }

    #[test]
    fn test_portion_to_meal_entry() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let entry = analyze("Egg", 60.0).unwrap().to_meal_entry(date);

        assert_eq!(entry.date, date);
        assert_eq!(entry.meal_name, "egg (60g)");
        // 0.66 g carbs, 7.8 g protein, 6.6 g fat
        assert!((entry.carbs - 0.7).abs() < 1e-9);
        assert!((entry.protein - 7.8).abs() < 1e-9);
        assert!((entry.fat - 6.6).abs() < 1e-9);
        // 0.7 * 4 + 7.8 * 4 + 6.6 * 9 = 93.4
        assert_eq!(entry.total_calories, 93);
    }

    #[test]
    fn test_fractional_grams_in_meal_name() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let entry = analyze("banana", 87.5).unwrap().to_meal_entry(date);
        assert_eq!(entry.meal_name, "banana (87.5g)");
    }
}
