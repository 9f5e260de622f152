//! Nutrition calculation module
//!
//! Macro calorie splits, energy expenditure estimates, goal roadmaps and the food table.

pub mod energy;
pub mod foods;
pub mod goal;
pub mod macros;

pub use energy::{estimate_bmr, EnergyEstimate, GOAL_ADJUSTMENT_KCAL};
pub use foods::{FoodNutrients, FoodPortion, FOODS};
pub use goal::{GoalKind, Milestone, Roadmap, WeightGoal, KCAL_PER_KG};
pub use macros::{
    MacroCalories, MacroGrams, MacroPercentages, KCAL_PER_G_CARBS, KCAL_PER_G_FAT,
    KCAL_PER_G_PROTEIN,
};
