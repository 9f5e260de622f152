//! Aggregate analyzer
//!
//! Per-date aggregation, weight and calorie analyses, and the health score.

pub mod aggregate;
pub mod calories;
pub mod health;
pub mod score;
pub mod weight;

pub use aggregate::{aggregate_daily_totals, group_by_date, DailyTotals};
pub use calories::{analyze_daily_calories, CalorieAnalysis};
pub use health::{build_health_overview, EnergyProfile, HealthOverview, NutritionAverages, WeightChange};
pub use score::{calculate_health_score, HealthScore, ScoreBand, ScoreBreakdown, ScoreInputs};
pub use weight::{analyze_weight_trend, WeightAnalysis};
