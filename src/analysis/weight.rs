//! Weight trend analysis

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{AnalysisError, AnalysisResult};
use crate::models::WeightEntry;
use crate::stats::{
    day_offsets, linear_trend, round_to, sample_std_dev, successive_differences, weekly_rate, Trend,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightAnalysis {
    pub current_weight: f64,
    pub starting_weight: f64,
    pub total_change: f64,
    /// kg per week, first to last entry
    pub weekly_change: f64,
    /// Least-squares fit, slope in kg per day
    pub trend: Trend,
    /// Standard deviation of the changes between consecutive measurements
    pub volatility: f64,
    pub total_days: i64,
    pub data_points: usize,
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
}

impl WeightAnalysis {
    /// The figures as reported: changes and volatility at the precision they are printed with
    pub fn rounded(&self) -> Self {
        Self {
            total_change: round_to(self.total_change, 2),
            weekly_change: round_to(self.weekly_change, 3),
            volatility: round_to(self.volatility, 2),
            ..self.clone()
        }
    }
}

/// Analyze a date-ordered weight series. Needs at least two entries.
pub fn analyze_weight_trend(entries: &[WeightEntry]) -> AnalysisResult<WeightAnalysis> {
    AnalysisError::require(2, entries.len())?;

    let weights: Vec<f64> = entries.iter().map(|e| e.weight).collect();
    let dates: Vec<NaiveDate> = entries.iter().map(|e| e.date).collect();

    let starting_weight = weights[0];
    let current_weight = weights[weights.len() - 1];
    let first_date = dates[0];
    let last_date = dates[dates.len() - 1];
    let total_days = (last_date - first_date).num_days();

    let trend = linear_trend(&weights, &day_offsets(&dates));

    Ok(WeightAnalysis {
        current_weight,
        starting_weight,
        total_change: current_weight - starting_weight,
        weekly_change: weekly_rate(starting_weight, current_weight, total_days),
        trend,
        volatility: sample_std_dev(&successive_differences(&weights)),
        total_days,
        data_points: entries.len(),
        first_date,
        last_date,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::TrendDirection;

    fn weekly_entries(weights: &[f64]) -> Vec<WeightEntry> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        weights
            .iter()
            .enumerate()
            .map(|(i, w)| WeightEntry::new(start + chrono::Duration::days(7 * i as i64), *w))
            .collect()
    }

    #[test]
    fn test_steady_loss() {
        let entries = weekly_entries(&[70.5, 70.2, 69.8, 69.5, 69.3, 69.0]);
        let analysis = analyze_weight_trend(&entries).unwrap();

        assert!((analysis.total_change + 1.5).abs() < 1e-9);
        assert_eq!(analysis.total_days, 35);
        assert!((analysis.weekly_change + 0.3).abs() < 1e-9);
        assert_eq!(analysis.trend.direction, TrendDirection::Decreasing);
        assert!(analysis.trend.slope < 0.0);
        assert_eq!(analysis.data_points, 6);
        assert_eq!(analysis.current_weight, 69.0);
        assert_eq!(analysis.starting_weight, 70.5);
    }

    #[test]
    fn test_volatility_of_changes() {
        // changes: -0.3, -0.4, -0.3, -0.2, -0.3
        let entries = weekly_entries(&[70.5, 70.2, 69.8, 69.5, 69.3, 69.0]);
        let analysis = analyze_weight_trend(&entries).unwrap();
        assert!((analysis.volatility - 0.0707).abs() < 1e-3);
    }

    #[test]
    fn test_two_points_have_zero_volatility() {
        let analysis = analyze_weight_trend(&weekly_entries(&[70.0, 71.0])).unwrap();
        assert_eq!(analysis.volatility, 0.0);
        assert_eq!(analysis.trend.direction, TrendDirection::Increasing);
    }

    #[test]
    fn test_same_day_entries_have_zero_weekly_rate() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let entries = vec![WeightEntry::new(day, 70.0), WeightEntry::new(day, 70.4)];
        let analysis = analyze_weight_trend(&entries).unwrap();
        assert_eq!(analysis.total_days, 0);
        assert_eq!(analysis.weekly_change, 0.0);
    }

    #[test]
    fn test_rounded_matches_printed_precision() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let entries = vec![
            WeightEntry::new(day, 70.0),
            WeightEntry::new(day + chrono::Duration::days(7), 67.996),
        ];
        let analysis = analyze_weight_trend(&entries).unwrap();
        assert!(analysis.total_change < -2.0);

        let rounded = analysis.rounded();
        assert_eq!(rounded.total_change, -2.0);
        assert_eq!(rounded.weekly_change, -2.004);
        assert_eq!(rounded.current_weight, 67.996);
        assert_eq!(rounded.trend, analysis.trend);
    }

    #[test]
    fn test_single_entry_is_insufficient() {
        assert_eq!(
            analyze_weight_trend(&weekly_entries(&[70.0])),
            Err(AnalysisError::InsufficientData { required: 2, actual: 1 })
        );
    }
}
