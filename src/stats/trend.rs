//! Least-squares trends
//!
//! Slopes are per day when offsets are day offsets from the first sample.

use chrono::NaiveDate;
use serde::Serialize;

/// Direction of a fitted trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Decreasing,
    Increasing,
    Stable,
    InsufficientData,
}

impl TrendDirection {
    /// Only an exact zero slope counts as stable.
    pub fn from_slope(slope: f64) -> Self {
        if slope < 0.0 {
            TrendDirection::Decreasing
        } else if slope > 0.0 {
            TrendDirection::Increasing
        } else {
            TrendDirection::Stable
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TrendDirection::Decreasing => "decreasing",
            TrendDirection::Increasing => "increasing",
            TrendDirection::Stable => "stable",
            TrendDirection::InsufficientData => "insufficient data",
        }
    }
}

/// Fitted line `value = slope * offset + intercept`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Trend {
    pub slope: f64,
    pub intercept: f64,
    pub direction: TrendDirection,
}

impl Trend {
    pub fn value_at(&self, offset: f64) -> f64 {
        self.slope * offset + self.intercept
    }
}

/// Ordinary least squares fit of `values` against `offsets`.
///
/// Fewer than two points yields a zero slope labelled `InsufficientData`.
/// Offsets with no spread (every sample on the same day) yield a flat line
/// through the mean.
pub fn linear_trend(values: &[f64], offsets: &[f64]) -> Trend {
    let n = values.len().min(offsets.len());
    if n < 2 {
        tracing::debug!(points = n, "not enough points for a trend");
        return Trend {
            slope: 0.0,
            intercept: values.first().copied().unwrap_or(0.0),
            direction: TrendDirection::InsufficientData,
        };
    }

    let (values, offsets) = (&values[..n], &offsets[..n]);
    let x_mean = offsets.iter().sum::<f64>() / n as f64;
    let y_mean = values.iter().sum::<f64>() / n as f64;

    let mut covariance = 0.0;
    let mut x_variance = 0.0;
    for (x, y) in offsets.iter().zip(values) {
        covariance += (x - x_mean) * (y - y_mean);
        x_variance += (x - x_mean).powi(2);
    }

    let slope = if x_variance == 0.0 { 0.0 } else { covariance / x_variance };

    Trend {
        slope,
        intercept: y_mean - slope * x_mean,
        direction: TrendDirection::from_slope(slope),
    }
}

/// Days elapsed since the first date, as offsets for `linear_trend`
pub fn day_offsets(dates: &[NaiveDate]) -> Vec<f64> {
    match dates.first() {
        Some(first) => dates.iter()
            .map(|d| (*d - *first).num_days() as f64)
            .collect(),
        None => Vec::new(),
    }
}

/// Change between first and last value scaled to a seven-day week.
/// Zero when the span is zero days.
pub fn weekly_rate(first: f64, last: f64, span_days: i64) -> f64 {
    if span_days == 0 {
        return 0.0;
    }
    (last - first) / span_days as f64 * 7.0
}
