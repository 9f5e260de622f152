//! Descriptive statistics

use serde::Serialize;

use crate::error::{AnalysisError, AnalysisResult};

/// Arithmetic mean
pub fn mean(values: &[f64]) -> AnalysisResult<f64> {
    AnalysisError::require(1, values.len())?;
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Round half away from zero to `decimals` places
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Bessel-corrected standard deviation. Zero for fewer than two values.
pub fn sample_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let avg = values.iter().sum::<f64>() / values.len() as f64;
    let variance = values.iter()
        .map(|v| (v - avg).powi(2))
        .sum::<f64>() / (values.len() - 1) as f64;
    variance.sqrt()
}

pub fn min(values: &[f64]) -> AnalysisResult<f64> {
    AnalysisError::require(1, values.len())?;
    Ok(values.iter().cloned().fold(f64::INFINITY, f64::min))
}

pub fn max(values: &[f64]) -> AnalysisResult<f64> {
    AnalysisError::require(1, values.len())?;
    Ok(values.iter().cloned().fold(f64::NEG_INFINITY, f64::max))
}

/// Pairwise deltas `values[i] - values[i - 1]`
pub fn successive_differences(values: &[f64]) -> Vec<f64> {
    values.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Count, mean, spread and range of a sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl Summary {
    pub fn compute(values: &[f64]) -> AnalysisResult<Self> {
        Ok(Self {
            count: values.len(),
            mean: mean(values)?,
            std_dev: sample_std_dev(values),
            min: min(values)?,
            max: max(values)?,
        })
    }

    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(-2.004, 2), -2.0);
        assert_eq!(round_to(1225.3333, 1), 1225.3);
        assert_eq!(round_to(-0.30049, 3), -0.3);
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-2.5, 0), -3.0);
    }

    #[test]
    fn test_mean_empty_is_insufficient() {
        assert_eq!(
            mean(&[]),
            Err(AnalysisError::InsufficientData { required: 1, actual: 0 })
        );
    }

    #[test]
    fn test_mean() {
        let m = mean(&[1402.0, 1382.0, 1410.0, 1395.0, 1420.0]).unwrap();
        assert!((m - 1401.8).abs() < 1e-9);
    }

    #[test]
    fn test_std_dev_single_value_is_zero() {
        assert_eq!(sample_std_dev(&[72.0]), 0.0);
        assert_eq!(sample_std_dev(&[]), 0.0);
    }

    #[test]
    fn test_std_dev_uses_bessel_correction() {
        // deviations -2, 0, 2 -> 8 / (3 - 1) = 4
        let sd = sample_std_dev(&[1.0, 3.0, 5.0]);
        assert!((sd - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_min_max() {
        let values = [1402.0, 1382.0, 1410.0];
        assert_eq!(min(&values), Ok(1382.0));
        assert_eq!(max(&values), Ok(1410.0));
        assert!(min(&[]).is_err());
        assert!(max(&[]).is_err());
    }

    #[test]
    fn test_successive_differences() {
        let diffs = successive_differences(&[70.5, 70.2, 69.8]);
        assert_eq!(diffs.len(), 2);
        assert!((diffs[0] + 0.3).abs() < 1e-9);
        assert!((diffs[1] + 0.4).abs() < 1e-9);
        assert!(successive_differences(&[70.0]).is_empty());
    }

    #[test]
    fn test_summary() {
        let summary = Summary::compute(&[1402.0, 1382.0, 1400.0]).unwrap();
        assert_eq!(summary.count, 3);
        assert_eq!(summary.min, 1382.0);
        assert_eq!(summary.max, 1402.0);
        assert_eq!(summary.range(), 20.0);
        assert!(Summary::compute(&[]).is_err());
    }
}
