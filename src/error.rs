//! Analysis error type
//!
//! The statistics core has exactly one failure mode: not enough data points.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("Insufficient data: need at least {required} data point(s), got {actual}")]
    InsufficientData { required: usize, actual: usize },
}

impl AnalysisError {
    /// Fail unless `actual >= required`
    pub fn require(required: usize, actual: usize) -> AnalysisResult<()> {
        if actual < required {
            tracing::debug!(required, actual, "insufficient data for analysis");
            return Err(AnalysisError::InsufficientData { required, actual });
        }
        Ok(())
    }
}

pub type AnalysisResult<T> = Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require() {
        assert!(AnalysisError::require(2, 2).is_ok());
        assert_eq!(
            AnalysisError::require(2, 1),
            Err(AnalysisError::InsufficientData { required: 2, actual: 1 })
        );
    }

    #[test]
    fn test_message() {
        let err = AnalysisError::InsufficientData { required: 2, actual: 0 };
        assert_eq!(
            err.to_string(),
            "Insufficient data: need at least 2 data point(s), got 0"
        );
    }
}
