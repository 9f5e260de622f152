//! Report generation
//!
//! Plain-text reports with fixed section headers, and PNG charts drawn with plotters.

pub mod calories;
pub mod charts;
pub mod health;
pub mod weight;

use crate::error::AnalysisResult;

pub use calories::{calorie_insights, calorie_report, format_calorie_report};
pub use charts::{calorie_chart, health_dashboard, save_png, weight_chart, ChartError};
pub use health::{format_health_report, health_recommendations};
pub use weight::{format_weight_report, weight_insights, weight_report};

/// Render a successful analysis, or just the error message when data was insufficient
pub(crate) fn render_or_message<T>(result: &AnalysisResult<T>, render: fn(&T) -> String) -> String {
    match result {
        Ok(analysis) => render(analysis),
        Err(e) => e.to_string(),
    }
}

/// `{:+.N}` style signed number
pub(crate) fn signed(value: f64, decimals: usize) -> String {
    format!("{:+.*}", decimals, value)
}
