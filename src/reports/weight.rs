//! Weight analysis report

use super::{render_or_message, signed};
use crate::analysis::WeightAnalysis;
use crate::error::AnalysisResult;

pub fn weight_report(result: &AnalysisResult<WeightAnalysis>) -> String {
    render_or_message(result, format_weight_report)
}

/// Advisory sentences, one per rule group
///
/// Thresholds apply to the figures as printed, so a change shown as -2.00 kg is not a loss.
pub fn weight_insights(analysis: &WeightAnalysis) -> Vec<&'static str> {
    let analysis = analysis.rounded();
    let mut insights = Vec::new();

    if analysis.total_change < -2.0 {
        insights.push("You have lost a significant amount of weight. Keep up your current routine!");
    } else if analysis.total_change > 2.0 {
        insights.push("Your weight has gone up a lot. Consider adjusting your diet and exercise.");
    } else {
        insights.push("Your weight is fairly stable. Keep up the good habits!");
    }

    if analysis.volatility > 1.0 {
        insights.push("Your weight fluctuates a lot. Weigh yourself at the same time of day.");
    } else {
        insights.push("Your measurements are consistent and the data looks reliable.");
    }

    if analysis.weekly_change.abs() > 0.5 {
        insights.push("Your weight is changing quickly. Make sure the change is safe.");
    }

    insights
}

pub fn format_weight_report(analysis: &WeightAnalysis) -> String {
    let analysis = &analysis.rounded();
    let mut report = format!(
        r#"
=== WEIGHT ANALYSIS REPORT ===

📊 OVERVIEW:
• Current weight: {:.1} kg
• Starting weight: {:.1} kg
• Total change: {} kg
• Tracking period: {} days
• Measurements: {}

📈 TREND:
• Direction: {}
• Rate of change: {} kg/week
• Volatility: {:.2} kg

💡 INSIGHTS:
"#,
        analysis.current_weight,
        analysis.starting_weight,
        signed(analysis.total_change, 2),
        analysis.total_days,
        analysis.data_points,
        analysis.trend.direction.label(),
        signed(analysis.weekly_change, 3),
        analysis.volatility,
    );

    for insight in weight_insights(analysis) {
        report.push_str("• ");
        report.push_str(insight);
        report.push('\n');
    }

    report
}
