//! Calorie and nutrition report

use super::render_or_message;
use crate::analysis::CalorieAnalysis;
use crate::error::AnalysisResult;

pub fn calorie_report(result: &AnalysisResult<CalorieAnalysis>) -> String {
    render_or_message(result, format_calorie_report)
}

/// Missing percentages display as "0%"
fn percent(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}%", v),
        None => "0%".to_string(),
    }
}

/// Advisory sentences for carbs, protein, fat and calorie regularity, in that order
///
/// Thresholds apply to the one-decimal figures the report prints.
pub fn calorie_insights(analysis: &CalorieAnalysis) -> Vec<&'static str> {
    let analysis = analysis.rounded();
    let pct = analysis.macro_percentages;
    let carb_pct = pct.map(|p| p.carbs).unwrap_or(0.0);
    let protein_pct = pct.map(|p| p.protein).unwrap_or(0.0);
    let fat_pct = pct.map(|p| p.fat).unwrap_or(0.0);

    let mut insights = Vec::with_capacity(4);

    insights.push(if carb_pct > 60.0 {
        "High carb share (>60%). Consider reducing carbs and adding protein."
    } else if carb_pct < 40.0 {
        "Low carb share (<40%). You may need more carbs for energy."
    } else {
        "Carb share is reasonable (40-60%)."
    });

    insights.push(if protein_pct < 15.0 {
        "Low protein (<15%). Eat more protein to maintain muscle."
    } else if protein_pct > 30.0 {
        "High protein (>30%). Keep it balanced with the other macros."
    } else {
        "Protein share is good (15-30%)."
    });

    insights.push(if fat_pct < 20.0 {
        "Low fat (<20%). Fat is needed for vitamin absorption and hormones."
    } else if fat_pct > 35.0 {
        "High fat (>35%). Consider cutting fat to control calories."
    } else {
        "Fat share is reasonable (20-35%)."
    });

    insights.push(if analysis.calories.std_dev > 300.0 {
        "Daily calories vary a lot. Try to eat more regularly."
    } else {
        "Daily calories are steady. Good eating habits."
    });

    insights
}

pub fn format_calorie_report(analysis: &CalorieAnalysis) -> String {
    let analysis = &analysis.rounded();
    let pct = analysis.macro_percentages;
    let calories = &analysis.calories;

    let mut report = format!(
        r#"
=== CALORIE & NUTRITION REPORT ===

📊 OVERVIEW:
• Days tracked: {} days
• Average calories/day: {:.1} kcal
• Average meals/day: {:.1}
• Calorie variability: ±{:.1} kcal

📈 AVERAGE MACRO SPLIT:
• Carbs: {:.1}g ({} of calories)
• Protein: {:.1}g ({} of calories)
• Fat: {:.1}g ({} of calories)

📊 CALORIE RANGE:
• Highest: {:.0} kcal
• Lowest: {:.0} kcal
• Spread: {:.0} kcal

💡 NUTRITION ASSESSMENT:
"#,
        analysis.total_days,
        calories.mean,
        analysis.avg_meals_per_day,
        calories.std_dev,
        analysis.avg_macros.carbs,
        percent(pct.map(|p| p.carbs)),
        analysis.avg_macros.protein,
        percent(pct.map(|p| p.protein)),
        analysis.avg_macros.fat,
        percent(pct.map(|p| p.fat)),
        calories.max,
        calories.min,
        calories.range(),
    );

    for insight in calorie_insights(analysis) {
        report.push_str("• ");
        report.push_str(insight);
        report.push('\n');
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze_daily_calories;
    use crate::models::MealEntry;
    use crate::nutrition::{MacroGrams, MacroPercentages};
    use crate::source::{DataSource, SampleData};
    use chrono::NaiveDate;

    fn sample_analysis() -> CalorieAnalysis {
        let meals = SampleData::meal_log().meal_entries().unwrap();
        analyze_daily_calories(&meals).unwrap()
    }

    #[test]
    fn test_sample_report() {
        let report = format_calorie_report(&sample_analysis());
        assert!(report.contains("=== CALORIE & NUTRITION REPORT ==="));
        assert!(report.contains("• Days tracked: 3 days"));
        assert!(report.contains("• Average calories/day: 1225.3 kcal"));
        assert!(report.contains("• Highest: 1402 kcal"));
        assert!(report.contains("• Lowest: 892 kcal"));
        assert!(report.contains("• Spread: 510 kcal"));
        assert!(report.contains("• Carbs: 132.7g ("));
    }

    #[test]
    fn test_sample_insights() {
        // std dev of 1402, 1382, 892 is about 289
        let insights = calorie_insights(&sample_analysis());
        assert_eq!(insights.len(), 4);
        assert_eq!(insights[0], "Carb share is reasonable (40-60%).");
        assert_eq!(insights[3], "Daily calories are steady. Good eating habits.");
    }

    #[test]
    fn test_threshold_branches() {
        let mut analysis = sample_analysis();
        analysis.macro_percentages = Some(MacroPercentages {
            carbs: 65.0,
            protein: 12.0,
            fat: 23.0,
        });
        analysis.calories.std_dev = 350.0;

        let insights = calorie_insights(&analysis);
        assert!(insights[0].starts_with("High carb share"));
        assert!(insights[1].starts_with("Low protein"));
        assert!(insights[2].starts_with("Fat share is reasonable"));
        assert!(insights[3].contains("eat more regularly"));
    }

    #[test]
    fn test_carb_share_printed_as_sixty_is_reasonable() {
        let mut analysis = sample_analysis();
        analysis.macro_percentages = Some(MacroPercentages {
            carbs: 60.04,
            protein: 20.0,
            fat: 19.96,
        });
        analysis.calories.std_dev = 300.04;

        let insights = calorie_insights(&analysis);
        assert_eq!(insights[0], "Carb share is reasonable (40-60%).");
        assert!(insights[2].starts_with("Fat share is reasonable"));
        assert!(insights[3].contains("steady"));

        let report = format_calorie_report(&analysis);
        assert!(report.contains("(60.0% of calories)"));
        assert!(report.contains("• Calorie variability: ±300.0 kcal"));
    }

    #[test]
    fn test_missing_percentages_display_as_zero() {
        let meals = vec![MealEntry::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            "Water",
            MacroGrams::zero(),
            0,
        )];
        let analysis = analyze_daily_calories(&meals).unwrap();
        let report = format_calorie_report(&analysis);
        assert!(report.contains("• Carbs: 0.0g (0% of calories)"));
        assert!(calorie_insights(&analysis)[0].starts_with("Low carb share"));
    }

    #[test]
    fn test_no_meals_is_plain_message() {
        let report = calorie_report(&analyze_daily_calories(&[]));
        assert_eq!(report, "Insufficient data: need at least 1 data point(s), got 0");
    }
}
