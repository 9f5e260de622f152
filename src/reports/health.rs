//! Combined health report

use super::signed;
use crate::analysis::health::{CALORIE_GAP_ADVICE_KCAL, CONSISTENT_CALORIE_LOGS, CONSISTENT_WEIGHT_LOGS};
use crate::analysis::HealthOverview;
use crate::nutrition::Roadmap;
use crate::stats::TrendDirection;

/// Below this score the report asks for more regular tracking
const LOW_SCORE: u32 = 60;

const NEXT_GOALS: &[&str] = &[
    "Keep tracking every day",
    "Balance your nutrients better",
    "Set a concrete health goal",
];

fn weight_direction(direction: TrendDirection) -> &'static str {
    match direction {
        TrendDirection::Decreasing => "Losing weight",
        TrendDirection::Increasing => "Gaining weight",
        _ => "Stable",
    }
}

pub fn health_recommendations(overview: &HealthOverview) -> Vec<String> {
    let mut recommendations = Vec::new();

    if overview.weight_logs < CONSISTENT_WEIGHT_LOGS {
        recommendations.push("Weigh yourself more often (at least twice a week)".to_string());
    }
    if overview.calorie_logs < CONSISTENT_CALORIE_LOGS {
        recommendations.push("Log your calories every day for more accurate data".to_string());
    }
    if let (Some(gap), Some(energy)) = (overview.calorie_gap, overview.energy) {
        if gap.abs() > CALORIE_GAP_ADVICE_KCAL {
            recommendations.push(format!(
                "Bring your intake closer to your TDEE ({:.0} kcal)",
                energy.tdee
            ));
        }
    }
    if overview.score.value < LOW_SCORE {
        recommendations.push("Track more regularly to improve your health".to_string());
    }

    recommendations
}

fn roadmap_section(report: &mut String, roadmap: &Roadmap) {
    report.push_str(&format!(
        r#"
🗺️ GOAL ROADMAP:
• Target intake: {:.0} kcal/day
• Macros: {:.0}g carbs, {:.0}g protein, {:.0}g fat
"#,
        roadmap.target_calories, roadmap.macros.carbs, roadmap.macros.protein, roadmap.macros.fat,
    ));
    for milestone in &roadmap.milestones {
        report.push_str(&format!("• Week {}: {:.1} kg\n", milestone.week, milestone.target_weight));
    }
}

fn bullets<I, S>(report: &mut String, items: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for item in items {
        report.push_str("• ");
        report.push_str(item.as_ref());
        report.push('\n');
    }
}

pub fn format_health_report(overview: &HealthOverview) -> String {
    let mut report = format!(
        r#"
=== COMPREHENSIVE HEALTH REPORT ===

🏆 OVERALL HEALTH SCORE: {}/100
{}
"#,
        overview.score.value,
        overview.score.band.commentary(),
    );

    if let Some(weight) = &overview.weight {
        report.push_str(&format!(
            r#"
📏 WEIGHT:
• Current weight: {:.1} kg
• Total change: {} kg
• Trend: {}
"#,
            weight.current_weight,
            signed(weight.change, 1),
            weight_direction(weight.direction),
        ));
    }

    if let Some(nutrition) = &overview.nutrition {
        report.push_str(&format!(
            r#"
🍎 NUTRITION:
• Average calories: {:.0} kcal/day
• Average carbs: {:.0}g/day
• Average protein: {:.0}g/day
• Average fat: {:.0}g/day
"#,
            nutrition.calories, nutrition.macros.carbs, nutrition.macros.protein, nutrition.macros.fat,
        ));
    }

    if let Some(energy) = &overview.energy {
        report.push_str(&format!(
            r#"
⚡ ENERGY:
• BMR (basal metabolic rate): {:.0} kcal/day
• TDEE (total daily energy expenditure): {:.0} kcal/day
• Activity level: {}
"#,
            energy.bmr,
            energy.tdee,
            energy.activity_level.display_name(),
        ));
    }

    report.push_str(&format!(
        r#"
📊 TRACKING:
• Weight entries: {}
• Calorie entries: {}
• Consistency: {}

💡 RECOMMENDATIONS:
"#,
        overview.weight_logs,
        overview.calorie_logs,
        if overview.is_consistent() { "Good" } else { "Needs improvement" },
    ));
    bullets(&mut report, health_recommendations(overview));

    report.push_str("\n🎯 NEXT GOALS:\n");
    bullets(&mut report, NEXT_GOALS);

    if let Some(roadmap) = &overview.roadmap {
        roadmap_section(&mut report, roadmap);
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::build_health_overview;
    use crate::models::{MealEntry, PersonalProfile, WeightEntry};
    use crate::nutrition::{GoalKind, WeightGoal};
    use crate::source::{DataSource, SampleData};

    fn sample() -> (Vec<WeightEntry>, Vec<MealEntry>, PersonalProfile) {
        let source = SampleData::health_overview();
        (
            source.weight_entries().unwrap(),
            source.meal_entries().unwrap(),
            source.profile().unwrap().unwrap(),
        )
    }

    #[test]
    fn test_sample_report() {
        let (weights, meals, profile) = sample();
        let overview = build_health_overview(&weights, &meals, Some(&profile));
        let report = format_health_report(&overview);

        assert!(report.contains("🏆 OVERALL HEALTH SCORE: 65/100"));
        assert!(report.contains(overview.score.band.commentary()));
        assert!(report.contains("• Total change: -1.2 kg"));
        assert!(report.contains("• Trend: Losing weight"));
        assert!(report.contains("• Average calories: 1402 kcal/day"));
        assert!(report.contains("• TDEE (total daily energy expenditure): 2604 kcal/day"));
        assert!(report.contains("• Consistency: Needs improvement"));
        assert!(report.contains("🎯 NEXT GOALS:"));
        assert!(!report.contains("GOAL ROADMAP"));
    }

    #[test]
    fn test_sample_recommendations() {
        let (weights, meals, profile) = sample();
        let overview = build_health_overview(&weights, &meals, Some(&profile));
        let recommendations = health_recommendations(&overview);

        // 5 weights is enough, 5 meal logs is not, gap is about -1202 kcal, score 65
        assert_eq!(recommendations.len(), 2);
        assert!(recommendations[0].starts_with("Log your calories"));
        assert_eq!(recommendations[1], "Bring your intake closer to your TDEE (2604 kcal)");
    }

    #[test]
    fn test_empty_report_omits_sections() {
        let overview = build_health_overview(&[], &[], None);
        let report = format_health_report(&overview);

        assert!(report.contains("🏆 OVERALL HEALTH SCORE: 0/100"));
        assert!(!report.contains("📏 WEIGHT:"));
        assert!(!report.contains("🍎 NUTRITION:"));
        assert!(!report.contains("⚡ ENERGY:"));
        assert_eq!(health_recommendations(&overview).len(), 3);
    }

    #[test]
    fn test_empty_report_layout() {
        let overview = build_health_overview(&[], &[], None);
        let expected = format!(
            "\n=== COMPREHENSIVE HEALTH REPORT ===\n\n\
             🏆 OVERALL HEALTH SCORE: 0/100\n{}\n\
             \n📊 TRACKING:\n\
             • Weight entries: 0\n\
             • Calorie entries: 0\n\
             • Consistency: Needs improvement\n\
             \n💡 RECOMMENDATIONS:\n\
             • Weigh yourself more often (at least twice a week)\n\
             • Log your calories every day for more accurate data\n\
             • Track more regularly to improve your health\n\
             \n🎯 NEXT GOALS:\n\
             • Keep tracking every day\n\
             • Balance your nutrients better\n\
             • Set a concrete health goal\n",
            overview.score.band.commentary()
        );
        assert_eq!(format_health_report(&overview), expected);
    }

    #[test]
    fn test_roadmap_section() {
        let (weights, meals, mut profile) = sample();
        profile.goal = Some(WeightGoal {
            current_weight: 69.3,
            target_weight: 67.3,
            kind: GoalKind::Lose,
            weeks: 2,
        });
        let overview = build_health_overview(&weights, &meals, Some(&profile));
        let report = format_health_report(&overview);

        assert!(report.contains("🗺️ GOAL ROADMAP:"));
        assert!(report.contains("• Week 1: 68.3 kg"));
        assert!(report.contains("• Week 2: 67.3 kg"));
    }
}
