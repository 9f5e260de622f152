//! Health Trends
//!
//! Combined health report: tracking score, weight, nutrition and energy,
//! with a dashboard chart.

use tracing_subscriber::EnvFilter;

use health_trends::analysis::build_health_overview;
use health_trends::build_info;
use health_trends::config::{Config, DEFAULT_LOG_DIRECTIVE};
use health_trends::reports::{format_health_report, health_dashboard, save_png};
use health_trends::source::{DataSource, SampleData};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so the report on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(DEFAULT_LOG_DIRECTIVE.parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner("Comprehensive Health Report");

    let config = Config::from_env();
    let source = config.open_source(SampleData::health_overview())?;

    let weights = source.weight_entries()?;
    let meals = source.meal_entries()?;
    let profile = source.profile()?.map(|p| match weights.last() {
        Some(latest) => p.with_estimated_energy(latest.weight),
        None => p,
    });

    println!("📊 Data loaded:");
    println!("• {} weight entries", weights.len());
    println!("• {} calorie entries", meals.len());
    if let Some(p) = &profile {
        println!("• Profile: {} years old, {}", p.age, p.gender.as_str());
    }

    let overview = build_health_overview(&weights, &meals, profile.as_ref());
    tracing::info!(score = overview.score.value, band = overview.score.band.label(), "health score");
    print!("{}", format_health_report(&overview));

    if config.render_charts {
        let png = health_dashboard(&weights, &meals, &overview, config.chart_width, config.chart_height)?;
        let path = config.chart_path("health_dashboard.png");
        save_png(&path, &png)?;
        println!("\n📈 Dashboard saved to {}", path.display());
    }

    Ok(())
}
