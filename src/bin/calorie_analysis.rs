//! Calorie and macro report with a nutrition chart

use tracing_subscriber::EnvFilter;

use health_trends::analysis::analyze_daily_calories;
use health_trends::build_info;
use health_trends::config::{Config, DEFAULT_LOG_DIRECTIVE};
use health_trends::reports::{calorie_chart, calorie_report, save_png};
use health_trends::source::{DataSource, SampleData};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(DEFAULT_LOG_DIRECTIVE.parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner("Calorie & Nutrition Analysis");

    let config = Config::from_env();
    let source = config.open_source(SampleData::meal_log())?;
    let meals = source.meal_entries()?;

    let result = analyze_daily_calories(&meals);
    print!("{}", calorie_report(&result));

    match result {
        Ok(analysis) if config.render_charts => {
            let png = calorie_chart(&analysis, config.chart_width, config.chart_height)?;
            let path = config.chart_path("calorie_analysis.png");
            save_png(&path, &png)?;
            println!("\n📈 Chart saved to {}", path.display());
        }
        Ok(_) => {}
        Err(e) => tracing::warn!("Skipping calorie chart: {}", e),
    }

    Ok(())
}
