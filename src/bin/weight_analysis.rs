//! Weight trend report with a weight chart

use tracing_subscriber::EnvFilter;

use health_trends::analysis::analyze_weight_trend;
use health_trends::build_info;
use health_trends::config::{Config, DEFAULT_LOG_DIRECTIVE};
use health_trends::reports::{save_png, weight_chart, weight_report};
use health_trends::source::{DataSource, SampleData};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(DEFAULT_LOG_DIRECTIVE.parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner("Weight Analysis");

    let config = Config::from_env();
    let source = config.open_source(SampleData::weight_tracking())?;
    let entries = source.weight_entries()?;

    let result = analyze_weight_trend(&entries);
    print!("{}", weight_report(&result));

    match result {
        Ok(analysis) if config.render_charts => {
            let png = weight_chart(&entries, &analysis, config.chart_width, config.chart_height)?;
            let path = config.chart_path("weight_analysis.png");
            save_png(&path, &png)?;
            println!("\n📈 Chart saved to {}", path.display());
        }
        Ok(_) => {}
        Err(e) => tracing::warn!("Skipping weight chart: {}", e),
    }

    Ok(())
}
