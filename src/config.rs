//! Runtime configuration
//!
//! Read from environment variables by the report binaries.

use std::path::{Path, PathBuf};

use crate::source::{DataSource, JsonFileSource, SampleData, SourceResult, SqliteSource};

pub const DATABASE_PATH_VAR: &str = "HEALTH_DATABASE_PATH";
pub const DATA_FILE_VAR: &str = "HEALTH_DATA_FILE";
pub const CHART_DIR_VAR: &str = "HEALTH_CHART_DIR";
pub const CHART_WIDTH_VAR: &str = "HEALTH_CHART_WIDTH";
pub const CHART_HEIGHT_VAR: &str = "HEALTH_CHART_HEIGHT";
pub const NO_CHARTS_VAR: &str = "HEALTH_NO_CHARTS";

pub const DEFAULT_CHART_DIR: &str = "charts";
pub const DEFAULT_CHART_WIDTH: u32 = 1200;
pub const DEFAULT_CHART_HEIGHT: u32 = 900;

/// Default log directive for the report binaries
pub const DEFAULT_LOG_DIRECTIVE: &str = "health_trends=info";

/// `data/health.db` next to the project root when running from `target/`
pub fn default_database_path() -> PathBuf {
    let mut path = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."));

    // Go up from target/release or target/debug to project root
    if path.ends_with("release") || path.ends_with("debug") {
        if let Some(root) = path.parent().and_then(Path::parent) {
            path = root.to_path_buf();
        }
    }

    path.push("data");
    path.push("health.db");
    path
}

/// Where report data comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceKind {
    Database(PathBuf),
    JsonFile(PathBuf),
    Sample,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source: SourceKind,
    pub chart_dir: PathBuf,
    pub chart_width: u32,
    pub chart_height: u32,
    pub render_charts: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: SourceKind::Sample,
            chart_dir: PathBuf::from(DEFAULT_CHART_DIR),
            chart_width: DEFAULT_CHART_WIDTH,
            chart_height: DEFAULT_CHART_HEIGHT,
            render_charts: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or blank values fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let source = if let Some(path) = get(DATABASE_PATH_VAR) {
            SourceKind::Database(PathBuf::from(path))
        } else if let Some(path) = get(DATA_FILE_VAR) {
            SourceKind::JsonFile(PathBuf::from(path))
        } else {
            SourceKind::Sample
        };

        let dimension = |key: &str, default: u32| match get(key) {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    tracing::warn!("Ignoring invalid {}={:?}, using {}", key, raw, default);
                    default
                }
            },
            None => default,
        };

        Self {
            source,
            chart_dir: get(CHART_DIR_VAR).map(PathBuf::from).unwrap_or(defaults.chart_dir),
            chart_width: dimension(CHART_WIDTH_VAR, defaults.chart_width),
            chart_height: dimension(CHART_HEIGHT_VAR, defaults.chart_height),
            render_charts: get(NO_CHARTS_VAR).is_none(),
        }
    }

    /// Open the configured source, using `sample` when none is configured
    pub fn open_source(&self, sample: SampleData) -> SourceResult<Box<dyn DataSource>> {
        let source: Box<dyn DataSource> = match &self.source {
            SourceKind::Database(path) => Box::new(SqliteSource::open(path)?),
            SourceKind::JsonFile(path) => Box::new(JsonFileSource::open(path)?),
            SourceKind::Sample => {
                tracing::info!("No data source configured, using built-in sample data");
                Box::new(sample)
            }
        };
        Ok(source)
    }

    /// Configured database, or the default location
    pub fn database_path(&self) -> PathBuf {
        match &self.source {
            SourceKind::Database(path) => path.clone(),
            _ => default_database_path(),
        }
    }

    pub fn chart_path(&self, file_name: &str) -> PathBuf {
        self.chart_dir.join(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Config {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        assert_eq!(config(&[]), Config::default());
    }

    #[test]
    fn test_database_wins_over_json() {
        let cfg = config(&[(DATABASE_PATH_VAR, "data/health.db"), (DATA_FILE_VAR, "data.json")]);
        assert_eq!(cfg.source, SourceKind::Database(PathBuf::from("data/health.db")));

        let cfg = config(&[(DATA_FILE_VAR, "data.json")]);
        assert_eq!(cfg.source, SourceKind::JsonFile(PathBuf::from("data.json")));
    }

    #[test]
    fn test_blank_values_are_unset() {
        let cfg = config(&[(DATABASE_PATH_VAR, "  "), (NO_CHARTS_VAR, "")]);
        assert_eq!(cfg.source, SourceKind::Sample);
        assert!(cfg.render_charts);
    }

    #[test]
    fn test_chart_settings() {
        let cfg = config(&[
            (CHART_DIR_VAR, "/tmp/out"),
            (CHART_WIDTH_VAR, "800"),
            (CHART_HEIGHT_VAR, "zero"),
            (NO_CHARTS_VAR, "1"),
        ]);
        assert_eq!(cfg.chart_width, 800);
        assert_eq!(cfg.chart_height, DEFAULT_CHART_HEIGHT);
        assert!(!cfg.render_charts);
        assert_eq!(cfg.chart_path("weight.png"), PathBuf::from("/tmp/out/weight.png"));
    }

    #[test]
    fn test_database_path() {
        let cfg = config(&[(DATABASE_PATH_VAR, "/tmp/health.db")]);
        assert_eq!(cfg.database_path(), PathBuf::from("/tmp/health.db"));
        assert!(Config::default().database_path().ends_with("data/health.db"));
    }

    #[test]
    fn test_sample_source() {
        let source = Config::default()
            .open_source(SampleData::weight_tracking())
            .unwrap();
        assert_eq!(source.weight_entries().unwrap().len(), 6);
    }
}
