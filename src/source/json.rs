//! JSON file data source
//!
//! Reads a document of the form `{"weights": [...], "meals": [...], "profile": {...}}`.
//! Every key is optional.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{DataSource, SourceError, SourceResult};
use crate::models::{MealEntry, PersonalProfile, WeightEntry};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthDataFile {
    #[serde(default)]
    pub weights: Vec<WeightEntry>,
    #[serde(default)]
    pub meals: Vec<MealEntry>,
    #[serde(default)]
    pub profile: Option<PersonalProfile>,
}

/// Data parsed once from a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    data: HealthDataFile,
}

impl JsonFileSource {
    pub fn open<P: AsRef<Path>>(path: P) -> SourceResult<Self> {
        let path = path.as_ref().to_path_buf();
        let text = std::fs::read_to_string(&path).map_err(|source| SourceError::Io {
            path: path.clone(),
            source,
        })?;
        let data: HealthDataFile = serde_json::from_str(&text)?;

        tracing::info!(
            path = %path.display(),
            weights = data.weights.len(),
            meals = data.meals.len(),
            has_profile = data.profile.is_some(),
            "loaded health data file"
        );

        Ok(Self { data })
    }
}

impl DataSource for JsonFileSource {
    fn weight_entries(&self) -> SourceResult<Vec<WeightEntry>> {
        Ok(self.data.weights.clone())
    }

    fn meal_entries(&self) -> SourceResult<Vec<MealEntry>> {
        Ok(self.data.meals.clone())
    }

    fn profile(&self) -> SourceResult<Option<PersonalProfile>> {
        Ok(self.data.profile.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_reports_path() {
        let err = JsonFileSource::open("/nonexistent/health.json").unwrap_err();
        assert!(matches!(err, SourceError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/health.json"));
    }

    #[test]
    fn test_document_keys_are_optional() {
        let data: HealthDataFile = serde_json::from_str("{}").unwrap();
        assert_eq!(data, HealthDataFile::default());
    }
}
