//! Per-date aggregation of log entries
//!
//! Groups keep the order in which each date first appears in the input.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{AnalysisError, AnalysisResult};
use crate::models::MealEntry;
use crate::nutrition::MacroGrams;

/// Summed intake for one date
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyTotals {
    pub date: NaiveDate,
    pub calories: u32,
    pub macros: MacroGrams,
    pub meals: usize,
}

/// Group entries sharing a date. Same-date entries are all kept.
pub fn group_by_date<T, F>(entries: &[T], date_of: F) -> Vec<(NaiveDate, Vec<&T>)>
where
    F: Fn(&T) -> NaiveDate,
{
    let mut index: HashMap<NaiveDate, usize> = HashMap::new();
    let mut groups: Vec<(NaiveDate, Vec<&T>)> = Vec::new();

    for entry in entries {
        let date = date_of(entry);
        match index.get(&date) {
            Some(&i) => groups[i].1.push(entry),
            None => {
                index.insert(date, groups.len());
                groups.push((date, vec![entry]));
            }
        }
    }

    groups
}

/// Sum calories and macros per date
pub fn aggregate_daily_totals(meals: &[MealEntry]) -> AnalysisResult<Vec<DailyTotals>> {
    AnalysisError::require(1, meals.len())?;

    let totals = group_by_date(meals, |m| m.date)
        .into_iter()
        .map(|(date, entries)| DailyTotals {
            date,
            calories: entries.iter().map(|m| m.total_calories).sum(),
            macros: entries.iter().map(|m| m.macros()).sum(),
            meals: entries.len(),
        })
        .collect();

    Ok(totals)
}
