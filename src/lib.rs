//! Health Trends Library
//!
//! Weight, calorie and health score analysis over logged health data,
//! with plain-text reports and PNG charts.

pub mod analysis;
pub mod build_info;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod nutrition;
pub mod reports;
pub mod source;
pub mod stats;

pub use error::{AnalysisError, AnalysisResult};
