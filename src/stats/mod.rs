//! Statistics engine
//!
//! Descriptive statistics and least-squares trends over ordered samples.

pub mod descriptive;
pub mod trend;

pub use descriptive::{max, mean, min, round_to, sample_std_dev, successive_differences, Summary};
pub use trend::{day_offsets, linear_trend, weekly_rate, Trend, TrendDirection};
