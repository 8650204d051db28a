//! Command implementations

pub mod compare;
pub mod daily;
pub mod simple;
pub mod validate;

pub use compare::{ComparisonResult, compare_characters};
pub use daily::{DailyResult, daily_for_date};
pub use simple::run_simple;
pub use validate::{ValidationReport, run_validation};
