//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_comparison, print_daily, print_header, print_round_summary, print_validation_report,
    print_verdict_row,
};
