//! Roster validation
//!
//! Compares every ordered pair of characters so data problems surface before
//! a player runs into them mid-round.

use crate::core::{CompareError, compare};
use crate::roster::Roster;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::time::{Duration, Instant};

/// Outcome of checking a roster
#[derive(Debug)]
pub struct ValidationReport {
    pub characters: usize,
    pub comparisons: usize,
    pub failed_pairs: usize,
    /// Distinct errors, sorted by message
    pub errors: Vec<CompareError>,
    pub duration: Duration,
}

impl ValidationReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failed_pairs == 0
    }
}

/// Compare every character against every character, itself included
#[must_use]
pub fn run_validation(roster: &Roster, show_progress: bool) -> ValidationReport {
    let characters = roster.characters();
    let start = Instant::now();

    let pb = if show_progress {
        let pb = ProgressBar::new(characters.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let failures: Vec<CompareError> = characters
        .par_iter()
        .flat_map_iter(|guess| {
            let found: Vec<CompareError> = characters
                .iter()
                .filter_map(|answer| compare(guess, answer, roster.schema()).err())
                .collect();
            pb.inc(1);
            pb.set_message(guess.name().to_string());
            found
        })
        .collect();

    pb.finish_and_clear();

    let failed_pairs = failures.len();
    let distinct: FxHashSet<CompareError> = failures.into_iter().collect();
    let mut errors: Vec<CompareError> = distinct.into_iter().collect();
    errors.sort_by_cached_key(ToString::to_string);

    let report = ValidationReport {
        characters: characters.len(),
        comparisons: characters.len() * characters.len(),
        failed_pairs,
        errors,
        duration: start.elapsed(),
    };

    tracing::info!(
        characters = report.characters,
        failed_pairs = report.failed_pairs,
        "roster validated"
    );

    report
}
