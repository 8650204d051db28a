//! Display functions for command results

use super::formatters::{cell_text, share_text, truncate};
use crate::commands::{ComparisonResult, DailyResult, ValidationReport};
use crate::core::{Attribute, CharacterRecord, Outcome, SetOutcome, Verdict};
use crate::game::{GameConfig, GameSession};
use colored::{ColoredString, Colorize};

/// Width of one column in the plain-text guess table
const CELL_WIDTH: usize = 14;

/// Paint a cell according to its outcome
fn paint(text: &str, outcome: &Outcome) -> ColoredString {
    let padded = format!("{:^width$}", truncate(text, CELL_WIDTH), width = CELL_WIDTH);
    match outcome {
        Outcome::Portrait(_) => padded.bright_white().bold(),
        Outcome::Set(SetOutcome::PartialMatch) => padded.black().on_yellow(),
        _ if outcome.is_correct() => padded.black().on_green(),
        _ => padded.white().on_red(),
    }
}

/// Print the column titles for the visible attributes
pub fn print_header(attributes: &[&Attribute]) {
    let titles: Vec<String> = attributes
        .iter()
        .map(|attribute| {
            format!(
                "{:^width$}",
                truncate(attribute.name(), CELL_WIDTH),
                width = CELL_WIDTH
            )
        })
        .collect();
    println!("{}", titles.join(" ").bright_cyan().bold());
}

/// Print one guess as a row of coloured cells, one per visible attribute
pub fn print_verdict_row(guess: &CharacterRecord, verdict: &Verdict, attributes: &[&Attribute]) {
    let cells: Vec<String> = attributes
        .iter()
        .filter_map(|attribute| {
            verdict
                .get(attribute.name())
                .map(|outcome| paint(&cell_text(guess, attribute, outcome), outcome).to_string())
        })
        .collect();
    println!("{}", cells.join(" "));
}

/// Print the comparison of two characters
pub fn print_comparison(result: &ComparisonResult, config: &GameConfig) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Guess {} against answer {}",
        result.guess.name().bright_yellow().bold(),
        result.answer.name().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (name, outcome) in result.verdict.iter() {
        if config.is_hidden(name) {
            continue;
        }
        let label = match outcome {
            Outcome::Portrait(Some(reference)) => reference.clone(),
            Outcome::Portrait(None) => "(no portrait)".to_string(),
            Outcome::Scalar(scalar) => format!("{scalar:?}"),
            Outcome::Binary(binary) => format!("{binary:?}"),
            Outcome::Set(set) => format!("{set:?}"),
        };
        println!(
            "  {:<14} {:<28} {}",
            name,
            truncate(&result.guess.display_value(name), 28),
            paint(&label, outcome)
        );
    }

    println!();
    if result.guess.name() == result.answer.name() {
        println!("{}", "✅ Same character".green().bold());
    } else {
        println!("{}", "❌ Different characters".red().bold());
    }
}

/// Print the daily answer for a date
pub fn print_daily(result: &DailyResult) {
    println!(
        "\n📅 {}  {}",
        result.date.format("%Y-%m-%d").to_string().bright_cyan().bold(),
        result.answer.bright_yellow().bold()
    );
    println!("   Drawn from {} eligible characters", result.pool_size);
}

/// Print the end-of-round banner and share text
pub fn print_round_summary(session: &GameSession, config: &GameConfig) {
    println!("\n{}", "═".repeat(70).bright_cyan());
    if session.is_won() {
        println!(
            "{}",
            "    🎉 🎊 ✨  C H A R A C T E R   F O U N D !  ✨ 🎊 🎉    "
                .bright_green()
                .bold()
        );
    } else {
        println!("{}", "    🏳️  You gave up  🏳️    ".bright_red().bold());
    }
    println!("{}", "═".repeat(70).bright_cyan());

    println!(
        "\n  The answer was {}",
        session.answer().name().bright_yellow().bold()
    );
    println!("\n{}\n", share_text(session, config));
}

/// Print the result of a roster validation
pub fn print_validation_report(report: &ValidationReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "ROSTER VALIDATION".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Summary:".bright_cyan().bold());
    println!("   Characters:       {}", report.characters);
    println!("   Comparisons:      {}", report.comparisons);
    println!("   Failed pairs:     {}", report.failed_pairs);
    println!("   Time taken:       {:.2}s", report.duration.as_secs_f64());

    if report.is_clean() {
        println!("\n{}", "✅ Every character can be compared".green().bold());
        return;
    }

    println!("\n⚠️  {}", "Problems:".bright_red().bold());
    for error in &report.errors {
        println!("   • {error}");
    }
}
