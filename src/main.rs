//! Inndle - CLI
//!
//! Guess the Wandering Inn character, in a TUI or a plain terminal.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use inndle::{
    commands::{compare_characters, daily_for_date, run_simple, run_validation},
    core::AttributeSchema,
    game::{AnswerMode, GameConfig},
    interactive::{App, run_tui},
    output::{print_comparison, print_daily, print_validation_report},
    roster::Roster,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "inndle",
    about = "Guess the Wandering Inn character from attribute feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Roster CSV to use instead of the built-in one
    #[arg(long, global = true, value_name = "PATH")]
    data: Option<PathBuf>,

    /// Difficulty levels eligible as free-play answers, comma separated
    #[arg(long, global = true, value_delimiter = ',', default_value = "1,2,3")]
    difficulty: Vec<u8>,

    /// Never pick free-play answers introduced after this volume
    #[arg(long, global = true, value_name = "N")]
    max_volume: Option<i64>,

    /// Hide an attribute column (repeatable)
    #[arg(long, global = true, value_name = "ATTRIBUTE")]
    hide: Vec<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        /// Random answer instead of the daily one
        #[arg(long, conflicts_with = "date")]
        free: bool,

        /// Play the daily answer of another date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Simple CLI mode (line-based game without TUI)
    Simple {
        /// Random answer instead of the daily one
        #[arg(long, conflicts_with = "date")]
        free: bool,

        /// Play the daily answer of another date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Score one character against another
    Compare {
        /// The guessed character
        guess: String,

        /// The character treated as the answer
        answer: String,
    },

    /// Show the daily answer
    Daily {
        /// Date to look up (YYYY-MM-DD, default today in UTC)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Check that every pair of characters can be compared
    Validate,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the roster from `--data`, or the built-in one
fn load_roster(data: Option<&PathBuf>) -> Result<Roster> {
    match data {
        Some(path) => Roster::load_from_file(path, AttributeSchema::standard())
            .with_context(|| format!("loading roster from {}", path.display())),
        None => Roster::embedded().context("loading built-in roster"),
    }
}

fn answer_mode(free: bool, date: Option<NaiveDate>) -> AnswerMode {
    match (free, date) {
        (true, _) => AnswerMode::FreePlay,
        (false, Some(date)) => AnswerMode::Daily(date),
        (false, None) => AnswerMode::today(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let roster = load_roster(cli.data.as_ref())?;
    let config = GameConfig {
        difficulties: cli.difficulty,
        max_volume: cli.max_volume,
        hidden: cli.hide,
        ..GameConfig::default()
    };

    for hidden in &config.hidden {
        let known = roster
            .schema()
            .iter()
            .any(|attribute| attribute.name().eq_ignore_ascii_case(hidden));
        if !known {
            tracing::warn!(attribute = %hidden, "--hide names an unknown attribute");
        }
    }

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        free: false,
        date: None,
    });

    match command {
        Commands::Play { free, date } => {
            let app = App::new(&roster, config, answer_mode(free, date))?;
            run_tui(app)
        }
        Commands::Simple { free, date } => run_simple(&roster, &config, answer_mode(free, date)),
        Commands::Compare { guess, answer } => {
            let result = compare_characters(&roster, &guess, &answer)?;
            print_comparison(&result, &config);
            Ok(())
        }
        Commands::Daily { date } => {
            let date = date.unwrap_or_else(|| chrono::Utc::now().date_naive());
            let result = daily_for_date(&roster, &config, date)?;
            print_daily(&result);
            Ok(())
        }
        Commands::Validate => {
            let report = run_validation(&roster, true);
            print_validation_report(&report);
            if report.is_clean() {
                Ok(())
            } else {
                anyhow::bail!("{} comparisons failed", report.failed_pairs)
            }
        }
    }
}
