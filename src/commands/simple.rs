//! Simple interactive CLI mode
//!
//! Line-based game without the TUI

use crate::core::{CharacterRecord, Verdict};
use crate::game::{AnswerMode, GameConfig, GameError, GameSession, pick_answer};
use crate::output::{print_header, print_round_summary, print_verdict_row};
use crate::roster::Roster;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// Suggestions listed when a guess is not an exact name
const SUGGESTION_LIMIT: usize = 5;

/// What the player typed at the guess prompt
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Quit,
    GiveUp,
    Guess(&'a str),
}

fn parse_command(input: &str) -> Command<'_> {
    match input.trim().to_lowercase().as_str() {
        "quit" | "q" | "exit" => Command::Quit,
        "give up" | "giveup" | "reveal" => Command::GiveUp,
        _ => Command::Guess(input.trim()),
    }
}

/// Only an explicit yes starts another round
fn wants_another_round(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "yes" | "y")
}

/// Run the simple interactive CLI mode
///
/// The first round uses `mode`; rounds started afterwards are free play.
///
/// # Errors
///
/// Returns an error on I/O failure reading input, or if the filters in
/// `config` leave no eligible answer.
pub fn run_simple(roster: &Roster, config: &GameConfig, mode: AnswerMode) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Inndle - Guess the Character                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Name a character from The Wandering Inn. Each guess is scored");
    println!("attribute by attribute against the hidden answer:\n");
    println!("  - {} exact match", " green ".black().on_green());
    println!("  - {} some values shared", " yellow ".black().on_yellow());
    println!("  - {} no match", " red ".white().on_red());
    println!("  - ↑/↓ your guess's number is higher/lower than the answer's\n");
    println!("Commands: 'give up' to reveal the answer, 'quit' to exit\n");

    let mut rng = rand::rng();
    let mut mode = mode;

    loop {
        let answer = pick_answer(roster, config, mode, &mut rng)?;
        let mut session = GameSession::new(roster, answer)?;

        if let AnswerMode::Daily(date) = mode {
            println!("📅 Daily character for {}\n", date.format("%Y-%m-%d"));
        } else {
            println!("🎲 Free play: a random character has been chosen\n");
        }

        if !play_round(&mut session, config)? {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        }

        print_round_summary(&session, config);

        if wants_another_round(&get_user_input("Play again? (yes/no)")?) {
            mode = AnswerMode::FreePlay;
            println!("\n🔄 New game started!\n");
        } else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        }
    }
}

/// Play until the round finishes; `false` if the player quit instead
fn play_round(session: &mut GameSession, config: &GameConfig) -> Result<bool> {
    let schema = session.roster().schema();
    let attributes: Vec<_> = config.visible_attributes(schema).collect();

    while !session.is_finished() {
        let turn = session.guess_count() + 1;
        let input = get_user_input(&format!("Guess {turn}"))?;

        let name = match parse_command(&input) {
            Command::Quit => return Ok(false),
            Command::GiveUp => {
                session.give_up();
                break;
            }
            Command::Guess(name) => name,
        };

        let guess = match session.guess(name) {
            Ok(entry) => entry.name().to_string(),
            Err(GameError::UnknownCharacter(_)) => match single_suggestion(session, name) {
                Some(completed) => {
                    println!("  → {}", completed.bright_white().bold());
                    match session.guess(completed) {
                        Ok(entry) => entry.name().to_string(),
                        Err(err) => {
                            println!("❌ {err}\n");
                            continue;
                        }
                    }
                }
                None => continue,
            },
            Err(err) => {
                println!("❌ {err}\n");
                continue;
            }
        };

        tracing::debug!(guess = %guess, turn, "accepted guess");

        println!();
        print_header(&attributes);
        for (record, verdict) in history_rows(session) {
            print_verdict_row(record, verdict, &attributes);
        }
        println!();
    }

    Ok(true)
}

/// Guessed characters with their verdicts, most recent first
fn history_rows<'s>(session: &'s GameSession) -> Vec<(&'s CharacterRecord, &'s Verdict)> {
    let roster = session.roster();
    session
        .history()
        .iter()
        .rev()
        .filter_map(|entry| Some((roster.get(entry.name())?, entry.verdict())))
        .collect()
}

/// The only remaining suggestion for `input`, listing the options otherwise
fn single_suggestion<'r>(session: &GameSession<'r>, input: &str) -> Option<&'r str> {
    let suggestions = session.suggestions(input, SUGGESTION_LIMIT);

    match suggestions.as_slice() {
        [] => {
            println!("❌ {}\n", GameError::UnknownCharacter(input.to_string()));
            None
        }
        [only] => Some(only),
        many => {
            println!("Did you mean:");
            for name in many {
                println!("  • {name}");
            }
            println!();
            None
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> io::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_commands() {
        assert_eq!(parse_command("quit"), Command::Quit);
        assert_eq!(parse_command(" Q "), Command::Quit);
        assert_eq!(parse_command("Give Up"), Command::GiveUp);
        assert_eq!(parse_command("  Pawn "), Command::Guess("Pawn"));
    }

    #[test]
    fn play_again_needs_yes() {
        assert!(wants_another_round("yes"));
        assert!(wants_another_round(" Y "));
        assert!(!wants_another_round("n"));
        assert!(!wants_another_round("no"));
        assert!(!wants_another_round("new"));
        assert!(!wants_another_round(""));
    }

    #[test]
    fn single_suggestion_completes_unique_prefix() {
        let roster = Roster::embedded().unwrap();
        let session = GameSession::new(&roster, "Pawn").unwrap();

        assert_eq!(single_suggestion(&session, "numbto"), Some("Numbtongue"));
        assert_eq!(single_suggestion(&session, "zzz"), None);
    }

    #[test]
    fn history_newest_first() {
        let roster = Roster::embedded().unwrap();
        let mut session = GameSession::new(&roster, "Pawn").unwrap();
        session.guess("Klbkch").unwrap();
        session.guess("Relc Grasstongue").unwrap();
        session.guess("Erin Solstice").unwrap();

        let names: Vec<&str> = history_rows(&session)
            .into_iter()
            .map(|(record, _)| record.name())
            .collect();
        assert_eq!(names, vec!["Erin Solstice", "Relc Grasstongue", "Klbkch"]);
    }

    #[test]
    fn single_suggestion_ambiguous() {
        let roster = Roster::embedded().unwrap();
        let session = GameSession::new(&roster, "Pawn").unwrap();

        // Trey and Teres Atwood
        assert_eq!(single_suggestion(&session, "atwood"), None);
    }
}
