//! Formatting utilities for verdicts

use crate::core::{
    Attribute, AttributeKind, AttributeSchema, BinaryOutcome, CharacterRecord, Outcome,
    ScalarOutcome, SetOutcome, Verdict,
};
use crate::game::{GameConfig, GameSession};

/// Emoji for one outcome
///
/// Scalar arrows say which way the guess is off: up when it is higher than the
/// answer, down when lower.
#[must_use]
pub fn outcome_emoji(outcome: &Outcome) -> &'static str {
    match outcome {
        Outcome::Portrait(_) => "🖼️",
        Outcome::Scalar(ScalarOutcome::Correct)
        | Outcome::Binary(BinaryOutcome::Correct)
        | Outcome::Set(SetOutcome::FullMatch) => "🟩",
        Outcome::Set(SetOutcome::PartialMatch) => "🟨",
        Outcome::Binary(BinaryOutcome::Incorrect) | Outcome::Set(SetOutcome::NoMatch) => "🟥",
        Outcome::Scalar(ScalarOutcome::Higher) => "⬆️",
        Outcome::Scalar(ScalarOutcome::Lower) => "⬇️",
    }
}

/// Arrow hint for scalar outcomes, empty otherwise
#[must_use]
pub fn scalar_hint(outcome: &Outcome) -> &'static str {
    match outcome {
        Outcome::Scalar(ScalarOutcome::Higher) => "↑",
        Outcome::Scalar(ScalarOutcome::Lower) => "↓",
        _ => "",
    }
}

/// Emoji row for a verdict, skipping hidden attributes
#[must_use]
pub fn verdict_to_emoji(verdict: &Verdict, config: &GameConfig) -> String {
    verdict
        .iter()
        .filter(|(name, _)| !config.is_hidden(name))
        .map(|(_, outcome)| outcome_emoji(outcome))
        .collect()
}

/// Text shown in a guess cell: the guessed character's own value
///
/// The portrait column shows the character's name, since a terminal cannot
/// render the image.
#[must_use]
pub fn cell_text(guess: &CharacterRecord, attribute: &Attribute, outcome: &Outcome) -> String {
    let value = guess.display_value(attribute.name());

    match attribute.kind() {
        AttributeKind::Image => guess.name().to_string(),
        AttributeKind::Scalar => {
            let hint = scalar_hint(outcome);
            let value = if attribute.name() == AttributeSchema::INTRODUCED {
                format!("Vol. {value}")
            } else {
                value
            };
            if hint.is_empty() {
                value
            } else {
                format!("{value} {hint}")
            }
        }
        AttributeKind::Binary | AttributeKind::SetCategory => {
            if value.is_empty() {
                "-".to_string()
            } else {
                value
            }
        }
    }
}

/// Shorten text to `width` characters, marking the cut with "..."
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let keep = width.saturating_sub(3);
    let mut shortened: String = text.chars().take(keep).collect();
    shortened.push_str("...");
    shortened
}

/// Spoiler-free summary of a finished round, one emoji row per guess
#[must_use]
pub fn share_text(session: &GameSession, config: &GameConfig) -> String {
    let count = session.guess_count();
    let headline = if session.is_won() {
        format!(
            "Inndle: solved in {count} {}",
            if count == 1 { "guess" } else { "guesses" }
        )
    } else {
        format!("Inndle: gave up after {count}")
    };

    let mut text = headline;
    for entry in session.history() {
        text.push('\n');
        text.push_str(&verdict_to_emoji(entry.verdict(), config));
    }
    text
}
