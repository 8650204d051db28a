//! Character comparison command
//!
//! Scores one character against another outside of a game round.

use crate::core::{CharacterRecord, Verdict, compare};
use crate::game::GameError;
use crate::roster::Roster;

/// Result of comparing two characters
pub struct ComparisonResult<'r> {
    pub guess: &'r CharacterRecord,
    pub answer: &'r CharacterRecord,
    pub verdict: Verdict,
}

/// Compare the characters named `guess` and `answer`
///
/// Names are resolved case-insensitively.
///
/// # Errors
///
/// Returns an error if either name is unknown or the roster data for either
/// character cannot be compared.
pub fn compare_characters<'r>(
    roster: &'r Roster,
    guess: &str,
    answer: &str,
) -> Result<ComparisonResult<'r>, GameError> {
    let resolve = |name: &str| {
        roster
            .resolve(name)
            .ok_or_else(|| GameError::UnknownCharacter(name.trim().to_string()))
    };

    let guess = resolve(guess)?;
    let answer = resolve(answer)?;
    let verdict = compare(guess, answer, roster.schema())?;

    Ok(ComparisonResult {
        guess,
        answer,
        verdict,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BinaryOutcome, Outcome, ScalarOutcome, SetOutcome};

    #[test]
    fn compare_known_characters() {
        let roster = Roster::embedded().unwrap();
        let result = compare_characters(&roster, "zel shivertail", "Relc Grasstongue").unwrap();

        assert_eq!(result.guess.name(), "Zel Shivertail");
        assert_eq!(result.answer.name(), "Relc Grasstongue");
        assert_eq!(
            result.verdict.get("Status"),
            Some(&Outcome::Binary(BinaryOutcome::Incorrect))
        );
        assert_eq!(
            result.verdict.get("Species"),
            Some(&Outcome::Set(SetOutcome::FullMatch))
        );
        assert_eq!(
            result.verdict.get("Mentions"),
            Some(&Outcome::Scalar(ScalarOutcome::Lower))
        );
    }

    #[test]
    fn compare_with_self_is_all_correct() {
        let roster = Roster::embedded().unwrap();
        let result = compare_characters(&roster, "Mrsha", "Mrsha").unwrap();
        assert!(result.verdict.is_all_correct());
    }

    #[test]
    fn compare_unknown_character() {
        let roster = Roster::embedded().unwrap();
        assert!(matches!(
            compare_characters(&roster, "Mrsha", "Nobody"),
            Err(GameError::UnknownCharacter(name)) if name == "Nobody"
        ));
    }
}
