//! Attribute comparison
//!
//! Classifies a guessed character against the answer, one attribute at a time,
//! according to each attribute's declared kind.

use super::{
    AttributeKind, AttributeSchema, BinaryOutcome, CharacterRecord, Outcome, ScalarOutcome,
    SetOutcome, Verdict,
};
use rustc_hash::FxHashSet;
use std::cmp::Ordering;

/// Errors that make a comparison impossible
///
/// Each indicates a malformed roster, never a game state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
pub enum CompareError {
    #[error("character '{character}' has no value for attribute '{attribute}'")]
    MissingAttribute { attribute: String, character: String },

    #[error("character '{character}' has non-numeric {attribute} value '{value}'")]
    InvalidScalar {
        attribute: String,
        character: String,
        value: String,
    },

    #[error("character '{character}' has {count} values for single-valued attribute '{attribute}'")]
    MultipleValues {
        attribute: String,
        character: String,
        count: usize,
    },
}

/// Compare `guess` against `answer` for every attribute in `schema`
///
/// Pure: the same inputs always produce the same verdict.
///
/// # Errors
/// - [`CompareError::MissingAttribute`] if either record lacks a schema attribute
///   or holds an empty value list for it
/// - [`CompareError::InvalidScalar`] if a scalar attribute is not an integer
/// - [`CompareError::MultipleValues`] if a scalar or binary attribute holds more
///   than one value
///
/// # Examples
/// ```
/// use inndle::core::{
///     Attribute, AttributeKind, AttributeSchema, CharacterRecord, Outcome, ScalarOutcome, compare,
/// };
///
/// let schema = AttributeSchema::new(vec![Attribute::new("Mentions", AttributeKind::Scalar)]);
/// let guess = CharacterRecord::new("Zel Shivertail").with("Mentions", ["50"]);
/// let answer = CharacterRecord::new("Erin Solstice").with("Mentions", ["120"]);
///
/// let verdict = compare(&guess, &answer, &schema).unwrap();
/// assert_eq!(verdict.get("Mentions"), Some(&Outcome::Scalar(ScalarOutcome::Lower)));
/// ```
pub fn compare(
    guess: &CharacterRecord,
    answer: &CharacterRecord,
    schema: &AttributeSchema,
) -> Result<Verdict, CompareError> {
    let mut entries = Vec::with_capacity(schema.len());

    for attribute in schema.iter() {
        let name = attribute.name();
        let guessed = lookup(guess, name)?;
        let expected = lookup(answer, name)?;

        let outcome = match attribute.kind() {
            AttributeKind::Image => Outcome::Portrait(
                Some(guessed[0].clone()).filter(|reference| !reference.is_empty()),
            ),
            AttributeKind::Scalar => {
                let g = parse_scalar(guess, name, single(guess, name, guessed)?)?;
                let a = parse_scalar(answer, name, single(answer, name, expected)?)?;
                Outcome::Scalar(compare_scalar(g, a))
            }
            AttributeKind::Binary => Outcome::Binary(compare_binary(
                single(guess, name, guessed)?,
                single(answer, name, expected)?,
            )),
            AttributeKind::SetCategory => Outcome::Set(compare_sets(guessed, expected)),
        };

        entries.push((name.to_string(), outcome));
    }

    Ok(Verdict::new(entries))
}

/// Values for `attribute`, guaranteed non-empty
fn lookup<'r>(record: &'r CharacterRecord, attribute: &str) -> Result<&'r [String], CompareError> {
    match record.values(attribute) {
        Some(values) if !values.is_empty() => Ok(values),
        _ => Err(CompareError::MissingAttribute {
            attribute: attribute.to_string(),
            character: record.name().to_string(),
        }),
    }
}

/// The one value of a single-valued attribute
fn single<'v>(
    record: &CharacterRecord,
    attribute: &str,
    values: &'v [String],
) -> Result<&'v str, CompareError> {
    match values {
        [value] => Ok(value),
        _ => Err(CompareError::MultipleValues {
            attribute: attribute.to_string(),
            character: record.name().to_string(),
            count: values.len(),
        }),
    }
}

fn parse_scalar(record: &CharacterRecord, attribute: &str, raw: &str) -> Result<i64, CompareError> {
    raw.parse().map_err(|_| CompareError::InvalidScalar {
        attribute: attribute.to_string(),
        character: record.name().to_string(),
        value: raw.to_string(),
    })
}

#[must_use]
pub fn compare_scalar(guess: i64, answer: i64) -> ScalarOutcome {
    match guess.cmp(&answer) {
        Ordering::Greater => ScalarOutcome::Higher,
        Ordering::Less => ScalarOutcome::Lower,
        Ordering::Equal => ScalarOutcome::Correct,
    }
}

/// Case-sensitive exact match
#[must_use]
pub fn compare_binary(guess: &str, answer: &str) -> BinaryOutcome {
    if guess == answer {
        BinaryOutcome::Correct
    } else {
        BinaryOutcome::Incorrect
    }
}

/// Compare two value lists as sets; duplicates within a side are ignored
#[must_use]
pub fn compare_sets<S: AsRef<str>>(guess: &[S], answer: &[S]) -> SetOutcome {
    let guess_set: FxHashSet<&str> = guess.iter().map(|value| value.as_ref()).collect();
    let answer_set: FxHashSet<&str> = answer.iter().map(|value| value.as_ref()).collect();
    let common = guess_set.intersection(&answer_set).count();

    if common == 0 {
        SetOutcome::NoMatch
    } else if common == guess_set.len() && common == answer_set.len() {
        SetOutcome::FullMatch
    } else {
        SetOutcome::PartialMatch
    }
}
