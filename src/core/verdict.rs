//! Verdicts: per-attribute feedback for one guess

use super::AttributeKind;

/// Outcome of a scalar comparison, read as "the guess is ... than the answer"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarOutcome {
    Higher,
    Lower,
    Correct,
}

impl ScalarOutcome {
    /// The outcome with guess and answer swapped
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Self::Higher => Self::Lower,
            Self::Lower => Self::Higher,
            Self::Correct => Self::Correct,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOutcome {
    Correct,
    Incorrect,
}

/// Outcome of a set comparison
///
/// A strict subset on either side is still a partial match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetOutcome {
    NoMatch,
    PartialMatch,
    FullMatch,
}

/// Feedback for a single attribute
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Portrait reference of the guessed character; `None` when the roster has none
    Portrait(Option<String>),
    Scalar(ScalarOutcome),
    Binary(BinaryOutcome),
    Set(SetOutcome),
}

impl Outcome {
    /// Kind of attribute that produced this outcome
    #[must_use]
    pub const fn kind(&self) -> AttributeKind {
        match self {
            Self::Portrait(_) => AttributeKind::Image,
            Self::Scalar(_) => AttributeKind::Scalar,
            Self::Binary(_) => AttributeKind::Binary,
            Self::Set(_) => AttributeKind::SetCategory,
        }
    }

    /// Whether this outcome is the best one its kind can produce
    ///
    /// Portraits are never compared, so they always count as correct.
    #[must_use]
    pub const fn is_correct(&self) -> bool {
        matches!(
            self,
            Self::Portrait(_)
                | Self::Scalar(ScalarOutcome::Correct)
                | Self::Binary(BinaryOutcome::Correct)
                | Self::Set(SetOutcome::FullMatch)
        )
    }
}

/// Per-attribute outcomes for one guess, in schema order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    entries: Vec<(String, Outcome)>,
}

impl Verdict {
    pub(crate) const fn new(entries: Vec<(String, Outcome)>) -> Self {
        Self { entries }
    }

    /// Outcome for a named attribute
    #[must_use]
    pub fn get(&self, attribute: &str) -> Option<&Outcome> {
        self.entries
            .iter()
            .find(|(name, _)| name == attribute)
            .map(|(_, outcome)| outcome)
    }

    /// Iterate `(attribute, outcome)` pairs in schema order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Outcome)> {
        self.entries
            .iter()
            .map(|(name, outcome)| (name.as_str(), outcome))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when every compared attribute matched
    ///
    /// Two different characters can share every attribute, so this is not how
    /// a game is won; see [`crate::game::GameSession`].
    #[must_use]
    pub fn is_all_correct(&self) -> bool {
        self.entries.iter().all(|(_, outcome)| outcome.is_correct())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_inverse() {
        assert_eq!(ScalarOutcome::Higher.inverse(), ScalarOutcome::Lower);
        assert_eq!(ScalarOutcome::Lower.inverse(), ScalarOutcome::Higher);
        assert_eq!(ScalarOutcome::Correct.inverse(), ScalarOutcome::Correct);
    }

    #[test]
    fn outcome_correctness() {
        assert!(Outcome::Portrait(None).is_correct());
        assert!(Outcome::Scalar(ScalarOutcome::Correct).is_correct());
        assert!(!Outcome::Scalar(ScalarOutcome::Lower).is_correct());
        assert!(!Outcome::Binary(BinaryOutcome::Incorrect).is_correct());
        assert!(!Outcome::Set(SetOutcome::PartialMatch).is_correct());
        assert!(Outcome::Set(SetOutcome::FullMatch).is_correct());
    }

    #[test]
    fn outcome_kind() {
        assert_eq!(Outcome::Portrait(None).kind(), AttributeKind::Image);
        assert_eq!(
            Outcome::Set(SetOutcome::NoMatch).kind(),
            AttributeKind::SetCategory
        );
    }

    #[test]
    fn verdict_lookup_and_order() {
        let verdict = Verdict::new(vec![
            ("Mentions".to_string(), Outcome::Scalar(ScalarOutcome::Lower)),
            ("Status".to_string(), Outcome::Binary(BinaryOutcome::Correct)),
        ]);

        assert_eq!(verdict.len(), 2);
        assert_eq!(
            verdict.get("Status"),
            Some(&Outcome::Binary(BinaryOutcome::Correct))
        );
        assert_eq!(verdict.get("Species"), None);

        let names: Vec<&str> = verdict.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Mentions", "Status"]);
        assert!(!verdict.is_all_correct());
    }
}
