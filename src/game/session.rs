//! A single round of the game
//!
//! The session is a two-state machine: it starts `InProgress` and becomes
//! `Finished` when a guess names the answer or the player gives up.

use super::suggest;
use crate::core::{CharacterRecord, CompareError, Verdict, compare};
use crate::roster::Roster;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    InProgress,
    Finished,
}

/// Reasons a guess is rejected; a rejected guess never changes the session
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("enter a character name")]
    EmptyGuess,

    #[error("'{0}' is not a known character")]
    UnknownCharacter(String),

    #[error("'{0}' has already been guessed")]
    AlreadyGuessed(String),

    #[error("the game is already over")]
    AlreadyFinished,

    #[error("no character matches the answer filters")]
    NoEligibleAnswers,

    #[error(transparent)]
    Compare(#[from] CompareError),
}

/// One accepted guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    name: String,
    verdict: Verdict,
}

impl GuessRecord {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn verdict(&self) -> &Verdict {
        &self.verdict
    }
}

/// State of one round against a fixed answer
#[derive(Debug, Clone)]
pub struct GameSession<'r> {
    roster: &'r Roster,
    answer: &'r CharacterRecord,
    history: Vec<GuessRecord>,
    state: SessionState,
    gave_up: bool,
}

impl<'r> GameSession<'r> {
    /// Start a round whose answer is the character named `answer`
    ///
    /// # Errors
    ///
    /// Returns [`GameError::UnknownCharacter`] if `answer` is not in the roster.
    pub fn new(roster: &'r Roster, answer: &str) -> Result<Self, GameError> {
        let answer = roster
            .get(answer)
            .ok_or_else(|| GameError::UnknownCharacter(answer.to_string()))?;

        Ok(Self {
            roster,
            answer,
            history: Vec::new(),
            state: SessionState::InProgress,
            gave_up: false,
        })
    }

    /// Score a guess against the answer
    ///
    /// `input` is resolved to a canonical name (exact, then case-insensitive).
    /// The session finishes when that canonical name equals the answer's.
    ///
    /// # Errors
    ///
    /// Rejects the guess, leaving the session untouched, if the game is over,
    /// the input is empty or unknown, the character was already guessed, or
    /// the roster data cannot be compared.
    ///
    /// # Examples
    /// ```
    /// use inndle::game::{GameSession, SessionState};
    /// use inndle::roster::Roster;
    ///
    /// let roster = Roster::embedded().unwrap();
    /// let mut session = GameSession::new(&roster, "Pawn").unwrap();
    ///
    /// session.guess("Klbkch").unwrap();
    /// assert_eq!(session.state(), SessionState::InProgress);
    ///
    /// session.guess("pawn").unwrap();
    /// assert_eq!(session.state(), SessionState::Finished);
    /// ```
    pub fn guess(&mut self, input: &str) -> Result<&GuessRecord, GameError> {
        if self.state == SessionState::Finished {
            return Err(GameError::AlreadyFinished);
        }

        let input = input.trim();
        if input.is_empty() {
            return Err(GameError::EmptyGuess);
        }

        let roster = self.roster;
        let guessed = roster
            .resolve(input)
            .ok_or_else(|| GameError::UnknownCharacter(input.to_string()))?;

        if self.has_guessed(guessed.name()) {
            return Err(GameError::AlreadyGuessed(guessed.name().to_string()));
        }

        let verdict = compare(guessed, self.answer, roster.schema())?;
        tracing::debug!(guess = guessed.name(), turn = self.history.len() + 1, "guess scored");

        if guessed.name() == self.answer.name() {
            self.state = SessionState::Finished;
        }

        self.history.push(GuessRecord {
            name: guessed.name().to_string(),
            verdict,
        });

        Ok(&self.history[self.history.len() - 1])
    }

    /// Reveal the answer and end the round
    ///
    /// Returns `false` if the round was already over.
    pub fn give_up(&mut self) -> bool {
        if self.state == SessionState::Finished {
            return false;
        }
        self.gave_up = true;
        self.state = SessionState::Finished;
        true
    }

    /// Autocomplete for this round, skipping names already guessed
    #[must_use]
    pub fn suggestions(&self, input: &str, limit: usize) -> Vec<&'r str> {
        let guessed: Vec<&str> = self.guessed_names().collect();
        suggest::suggestions(self.roster, input, &guessed, limit)
    }

    #[must_use]
    pub fn has_guessed(&self, name: &str) -> bool {
        self.history.iter().any(|entry| entry.name == name)
    }

    pub fn guessed_names(&self) -> impl Iterator<Item = &str> {
        self.history.iter().map(GuessRecord::name)
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[inline]
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state == SessionState::Finished
    }

    /// Finished by naming the answer
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.is_finished() && !self.gave_up
    }

    #[must_use]
    pub const fn gave_up(&self) -> bool {
        self.gave_up
    }

    #[must_use]
    pub const fn answer(&self) -> &'r CharacterRecord {
        self.answer
    }

    #[must_use]
    pub const fn roster(&self) -> &'r Roster {
        self.roster
    }

    /// Accepted guesses, oldest first
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.history.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AttributeSchema, BinaryOutcome, Outcome, ScalarOutcome, SetOutcome};
    use crate::roster::loader::from_csv_str;

    fn roster() -> Roster {
        let csv = "id,Image,Mentions,Introduced,Gender,Species,Status,Affiliation,Continent,Residence,Occupation,Fighting Type\n\
                   Relc Grasstongue,,3100,1,Male,Drake,Alive,Liscor Watch,Izril,Liscor,Guardsman,Melee | Spear\n\
                   Klbkch,,2500,1,Male,Antinium,Alive,Liscor Watch | Free Antinium,Izril,Liscor,Guardsman | Revalantor,Melee\n\
                   Zel Shivertail,zel.png,800,1,Male,Drake,Deceased,Drake Army,Izril,,General,Unarmed\n\
                   Broken,,many,1,Male,Drake,Alive,None,Izril,Liscor,None,None\n";
        from_csv_str(csv, AttributeSchema::standard()).unwrap()
    }

    #[test]
    fn starts_in_progress() {
        let roster = roster();
        let session = GameSession::new(&roster, "Klbkch").unwrap();

        assert_eq!(session.state(), SessionState::InProgress);
        assert_eq!(session.answer().name(), "Klbkch");
        assert_eq!(session.guess_count(), 0);
    }

    #[test]
    fn unknown_answer_rejected() {
        let roster = roster();
        assert_eq!(
            GameSession::new(&roster, "Erin Solstice").err(),
            Some(GameError::UnknownCharacter("Erin Solstice".to_string()))
        );
    }

    #[test]
    fn wrong_guess_stays_in_progress() {
        let roster = roster();
        let mut session = GameSession::new(&roster, "Klbkch").unwrap();

        let entry = session.guess("Relc Grasstongue").unwrap();
        let verdict = entry.verdict();

        assert_eq!(
            verdict.get("Mentions"),
            Some(&Outcome::Scalar(ScalarOutcome::Higher))
        );
        assert_eq!(
            verdict.get("Introduced"),
            Some(&Outcome::Scalar(ScalarOutcome::Correct))
        );
        assert_eq!(
            verdict.get("Species"),
            Some(&Outcome::Set(SetOutcome::NoMatch))
        );
        assert_eq!(
            verdict.get("Affiliation"),
            Some(&Outcome::Set(SetOutcome::PartialMatch))
        );
        assert_eq!(
            verdict.get("Status"),
            Some(&Outcome::Binary(BinaryOutcome::Correct))
        );
        assert_eq!(session.state(), SessionState::InProgress);
    }

    #[test]
    fn answer_guess_finishes() {
        let roster = roster();
        let mut session = GameSession::new(&roster, "Klbkch").unwrap();

        session.guess("Zel Shivertail").unwrap();
        let entry = session.guess("Klbkch").unwrap();
        assert!(entry.verdict().is_all_correct());

        assert_eq!(session.state(), SessionState::Finished);
        assert!(session.is_won());
        assert_eq!(session.guess_count(), 2);
    }

    #[test]
    fn canonical_name_decides_win() {
        let roster = roster();
        let mut session = GameSession::new(&roster, "Klbkch").unwrap();

        session.guess("  KLBKCH ").unwrap();
        assert!(session.is_finished());
        assert_eq!(session.history()[0].name(), "Klbkch");
    }

    #[test]
    fn guess_after_finish_rejected() {
        let roster = roster();
        let mut session = GameSession::new(&roster, "Klbkch").unwrap();
        session.guess("Klbkch").unwrap();

        assert_eq!(
            session.guess("Relc Grasstongue").err(),
            Some(GameError::AlreadyFinished)
        );
        assert_eq!(session.guess_count(), 1);
    }

    #[test]
    fn repeated_guess_rejected() {
        let roster = roster();
        let mut session = GameSession::new(&roster, "Klbkch").unwrap();
        session.guess("Relc Grasstongue").unwrap();

        assert_eq!(
            session.guess("relc grasstongue").err(),
            Some(GameError::AlreadyGuessed("Relc Grasstongue".to_string()))
        );
        assert_eq!(session.guess_count(), 1);
    }

    #[test]
    fn empty_and_unknown_guesses_rejected() {
        let roster = roster();
        let mut session = GameSession::new(&roster, "Klbkch").unwrap();

        assert_eq!(session.guess("  ").err(), Some(GameError::EmptyGuess));
        assert_eq!(
            session.guess("Erin").err(),
            Some(GameError::UnknownCharacter("Erin".to_string()))
        );
        assert_eq!(session.state(), SessionState::InProgress);
        assert_eq!(session.guess_count(), 0);
    }

    #[test]
    fn malformed_record_is_compare_error() {
        let roster = roster();
        let mut session = GameSession::new(&roster, "Klbkch").unwrap();

        assert!(matches!(
            session.guess("Broken"),
            Err(GameError::Compare(CompareError::InvalidScalar { .. }))
        ));
        assert_eq!(session.guess_count(), 0);
    }

    #[test]
    fn give_up_finishes_without_win() {
        let roster = roster();
        let mut session = GameSession::new(&roster, "Klbkch").unwrap();

        assert!(session.give_up());
        assert!(session.is_finished());
        assert!(session.gave_up());
        assert!(!session.is_won());
        assert!(!session.give_up());
    }

    #[test]
    fn suggestions_skip_guessed() {
        let roster = roster();
        let mut session = GameSession::new(&roster, "Klbkch").unwrap();

        assert_eq!(session.suggestions("l", 10).len(), 3);
        session.guess("Relc Grasstongue").unwrap();
        assert_eq!(session.suggestions("l", 10), vec!["Klbkch", "Zel Shivertail"]);
    }
}
