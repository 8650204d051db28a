//! Autocomplete for the guess input

use crate::roster::Roster;

/// Names containing `input` (case-insensitive), minus `exclude`, in roster order
///
/// Empty input yields no suggestions.
///
/// # Examples
/// ```
/// use inndle::game::suggestions;
/// use inndle::roster::Roster;
///
/// let roster = Roster::embedded().unwrap();
/// let names = suggestions(&roster, "shivertail", &[], 5);
/// assert_eq!(names, vec!["Zel Shivertail", "Selys Shivertail"]);
/// ```
#[must_use]
pub fn suggestions<'r>(roster: &'r Roster, input: &str, exclude: &[&str], limit: usize) -> Vec<&'r str> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    roster
        .names()
        .filter(|name| !exclude.contains(name))
        .filter(|name| name.to_lowercase().contains(&needle))
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Roster {
        Roster::embedded().unwrap()
    }

    #[test]
    fn substring_anywhere() {
        let roster = roster();
        let names = suggestions(&roster, "atwood", &[], 10);
        assert_eq!(names, vec!["Trey Atwood", "Teres Atwood"]);
    }

    #[test]
    fn case_insensitive() {
        let roster = roster();
        assert_eq!(suggestions(&roster, "PAWN", &[], 10), vec!["Pawn"]);
    }

    #[test]
    fn excludes_guessed() {
        let roster = roster();
        let names = suggestions(&roster, "atwood", &["Trey Atwood"], 10);
        assert_eq!(names, vec!["Teres Atwood"]);
    }

    #[test]
    fn respects_limit() {
        let roster = roster();
        let names = suggestions(&roster, "e", &[], 3);
        assert_eq!(names.len(), 3);
        assert_eq!(names[0], "Erin Solstice");
    }

    #[test]
    fn empty_input_suggests_nothing() {
        let roster = roster();
        assert!(suggestions(&roster, "", &[], 10).is_empty());
        assert!(suggestions(&roster, "   ", &[], 10).is_empty());
    }

    #[test]
    fn no_match() {
        let roster = roster();
        assert!(suggestions(&roster, "xyzzy", &[], 10).is_empty());
    }
}
