//! Character roster
//!
//! The roster is the read-only set of characters a game can use, plus the
//! schema they are scored on. Loaded once, then shared by reference.

mod embedded;
pub mod loader;

pub use embedded::{CHARACTERS_CSV, CHARACTERS_CSV_ROWS};

use crate::core::{AttributeSchema, CharacterRecord};
use rustc_hash::FxHashMap;
use std::io;
use std::path::Path;

/// Errors from loading a roster
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("failed to read roster: {0}")]
    Io(#[from] io::Error),

    #[error("malformed roster CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("roster has no header row")]
    MissingHeader,

    #[error("roster contains no valid characters")]
    EmptyRoster,
}

/// All known characters, indexed by canonical name
#[derive(Debug, Clone)]
pub struct Roster {
    schema: AttributeSchema,
    characters: Vec<CharacterRecord>,
    by_name: FxHashMap<String, usize>,
    by_lowercase: FxHashMap<String, usize>,
}

impl Roster {
    /// Build a roster from already-parsed records
    ///
    /// Later records with a name already seen are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::EmptyRoster`] if `records` is empty.
    pub fn from_records(
        schema: AttributeSchema,
        records: impl IntoIterator<Item = CharacterRecord>,
    ) -> Result<Self, RosterError> {
        let mut characters = Vec::new();
        let mut by_name = FxHashMap::default();
        let mut by_lowercase = FxHashMap::default();

        for record in records {
            if by_name.contains_key(record.name()) {
                tracing::warn!(name = record.name(), "skipping duplicate character");
                continue;
            }

            let idx = characters.len();
            by_name.insert(record.name().to_string(), idx);
            by_lowercase
                .entry(record.name().to_lowercase())
                .or_insert(idx);
            characters.push(record);
        }

        if characters.is_empty() {
            return Err(RosterError::EmptyRoster);
        }

        Ok(Self {
            schema,
            characters,
            by_name,
            by_lowercase,
        })
    }

    /// The roster compiled into the binary, scored on the standard schema
    ///
    /// # Errors
    ///
    /// Only fails if the embedded CSV is malformed.
    pub fn embedded() -> Result<Self, RosterError> {
        loader::from_csv_str(CHARACTERS_CSV, AttributeSchema::standard())
    }

    /// Parse a roster from CSV text
    ///
    /// # Errors
    ///
    /// See [`loader::from_reader`].
    pub fn from_csv_str(text: &str, schema: AttributeSchema) -> Result<Self, RosterError> {
        loader::from_csv_str(text, schema)
    }

    /// Load a roster from a CSV file on disk
    ///
    /// # Errors
    ///
    /// See [`loader::load_from_file`].
    pub fn load_from_file(path: impl AsRef<Path>, schema: AttributeSchema) -> Result<Self, RosterError> {
        loader::load_from_file(path, schema)
    }

    #[inline]
    #[must_use]
    pub const fn schema(&self) -> &AttributeSchema {
        &self.schema
    }

    /// Exact lookup by canonical name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CharacterRecord> {
        self.by_name.get(name).map(|&idx| &self.characters[idx])
    }

    /// Resolve user input to a character: exact name first, then case-insensitive
    ///
    /// # Examples
    /// ```
    /// use inndle::roster::Roster;
    ///
    /// let roster = Roster::embedded().unwrap();
    /// assert_eq!(roster.resolve("erin solstice").unwrap().name(), "Erin Solstice");
    /// ```
    #[must_use]
    pub fn resolve(&self, input: &str) -> Option<&CharacterRecord> {
        let input = input.trim();
        self.get(input).or_else(|| {
            self.by_lowercase
                .get(&input.to_lowercase())
                .map(|&idx| &self.characters[idx])
        })
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Canonical names in roster order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.characters.iter().map(CharacterRecord::name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CharacterRecord> {
        self.characters.iter()
    }

    #[must_use]
    pub fn characters(&self) -> &[CharacterRecord] {
        &self.characters
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}
