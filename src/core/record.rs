//! Character records
//!
//! A record maps attribute names to the list of values a character holds for
//! that attribute. Roster cells store multiple values separated by `" |"`.

use rustc_hash::FxHashMap;
use std::fmt;

/// Separator between values inside a single roster cell
pub const VALUE_DELIMITER: &str = " |";

/// Split a raw roster cell into its trimmed values
///
/// Empty entries (a trailing delimiter, doubled delimiters) are dropped. A cell
/// with no non-empty entry yields a single empty value, so a blank column
/// still resolves to a one-element list.
///
/// # Examples
/// ```
/// use inndle::core::parse_values;
///
/// assert_eq!(parse_values("X | Y |"), vec!["X", "Y"]);
/// assert_eq!(parse_values("Alive"), vec!["Alive"]);
/// assert_eq!(parse_values(""), vec![""]);
/// ```
#[must_use]
pub fn parse_values(cell: &str) -> Vec<String> {
    let values: Vec<String> = cell
        .split(VALUE_DELIMITER)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect();

    if values.is_empty() {
        vec![String::new()]
    } else {
        values
    }
}

/// One character's attribute values, keyed by attribute name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterRecord {
    name: String,
    attributes: FxHashMap<String, Vec<String>>,
}

impl CharacterRecord {
    /// Create an empty record for the character with the given canonical name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: FxHashMap::default(),
        }
    }

    /// Builder-style insert of already-split values
    #[must_use]
    pub fn with<I, S>(mut self, attribute: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(attribute, values.into_iter().map(Into::into).collect());
        self
    }

    /// Set an attribute from a raw delimited cell
    pub fn insert_raw(&mut self, attribute: impl Into<String>, cell: &str) {
        self.insert(attribute, parse_values(cell));
    }

    pub fn insert(&mut self, attribute: impl Into<String>, values: Vec<String>) {
        self.attributes.insert(attribute.into(), values);
    }

    /// Canonical identifier (the roster's first column)
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All values for an attribute, or `None` if the record lacks it
    #[inline]
    #[must_use]
    pub fn values(&self, attribute: &str) -> Option<&[String]> {
        self.attributes.get(attribute).map(Vec::as_slice)
    }

    /// First value for an attribute
    #[must_use]
    pub fn first(&self, attribute: &str) -> Option<&str> {
        self.values(attribute)
            .and_then(<[String]>::first)
            .map(String::as_str)
    }

    /// Values joined for display, e.g. `"Liscor Watch, Free Antinium"`
    #[must_use]
    pub fn display_value(&self, attribute: &str) -> String {
        self.values(attribute)
            .map(|values| values.join(", "))
            .unwrap_or_default()
    }

    /// Number of attributes this record holds
    #[must_use]
    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }
}

impl fmt::Display for CharacterRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
