//! Attribute schema
//!
//! The schema is the fixed, ordered list of attributes a guess is scored on.
//! Each entry carries its comparison kind, so the comparator's dispatch is an
//! exhaustive match rather than a lookup by name.

use std::fmt;

/// How an attribute is compared between a guess and the answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    /// Portrait reference, echoed from the guess and never compared
    Image,
    /// Integer value, compared by ordering
    Scalar,
    /// Single value, compared by exact equality
    Binary,
    /// Zero or more values, compared by set intersection
    SetCategory,
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Image => "image",
            Self::Scalar => "scalar",
            Self::Binary => "binary",
            Self::SetCategory => "set",
        };
        f.write_str(name)
    }
}

/// A named attribute tagged with its comparison kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    name: String,
    kind: AttributeKind,
}

impl Attribute {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: AttributeKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> AttributeKind {
        self.kind
    }
}

/// Ordered list of attributes a guess is scored on
///
/// Order is display order: verdicts list their outcomes in the same order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeSchema {
    attributes: Vec<Attribute>,
}

impl AttributeSchema {
    /// Column holding the portrait reference
    pub const IMAGE: &'static str = "Image";
    /// Column holding the number of chapter mentions
    pub const MENTIONS: &'static str = "Mentions";
    /// Column holding the volume a character is introduced in
    pub const INTRODUCED: &'static str = "Introduced";
    /// Column holding the answer-pool difficulty level (not compared)
    pub const DIFFICULTY: &'static str = "Difficulty";

    #[must_use]
    pub const fn new(attributes: Vec<Attribute>) -> Self {
        Self { attributes }
    }

    /// The schema the game ships with
    ///
    /// # Examples
    /// ```
    /// use inndle::core::{AttributeKind, AttributeSchema};
    ///
    /// let schema = AttributeSchema::standard();
    /// assert_eq!(schema.kind_of("Mentions"), Some(AttributeKind::Scalar));
    /// assert_eq!(schema.kind_of("Affiliation"), Some(AttributeKind::SetCategory));
    /// ```
    #[must_use]
    pub fn standard() -> Self {
        use AttributeKind::{Binary, Image, Scalar, SetCategory};

        Self::new(vec![
            Attribute::new(Self::IMAGE, Image),
            Attribute::new(Self::MENTIONS, Scalar),
            Attribute::new(Self::INTRODUCED, Scalar),
            Attribute::new("Gender", Binary),
            Attribute::new("Species", SetCategory),
            Attribute::new("Status", Binary),
            Attribute::new("Affiliation", SetCategory),
            Attribute::new("Continent", SetCategory),
            Attribute::new("Residence", SetCategory),
            Attribute::new("Occupation", SetCategory),
            Attribute::new("Fighting Type", SetCategory),
        ])
    }

    #[inline]
    #[must_use]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.iter()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    #[must_use]
    pub fn kind_of(&self, name: &str) -> Option<AttributeKind> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(Attribute::kind)
    }
}

impl Default for AttributeSchema {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_schema_order() {
        let schema = AttributeSchema::standard();
        let names: Vec<&str> = schema.iter().map(Attribute::name).collect();

        assert_eq!(names[0], "Image");
        assert_eq!(names[1], "Mentions");
        assert_eq!(names[2], "Introduced");
        assert_eq!(names.last(), Some(&"Fighting Type"));
        assert_eq!(schema.len(), 11);
    }

    #[test]
    fn standard_schema_kinds() {
        let schema = AttributeSchema::standard();

        assert_eq!(schema.kind_of("Image"), Some(AttributeKind::Image));
        assert_eq!(schema.kind_of("Introduced"), Some(AttributeKind::Scalar));
        assert_eq!(schema.kind_of("Gender"), Some(AttributeKind::Binary));
        assert_eq!(schema.kind_of("Status"), Some(AttributeKind::Binary));
        // Species holds multiple values for mixed or changed characters
        assert_eq!(schema.kind_of("Species"), Some(AttributeKind::SetCategory));
        assert_eq!(schema.kind_of("Aliases"), None);
        assert_eq!(schema.kind_of("Difficulty"), None);
    }

    #[test]
    fn custom_schema() {
        let schema = AttributeSchema::new(vec![Attribute::new("Status", AttributeKind::Binary)]);
        assert_eq!(schema.len(), 1);
        assert!(!schema.is_empty());
        assert!(AttributeSchema::new(Vec::new()).is_empty());
    }
}
