//! Game configuration
//!
//! Built from command-line options in `main` and passed down explicitly.

use crate::core::{Attribute, AttributeSchema};

/// Difficulty levels of the daily pool, and of free play by default
pub const DEFAULT_DIFFICULTIES: [u8; 3] = [1, 2, 3];

/// Days of past daily answers a new daily answer avoids repeating
pub const DEFAULT_DAILY_WINDOW: u32 = 14;

/// Options shaping which answers are chosen and what is shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Free-play answer difficulty levels; empty means no difficulty filter
    pub difficulties: Vec<u8>,
    /// Spoiler limit: free-play answers introduced after this volume are never chosen
    pub max_volume: Option<i64>,
    /// Attributes hidden from every display
    pub hidden: Vec<String>,
    /// Rolling window of days the daily answer avoids repeating
    pub daily_window: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulties: DEFAULT_DIFFICULTIES.to_vec(),
            max_volume: None,
            hidden: Vec::new(),
            daily_window: DEFAULT_DAILY_WINDOW,
        }
    }
}

impl GameConfig {
    /// Whether an attribute is hidden (case-insensitive)
    #[must_use]
    pub fn is_hidden(&self, attribute: &str) -> bool {
        self.hidden
            .iter()
            .any(|hidden| hidden.eq_ignore_ascii_case(attribute))
    }

    /// Schema attributes that are not hidden, in schema order
    pub fn visible_attributes<'s>(
        &'s self,
        schema: &'s AttributeSchema,
    ) -> impl Iterator<Item = &'s Attribute> {
        schema.iter().filter(|attribute| !self.is_hidden(attribute.name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GameConfig::default();
        assert_eq!(config.difficulties, vec![1, 2, 3]);
        assert_eq!(config.max_volume, None);
        assert_eq!(config.daily_window, 14);
        assert!(config.hidden.is_empty());
    }

    #[test]
    fn hidden_columns_are_case_insensitive() {
        let config = GameConfig {
            hidden: vec!["status".to_string(), "Fighting Type".to_string()],
            ..GameConfig::default()
        };

        assert!(config.is_hidden("Status"));
        assert!(config.is_hidden("fighting type"));
        assert!(!config.is_hidden("Species"));
    }

    #[test]
    fn visible_attributes_skip_hidden() {
        let schema = AttributeSchema::standard();
        let config = GameConfig {
            hidden: vec!["Image".to_string(), "Status".to_string()],
            ..GameConfig::default()
        };

        let visible: Vec<&str> = config
            .visible_attributes(&schema)
            .map(Attribute::name)
            .collect();

        assert_eq!(visible.len(), schema.len() - 2);
        assert_eq!(visible[0], "Mentions");
        assert!(!visible.contains(&"Status"));
    }
}
