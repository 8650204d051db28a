//! Inndle
//!
//! A character-guessing game for The Wandering Inn. Each guess is scored
//! attribute by attribute against a hidden answer until the player names it.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use inndle::game::GameSession;
//! use inndle::roster::Roster;
//!
//! let roster = Roster::embedded().unwrap();
//! let mut session = GameSession::new(&roster, "Erin Solstice").unwrap();
//!
//! let entry = session.guess("Lyonette du Marquin").unwrap();
//! for (attribute, outcome) in entry.verdict().iter() {
//!     println!("{attribute}: {outcome:?}");
//! }
//! ```

// Core domain types and the comparator
pub mod core;

// Character dataset
pub mod roster;

// Sessions, answer selection and autocomplete
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
