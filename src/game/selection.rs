//! Answer selection
//!
//! The daily answer is derived from the calendar date alone, so every player
//! gets the same character on the same day without any shared state:
//!
//! 1. Hash the ISO date (`YYYY-MM-DD`) with SHA-256
//! 2. Read the digest as a big-endian integer, reduce modulo the pool size
//! 3. Probe forward past indices used on the previous `window_days` days
//!
//! The daily pool is fixed: the default difficulty levels with no volume limit,
//! whatever the player's filters. Free play picks uniformly at random from the
//! pool the player's filters allow.

use super::config::DEFAULT_DIFFICULTIES;
use super::{GameConfig, GameError};
use crate::core::{AttributeSchema, CharacterRecord};
use crate::roster::Roster;
use chrono::{Days, NaiveDate};
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use sha2::{Digest, Sha256};

/// Names that may be chosen as a free-play answer under `config`, in roster order
///
/// A character is eligible when its difficulty is one of the configured levels
/// (any level if none are configured) and, with a volume limit set, it was
/// introduced no later than that volume.
#[must_use]
pub fn eligible_names<'r>(roster: &'r Roster, config: &GameConfig) -> Vec<&'r str> {
    filter_names(roster, &config.difficulties, config.max_volume)
}

/// Names the daily answer is drawn from, in roster order
///
/// Independent of any player settings, so everyone shares the same daily pool.
#[must_use]
pub fn daily_names(roster: &Roster) -> Vec<&str> {
    filter_names(roster, &DEFAULT_DIFFICULTIES, None)
}

fn filter_names<'r>(roster: &'r Roster, difficulties: &[u8], max_volume: Option<i64>) -> Vec<&'r str> {
    roster
        .iter()
        .filter(|record| is_eligible(record, difficulties, max_volume))
        .map(CharacterRecord::name)
        .collect()
}

fn is_eligible(record: &CharacterRecord, difficulties: &[u8], max_volume: Option<i64>) -> bool {
    if !difficulties.is_empty() {
        let difficulty = record
            .first(AttributeSchema::DIFFICULTY)
            .and_then(|value| value.parse::<u8>().ok());
        match difficulty {
            Some(level) if difficulties.contains(&level) => {}
            _ => return false,
        }
    }

    if let Some(max_volume) = max_volume {
        let introduced = record
            .first(AttributeSchema::INTRODUCED)
            .and_then(|value| value.parse::<i64>().ok());
        return introduced.is_some_and(|volume| volume <= max_volume);
    }

    true
}

/// Raw pool index for a date, before repeat avoidance
///
/// # Panics
/// Panics in debug mode if `len` is zero
#[must_use]
pub fn date_index(date: NaiveDate, len: usize) -> usize {
    debug_assert!(len > 0, "pool must not be empty");

    let key = date.format("%Y-%m-%d").to_string();
    let digest = Sha256::digest(key.as_bytes());
    let modulus = len as u128;

    // Horner's rule keeps the running value below the modulus
    let index = digest
        .iter()
        .fold(0u128, |acc, &byte| (acc * 256 + u128::from(byte)) % modulus);

    index as usize
}

/// The daily answer for `date`
///
/// Indices chosen on the previous `window_days` days are skipped by probing
/// forward (wrapping). If the window blocks every index the raw index is used.
/// Returns `None` only for an empty pool.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use inndle::game::daily_answer;
///
/// let pool = ["Erin Solstice", "Ryoka Griffin", "Pisces Jealnet"];
/// let date = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
///
/// let today = daily_answer(&pool, date, 14).unwrap();
/// assert_eq!(daily_answer(&pool, date, 14), Some(today));
/// ```
#[must_use]
pub fn daily_answer<'a>(eligible: &[&'a str], date: NaiveDate, window_days: u32) -> Option<&'a str> {
    if eligible.is_empty() {
        return None;
    }

    let len = eligible.len();
    let used: FxHashSet<usize> = (1..=u64::from(window_days))
        .filter_map(|days_ago| date.checked_sub_days(Days::new(days_ago)))
        .map(|past| date_index(past, len))
        .collect();

    let raw = date_index(date, len);
    let index = if used.len() >= len {
        raw
    } else {
        let mut index = raw;
        while used.contains(&index) {
            index = (index + 1) % len;
        }
        index
    };

    tracing::debug!(%date, raw, index, pool = len, "selected daily answer");
    Some(eligible[index])
}

/// How a round's answer is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerMode {
    /// Same answer for everyone on this UTC calendar day
    Daily(NaiveDate),
    /// Random answer from the eligible pool
    FreePlay,
}

impl AnswerMode {
    /// Daily mode for the current UTC date
    #[must_use]
    pub fn today() -> Self {
        Self::Daily(chrono::Utc::now().date_naive())
    }
}

/// Choose the answer for a round
///
/// Daily rounds draw from [`daily_names`]; only free play honours the
/// difficulty and volume filters in `config`.
///
/// # Errors
///
/// Returns [`GameError::NoEligibleAnswers`] if the pool for `mode` is empty.
pub fn pick_answer<'r, R: Rng + ?Sized>(
    roster: &'r Roster,
    config: &GameConfig,
    mode: AnswerMode,
    rng: &mut R,
) -> Result<&'r str, GameError> {
    let answer = match mode {
        AnswerMode::Daily(date) => daily_answer(&daily_names(roster), date, config.daily_window),
        AnswerMode::FreePlay => random_answer(&eligible_names(roster, config), rng),
    };

    answer.ok_or(GameError::NoEligibleAnswers)
}

/// A uniformly random answer for free play
#[must_use]
pub fn random_answer<'a, R: Rng + ?Sized>(eligible: &[&'a str], rng: &mut R) -> Option<&'a str> {
    eligible.choose(rng).copied()
}
