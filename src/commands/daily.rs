//! Daily answer command
//!
//! Reports which character is the daily answer on a given date.

use crate::game::{GameConfig, GameError, daily_answer, daily_names};
use crate::roster::Roster;
use chrono::NaiveDate;

/// The daily answer for one date
pub struct DailyResult {
    pub date: NaiveDate,
    pub answer: String,
    pub pool_size: usize,
}

/// Work out the daily answer for `date`
///
/// Only the repeat window is taken from `config`; the pool is the shared daily
/// pool, so the player's difficulty and volume filters do not change the answer.
///
/// # Errors
///
/// Returns [`GameError::NoEligibleAnswers`] if the roster has no character at a
/// daily difficulty level.
pub fn daily_for_date(
    roster: &Roster,
    config: &GameConfig,
    date: NaiveDate,
) -> Result<DailyResult, GameError> {
    let eligible = daily_names(roster);
    let answer = daily_answer(&eligible, date, config.daily_window)
        .ok_or(GameError::NoEligibleAnswers)?;

    Ok(DailyResult {
        date,
        answer: answer.to_string(),
        pool_size: eligible.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AttributeSchema;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 10).unwrap()
    }

    #[test]
    fn daily_answer_is_in_daily_pool() {
        let roster = Roster::embedded().unwrap();
        let config = GameConfig::default();

        let result = daily_for_date(&roster, &config, day()).unwrap();
        let pool = daily_names(&roster);

        assert!(pool.contains(&result.answer.as_str()));
        assert_eq!(result.pool_size, pool.len());
        assert_eq!(result.date, day());
    }

    #[test]
    fn player_filters_do_not_change_daily() {
        let roster = Roster::embedded().unwrap();
        let shared = daily_for_date(&roster, &GameConfig::default(), day()).unwrap();

        for config in [
            GameConfig {
                difficulties: vec![1],
                ..GameConfig::default()
            },
            GameConfig {
                max_volume: Some(2),
                ..GameConfig::default()
            },
            GameConfig {
                difficulties: vec![9],
                max_volume: Some(0),
                ..GameConfig::default()
            },
        ] {
            let result = daily_for_date(&roster, &config, day()).unwrap();
            assert_eq!(result.answer, shared.answer, "{config:?}");
            assert_eq!(result.pool_size, shared.pool_size);
        }
    }

    #[test]
    fn consecutive_days_differ() {
        let roster = Roster::embedded().unwrap();
        let config = GameConfig::default();
        let first = NaiveDate::from_ymd_opt(2025, 11, 1).unwrap();
        let second = first.succ_opt().unwrap();

        let a = daily_for_date(&roster, &config, first).unwrap();
        let b = daily_for_date(&roster, &config, second).unwrap();
        assert_ne!(a.answer, b.answer);
    }

    #[test]
    fn no_daily_level_characters() {
        let csv = "id,Difficulty\nObscure,4\nHidden,5\n";
        let roster = Roster::from_csv_str(csv, AttributeSchema::standard()).unwrap();

        assert!(matches!(
            daily_for_date(&roster, &GameConfig::default(), day()),
            Err(GameError::NoEligibleAnswers)
        ));
    }
}
