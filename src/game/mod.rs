//! Game layer
//!
//! Everything between the comparator and a front end: which characters may be
//! the answer, how the daily answer is chosen, and the state of one round.

pub mod config;
pub mod selection;
mod session;
pub mod suggest;

pub use config::GameConfig;
pub use selection::{
    AnswerMode, daily_answer, daily_names, eligible_names, pick_answer, random_answer,
};
pub use session::{GameError, GameSession, GuessRecord, SessionState};
pub use suggest::suggestions;
